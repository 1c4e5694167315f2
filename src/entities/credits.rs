use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EWasteItem {
    Battery,
    Keyboard,
    Microwave,
    Mobile,
    WashingMachine,
    Mouse,
    Pcb,
    MusicPlayer,
    Printer,
    Television,
}

impl EWasteItem {
    pub fn credit_value(&self) -> u32 {
        match self {
            Self::Battery => 10,
            Self::Keyboard => 5,
            Self::Microwave => 10,
            Self::Mobile => 7,
            Self::WashingMachine => 20,
            Self::Mouse => 2,
            Self::Pcb => 2,
            Self::MusicPlayer => 15,
            Self::Printer => 6,
            Self::Television => 25,
        }
    }

    /// Accepts form-style names such as `Washing-Machine` or `music player`.
    pub fn parse(name: &str) -> Result<Self, Error> {
        let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");

        let item = match normalized.as_str() {
            "battery" => Self::Battery,
            "keyboard" => Self::Keyboard,
            "microwave" => Self::Microwave,
            "mobile" => Self::Mobile,
            "washing_machine" => Self::WashingMachine,
            "mouse" => Self::Mouse,
            "pcb" => Self::Pcb,
            "music_player" => Self::MusicPlayer,
            "printer" => Self::Printer,
            "television" => Self::Television,
            _ => return Err(invalid_input_error()),
        };

        Ok(item)
    }
}

/// Quantities per item. Zero quantities are dropped, and the credit total
/// of a parsed list always fits in a `u32`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList(BTreeMap<EWasteItem, u32>);

impl ItemList {
    pub fn parse(raw: &BTreeMap<String, u32>) -> Result<Self, Error> {
        let mut items = BTreeMap::new();

        for (name, quantity) in raw {
            let item = EWasteItem::parse(name)?;
            if *quantity > 0 {
                let total = items.entry(item).or_insert(0u32);
                *total = total.checked_add(*quantity).ok_or_else(invalid_input_error)?;
            }
        }

        let items = Self(items);
        items.checked_credits().ok_or_else(invalid_input_error)?;

        Ok(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn credits(&self) -> u32 {
        self.checked_credits().unwrap_or(u32::MAX)
    }

    fn checked_credits(&self) -> Option<u32> {
        self.0.iter().try_fold(0u32, |total, (item, quantity)| {
            total.checked_add(item.credit_value().checked_mul(*quantity)?)
        })
    }
}
