use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinate, ItemList};
use crate::error::{location_required_error, pickup_details_required_error, Error};

/// What the user typed into the confirmation form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PickupInput {
    pub time: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub items: BTreeMap<String, u32>,
}

impl PickupInput {
    pub fn new(time: &str, date: &str) -> Self {
        Self {
            time: Some(time.into()),
            date: Some(date.into()),
            items: BTreeMap::new(),
        }
    }

    /// Presence is the only check on time and date; their format is free.
    /// Missing details are reported before a missing location.
    #[tracing::instrument]
    pub fn validate(self, coordinate: Option<Coordinate>) -> Result<PickupRequest, Error> {
        let time = self.time.filter(|t| !t.is_empty());
        let date = self.date.filter(|d| !d.is_empty());

        let (time, date) = match (time, date) {
            (Some(time), Some(date)) => (time, date),
            _ => return Err(pickup_details_required_error()),
        };

        let items = ItemList::parse(&self.items)?;
        let coordinate = coordinate.ok_or_else(location_required_error)?;

        Ok(PickupRequest {
            time,
            date,
            coordinate,
            items,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub time: String,
    pub date: String,
    pub coordinate: Coordinate,
    pub items: ItemList,
}

impl PickupRequest {
    pub fn credits(&self) -> Option<u32> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.credits())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub location: String,
    pub delay_ms: u64,
    pub due_at: DateTime<Utc>,
}

impl Redirect {
    pub fn schedule(location: &str, delay: Duration) -> Self {
        let now = Utc::now();
        let due_at = chrono::Duration::from_std(delay)
            .ok()
            .and_then(|delay| now.checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            location: location.into(),
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            due_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Confirmation {
    pub receipt_id: Uuid,
    pub file_name: String,
    pub download_url: String,
    pub credits: Option<u32>,
    pub redirect: Redirect,
}

/// A rendered receipt kept in memory until it is downloaded.
#[derive(Clone, Debug)]
pub struct Receipt {
    pub id: Uuid,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    pub const FILE_NAME: &'static str = "pickup-confirmation.pdf";

    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: Self::FILE_NAME.into(),
            bytes,
            created_at: Utc::now(),
        }
    }

    pub fn download_url(&self) -> String {
        format!("/receipts/{}", self.id)
    }
}
