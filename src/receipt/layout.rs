use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::entities::{PickupRequest, E_WASTE_CENTER, PICKUP_TEAM};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const PRIMARY: Color = Color::rgb(0x2c, 0x7b, 0xe5);
pub const SECONDARY: Color = Color::rgb(0x27, 0xa7, 0x79);
pub const DARK: Color = Color::rgb(0x2d, 0x37, 0x3c);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Weight {
    Normal,
    Bold,
}

/// One drawing call. Positions are millimetres from the top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DrawOp {
    Image {
        source: PathBuf,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptLayout {
    pub title: String,
    pub ops: Vec<DrawOp>,
}

#[derive(Clone, Copy)]
struct TextStyle {
    size: f32,
    weight: Weight,
    color: Color,
}

const TITLE: TextStyle = TextStyle {
    size: 22.0,
    weight: Weight::Normal,
    color: PRIMARY,
};
const HEADING: TextStyle = TextStyle {
    size: 12.0,
    weight: Weight::Bold,
    color: DARK,
};
const FACILITY_HEADING: TextStyle = TextStyle {
    color: SECONDARY,
    ..HEADING
};
const BODY: TextStyle = TextStyle {
    size: 12.0,
    weight: Weight::Normal,
    color: DARK,
};
const FOOTER: TextStyle = TextStyle { size: 10.0, ..BODY };

#[derive(Default)]
struct Canvas {
    ops: Vec<DrawOp>,
}

impl Canvas {
    fn text(&mut self, style: TextStyle, x: f32, y: f32, text: String) {
        self.ops.push(DrawOp::Text {
            text,
            x,
            y,
            size: style.size,
            weight: style.weight,
            color: style.color,
        });
    }

    fn image(&mut self, source: &Path, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Image {
            source: source.to_path_buf(),
            x,
            y,
            width,
            height,
        });
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}

impl ReceiptLayout {
    pub fn for_pickup(request: &PickupRequest, logo: &Path) -> Self {
        let mut canvas = Canvas::default();
        let coordinate = request.coordinate;

        canvas.image(logo, 10.0, 10.0, 30.0, 30.0);
        canvas.text(TITLE, 50.0, 20.0, "E-Waste Pickup Confirmation".into());

        canvas.text(HEADING, 10.0, 45.0, "Your Details:".into());
        canvas.text(BODY, 10.0, 55.0, format!("Pickup Date: {}", request.date));
        canvas.text(BODY, 10.0, 65.0, format!("Pickup Time: {}", request.time));
        canvas.text(
            BODY,
            10.0,
            75.0,
            format!(
                "Location Coordinates: {:.6}, {:.6}",
                coordinate.latitude(),
                coordinate.longitude()
            ),
        );

        canvas.text(HEADING, 10.0, 90.0, "Pickup Team Information:".into());
        canvas.text(
            BODY,
            10.0,
            100.0,
            format!("Driver Name: {}", PICKUP_TEAM.driver_name),
        );
        canvas.text(
            BODY,
            10.0,
            110.0,
            format!("Contact Number: {}", PICKUP_TEAM.contact),
        );
        canvas.text(
            BODY,
            10.0,
            120.0,
            format!("Vehicle Number: {}", PICKUP_TEAM.vehicle_number),
        );

        canvas.text(FACILITY_HEADING, 10.0, 135.0, "E-Waste Center Details:".into());
        canvas.text(
            BODY,
            10.0,
            145.0,
            format!("Address: {}", E_WASTE_CENTER.address),
        );
        canvas.text(
            BODY,
            10.0,
            155.0,
            format!("Coordinates: {}", E_WASTE_CENTER.location),
        );
        canvas.text(
            BODY,
            10.0,
            165.0,
            format!("Contact: {}", E_WASTE_CENTER.contact),
        );

        canvas.line((10.0, 170.0), (200.0, 170.0), 0.5, PRIMARY);

        canvas.text(
            FOOTER,
            10.0,
            180.0,
            "Thank you for responsible e-waste disposal!".into(),
        );

        if let Some(credits) = request.credits() {
            canvas.text(FOOTER, 10.0, 190.0, format!("Estimated Credits: {}", credits));
        }

        Self {
            title: "E-Waste Pickup Confirmation".into(),
            ops: canvas.ops,
        }
    }

    #[cfg(test)]
    fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
