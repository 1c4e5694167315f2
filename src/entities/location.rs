use std::fmt;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// A validated latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Coordinates")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let latitude_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let longitude_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);

        if !(latitude_ok && longitude_ok) {
            return Err(invalid_input_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Only for compile-time constants known to be in range.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Parses the two free-text fields of manual entry. Anything missing,
    /// non-numeric or out of range yields `None`.
    pub fn parse_manual(latitude: Option<&str>, longitude: Option<&str>) -> Option<Self> {
        let latitude = latitude?.trim();
        let longitude = longitude?.trim();

        if latitude.is_empty() || longitude.is_empty() {
            return None;
        }

        let latitude: f64 = latitude.parse().ok()?;
        let longitude: f64 = longitude.parse().ok()?;

        Self::new(latitude, longitude).ok()
    }
}

impl TryFrom<Coordinates> for Coordinate {
    type Error = Error;

    fn try_from(raw: Coordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionError {
    pub code: PositionErrorCode,
    #[serde(default)]
    pub message: String,
}

impl PositionError {
    /// Numeric code as reported by browser geolocation.
    pub fn code_number(&self) -> u16 {
        match self.code {
            PositionErrorCode::PermissionDenied => 1,
            PositionErrorCode::PositionUnavailable => 2,
            PositionErrorCode::Timeout => 3,
        }
    }
}

/// Outcome of a device positioning request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionResult {
    Ok(Coordinate),
    Err(PositionError),
}

impl From<PositionResult> for Result<Coordinate, PositionError> {
    fn from(result: PositionResult) -> Self {
        match result {
            PositionResult::Ok(coordinate) => Ok(coordinate),
            PositionResult::Err(err) => Err(err),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationSource {
    Device {
        result: PositionResult,
    },
    Manual {
        latitude: Option<String>,
        longitude: Option<String>,
    },
}
