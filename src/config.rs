use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::entities::TileLayer;
use crate::error::{config_error, Error};

const MAX_REDIRECT_DELAY_MS: u64 = 60 * 60 * 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub osrm_api_base: String,
    pub osrm_profile: String,
    pub tile_layer: TileLayer,
    pub logo_path: PathBuf,
    pub redirect_path: String,
    pub redirect_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            osrm_api_base: "https://router.project-osrm.org".into(),
            osrm_profile: "driving".into(),
            tile_layer: TileLayer::default(),
            logo_path: PathBuf::from("static/logo_waste.png"),
            redirect_path: "/index2".into(),
            redirect_delay: Duration::from_millis(3000),
        }
    }
}

fn optional_var(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(Some(value)),
        Ok(_) | Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, Error> {
    value.parse().map_err(|_| config_error(name))
}

impl Config {
    /// Reads `PICKUP_*`, `OSRM_*` and `TILE_*` variables, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(optional_var)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<Option<String>, Error>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PICKUP_BIND_ADDR")? {
            config.bind_addr = parse("PICKUP_BIND_ADDR", &value)?;
        }
        if let Some(value) = lookup("OSRM_API_BASE")? {
            config.osrm_api_base = value;
        }
        if let Some(value) = lookup("OSRM_PROFILE")? {
            config.osrm_profile = value;
        }
        if let Some(value) = lookup("TILE_URL_TEMPLATE")? {
            config.tile_layer.url_template = value;
        }
        if let Some(value) = lookup("TILE_ATTRIBUTION")? {
            config.tile_layer.attribution = value;
        }
        if let Some(value) = lookup("PICKUP_LOGO_PATH")? {
            config.logo_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("PICKUP_REDIRECT_PATH")? {
            config.redirect_path = value;
        }
        if let Some(value) = lookup("PICKUP_REDIRECT_DELAY_MS")? {
            let delay_ms: u64 = parse("PICKUP_REDIRECT_DELAY_MS", &value)?;
            if delay_ms > MAX_REDIRECT_DELAY_MS {
                return Err(config_error("PICKUP_REDIRECT_DELAY_MS"));
            }
            config.redirect_delay = Duration::from_millis(delay_ms);
        }

        Ok(config)
    }
}
