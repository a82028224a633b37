use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::utils::constants::*;

/// Looked up in the working directory when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "collision-dashboard";
pub const ENV_PREFIX: &str = "COLLISIONS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_url: String,
    pub max_rows: usize,
    pub request_timeout_secs: u64,
    pub top_k: usize,
    pub view: ViewSettings,
    pub layer: LayerSettings,
}

/// Initial camera for the density map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub zoom: f64,
    pub pitch: f64,
}

/// Hexagon aggregation layer parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSettings {
    pub radius: u32,
    pub elevation_scale: u32,
    pub elevation_range: [u32; 2],
}

impl Settings {
    /// Defaults, then the config file, then `COLLISIONS_*` environment
    /// variables (`COLLISIONS_VIEW__ZOOM` for nested keys).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("data_url", DEFAULT_DATA_URL)?
            .set_default("max_rows", DEFAULT_MAX_ROWS as i64)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("top_k", DEFAULT_TOP_K as i64)?
            .set_default("view.zoom", DEFAULT_ZOOM)?
            .set_default("view.pitch", DEFAULT_PITCH)?
            .set_default("layer.radius", i64::from(DEFAULT_HEX_RADIUS))?
            .set_default("layer.elevation_scale", i64::from(DEFAULT_ELEVATION_SCALE))?
            .set_default(
                "layer.elevation_range",
                DEFAULT_ELEVATION_RANGE
                    .iter()
                    .map(|&v| i64::from(v))
                    .collect::<Vec<i64>>(),
            )?;

        let builder = match path {
            Some(p) => builder.add_source(File::from(p).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            top_k: DEFAULT_TOP_K,
            view: ViewSettings::default(),
            layer: LayerSettings::default(),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_HEX_RADIUS,
            elevation_scale: DEFAULT_ELEVATION_SCALE,
            elevation_range: DEFAULT_ELEVATION_RANGE,
        }
    }
}
