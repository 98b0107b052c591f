//! Site configuration loaded from a TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::carousel::gesture::DEFAULT_SWIPE_THRESHOLD;
use crate::carousel::state::Carousel;
use crate::carousel::viewport::Breakpoints;
use crate::error::{CoreError, CoreResult};
use crate::listing::store::DEFAULT_FEATURED_LIMIT;

/// Top-level configuration.
///
/// All fields have sensible defaults so UrbanHouse works without a config
/// file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listings: ListingsConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        load_toml(path)
    }
}

/// Reads and deserializes any TOML document at `path`.
///
/// Front ends that embed [`Config`] in a larger settings struct load it
/// through here to get the same error mapping as [`Config::load`].
///
/// # Errors
///
/// Same as [`Config::load`].
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_read(e, path))?;
    toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
}

/// Where listings come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsConfig {
    #[serde(default = "default_listings_path")]
    pub path: PathBuf,
    /// Size of the featured subset when the document does not name one.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            path: default_listings_path(),
            featured_limit: default_featured_limit(),
        }
    }
}

/// Carousel behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Seconds between automatic advances; `0` disables autoplay.
    #[serde(default = "default_autoplay_secs")]
    pub autoplay_secs: u64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_secs: default_autoplay_secs(),
            swipe_threshold: default_swipe_threshold(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl CarouselConfig {
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_secs(self.autoplay_secs)
    }

    /// A carousel over `item_count` items laid out for a `width`-pixel viewport.
    pub fn carousel_for(&self, item_count: usize, width: u32) -> Carousel {
        Carousel::for_width(item_count, width, self.breakpoints)
            .with_swipe_threshold(self.swipe_threshold)
    }
}

fn default_listings_path() -> PathBuf {
    PathBuf::from("data/properties.json")
}

fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

fn default_autoplay_secs() -> u64 {
    5
}

fn default_swipe_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD
}
