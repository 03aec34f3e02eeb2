//! Configuration management

use crate::core::{Error, FeatureCost, PriceRange, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("buildcost-estimator").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Nothing is written when the file does not exist yet; `save` creates it.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    /// Load `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, content)?;
        log::info!("Wrote configuration to {}", path.display());
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "hi"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// How amounts are shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code (INR, USD, EUR, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Digit grouping: "indian" (12,34,567) or "western" (1,234,567)
    #[serde(default = "default_grouping")]
    pub grouping: String,
    /// Decimal places for full amounts
    #[serde(default)]
    pub decimals: usize,
    /// Use lakh/crore (or K/M) shorthand in summaries
    #[serde(default)]
    pub compact: bool,
    /// Label for the unit of area
    #[serde(default = "default_area_unit")]
    pub area_unit: String,
}

fn default_currency() -> String { "INR".to_string() }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign
fn default_grouping() -> String { "indian".to_string() }
fn default_area_unit() -> String { "sq ft".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            grouping: default_grouping(),
            decimals: 0,
            compact: false,
            area_unit: default_area_unit(),
        }
    }
}

/// Pricing tables for both project kinds plus the add-on catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_construction_ranges")]
    pub construction: TierRanges,
    #[serde(default = "default_interior_ranges")]
    pub interior: TierRanges,
    #[serde(default)]
    pub features: FeatureCosts,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            construction: default_construction_ranges(),
            interior: default_interior_ranges(),
            features: FeatureCosts::default(),
        }
    }
}

/// Price-per-area ranges for each quality tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierRanges {
    pub basic: PriceRange,
    pub standard: PriceRange,
    pub premium: PriceRange,
    pub luxury: PriceRange,
}

fn default_construction_ranges() -> TierRanges {
    TierRanges {
        basic: PriceRange::new(1800.0, 2100.0),
        standard: PriceRange::new(2100.0, 2500.0),
        premium: PriceRange::new(2500.0, 3200.0),
        luxury: PriceRange::new(3200.0, 4500.0),
    }
}

fn default_interior_ranges() -> TierRanges {
    TierRanges {
        basic: PriceRange::new(800.0, 1200.0),
        standard: PriceRange::new(1200.0, 1800.0),
        premium: PriceRange::new(1800.0, 2800.0),
        luxury: PriceRange::new(2800.0, 4500.0),
    }
}

/// Add-on catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCosts {
    #[serde(default = "default_parking")]
    pub parking: FeatureCost,
    #[serde(default = "default_landscaping")]
    pub landscaping: FeatureCost,
    #[serde(default = "default_compound_wall")]
    pub compound_wall: FeatureCost,
    #[serde(default = "default_solar_power")]
    pub solar_power: FeatureCost,
    #[serde(default = "default_home_automation")]
    pub home_automation: FeatureCost,
    #[serde(default = "default_swimming_pool")]
    pub swimming_pool: FeatureCost,
}

fn default_parking() -> FeatureCost { FeatureCost::Flat { amount: 150_000.0 } }
fn default_landscaping() -> FeatureCost { FeatureCost::PerArea { rate: 75.0 } }
fn default_compound_wall() -> FeatureCost { FeatureCost::PerArea { rate: 120.0 } }
fn default_solar_power() -> FeatureCost { FeatureCost::Flat { amount: 250_000.0 } }
fn default_home_automation() -> FeatureCost { FeatureCost::Flat { amount: 200_000.0 } }
fn default_swimming_pool() -> FeatureCost { FeatureCost::Flat { amount: 800_000.0 } }

impl Default for FeatureCosts {
    fn default() -> Self {
        Self {
            parking: default_parking(),
            landscaping: default_landscaping(),
            compound_wall: default_compound_wall(),
            solar_power: default_solar_power(),
            home_automation: default_home_automation(),
            swimming_pool: default_swimming_pool(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "hi".to_string();
        config.pricing.construction.standard = PriceRange::new(2000.0, 2600.0);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "hi");
        assert_eq!(loaded.pricing.construction.standard, PriceRange::new(2000.0, 2600.0));
        assert_eq!(loaded.pricing.features.parking, FeatureCost::Flat { amount: 150_000.0 });
    }

    #[test]
    fn test_missing_file_loads_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buildcost-estimator").join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.display.currency, "INR");
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::default().save_to(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load_or_default(&path).unwrap().display.grouping, "indian");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[display]
grouping = "western"
currency_symbol = "$"

[pricing.features.landscaping]
type = "per_area"
rate = 90.0
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.grouping, "western");
        assert_eq!(config.display.currency, "INR");
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.pricing.features.landscaping, FeatureCost::PerArea { rate: 90.0 });
        assert_eq!(config.pricing.interior.luxury, PriceRange::new(2800.0, 4500.0));
    }

    #[test]
    fn test_missing_bound_is_kept_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[pricing.construction]
basic = { min = 1800.0, max = 2100.0 }
standard = { min = 2100.0, max = 2500.0 }
premium = { min = 2500.0, max = 3200.0 }
luxury = { min = 3200.0 }
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.pricing.construction.luxury.max, None);
        assert_eq!(config.pricing.construction.luxury.midpoint(), None);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nlanguage = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
