//! Core module - Domain types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{Config, DisplayConfig, FeatureCosts, GeneralConfig, PricingConfig, TierRanges};
pub use error::{Error, EstimationError, Result};
pub use types::{
    AdditionalFeature, EstimateRequest, EstimateResult, FeatureCost, FeatureLine, PriceRange,
    ProjectKind, QualityTier, RawEstimateRequest, UnknownFeature,
};
