//! Pricing tables for cost estimation
//!
//! A `PricingTable` holds:
//! - Price-per-area ranges keyed by project kind and quality tier
//! - The add-on catalogue (flat or per-area costs)
//!
//! Tables are validated once when built and are immutable afterwards.
//! They are handed to the estimator rather than read from global state,
//! so tests and alternate price lists can supply their own.

use crate::core::{
    AdditionalFeature, Error, FeatureCost, PriceRange, PricingConfig, ProjectKind, QualityTier,
    Result, TierRanges,
};
use std::collections::BTreeMap;

/// Immutable price list
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTable {
    ranges: BTreeMap<ProjectKind, BTreeMap<QualityTier, PriceRange>>,
    features: BTreeMap<AdditionalFeature, FeatureCost>,
}

impl PricingTable {
    /// Start an empty table
    pub fn builder() -> PricingTableBuilder {
        PricingTableBuilder::default()
    }

    /// Build a table from the `[pricing]` section of the config
    pub fn from_config(config: &PricingConfig) -> Result<Self> {
        builder_from_config(config).build()
    }

    /// Tiers defined for a project kind, `None` if the kind is absent
    pub fn tiers(&self, kind: ProjectKind) -> Option<&BTreeMap<QualityTier, PriceRange>> {
        self.ranges.get(&kind)
    }

    pub fn range(&self, kind: ProjectKind, tier: QualityTier) -> Option<&PriceRange> {
        self.ranges.get(&kind).and_then(|tiers| tiers.get(&tier))
    }

    pub fn feature_cost(&self, feature: AdditionalFeature) -> Option<&FeatureCost> {
        self.features.get(&feature)
    }

    pub fn features(&self) -> &BTreeMap<AdditionalFeature, FeatureCost> {
        &self.features
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProjectKind> + '_ {
        self.ranges.keys().copied()
    }
}

impl Default for PricingTable {
    /// The stock price list from `PricingConfig::default()`, which always
    /// passes validation.
    fn default() -> Self {
        let builder = builder_from_config(&PricingConfig::default());
        Self {
            ranges: builder.ranges,
            features: builder.features,
        }
    }
}

fn builder_from_config(config: &PricingConfig) -> PricingTableBuilder {
    let mut builder = PricingTable::builder();
    builder = add_tiers(builder, ProjectKind::Construction, &config.construction);
    builder = add_tiers(builder, ProjectKind::Interior, &config.interior);

    let f = &config.features;
    builder
        .feature(AdditionalFeature::Parking, f.parking)
        .feature(AdditionalFeature::Landscaping, f.landscaping)
        .feature(AdditionalFeature::CompoundWall, f.compound_wall)
        .feature(AdditionalFeature::SolarPower, f.solar_power)
        .feature(AdditionalFeature::HomeAutomation, f.home_automation)
        .feature(AdditionalFeature::SwimmingPool, f.swimming_pool)
}

fn add_tiers(builder: PricingTableBuilder, kind: ProjectKind, tiers: &TierRanges) -> PricingTableBuilder {
    builder
        .range(kind, QualityTier::Basic, tiers.basic)
        .range(kind, QualityTier::Standard, tiers.standard)
        .range(kind, QualityTier::Premium, tiers.premium)
        .range(kind, QualityTier::Luxury, tiers.luxury)
}

/// Collects entries and validates them in `build`
#[derive(Debug, Clone, Default)]
pub struct PricingTableBuilder {
    ranges: BTreeMap<ProjectKind, BTreeMap<QualityTier, PriceRange>>,
    features: BTreeMap<AdditionalFeature, FeatureCost>,
}

impl PricingTableBuilder {
    pub fn range(mut self, kind: ProjectKind, tier: QualityTier, range: PriceRange) -> Self {
        self.ranges.entry(kind).or_default().insert(tier, range);
        self
    }

    pub fn feature(mut self, feature: AdditionalFeature, cost: FeatureCost) -> Self {
        self.features.insert(feature, cost);
        self
    }

    /// Validate every entry.
    ///
    /// Bounds and costs must be finite and non-negative, and `min <= max`
    /// when both bounds exist. Missing bounds are allowed here; the
    /// estimator refuses to price such a tier.
    pub fn build(self) -> Result<PricingTable> {
        for (kind, tiers) in &self.ranges {
            for (tier, range) in tiers {
                for bound in [range.min, range.max].into_iter().flatten() {
                    if !bound.is_finite() || bound < 0.0 {
                        return Err(Error::Config(format!(
                            "Invalid price bound {} for {}/{}",
                            bound, kind, tier
                        )));
                    }
                }
                if let (Some(min), Some(max)) = (range.min, range.max) {
                    if min > max {
                        return Err(Error::Config(format!(
                            "Price range for {}/{} has min {} above max {}",
                            kind, tier, min, max
                        )));
                    }
                }
                if range.midpoint().is_none() {
                    log::warn!("Price range for {}/{} is incomplete and cannot be used", kind, tier);
                }
            }
        }

        for (feature, cost) in &self.features {
            let value = cost.value();
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "Invalid cost {} for feature {}",
                    value, feature
                )));
            }
        }

        Ok(PricingTable {
            ranges: self.ranges,
            features: self.features,
        })
    }
}
