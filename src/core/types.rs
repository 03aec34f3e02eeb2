//! Common types used across the application

use crate::core::EstimationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lowercase a user-supplied name and drop separators so that
/// `compoundWall`, `compound_wall` and `Compound Wall` all match.
fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Kind of project being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectKind {
    Construction,
    Interior,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::Construction, ProjectKind::Interior];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Construction => "construction",
            ProjectKind::Interior => "interior",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "construction" => Ok(ProjectKind::Construction),
            "interior" => Ok(ProjectKind::Interior),
            _ => Err(EstimationError::UnknownProjectKind(s.to_string())),
        }
    }
}

/// Pricing category selecting a price-per-area range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualityTier {
    Basic,
    Standard,
    Premium,
    Luxury,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Basic,
        QualityTier::Standard,
        QualityTier::Premium,
        QualityTier::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Basic => "basic",
            QualityTier::Standard => "standard",
            QualityTier::Premium => "premium",
            QualityTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "basic" => Ok(QualityTier::Basic),
            "standard" => Ok(QualityTier::Standard),
            "premium" => Ok(QualityTier::Premium),
            "luxury" => Ok(QualityTier::Luxury),
            _ => Err(EstimationError::UnknownQualityTier(s.to_string())),
        }
    }
}

/// Optional add-on priced on top of the base cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdditionalFeature {
    Parking,
    Landscaping,
    CompoundWall,
    SolarPower,
    HomeAutomation,
    SwimmingPool,
}

impl AdditionalFeature {
    pub const ALL: [AdditionalFeature; 6] = [
        AdditionalFeature::Parking,
        AdditionalFeature::Landscaping,
        AdditionalFeature::CompoundWall,
        AdditionalFeature::SolarPower,
        AdditionalFeature::HomeAutomation,
        AdditionalFeature::SwimmingPool,
    ];

    /// Camel-case key, as used by the web forms and the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalFeature::Parking => "parking",
            AdditionalFeature::Landscaping => "landscaping",
            AdditionalFeature::CompoundWall => "compoundWall",
            AdditionalFeature::SolarPower => "solarPower",
            AdditionalFeature::HomeAutomation => "homeAutomation",
            AdditionalFeature::SwimmingPool => "swimmingPool",
        }
    }
}

impl fmt::Display for AdditionalFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for feature names that are not in the catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl fmt::Display for UnknownFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown feature: {}", self.0)
    }
}

impl std::error::Error for UnknownFeature {}

impl FromStr for AdditionalFeature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        AdditionalFeature::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == key)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// Price-per-area range for one (kind, tier) pair.
///
/// Either bound may be missing in a hand-edited config; a range with a
/// missing bound has no midpoint and cannot be priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Arithmetic mean of the bounds, `None` when either is absent
    pub fn midpoint(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            _ => None,
        }
    }
}

/// How an add-on is priced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureCost {
    /// Fixed amount regardless of project size
    Flat { amount: f64 },
    /// Rate multiplied by the per-floor area
    PerArea { rate: f64 },
}

impl FeatureCost {
    /// Cost of this add-on for a project with the given per-floor area
    pub fn cost_for(&self, area: f64) -> f64 {
        match *self {
            FeatureCost::Flat { amount } => amount,
            FeatureCost::PerArea { rate } => rate * area,
        }
    }

    pub(crate) fn value(&self) -> f64 {
        match *self {
            FeatureCost::Flat { amount } => amount,
            FeatureCost::PerArea { rate } => rate,
        }
    }
}

/// Validated estimation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub project_kind: ProjectKind,
    pub quality_tier: QualityTier,
    /// Area of a single floor
    pub area: f64,
    pub floors: u32,
    #[serde(default)]
    pub selected_features: BTreeSet<AdditionalFeature>,
}

impl EstimateRequest {
    pub fn new(project_kind: ProjectKind, quality_tier: QualityTier, area: f64, floors: u32) -> Self {
        Self {
            project_kind,
            quality_tier,
            area,
            floors,
            selected_features: BTreeSet::new(),
        }
    }

    pub fn with_feature(mut self, feature: AdditionalFeature) -> Self {
        self.selected_features.insert(feature);
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = AdditionalFeature>) -> Self {
        self.selected_features.extend(features);
        self
    }
}

/// Untyped request as submitted by a form or JSON payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEstimateRequest {
    pub project_kind: String,
    pub quality_tier: String,
    pub area: f64,
    #[serde(default = "default_raw_floors")]
    pub floors: f64,
    #[serde(default)]
    pub selected_features: Vec<String>,
}

fn default_raw_floors() -> f64 { 1.0 }

impl RawEstimateRequest {
    /// Validate and convert into a typed request.
    ///
    /// Feature names that are empty or not in the catalogue are skipped.
    pub fn parse(&self) -> Result<EstimateRequest, EstimationError> {
        let project_kind: ProjectKind = self.project_kind.parse()?;
        let quality_tier: QualityTier = self.quality_tier.parse()?;

        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(EstimationError::InvalidArea(self.area));
        }

        let floors = self.floors;
        if !floors.is_finite() || floors < 1.0 || floors.fract() != 0.0 || floors > u32::MAX as f64 {
            return Err(EstimationError::InvalidFloors(floors));
        }

        let mut selected_features = BTreeSet::new();
        for name in &self.selected_features {
            if name.trim().is_empty() {
                continue;
            }
            match name.parse::<AdditionalFeature>() {
                Ok(feature) => {
                    selected_features.insert(feature);
                }
                Err(e) => log::warn!("Ignoring {}", e),
            }
        }

        Ok(EstimateRequest {
            project_kind,
            quality_tier,
            area: self.area,
            floors: floors as u32,
            selected_features,
        })
    }
}

/// Cost of one selected add-on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureLine {
    pub feature: AdditionalFeature,
    pub cost: f64,
}

/// Cost breakdown produced by the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub total_area: f64,
    pub price_per_area: f64,
    pub base_cost: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub additional_cost: f64,
    pub total_cost: f64,
    pub timeline_months: u32,
    /// Per add-on line items; they sum to `additional_cost`
    pub feature_costs: Vec<FeatureLine>,
}
