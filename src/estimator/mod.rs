//! Construction cost estimator
//!
//! Maps an `EstimateRequest` onto a cost breakdown using an injected
//! `PricingTable`. The computation is pure: no I/O, no shared state, and
//! the same request always yields the same result.

use crate::core::{EstimateRequest, EstimateResult, EstimationError, FeatureLine};
use crate::pricing::PricingTable;

/// Share of the base cost attributed to materials
pub const MATERIAL_SHARE: f64 = 0.65;
/// Share of the base cost attributed to labor
pub const LABOR_SHARE: f64 = 0.25;
/// Share of the base cost attributed to overhead
pub const OVERHEAD_SHARE: f64 = 0.10;

/// Area completed per month of work
pub const AREA_PER_MONTH: f64 = 500.0;
/// Fixed months for design, approvals and handover
pub const FIXED_MONTHS: u32 = 2;

/// Cost estimator bound to one price list
#[derive(Debug, Clone)]
pub struct CostEstimator {
    table: PricingTable,
}

impl CostEstimator {
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Compute the cost breakdown for a request.
    ///
    /// Validation happens before any arithmetic, so an error never comes
    /// with a partial result.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimationError> {
        let kind = request.project_kind;
        let tier = request.quality_tier;

        let tiers = self
            .table
            .tiers(kind)
            .ok_or_else(|| EstimationError::UnknownProjectKind(kind.to_string()))?;
        let price_per_area = tiers
            .get(&tier)
            .and_then(|range| range.midpoint())
            .ok_or_else(|| EstimationError::UnknownQualityTier(tier.to_string()))?;

        if !request.area.is_finite() || request.area <= 0.0 {
            return Err(EstimationError::InvalidArea(request.area));
        }
        if request.floors < 1 {
            return Err(EstimationError::InvalidFloors(f64::from(request.floors)));
        }

        // Areas too large to price or schedule count as invalid.
        let out_of_range = || EstimationError::InvalidArea(request.area);
        let total_area = request.area * f64::from(request.floors);
        if !total_area.is_finite() {
            return Err(out_of_range());
        }
        let timeline_months = timeline_months(total_area).ok_or_else(out_of_range)?;
        let base_cost = total_area * price_per_area;
        if !base_cost.is_finite() {
            return Err(out_of_range());
        }

        let material_cost = base_cost * MATERIAL_SHARE;
        let labor_cost = base_cost * LABOR_SHARE;
        let overhead_cost = base_cost * OVERHEAD_SHARE;

        // BTreeSet iteration keeps the summation order fixed.
        let feature_costs: Vec<FeatureLine> = request
            .selected_features
            .iter()
            .filter_map(|&feature| match self.table.feature_cost(feature) {
                Some(cost) => Some(FeatureLine {
                    feature,
                    cost: cost.cost_for(request.area),
                }),
                None => {
                    log::debug!("Feature {} not in price list, skipping", feature);
                    None
                }
            })
            .collect();
        let additional_cost: f64 = feature_costs.iter().map(|line| line.cost).sum();

        let total_cost = base_cost + additional_cost;
        if !total_cost.is_finite() {
            return Err(out_of_range());
        }

        debug_assert!(base_cost >= 0.0 && additional_cost >= 0.0);
        debug_assert!(total_cost >= base_cost);

        log::trace!(
            "Estimated {}/{} {} x {}: base {:.2}, extras {:.2}",
            kind,
            tier,
            request.area,
            request.floors,
            base_cost,
            additional_cost
        );

        Ok(EstimateResult {
            total_area,
            price_per_area,
            base_cost,
            material_cost,
            labor_cost,
            overhead_cost,
            additional_cost,
            total_cost,
            timeline_months,
            feature_costs,
        })
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new(PricingTable::default())
    }
}

/// Largest built-up area whose timeline still fits in a `u32` month count
pub const MAX_SCHEDULED_AREA: f64 = (u32::MAX - FIXED_MONTHS) as f64 * AREA_PER_MONTH;

/// Months needed for a given built-up area, `None` past `MAX_SCHEDULED_AREA`
pub fn timeline_months(total_area: f64) -> Option<u32> {
    let building = (total_area / AREA_PER_MONTH).ceil();
    if !building.is_finite() || building > f64::from(u32::MAX - FIXED_MONTHS) {
        return None;
    }
    (building.max(0.0) as u32).checked_add(FIXED_MONTHS)
}
