//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "BuildCost Estimator".into());

    // Report
    t.insert("report.title".into(), "Construction Cost Estimate".into());
    t.insert("report.generated".into(), "Generated".into());
    t.insert("report.project".into(), "Project Details".into());
    t.insert("report.project_kind".into(), "Project Type".into());
    t.insert("report.quality_tier".into(), "Quality".into());
    t.insert("report.area_per_floor".into(), "Area per Floor".into());
    t.insert("report.floors".into(), "Floors".into());
    t.insert("report.total_area".into(), "Total Area".into());
    t.insert("report.price_per_area".into(), "Price per Unit Area".into());
    t.insert("report.cost_breakdown".into(), "Cost Breakdown".into());
    t.insert("report.base_cost".into(), "Base Cost".into());
    t.insert("report.material_cost".into(), "Materials".into());
    t.insert("report.labor_cost".into(), "Labor".into());
    t.insert("report.overhead_cost".into(), "Overhead".into());
    t.insert("report.additional_features".into(), "Additional Features".into());
    t.insert("report.no_features".into(), "None selected".into());
    t.insert("report.additional_cost".into(), "Additional Cost".into());
    t.insert("report.total_cost".into(), "Total Cost".into());
    t.insert("report.timeline".into(), "Estimated Timeline".into());
    t.insert("report.months".into(), "months".into());
    t.insert("report.disclaimer".into(), "This is an indicative estimate. Final pricing depends on site survey, design and material selection.".into());

    // Errors
    t.insert("error.unable_to_calculate".into(), "Unable to calculate an estimate".into());
    t.insert("error.hint.kind".into(), "Choose a valid project type".into());
    t.insert("error.hint.tier".into(), "Choose a valid quality tier".into());
    t.insert("error.hint.area".into(), "Enter a valid area".into());
    t.insert("error.hint.floors".into(), "Enter a whole number of floors (1 or more)".into());

    // Pricing table listing
    t.insert("pricing.title".into(), "Price List".into());
    t.insert("pricing.flat".into(), "flat".into());
    t.insert("pricing.per_area".into(), "per unit area".into());
    t.insert("pricing.incomplete".into(), "not available".into());

    // Project kinds
    t.insert("kind.construction".into(), "Construction".into());
    t.insert("kind.interior".into(), "Interior Design".into());

    // Quality tiers
    t.insert("tier.basic".into(), "Basic".into());
    t.insert("tier.standard".into(), "Standard".into());
    t.insert("tier.premium".into(), "Premium".into());
    t.insert("tier.luxury".into(), "Luxury".into());

    // Features
    t.insert("feature.parking".into(), "Parking".into());
    t.insert("feature.landscaping".into(), "Landscaping".into());
    t.insert("feature.compoundWall".into(), "Compound Wall".into());
    t.insert("feature.solarPower".into(), "Solar Power".into());
    t.insert("feature.homeAutomation".into(), "Home Automation".into());
    t.insert("feature.swimmingPool".into(), "Swimming Pool".into());

    t
}
