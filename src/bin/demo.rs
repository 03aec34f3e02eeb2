//! BuildCost Estimator - Demo CLI
//!
//! Walks through the estimator the way the web calculator drives it:
//! every input change produces a fresh request, the estimate is recomputed
//! and only the latest result is kept for display.

use buildcost_estimator_lib::core::{
    AdditionalFeature, Config, EstimateRequest, EstimateResult, ProjectKind, QualityTier,
};
use buildcost_estimator_lib::estimator::CostEstimator;
use buildcost_estimator_lib::format::CurrencyFormat;
use buildcost_estimator_lib::i18n::I18n;
use buildcost_estimator_lib::pricing::PricingTable;
use buildcost_estimator_lib::report::{EstimateReport, TextStyle};

/// One simulated UI event
enum InputChange {
    Area(f64),
    Floors(u32),
    Tier(QualityTier),
    Toggle(AdditionalFeature),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   BuildCost Estimator - Demo");
    println!("==============================================\n");

    // 1. Price list
    println!("[1/3] Loading price list...");
    let config = Config::default();
    let table = PricingTable::from_config(&config.pricing)?;
    let estimator = CostEstimator::new(table);
    let currency = CurrencyFormat::from_config(&config.display);
    let i18n = I18n::new("en");
    let style = TextStyle {
        i18n: &i18n,
        currency: &currency,
        area_unit: &config.display.area_unit,
    };
    println!("      Project kinds: {}", estimator.table().kinds().count());
    println!("      Add-ons:       {}\n", estimator.table().features().len());

    // 2. Replay input changes
    println!("[2/3] Replaying calculator input changes...\n");
    println!("----------------------------------------------------------");
    println!("  Change               |  Base        |  Total       | Months");
    println!("----------------------------------------------------------");

    let mut request = EstimateRequest::new(ProjectKind::Construction, QualityTier::Standard, 1000.0, 1);
    let changes = [
        InputChange::Area(1500.0),
        InputChange::Area(2000.0),
        InputChange::Area(-5.0),
        InputChange::Area(2000.0),
        InputChange::Floors(2),
        InputChange::Tier(QualityTier::Premium),
        InputChange::Toggle(AdditionalFeature::Parking),
        InputChange::Toggle(AdditionalFeature::Landscaping),
        InputChange::Toggle(AdditionalFeature::Parking),
    ];

    let mut latest: Option<EstimateResult> = None;
    for change in changes {
        let label = apply(&mut request, change);
        match estimator.estimate(&request) {
            Ok(result) => {
                println!(
                    "  {:<20} | {:>12} | {:>12} | {:>4}",
                    label,
                    style.compact(result.base_cost),
                    style.compact(result.total_cost),
                    result.timeline_months
                );
                latest = Some(result);
            }
            Err(e) => {
                println!("  {:<20} | {}", label, i18n.estimation_error(&e));
                latest = None;
            }
        }
    }
    println!("----------------------------------------------------------\n");

    // 3. Final estimate
    println!("[3/3] Final estimate\n");
    match latest {
        Some(result) => {
            println!("  Total: {}\n", style.amount(result.total_cost));
            print!("{}", EstimateReport::new(request, result).to_text(&style));
        }
        None => println!("  {}", i18n.get("error.unable_to_calculate")),
    }

    Ok(())
}

fn apply(request: &mut EstimateRequest, change: InputChange) -> String {
    match change {
        InputChange::Area(area) => {
            request.area = area;
            format!("area = {}", area)
        }
        InputChange::Floors(floors) => {
            request.floors = floors;
            format!("floors = {}", floors)
        }
        InputChange::Tier(tier) => {
            request.quality_tier = tier;
            format!("tier = {}", tier)
        }
        InputChange::Toggle(feature) => {
            if request.selected_features.remove(&feature) {
                format!("- {}", feature)
            } else {
                request.selected_features.insert(feature);
                format!("+ {}", feature)
            }
        }
    }
}
