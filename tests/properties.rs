//! Property tests for the cost estimator.

use buildcost_estimator_lib::core::{
    AdditionalFeature, EstimateRequest, EstimationError, ProjectKind, QualityTier,
    RawEstimateRequest,
};
use buildcost_estimator_lib::estimator::{timeline_months, CostEstimator, MAX_SCHEDULED_AREA};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn kind() -> impl Strategy<Value = ProjectKind> {
    prop::sample::select(ProjectKind::ALL.to_vec())
}

fn tier() -> impl Strategy<Value = QualityTier> {
    prop::sample::select(QualityTier::ALL.to_vec())
}

fn features() -> impl Strategy<Value = Vec<AdditionalFeature>> {
    subsequence(AdditionalFeature::ALL.to_vec(), 0..=AdditionalFeature::ALL.len())
}

fn request() -> impl Strategy<Value = EstimateRequest> {
    (kind(), tier(), 1e-3f64..1e6, 1u32..50, features()).prop_map(|(k, t, area, floors, fs)| {
        EstimateRequest::new(k, t, area, floors).with_features(fs)
    })
}

proptest! {
    #[test]
    fn split_adds_up_to_base_cost(req in request()) {
        let r = CostEstimator::default().estimate(&req).unwrap();
        let parts = r.material_cost + r.labor_cost + r.overhead_cost;
        prop_assert!((parts - r.base_cost).abs() <= 1e-6 * r.base_cost.max(1.0));
    }

    #[test]
    fn total_never_below_base(req in request()) {
        let r = CostEstimator::default().estimate(&req).unwrap();
        prop_assert!(r.additional_cost >= 0.0);
        prop_assert!(r.total_cost >= r.base_cost);
        for amount in [r.base_cost, r.material_cost, r.labor_cost, r.overhead_cost, r.total_cost] {
            prop_assert!(amount >= 0.0);
        }
    }

    #[test]
    fn total_grows_with_area(req in request(), extra in 0.0f64..1e5) {
        let estimator = CostEstimator::default();
        let mut bigger = req.clone();
        bigger.area += extra;
        let a = estimator.estimate(&req).unwrap();
        let b = estimator.estimate(&bigger).unwrap();
        prop_assert!(b.total_cost >= a.total_cost);
        prop_assert!(b.timeline_months >= a.timeline_months);
    }

    #[test]
    fn total_grows_with_floors(req in request(), extra in 0u32..10) {
        let estimator = CostEstimator::default();
        let mut taller = req.clone();
        taller.floors += extra;
        let a = estimator.estimate(&req).unwrap();
        let b = estimator.estimate(&taller).unwrap();
        prop_assert!(b.total_cost >= a.total_cost);
    }

    #[test]
    fn adding_a_feature_never_lowers_total(req in request(), feature in prop::sample::select(AdditionalFeature::ALL.to_vec())) {
        let estimator = CostEstimator::default();
        let more = req.clone().with_feature(feature);
        let a = estimator.estimate(&req).unwrap();
        let b = estimator.estimate(&more).unwrap();
        prop_assert!(b.total_cost >= a.total_cost);
    }

    #[test]
    fn timeline_is_monotonic(a in 0.0f64..1e7, b in 0.0f64..1e7) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(timeline_months(lo).unwrap() <= timeline_months(hi).unwrap());
    }

    #[test]
    fn huge_areas_are_rejected_not_wrapped(area in 1.0f64..1e15, floors in 1u32..1000) {
        let req = EstimateRequest::new(ProjectKind::Construction, QualityTier::Standard, area, floors);
        match CostEstimator::default().estimate(&req) {
            Ok(r) => {
                prop_assert!(r.total_area <= MAX_SCHEDULED_AREA);
                prop_assert!(r.timeline_months >= timeline_months(area).unwrap());
                prop_assert!(r.total_cost.is_finite());
            }
            Err(e) => {
                prop_assert_eq!(e, EstimationError::InvalidArea(area));
                prop_assert!(area * f64::from(floors) > MAX_SCHEDULED_AREA);
            }
        }
    }

    #[test]
    fn estimate_is_deterministic(req in request()) {
        let estimator = CostEstimator::default();
        let a = estimator.estimate(&req).unwrap();
        let b = estimator.estimate(&req).unwrap();
        prop_assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_floor_area_is_total_area(k in kind(), t in tier(), area in 1e-9f64..1e6) {
        let req = EstimateRequest::new(k, t, area, 1);
        let r = CostEstimator::default().estimate(&req).unwrap();
        prop_assert_eq!(r.total_area, area);
        prop_assert!(r.base_cost > 0.0);
    }

    #[test]
    fn feature_order_does_not_matter(req in request()) {
        let names: Vec<String> = req.selected_features.iter().map(|f| f.to_string()).collect();
        let mut reversed = names.clone();
        reversed.reverse();

        let raw = |selected_features: Vec<String>| RawEstimateRequest {
            project_kind: req.project_kind.to_string(),
            quality_tier: req.quality_tier.to_string(),
            area: req.area,
            floors: f64::from(req.floors),
            selected_features,
        };
        let estimator = CostEstimator::default();
        let a = estimator.estimate(&raw(names).parse().unwrap()).unwrap();
        let b = estimator.estimate(&raw(reversed).parse().unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn unknown_quality_tier_string_is_rejected() {
    let raw = RawEstimateRequest {
        project_kind: "construction".into(),
        quality_tier: "unknown".into(),
        area: 2000.0,
        floors: 1.0,
        selected_features: Vec::new(),
    };
    assert_eq!(
        raw.parse(),
        Err(EstimationError::UnknownQualityTier("unknown".to_string()))
    );
}
