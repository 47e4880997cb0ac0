use std::ops::RangeInclusive;
use tracing::debug;

use super::error::{PricingError, Result};
use super::types::{ContinuityCheck, CostReport, DerivativeInterval, RankedTier, Tier};

/// Smallest storage quantity accepted from callers (GB)
pub const QUANTITY_MIN: f64 = 0.0;
/// Largest storage quantity accepted from callers (GB)
pub const QUANTITY_MAX: f64 = 600.0;

/// Integer quantities sampled for the cost chart
pub const CHART_DOMAIN: RangeInclusive<u32> = 0..=600;

const DERIVATIVE_TABLE: [DerivativeInterval; 4] = [
    DerivativeInterval {
        lower: 0.0,
        upper: Some(50.0),
        lower_inclusive: true,
        upper_inclusive: true,
        slope: 0.0,
    },
    DerivativeInterval {
        lower: 50.0,
        upper: Some(200.0),
        lower_inclusive: false,
        upper_inclusive: true,
        slope: 0.0,
    },
    DerivativeInterval {
        lower: 200.0,
        upper: Some(500.0),
        lower_inclusive: false,
        upper_inclusive: true,
        slope: 0.0,
    },
    DerivativeInterval {
        lower: 500.0,
        upper: None,
        lower_inclusive: false,
        upper_inclusive: false,
        slope: 2000.0,
    },
];

/// Calculate the cost of `tier` at `quantity` GB
pub fn evaluate(tier: Tier, quantity: f64) -> CostReport {
    CostReport {
        quantity,
        cost: tier.pricing_function().apply(quantity),
    }
}

/// All tiers at `quantity`, cheapest first; equal costs keep declaration order
pub fn rank_tiers(quantity: f64) -> [RankedTier; 3] {
    let mut ranked = Tier::ALL.map(|tier| RankedTier {
        tier,
        report: evaluate(tier, quantity),
    });

    // slice::sort_by is stable
    ranked.sort_by(|a, b| a.report.cost.total_cmp(&b.report.cost));

    debug!(
        quantity,
        cheapest = %ranked[0].tier,
        cost = ranked[0].report.cost,
        "ranked tiers"
    );
    ranked
}

/// Compare Basic/Standard at 50 GB and Standard/Premium at 200 GB
pub fn check_continuity() -> [ContinuityCheck; 2] {
    let checks = [
        compare_at(50.0, Tier::Basic, Tier::Standard),
        compare_at(200.0, Tier::Standard, Tier::Premium),
    ];

    for check in &checks {
        debug!(
            boundary = check.boundary,
            left = check.left,
            right = check.right,
            continuous = check.continuous,
            "continuity check"
        );
    }
    checks
}

fn compare_at(boundary: f64, lower_tier: Tier, upper_tier: Tier) -> ContinuityCheck {
    let left = evaluate(lower_tier, boundary).cost;
    let right = evaluate(upper_tier, boundary).cost;
    ContinuityCheck {
        boundary,
        lower_tier,
        upper_tier,
        left,
        right,
        continuous: left == right,
    }
}

/// Marginal cost per interval.
///
/// This is a fixed table describing a flat base until 500 GB and the
/// marginal rate beyond it. It is not derived from the individual tier
/// formulas and does not change if they do.
pub fn derivative_table() -> [DerivativeInterval; 4] {
    DERIVATIVE_TABLE
}

/// Tier whose formula applies in the quantity band containing `quantity`
pub fn banded_tier(quantity: f64) -> Tier {
    if quantity <= 50.0 {
        Tier::Basic
    } else if quantity <= 200.0 {
        Tier::Standard
    } else {
        Tier::Premium
    }
}

/// Cost of the merged piecewise function C(x), choosing the tier by quantity band
pub fn banded_cost(quantity: f64) -> f64 {
    evaluate(banded_tier(quantity), quantity).cost
}

/// (quantity, cost) samples of `tier` over [`CHART_DOMAIN`]
pub fn cost_curve(tier: Tier) -> Vec<(f64, f64)> {
    CHART_DOMAIN
        .map(|x| {
            let quantity = f64::from(x);
            (quantity, evaluate(tier, quantity).cost)
        })
        .collect()
}

/// Accept `value` only if it is a finite quantity within the supported range.
/// Negative zero comes back as `0.0`.
pub fn validate_quantity(value: f64) -> Result<f64> {
    if value.is_finite() && (QUANTITY_MIN..=QUANTITY_MAX).contains(&value) {
        Ok(value + 0.0)
    } else {
        Err(PricingError::InputRange {
            input: value.to_string(),
        })
    }
}

/// Parse user input into a validated quantity
pub fn parse_quantity(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| PricingError::InputRange {
        input: trimmed.to_string(),
    })?;

    validate_quantity(value).map_err(|_| PricingError::InputRange {
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate(Tier::Basic, 0.0).cost, 50_000.0);
        assert_eq!(evaluate(Tier::Basic, 50.0).cost, 50_000.0);
        assert_eq!(evaluate(Tier::Basic, 100.0).cost, 150_000.0);
    }

    #[test]
    fn test_evaluate_standard() {
        assert_eq!(evaluate(Tier::Standard, 200.0).cost, 90_000.0);
        assert_eq!(evaluate(Tier::Standard, 250.0).cost, 190_000.0);
    }

    #[test]
    fn test_evaluate_premium() {
        assert_eq!(evaluate(Tier::Premium, 500.0).cost, 150_000.0);
        assert_eq!(evaluate(Tier::Premium, 600.0).cost, 350_000.0);
    }

    #[test]
    fn test_evaluate_extrapolates_out_of_range() {
        // 1000 GB: 150000 + 500 * 2000
        assert_eq!(evaluate(Tier::Premium, 1000.0).cost, 1_150_000.0);
        assert_eq!(evaluate(Tier::Basic, -10.0).cost, 50_000.0);
    }

    #[test]
    fn test_evaluate_fractional_quantity() {
        let report = evaluate(Tier::Basic, 50.5);
        assert_eq!(report.quantity, 50.5);
        assert_eq!(report.cost, 51_000.0);
    }

    #[test]
    fn test_rank_tiers_at_zero() {
        let ranked = rank_tiers(0.0);
        let order: Vec<Tier> = ranked.iter().map(|r| r.tier).collect();
        assert_eq!(order, vec![Tier::Basic, Tier::Standard, Tier::Premium]);
        assert_eq!(ranked[0].report.cost, 50_000.0);
        assert_eq!(ranked[1].report.cost, 90_000.0);
        assert_eq!(ranked[2].report.cost, 150_000.0);
    }

    #[test]
    fn test_rank_tiers_at_max() {
        let ranked = rank_tiers(600.0);
        let order: Vec<Tier> = ranked.iter().map(|r| r.tier).collect();
        assert_eq!(order, vec![Tier::Premium, Tier::Standard, Tier::Basic]);
        assert_eq!(ranked[0].report.cost, 350_000.0);
        assert_eq!(ranked[1].report.cost, 890_000.0);
        assert_eq!(ranked[2].report.cost, 1_150_000.0);
    }

    #[test]
    fn test_rank_tiers_tie_keeps_declaration_order() {
        // Basic: 50000 + 20 * 2000 = 90000, Standard flat at 90000
        let ranked = rank_tiers(70.0);
        assert_eq!(ranked[0].tier, Tier::Basic);
        assert_eq!(ranked[1].tier, Tier::Standard);
        assert_eq!(ranked[0].report.cost, ranked[1].report.cost);
        assert_eq!(ranked[2].tier, Tier::Premium);
    }

    #[test]
    fn test_check_continuity() {
        let [at_50, at_200] = check_continuity();

        assert_eq!(at_50.boundary, 50.0);
        assert_eq!(at_50.lower_tier, Tier::Basic);
        assert_eq!(at_50.upper_tier, Tier::Standard);
        assert_eq!(at_50.left, 50_000.0);
        assert_eq!(at_50.right, 90_000.0);
        assert!(!at_50.continuous);

        assert_eq!(at_200.boundary, 200.0);
        assert_eq!(at_200.lower_tier, Tier::Standard);
        assert_eq!(at_200.upper_tier, Tier::Premium);
        assert_eq!(at_200.left, 90_000.0);
        assert_eq!(at_200.right, 150_000.0);
        assert!(!at_200.continuous);
    }

    #[test]
    fn test_derivative_table() {
        let table = derivative_table();
        let labels: Vec<String> = table.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec!["0 ≤ x ≤ 50", "50 < x ≤ 200", "200 < x ≤ 500", "x > 500"]
        );
        let slopes: Vec<f64> = table.iter().map(|d| d.slope).collect();
        assert_eq!(slopes, vec![0.0, 0.0, 0.0, 2000.0]);
    }

    #[test]
    fn test_derivative_table_partitions_domain() {
        let table = derivative_table();
        for x in [0.0, 50.0, 50.5, 200.0, 333.0, 500.0, 500.01, 600.0] {
            let hits = table.iter().filter(|d| d.contains(x)).count();
            assert_eq!(hits, 1, "quantity {} covered {} times", x, hits);
        }
    }

    #[test]
    fn test_derivative_table_follows_banded_function_not_tiers() {
        let table = derivative_table();
        let slope_in_table = |x: f64| table.iter().find(|d| d.contains(x)).map(|d| d.slope);

        for x in [0.0, 50.0, 120.0, 200.0, 350.0, 500.0, 550.0, 600.0] {
            let banded_slope = banded_tier(x).pricing_function().slope_at(x);
            assert_eq!(slope_in_table(x), Some(banded_slope), "quantity {}", x);
        }

        // Basic on its own is already past its threshold at 100 GB
        assert_eq!(Tier::Basic.pricing_function().slope_at(100.0), 2000.0);
        assert_eq!(slope_in_table(100.0), Some(0.0));
    }

    #[test]
    fn test_banded_tier() {
        assert_eq!(banded_tier(0.0), Tier::Basic);
        assert_eq!(banded_tier(50.0), Tier::Basic);
        assert_eq!(banded_tier(51.0), Tier::Standard);
        assert_eq!(banded_tier(200.0), Tier::Standard);
        assert_eq!(banded_tier(201.0), Tier::Premium);
    }

    #[test]
    fn test_banded_cost_jumps_at_band_edges() {
        assert_eq!(banded_cost(50.0), 50_000.0);
        assert_eq!(banded_cost(51.0), 90_000.0);
        assert_eq!(banded_cost(200.0), 90_000.0);
        assert_eq!(banded_cost(201.0), 150_000.0);
        assert_eq!(banded_cost(600.0), 350_000.0);
    }

    #[test]
    fn test_cost_curve_covers_chart_domain() {
        let curve = cost_curve(Tier::Standard);
        assert_eq!(curve.len(), 601);
        assert_eq!(curve[0], (0.0, 90_000.0));
        assert_eq!(curve[250], (250.0, 190_000.0));
        assert_eq!(curve[600], (600.0, 890_000.0));
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(0.0), Ok(0.0));
        assert_eq!(validate_quantity(600.0), Ok(600.0));
        assert_eq!(validate_quantity(123.5), Ok(123.5));
        assert!(validate_quantity(-0.5).is_err());
        assert!(validate_quantity(600.5).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 250 "), Ok(250.0));
        assert_eq!(parse_quantity("12.5"), Ok(12.5));
        assert_eq!(
            parse_quantity("abc"),
            Err(PricingError::InputRange {
                input: "abc".to_string()
            })
        );
        assert_eq!(
            parse_quantity("601"),
            Err(PricingError::InputRange {
                input: "601".to_string()
            })
        );
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("NaN").is_err());
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let quantity = parse_quantity("-0").unwrap();
        assert_eq!(quantity, 0.0);
        assert!(quantity.is_sign_positive());
        assert!(validate_quantity(-0.0).unwrap().is_sign_positive());
    }

    #[test]
    fn test_operations_are_idempotent() {
        assert_eq!(evaluate(Tier::Premium, 321.0), evaluate(Tier::Premium, 321.0));
        assert_eq!(rank_tiers(321.0), rank_tiers(321.0));
        assert_eq!(check_continuity(), check_continuity());
        assert_eq!(derivative_table(), derivative_table());
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_monotonic(a in 0.0f64..=600.0, b in 0.0f64..=600.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for tier in Tier::ALL {
                prop_assert!(evaluate(tier, lo).cost <= evaluate(tier, hi).cost);
            }
        }

        #[test]
        fn prop_ranking_is_sorted(q in 0.0f64..=600.0) {
            let ranked = rank_tiers(q);
            prop_assert!(ranked[0].report.cost <= ranked[1].report.cost);
            prop_assert!(ranked[1].report.cost <= ranked[2].report.cost);

            let mut tiers: Vec<Tier> = ranked.iter().map(|r| r.tier).collect();
            tiers.sort_by_key(|t| Tier::ALL.iter().position(|x| x == t));
            prop_assert_eq!(tiers, Tier::ALL.to_vec());
        }

        #[test]
        fn prop_cost_is_non_negative(q in 0.0f64..=600.0) {
            for tier in Tier::ALL {
                prop_assert!(evaluate(tier, q).cost >= 0.0);
            }
        }
    }
}
