pub mod calculator;
pub mod error;
pub mod tiers;
pub mod types;

pub use calculator::{
    banded_cost, banded_tier, check_continuity, cost_curve, derivative_table, evaluate,
    parse_quantity, rank_tiers, validate_quantity, CHART_DOMAIN, QUANTITY_MAX, QUANTITY_MIN,
};
pub use error::PricingError;
pub use tiers::MARGINAL_RATE;
pub use types::{ContinuityCheck, CostReport, DerivativeInterval, PricingFunction, RankedTier, Tier};
