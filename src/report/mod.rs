pub mod format;

use serde::Serialize;

use crate::pricing::{self, ContinuityCheck, DerivativeInterval, PricingError, RankedTier, Tier};

pub use format::{format_quantity, format_rupiah, render_json, render_text, render_tier_cost};

/// Cost of a single tier, listed in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierCost {
    pub tier: Tier,
    pub cost: f64,
}

/// Everything the front-ends show for one storage quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    pub quantity: f64,
    pub costs: [TierCost; 3],
    pub ranking: [RankedTier; 3],
    pub continuity: [ContinuityCheck; 2],
    pub derivatives: [DerivativeInterval; 4],
    pub banded: TierCost,
}

impl PricingReport {
    /// Compute the report for an already validated quantity
    pub fn compute(quantity: f64) -> Self {
        let costs = Tier::ALL.map(|tier| TierCost {
            tier,
            cost: pricing::evaluate(tier, quantity).cost,
        });

        Self {
            quantity,
            costs,
            ranking: pricing::rank_tiers(quantity),
            continuity: pricing::check_continuity(),
            derivatives: pricing::derivative_table(),
            banded: TierCost {
                tier: pricing::banded_tier(quantity),
                cost: pricing::banded_cost(quantity),
            },
        }
    }

    /// Parse and validate raw user input, then compute
    pub fn from_input(input: &str) -> Result<Self, PricingError> {
        let quantity = pricing::parse_quantity(input)?;
        Ok(Self::compute(quantity))
    }

    pub fn cheapest(&self) -> &RankedTier {
        &self.ranking[0]
    }

    /// `costs` is in declaration order, so the tier's discriminant is its index
    pub fn cost_of(&self, tier: Tier) -> f64 {
        self.costs[tier as usize].cost
    }
}
