use serde::Serialize;
use std::fmt;

/// Storage pricing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Basic,
    Standard,
    Premium,
}

/// Flat base cost up to `threshold` GB, then `marginal_rate` per extra GB
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingFunction {
    pub base_cost: f64,
    pub threshold: f64,
    pub marginal_rate: f64,
}

impl PricingFunction {
    pub const fn new(base_cost: f64, threshold: f64, marginal_rate: f64) -> Self {
        Self {
            base_cost,
            threshold,
            marginal_rate,
        }
    }

    /// Evaluate the function at `quantity`; extrapolates linearly outside the supported range
    pub fn apply(&self, quantity: f64) -> f64 {
        self.base_cost + (quantity - self.threshold).max(0.0) * self.marginal_rate
    }

    /// Slope of the function at `quantity`, taking the `≤` branch at the threshold
    pub fn slope_at(&self, quantity: f64) -> f64 {
        if quantity <= self.threshold {
            0.0
        } else {
            self.marginal_rate
        }
    }
}

/// Cost of one tier at one quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostReport {
    pub quantity: f64,
    pub cost: f64,
}

/// Two tiers compared at a shared boundary quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinuityCheck {
    pub boundary: f64,
    pub lower_tier: Tier,
    pub upper_tier: Tier,
    /// Lower tier's cost at the boundary
    pub left: f64,
    /// Upper tier's cost at the boundary
    pub right: f64,
    pub continuous: bool,
}

/// Quantity range with a constant marginal cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivativeInterval {
    pub lower: f64,
    /// `None` means unbounded above
    pub upper: Option<f64>,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    pub slope: f64,
}

impl DerivativeInterval {
    pub fn contains(&self, quantity: f64) -> bool {
        let above_lower = if self.lower_inclusive {
            quantity >= self.lower
        } else {
            quantity > self.lower
        };
        let below_upper = match self.upper {
            None => true,
            Some(upper) if self.upper_inclusive => quantity <= upper,
            Some(upper) => quantity < upper,
        };
        above_lower && below_upper
    }

    /// Human readable interval, e.g. `50 < x ≤ 200` or `x > 500`
    pub fn label(&self) -> String {
        let lower_op = if self.lower_inclusive { "≤" } else { "<" };
        match self.upper {
            Some(upper) => {
                let upper_op = if self.upper_inclusive { "≤" } else { "<" };
                format!("{} {} x {} {}", self.lower, lower_op, upper_op, upper)
            }
            None => {
                let op = if self.lower_inclusive { "≥" } else { ">" };
                format!("x {} {}", op, self.lower)
            }
        }
    }
}

impl fmt::Display for DerivativeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: C'(x) = {}", self.label(), self.slope)
    }
}

/// A tier with its cost, as returned in ascending cost order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedTier {
    pub tier: Tier,
    #[serde(flatten)]
    pub report: CostReport,
}
