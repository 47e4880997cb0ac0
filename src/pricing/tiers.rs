use std::fmt;
use std::str::FromStr;

use super::error::PricingError;
use super::types::{PricingFunction, Tier};

/// Extra cost per GB above a tier's threshold
pub const MARGINAL_RATE: f64 = 2000.0;

const BASIC: PricingFunction = PricingFunction::new(50_000.0, 50.0, MARGINAL_RATE);
const STANDARD: PricingFunction = PricingFunction::new(90_000.0, 200.0, MARGINAL_RATE);
const PREMIUM: PricingFunction = PricingFunction::new(150_000.0, 500.0, MARGINAL_RATE);

impl Tier {
    /// All tiers in declaration order; ranking ties fall back to this order
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Standard, Tier::Premium];

    pub fn pricing_function(self) -> PricingFunction {
        match self {
            Tier::Basic => BASIC,
            Tier::Standard => STANDARD,
            Tier::Premium => PREMIUM,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Tier::Basic),
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            _ => Err(PricingError::InvalidTier(s.to_string())),
        }
    }
}
