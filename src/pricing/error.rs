use thiserror::Error;

/// Errors raised at the edges of the pricing engine.
///
/// The formulas themselves are total over the reals, so these only appear
/// when turning text into a [`Tier`](super::Tier) or a storage quantity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Tier name outside the closed set basic/standard/premium
    #[error("invalid tier '{0}' (expected basic, standard or premium)")]
    InvalidTier(String),

    /// Quantity that is not a number or falls outside the supported range
    #[error("storage quantity must be a number between 0 and 600 GB (got '{input}')")]
    InputRange { input: String },
}

pub type Result<T> = std::result::Result<T, PricingError>;
