use thiserror::Error;

/// Failures raised by the price analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    /// A read-side operation ran before any day was entered.
    #[error("no price data available")]
    NoDataAvailable,
}
