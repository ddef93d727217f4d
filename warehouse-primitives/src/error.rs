//! Errors that can occur while constructing core domain values.

/// Result typedef for primitive construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building an [`crate::Item`] or [`crate::PalletSpec`]
/// from caller-supplied data.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum Error {
    /// One of `w`, `d`, `h` was not a positive integer.
    #[display(fmt = "dimension must be positive, got {}", _0)]
    NonPositiveDimension(i64),
    /// `weight` was not a positive real.
    #[display(fmt = "weight must be positive, got {}", _0)]
    NonPositiveWeight(f64),
    /// `picking_order` was not a positive integer.
    #[display(fmt = "picking_order must be positive, got {}", _0)]
    NonPositivePickingOrder(i64),
    /// A mandatory string field (`id`, `type_id`, `location`, `name`) was empty.
    #[display(fmt = "field {} must not be empty", _0)]
    EmptyField(&'static str),
}

impl std::error::Error for Error {}
