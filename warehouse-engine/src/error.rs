//! Engine-level error kinds.

use warehouse_primitives::Pallet;

/// Result typedef for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, derive_more::Display)]
pub enum EngineError {
    /// A single item does not fit an empty pallet in any orientation; the
    /// driver halts, carrying the offending item ids plus whatever pallets
    /// were already built so far.
    #[display(
        fmt = "{} item(s) do not fit on an empty pallet: {:?}",
        "unplaceable.len()",
        unplaceable
    )]
    ItemExceedsPallet {
        unplaceable: Vec<String>,
        partial: Vec<Pallet>,
    },
    /// The solver call itself failed (backend error, not infeasibility).
    #[display(fmt = "solver failure: {}", _0)]
    SolverFailure(String),
}

impl std::error::Error for EngineError {}
