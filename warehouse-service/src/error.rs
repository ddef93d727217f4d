//! Collaborator-boundary error kinds: everything the engine itself does
//! not own.

use warehouse_engine::EngineError;

/// Service Result typedef.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ServiceError {
    /// The engine itself rejected the job.
    Engine(EngineError),
    /// No such order in the order source.
    #[display(fmt = "order {} not found", _0)]
    OrderNotFound(u64),
    /// The order was not in a state a trigger can act on.
    #[display(fmt = "order {} is not in NEW status", _0)]
    WrongStatus(u64),
    /// The order produced zero placeable items.
    #[display(fmt = "order {} produced no packable items", _0)]
    EmptyInput(u64),
    /// Writing the JSON artifact to disk failed.
    ArtifactWrite(std::io::Error),
    /// JSON encoding of the artifact failed.
    ArtifactEncode(serde_json::Error),
}

impl std::error::Error for ServiceError {}
