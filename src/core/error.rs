use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexMoveError {
    #[error("Pathfinding failed: {0}")]
    Pathfind(#[from] crate::pathfinding::PathError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HexMoveError>;
