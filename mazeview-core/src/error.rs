use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph database error: {0}")]
    Graph(#[from] neo4rs::Error),

    #[error("Record decode error: {0}")]
    Decode(#[from] neo4rs::DeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Asset not found in registry: {0}")]
    AssetNotFound(String),

    #[error("Invalid actor handle: {0}")]
    InvalidActor(u32),
}

pub type Result<T> = std::result::Result<T, MazeError>;
