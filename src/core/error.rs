use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalisadeError {
    #[error("Patrol circuit must contain at least one waypoint")]
    EmptyCircuit,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PalisadeError>;
