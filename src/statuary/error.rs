use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Statue not found: {0}")]
    StatueNotFound(u32),

    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    #[error("Reserved facet value: {0} 'all' would be unselectable")]
    ReservedFacetValue(String),

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("Unknown statue kind '{0}': expected horse, lion or woman")]
    UnknownStatueKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
