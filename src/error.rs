use thiserror::Error;

#[derive(Error, Debug)]
pub enum HatchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No API key configured. Set one with `match-the-hatch config --set-api-key YOUR_KEY` or export PULZE_API_KEY")]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    ApiCall(String),

    #[error("No saved trip with key: {0}")]
    TripNotFound(String),

    #[error("Trip {0} has no materials list yet. Generate one with `match-the-hatch materials`")]
    NoMaterials(String),

    #[error("CSV export failed: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HatchError>;
