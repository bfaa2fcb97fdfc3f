use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlantSimError {
    #[error("Value for '{0}' must be a finite number")]
    NonFiniteInput(String),

    #[error("Unknown environment parameter '{0}' (expected temperature, wind or water)")]
    UnknownKey(String),

    #[error("Could not understand command '{0}'")]
    InvalidCommand(String),

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}
