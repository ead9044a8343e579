use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowrepError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
    #[error("Malformed query: {0}")]
    MalformedQuery(String),
    #[error("Cyclic taxonomy: {entity} is its own ancestor")]
    CycleInHierarchy { entity: String },
    #[error("Invalid probability {probability} for variable {variable}")]
    InvalidProbability { variable: String, probability: f64 },
    #[error("Too many variables to enumerate: {count} (limit {limit})")]
    TooManyVariables { count: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, KnowrepError>;

// Helper conversions
impl From<config::ConfigError> for KnowrepError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
