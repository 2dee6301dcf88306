use std::fmt;

/// Error types for trace extraction operations
#[derive(Debug)]
pub enum ExtractError {
    /// IO error (reading the trace, writing reports)
    Io(std::io::Error),

    /// JSON parsing or serialization error
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io(err) => write!(f, "IO error: {err}"),
            ExtractError::Json(err) => write!(f, "JSON error: {err}"),
            ExtractError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ExtractError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ExtractError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Io(err) => Some(err),
            ExtractError::Json(err) => Some(err),
            ExtractError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Json(err)
    }
}

impl From<toml::de::Error> for ExtractError {
    fn from(err: toml::de::Error) -> Self {
        ExtractError::TomlParsing(err)
    }
}

/// Type alias for Results using ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
