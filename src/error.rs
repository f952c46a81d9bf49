use std::fmt;

#[derive(Debug)]
pub enum AmiError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ProviderError(String),
    InvalidInput(String),
}

impl fmt::Display for AmiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmiError::IoError(err) => write!(f, "IO error: {}", err),
            AmiError::JsonError(err) => write!(f, "JSON error: {}", err),
            AmiError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            AmiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AmiError {}

impl From<std::io::Error> for AmiError {
    fn from(err: std::io::Error) -> Self {
        AmiError::IoError(err)
    }
}

impl From<serde_json::Error> for AmiError {
    fn from(err: serde_json::Error) -> Self {
        AmiError::JsonError(err)
    }
}

pub type Result<T> = std::result::Result<T, AmiError>;
