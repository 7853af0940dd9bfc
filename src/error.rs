use thiserror::Error;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Error, Debug, Clone)]
pub enum DirectoryError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid color value '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Value out of range for '{property}': {value}. Expected range: {range}")]
    ValueOutOfRange {
        property: String,
        value: String,
        range: String,
    },

    #[error("Invalid enum value '{value}' for property '{property}'. Expected one of: {expected}")]
    InvalidEnum {
        property: String,
        value: String,
        expected: String,
    },

    #[error("Missing required field '{field}' for {record}")]
    MissingField { record: String, field: String },

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<serde_yaml::Error> for DirectoryError {
    fn from(err: serde_yaml::Error) -> Self {
        DirectoryError::YamlError(err.to_string())
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        DirectoryError::IoError(err.to_string())
    }
}
