use thiserror::Error;

/// Error domain reported alongside numeric codes to the mediation host.
pub const ERROR_DOMAIN: &str = "com.liftoff.mediation.adapter";

pub const ERROR_INVALID_SERVER_PARAMETERS: i32 = 101;
pub const ERROR_INITIALIZATION_FAILURE: i32 = 105;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Invalid server parameters: {message}")]
    InvalidServerParameters { message: String },

    #[error("Liftoff SDK initialization failed: {message}")]
    InitializationFailed { message: String },

    #[error("Liftoff SDK error {code}: {message}")]
    SdkError { code: i32, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AdapterError {
    /// Numeric code in the mediation host's adapter error space. SDK errors
    /// keep the code the SDK reported.
    pub fn code(&self) -> i32 {
        match self {
            AdapterError::InvalidServerParameters { .. } => ERROR_INVALID_SERVER_PARAMETERS,
            AdapterError::SerializationError(_) => ERROR_INVALID_SERVER_PARAMETERS,
            AdapterError::InitializationFailed { .. } => ERROR_INITIALIZATION_FAILURE,
            AdapterError::SdkError { code, .. } => *code,
        }
    }

    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
