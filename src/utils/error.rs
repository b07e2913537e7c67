use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Could not build email: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Fetch,
    Parse,
    Notification,
}

impl CheckerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckerError::ApiError(e) if e.is_decode() => ErrorCategory::Parse,
            CheckerError::ApiError(_) | CheckerError::HttpStatusError { .. } => {
                ErrorCategory::Fetch
            }
            CheckerError::SerializationError(_) => ErrorCategory::Parse,
            CheckerError::UrlError(_)
            | CheckerError::MissingConfigError { .. }
            | CheckerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CheckerError::AddressError(_)
            | CheckerError::MessageError(_)
            | CheckerError::SmtpError(_) => ErrorCategory::Notification,
        }
    }

    /// Fatal errors end the run; everything else only costs one destination.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::Notification
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
