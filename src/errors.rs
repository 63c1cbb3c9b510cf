use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown {kind} option: '{label}'")]
    UnknownOption { kind: &'static str, label: String },

    #[error("Unsupported codec: '{0}'")]
    UnsupportedCodec(String),

    #[error("Invalid target: '{0}'")]
    InvalidTarget(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("HTTP Error: {0}")]
    Http(String),
}

// reqwest's Display omits the underlying cause, so walk the source chain.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        let mut message = format!("{}: {}", kind, err);
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        AppError::Http(message)
    }
}
