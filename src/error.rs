use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Message returned by the backend, shown to the user as-is.
    #[error("{0}")]
    ApiError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load image {url}: {reason}")]
    ImageLoad { url: String, reason: String },

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Search for a summoner before loading more matches")]
    NoActiveSearch,

    #[error("A request is already in progress")]
    Busy,
}
