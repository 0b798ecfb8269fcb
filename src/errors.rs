//! Error types for recurl

use thiserror::Error;

/// Main error type for recurl
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurlError {
    /// The request URI carries no scheme or authority (the degenerate `/`
    /// default of [`http::Uri`]), so there is no target to reproduce.
    #[error("request URI is not set")]
    UriNotSet,
}

pub type Result<T> = std::result::Result<T, RecurlError>;
