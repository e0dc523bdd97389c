use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the `/api/backend` relay. Upstream HTTP errors are not
/// errors here: they are forwarded to the caller untouched.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing path")]
    MissingPath,
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),
    #[error("Failed to read upstream response: {0}")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::MissingPath => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Body(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Errors raised by console operations. The `Display` output is exactly the
/// message shown to the user.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Non-2xx answer from the relay; carries the response body verbatim.
    #[error("{body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid time value: {0:?}")]
    InvalidSchedule(String),
    #[error("Failed to render page: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = match self {
            ConsoleError::Render(_) | ConsoleError::InvalidSchedule(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_GATEWAY,
        };
        tracing::error!(error = %self, "console request failed");
        (status, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(#[from] std::net::AddrParseError),
}
