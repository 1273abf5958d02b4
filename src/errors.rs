use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("market data API key is not configured")]
    MissingApiKey,

    #[error("market data request failed: {0}")]
    Http(reqwest::Error),

    #[error("failed to build market data client: {0}")]
    Client(String),
}

impl MarketDataError {
    /// Wraps a request error without its URL, which carries the API key.
    pub fn from_http(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
