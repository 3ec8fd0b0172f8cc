use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use raidbots_client::{RaidbotsError, RaidbotsFetchError};
use thiserror::Error;
use tracing::warn;
use upgrade_engine::EngineError;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingEnv(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Http { status, .. } => *status,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }

    fn http(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(code = self.error_code(), error = %self, "request failed");
        }
        ApiResponse::<()>::error(self.error_code(), self.to_string(), Vec::new())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Document(e) => AppError::http(
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_REPORT",
                format!("Report document does not have the droptimizer shape: {e}"),
            ),
            EngineError::UnknownSortMode(_) => {
                AppError::http(StatusCode::BAD_REQUEST, "UNKNOWN_SORT_MODE", err.to_string())
            }
            EngineError::Config(e) => {
                AppError::http(StatusCode::INTERNAL_SERVER_ERROR, "ENGINE_CONFIG", e.to_string())
            }
        }
    }
}

/// Maps report fetch failures onto client-facing statuses.
impl From<RaidbotsError> for AppError {
    fn from(err: RaidbotsError) -> Self {
        match err {
            RaidbotsError::InvalidReportId(_) => {
                AppError::http(StatusCode::BAD_REQUEST, "INVALID_REPORT_ID", err.to_string())
            }
            RaidbotsError::Config(e) => AppError::Config(e.to_string()),
            RaidbotsError::Fetch(e) => match e {
                RaidbotsFetchError::NotFound => AppError::http(
                    StatusCode::NOT_FOUND,
                    "REPORT_NOT_FOUND",
                    "Report not found. It may have expired on Raidbots.",
                ),
                RaidbotsFetchError::Timeout => AppError::http(
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "Timed out while downloading the report.",
                ),
                RaidbotsFetchError::RateLimited => AppError::http(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "UPSTREAM_RATE_LIMITED",
                    "Raidbots is rate limiting requests; try again later.",
                ),
                RaidbotsFetchError::InvalidBody(msg) => AppError::http(
                    StatusCode::BAD_GATEWAY,
                    "INVALID_REPORT_BODY",
                    format!("Report body is not valid JSON: {msg}"),
                ),
                other => AppError::http(
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("Failed to download report: {other}"),
                ),
            },
        }
    }
}
