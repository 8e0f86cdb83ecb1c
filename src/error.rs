use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{error, warn};

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Invalid Username or Password")]
    InvalidCredentials,

    #[error("{entity} already exists")]
    Conflict { entity: &'static str },

    #[error("missing field `{0}`")]
    Validation(&'static str),

    #[error("storage is not ready")]
    NotReady,

    #[error("Database error: {0}")]
    DatabaseError(SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl RosterError {
    /// Attach the plain message the client sees when this error ends a request.
    pub fn with_message(self, message: &'static str) -> ApiError {
        ApiError {
            message,
            source: self,
        }
    }

    /// Reclassify a unique-constraint violation as a conflict on `entity`.
    pub fn conflict_on(err: SqlxError, entity: &'static str) -> Self {
        match &err {
            SqlxError::Database(db) if db.is_unique_violation() => Self::Conflict { entity },
            _ => Self::DatabaseError(err),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            // Conflicts and validation failures are reported like storage faults.
            Self::Conflict { .. }
            | Self::Validation(_)
            | Self::DatabaseError(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SqlxError> for RosterError {
    fn from(e: SqlxError) -> Self {
        Self::DatabaseError(e)
    }
}

impl From<figment::Error> for RosterError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        self.with_message("Database error").into_response()
    }
}

/// A failed request: the typed cause plus the message the endpoint reports.
#[derive(Debug)]
pub struct ApiError {
    pub message: &'static str,
    pub source: RosterError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.source.status();
        let message = match self.source {
            RosterError::InvalidCredentials => "Invalid Username or Password",
            RosterError::NotReady => "Service is not ready",
            _ => self.message,
        };

        if status.is_server_error() {
            error!(error = %self.source, status = status.as_u16(), "{}", message);
        } else {
            warn!(error = %self.source, status = status.as_u16(), "request rejected");
        }

        (
            status,
            Json(ApiErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error body shared by every endpoint: `{"error": "<message>"}`.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
