use axum::Json;
use tracing::info;

use crate::db::Role;
use crate::error::{ApiError, RosterError};
use crate::middleware::{JsonFields, ReadyStore};
use crate::types::roster::{LoginRequest, MessageResponse};

/// POST /login -> one-shot credential check; no session is issued.
pub async fn login(
    ReadyStore(store): ReadyStore,
    body: JsonFields,
) -> Result<Json<MessageResponse>, ApiError> {
    let req = LoginRequest::from(body);
    let role = Role::from_login(req.role.as_deref());
    let (Some(name), Some(password)) = (req.name, req.password) else {
        return Err(RosterError::InvalidCredentials.with_message("Database error"));
    };

    let matched = store
        .verify_login(role, &name, &password)
        .await
        .map_err(|e| e.with_message("Database error"))?;
    if !matched {
        return Err(RosterError::InvalidCredentials.with_message("Database error"));
    }

    info!(name = %name, role = role.as_str(), "login succeeded");
    Ok(Json(MessageResponse::new("Login success!")))
}
