use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::db::RosterStore;
use crate::error::RosterError;
use crate::router::RosterState;

/// Readiness gate: yields the store once bootstrap has installed it,
/// otherwise rejects the request with 503.
#[derive(Clone)]
pub struct ReadyStore(pub RosterStore);

impl<S> FromRequestParts<S> for ReadyStore
where
    RosterState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = RosterState::from_ref(state);
        match state.store().await {
            Some(store) => Ok(Self(store)),
            None => Err(RosterError::NotReady.into_response()),
        }
    }
}
