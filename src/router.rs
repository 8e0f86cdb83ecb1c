use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::RosterStore;
use crate::handlers::{
    auth::login,
    health::readyz,
    roster::{create_student, create_teacher, list_students, list_teachers},
};

/// Shared router state. The store slot stays empty until bootstrap finishes.
#[derive(Clone, Default)]
pub struct RosterState {
    store: Arc<RwLock<Option<RosterStore>>>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that is ready from the start.
    pub fn with_store(store: RosterStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(Some(store))),
        }
    }

    /// Mark the service ready by handing it the bootstrapped store.
    pub async fn install(&self, store: RosterStore) {
        *self.store.write().await = Some(store);
    }

    pub async fn store(&self) -> Option<RosterStore> {
        self.store.read().await.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.store.read().await.is_some()
    }
}

pub fn roster_router(state: RosterState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/login", post(login))
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route("/students", get(list_students).post(create_student))
        .route("/readyz", get(readyz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
