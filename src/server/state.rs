//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through axum's
//! state extraction. Both fields are cheap to clone: the store sits behind an `Arc` and
//! the guard only holds a reference-counted token.

use std::sync::Arc;

use crate::server::{data::store::EntityStore, middleware::auth::AuthGuard};

#[derive(Clone)]
pub struct AppState {
    /// Entity store every resource endpoint reads from.
    pub store: Arc<dyn EntityStore>,

    /// Bearer token check applied to every `/api/v1` resource route.
    pub auth_guard: AuthGuard,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, auth_guard: AuthGuard) -> Self {
        Self { store, auth_guard }
    }
}
