//! Route definitions for the weight pages.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers::weight;
use crate::state::AppState;

/// Build the router with every weight route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(weight::index))
        .merge(weight_routes())
        .with_state(state)
}

/// List, detail, create, edit, and delete.
fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/weight/new", get(weight::new_form))
        .route("/weight/insert", post(weight::insert))
        .route("/weight/{id}", get(weight::detail))
        .route("/weight/{id}/edit", get(weight::edit_form))
        .route("/weight/{id}/update", post(weight::update))
        .route("/weight/{id}/delete", post(weight::delete))
}
