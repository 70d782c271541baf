//! # weightlog-web
//!
//! HTTP layer for Weightlog built on Axum.
//!
//! Serves the weight pages (list with averages, detail, create and edit
//! forms), maps every outcome to a status code and a rendered view, and wires
//! storage, renderer, and middleware into a runnable server.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, run_server};
pub use state::AppState;
