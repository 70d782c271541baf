//! # weightlog-entity
//!
//! Domain entity models for Weightlog. `Weight` is the row type of the
//! `weights` table and derives `sqlx::FromRow`; `NewWeight` is the candidate
//! built from a submitted form before storage assigns an identifier.

pub mod weight;

pub use weight::{NewWeight, Weight};
