//! Core type definitions used across the Weightlog workspace.

pub mod id;

pub use id::*;
