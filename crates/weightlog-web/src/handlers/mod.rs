//! HTTP request handlers.

pub mod weight;
