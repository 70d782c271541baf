//! Core traits defined in `weightlog-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
