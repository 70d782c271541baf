//! Request parameter helpers.

pub mod path;

pub use path::parse_weight_id;
