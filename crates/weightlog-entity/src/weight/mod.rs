//! Weight record entities.

pub mod model;
pub mod validation;

pub use model::{NewWeight, Weight, difference_of};
pub use validation::validate;
