//! Data transfer objects for submitted forms.

pub mod request;

pub use request::WeightForm;
