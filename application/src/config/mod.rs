//! Application-level configuration.
//!
//! - [`ServiceParams`] - where the classification service lives and how long to wait for it

pub mod service_params;

pub use service_params::ServiceParams;
