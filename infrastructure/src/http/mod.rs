//! HTTP classification adapter
//!
//! Implements [`ClassificationService`](verdict_application::ClassificationService)
//! over `POST {base_url}/predict`.

pub mod error;
pub mod service;
mod wire;
