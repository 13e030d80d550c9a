//! Progress reporting while a submission is in flight

pub mod reporter;
