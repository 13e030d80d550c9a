//! Analysis subdomain.
//!
//! - [`input::AnalysisInput`] - what the user typed
//! - [`request::AnalysisRequest`] - the wire payload derived from the input
//! - [`outcome::AnalysisOutcome`] - the displayable result of one submission
//! - [`state::RequestState`] - whether a submission is currently in flight
//! - [`messages`] - fixed user-facing failure messages

pub mod input;
pub mod messages;
pub mod outcome;
pub mod request;
pub mod state;
