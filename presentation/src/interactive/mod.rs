//! Interactive session module
//!
//! Provides a reedline-based form for composing and analyzing news.

mod command;
mod session;

pub use command::SessionCommand;
pub use session::InteractiveSession;
