//! Fixed user-facing failure messages.

/// Shown when both title and body are blank.
pub const EMPTY_INPUT: &str = "Please enter news text or title to analyze.";

/// Shown when the classification service could not be reached or answered
/// with something that could not be understood.
pub const TRANSPORT_FAILURE: &str =
    "Unable to connect to the backend. Check service availability & endpoint configuration.";

/// Shown when a submission is attempted while another one is still in flight.
pub const ALREADY_IN_FLIGHT: &str = "An analysis is already in progress.";

/// Message for a non-success response that carried no usable error string.
pub fn server_error(status: u16) -> String {
    format!("Server Error ({})", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_embeds_status() {
        assert_eq!(server_error(500), "Server Error (500)");
        assert_eq!(server_error(404), "Server Error (404)");
    }
}
