//! Wire payload sent to the classification service

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict` (Value Object)
///
/// Serializes to exactly `{"text": ..., "title": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// News body
    pub text: String,
    /// News title
    pub title: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_wire_shape() {
        let request = AnalysisRequest::new("body", "title");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"text": "body", "title": "title"}));
    }

    #[test]
    fn test_blank_strings_allowed_on_wire() {
        let request = AnalysisRequest::new("", " ");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"text":"","title":" "}"#);
    }
}
