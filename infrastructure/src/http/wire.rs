//! Response bodies of the `/predict` endpoint

use serde::Deserialize;

/// 2xx body: `{"isFake": bool, "confidence": number}`
#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    #[serde(rename = "isFake")]
    pub is_fake: bool,
    pub confidence: f64,
}

/// Non-2xx body: `{"error": string}`, every field optional
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort decode; anything unparseable yields no message.
    pub fn message_from(bytes: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(bytes)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_response_accepts_integer_confidence() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"isFake": true, "confidence": 87}"#).unwrap();
        assert!(parsed.is_fake);
        assert_eq!(parsed.confidence, 87.0);
    }

    #[test]
    fn test_predict_response_ignores_extra_fields() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"isFake": false, "confidence": 12.5, "model": "v2"}"#)
                .unwrap();
        assert!(!parsed.is_fake);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            ErrorBody::message_from(br#"{"error": "model unavailable"}"#),
            Some("model unavailable".to_string())
        );
        assert_eq!(ErrorBody::message_from(br#"{"detail": "x"}"#), None);
        assert_eq!(ErrorBody::message_from(br#"{"error": ""}"#), None);
        assert_eq!(ErrorBody::message_from(br#"{"error": 42}"#), None);
        assert_eq!(ErrorBody::message_from(b"<html>Bad Gateway</html>"), None);
        assert_eq!(ErrorBody::message_from(b""), None);
    }
}
