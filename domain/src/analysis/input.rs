//! Analysis input value object

use super::request::AnalysisRequest;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// News title/body pair collected from the user (Value Object)
///
/// Both fields are optional. The input is only submittable when at least one
/// of them contains something other than whitespace. Values are kept exactly
/// as typed; trimming is only used to decide blankness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    title: Option<String>,
    body: Option<String>,
}

impl AnalysisInput {
    pub fn new(title: Option<String>, body: Option<String>) -> Self {
        Self { title, body }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    pub fn clear_title(&mut self) {
        self.title = None;
    }

    pub fn clear_body(&mut self) {
        self.body = None;
    }

    /// Append a line to the body, separating it from existing text with a newline.
    pub fn append_body_line(&mut self, line: &str) {
        match &mut self.body {
            Some(body) if !body.is_empty() => {
                body.push('\n');
                body.push_str(line);
            }
            _ => self.body = Some(line.to_string()),
        }
    }

    /// Forget both fields.
    pub fn reset(&mut self) {
        self.title = None;
        self.body = None;
    }

    /// True when neither title nor body has any non-whitespace content.
    pub fn is_blank(&self) -> bool {
        is_blank(self.title.as_deref()) && is_blank(self.body.as_deref())
    }

    /// Build the wire request, rejecting blank input.
    ///
    /// Absent fields become empty strings; present fields are forwarded untrimmed.
    pub fn to_request(&self) -> Result<AnalysisRequest, DomainError> {
        if self.is_blank() {
            return Err(DomainError::EmptyInput);
        }
        Ok(AnalysisRequest::new(
            self.body.clone().unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
        ))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
