//! The two parallel classification pipelines.
//!
//! URL and SMS classification share the same flow; a `PipelineKind` carries
//! everything that differs between them.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    Url,
    Sms,
}

impl PipelineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Url => "url",
            PipelineKind::Sms => "sms",
        }
    }

    /// JSON field carrying the input text on the wire.
    pub fn input_field(&self) -> &'static str {
        self.as_str()
    }

    /// Label for an exact-"1" classifier verdict.
    pub fn positive_label(&self) -> &'static str {
        match self {
            PipelineKind::Url => "Phishing",
            PipelineKind::Sms => "Spam",
        }
    }

    /// Label for every other classifier verdict.
    pub fn negative_label(&self) -> &'static str {
        match self {
            PipelineKind::Url => "Safe",
            PipelineKind::Sms => "Not Spam",
        }
    }

    /// User-visible message when the input field is missing or empty.
    pub fn missing_input_message(&self) -> &'static str {
        match self {
            PipelineKind::Url => "URL is required",
            PipelineKind::Sms => "SMS is required",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
