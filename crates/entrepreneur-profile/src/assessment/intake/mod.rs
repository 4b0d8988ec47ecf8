//! Adapters turning the two submission channels into an [`AnswerMap`].
//!
//! Both produce the same [`AdaptedSubmission`] so scoring and persistence do
//! not care where the answers came from.

mod native;
mod webhook;

pub use native::{
    adapt_native, flatten_answers, is_valid_email, NativeSubmission, FORM_ONLY_REFERENCES,
};
pub use webhook::{
    adapt_webhook, FormResponse, WebhookAnswer, WebhookChoice, WebhookField, WebhookVariable,
};

use crate::answers::AnswerMap;

use super::report::{Participant, ReportSelections};

/// Normalized submission ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedSubmission {
    pub participant: Participant,
    pub answers: AnswerMap,
    pub selections: ReportSelections,
    /// Answers as received, kept for audit.
    pub raw_answers: serde_json::Value,
}

/// Rejections raised before scoring. Scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("invalid webhook payload: missing form_response")]
    MissingFormResponse,
    #[error("invalid webhook payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
