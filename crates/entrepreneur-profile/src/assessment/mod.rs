//! Assessment intake, report assembly, storage contracts and HTTP surface.
//!
//! Answers arrive from the hosted form or a form-provider webhook, are scored
//! against the cached scoring configuration and stored as one report per
//! participant email.

pub mod content;
pub mod form;
pub mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use content::{ContentCatalog, ContentEntry, ContentSection};
pub use form::{AssessmentForm, FormOption, FormQuestion, FormSection, QuestionSource};
pub use intake::{AdaptedSubmission, IntakeError, NativeSubmission};
pub use report::{AssessmentReport, Participant, ReportSelections, ReportSummary};
pub use repository::{
    normalize_email, ReportListing, ReportPage, ReportQuery, ReportRecord, ReportRepository,
    ReportStats, RepositoryError, ScoringMethod,
};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError, SubmissionReceipt};
pub use store::{CachedConfigStore, ConfigRepository, StoreError, StoredScoringConfig};
