use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::content::ContentCatalog;
use super::form::AssessmentForm;
use super::intake::{adapt_native, adapt_webhook, AdaptedSubmission, IntakeError, NativeSubmission};
use super::report::AssessmentReport;
use super::repository::{
    normalize_email, ReportPage, ReportQuery, ReportRecord, ReportRepository, ReportStats,
    RepositoryError, ScoringMethod,
};
use super::store::{CachedConfigStore, ConfigRepository, StoreError, StoredScoringConfig};
use crate::answers::AnswerMap;
use crate::scoring::{run_scoring_engine, ConfigIssue, ScoringConfig, ScoringResult};

/// Service composing the configuration store, scoring engine and report repository.
pub struct AssessmentService<C, R> {
    configs: Arc<CachedConfigStore<C>>,
    reports: Arc<R>,
    public_base_url: String,
}

/// Stored record plus the link the participant can open it with.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub record: ReportRecord,
    pub report_url: String,
}

impl<C, R> AssessmentService<C, R>
where
    C: ConfigRepository + 'static,
    R: ReportRepository + 'static,
{
    pub fn new(configs: Arc<CachedConfigStore<C>>, reports: Arc<R>) -> Self {
        Self {
            configs,
            reports,
            public_base_url: String::new(),
        }
    }

    /// Prefix report links with an absolute origin such as `https://profile.example.com`.
    pub fn with_public_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.public_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Link to the report endpoint this service mounts at `/api/v1/reports/:email`.
    pub fn report_url(&self, email: &str) -> String {
        format!(
            "{}/api/v1/reports/{}",
            self.public_base_url,
            urlencoding::encode(&normalize_email(email))
        )
    }

    /// Score a hosted-form submission and store its report.
    pub fn submit(
        &self,
        submission: &NativeSubmission,
    ) -> Result<SubmissionReceipt, AssessmentServiceError> {
        let adapted = adapt_native(submission)?;
        let record = self.score_and_store(adapted, ScoringMethod::NativeForm)?;
        let report_url = self.report_url(&record.email);
        Ok(SubmissionReceipt { record, report_url })
    }

    /// Score a webhook delivery and store its report.
    pub fn ingest_webhook(&self, payload: &Value) -> Result<ReportRecord, AssessmentServiceError> {
        let adapted = adapt_webhook(payload)?;
        if adapted.participant.email.is_empty() {
            return Err(IntakeError::MissingFields(vec!["email"]).into());
        }
        self.score_and_store(adapted, ScoringMethod::Webhook)
    }

    /// Score answers against the live configuration without storing anything.
    pub fn test_scoring(&self, answers: &AnswerMap) -> Result<ScoringResult, AssessmentServiceError> {
        let stored = self.configs.scoring()?;
        Ok(run_scoring_engine(answers, &stored.config))
    }

    /// Questions and selection options the hosted form renders, without scoring tables.
    pub fn assessment_form(&self) -> Result<AssessmentForm, AssessmentServiceError> {
        let stored = self.configs.scoring()?;
        Ok(AssessmentForm::from_scoring(&stored))
    }

    pub fn report(&self, email: &str) -> Result<ReportRecord, AssessmentServiceError> {
        let record = self
            .reports
            .fetch(&normalize_email(email))?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list_reports(&self, query: &ReportQuery) -> Result<ReportPage, AssessmentServiceError> {
        Ok(self.reports.list(query)?)
    }

    pub fn report_stats(&self) -> Result<ReportStats, AssessmentServiceError> {
        Ok(self.reports.stats()?)
    }

    pub fn scoring_config(&self) -> Result<StoredScoringConfig, AssessmentServiceError> {
        Ok(self.configs.scoring()?.as_ref().clone())
    }

    /// Validate and persist a new scoring configuration. Rejected configs are not saved.
    pub fn update_scoring_config(
        &self,
        config: ScoringConfig,
    ) -> Result<StoredScoringConfig, AssessmentServiceError> {
        let issues = config.validate();
        if !issues.is_empty() {
            warn!(issues = issues.len(), "scoring configuration rejected");
            return Err(AssessmentServiceError::InvalidConfig(issues));
        }

        let stored = self.configs.save_scoring(config)?;
        info!(version = stored.version, "scoring configuration saved");
        Ok(stored)
    }

    pub fn content(&self) -> Result<ContentCatalog, AssessmentServiceError> {
        Ok(self.configs.content()?.as_ref().clone())
    }

    pub fn update_content(
        &self,
        catalog: ContentCatalog,
    ) -> Result<ContentCatalog, AssessmentServiceError> {
        self.configs.save_content(catalog.clone())?;
        info!("report content saved");
        Ok(catalog)
    }

    fn score_and_store(
        &self,
        adapted: AdaptedSubmission,
        scoring_method: ScoringMethod,
    ) -> Result<ReportRecord, AssessmentServiceError> {
        let stored = self.configs.scoring()?;
        let catalog = match self.configs.content() {
            Ok(catalog) => catalog,
            Err(StoreError::NotFound(_)) => {
                warn!("report content missing, falling back to keys");
                Arc::new(ContentCatalog::default())
            }
            Err(err) => return Err(err.into()),
        };

        let result = run_scoring_engine(&adapted.answers, &stored.config);
        let now = Utc::now();
        let report = AssessmentReport::assemble(
            &adapted.participant,
            &result,
            &adapted.selections,
            &catalog,
            now.date_naive(),
        );

        let record = self.reports.upsert(ReportRecord {
            email: normalize_email(&adapted.participant.email),
            report,
            raw_answers: adapted.raw_answers,
            scoring_method,
            created_at: now,
        })?;

        info!(
            archetype = %result.category_type,
            risk_level = %result.risk_level,
            reward_level = %result.reward_level,
            config_version = stored.version,
            ?scoring_method,
            "assessment scored"
        );
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("scoring configuration rejected with {} issue(s)", .0.len())]
    InvalidConfig(Vec<ConfigIssue>),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
