use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::report::AssessmentReport;
use crate::scoring::{Category, Level};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;
const RECENT_LIMIT: usize = 10;

/// Which intake channel produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMethod {
    NativeForm,
    Webhook,
}

/// Persisted report. One per participant email; resubmissions replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Lower-cased participant email, the record key.
    pub email: String,
    pub report: AssessmentReport,
    pub raw_answers: Value,
    pub scoring_method: ScoringMethod,
    pub created_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn listing(&self) -> ReportListing {
        ReportListing {
            email: self.email.clone(),
            name: self.report.name.clone(),
            archetype: self.report.archetype,
            risk_level: self.report.risk_level,
            reward_level: self.report.reward_level,
            driver: self.report.driver.key.clone(),
            strategy: self.report.strategy.key.clone(),
            scoring_method: self.scoring_method,
            created_at: self.created_at,
        }
    }
}

/// Row shown in the admin report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportListing {
    pub email: String,
    pub name: String,
    pub archetype: Category,
    pub risk_level: Level,
    pub reward_level: Level,
    pub driver: String,
    pub strategy: String,
    pub scoring_method: ScoringMethod,
    pub created_at: DateTime<Utc>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReportRepository: Send + Sync {
    /// Insert or replace the record keyed by its normalized email.
    fn upsert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    fn fetch(&self, email: &str) -> Result<Option<ReportRecord>, RepositoryError>;
    fn list(&self, query: &ReportQuery) -> Result<ReportPage, RepositoryError>;
    fn stats(&self) -> Result<ReportStats, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Admin listing filters. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Case-insensitive substring of the email.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub archetype: Option<Category>,
    #[serde(default)]
    pub scoring_method: Option<ScoringMethod>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ReportQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn matches(&self, record: &ReportRecord) -> bool {
        let email_matches = self.email.as_deref().map_or(true, |needle| {
            record
                .email
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
        });
        let archetype_matches = self
            .archetype
            .map_or(true, |archetype| record.report.archetype == archetype);
        let method_matches = self
            .scoring_method
            .map_or(true, |method| record.scoring_method == method);
        email_matches && archetype_matches && method_matches
    }

    /// Filter, order newest first and cut one page out of `records`.
    ///
    /// Storage backends without native querying can delegate to this.
    pub fn apply<'a, I>(&self, records: I) -> ReportPage
    where
        I: IntoIterator<Item = &'a ReportRecord>,
    {
        let mut matching: Vec<&ReportRecord> =
            records.into_iter().filter(|record| self.matches(record)).collect();
        sort_newest_first(&mut matching);

        let page = self.page();
        let page_size = self.page_size();
        let total = matching.len();
        let reports = matching
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .map(ReportRecord::listing)
            .collect();

        ReportPage {
            reports,
            total,
            page,
            page_size,
            total_pages: total.div_ceil(page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPage {
    pub reports: Vec<ReportListing>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: usize,
    pub by_archetype: BTreeMap<Category, usize>,
    pub recent: Vec<ReportListing>,
}

impl ReportStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ReportRecord>,
    {
        let mut all: Vec<&ReportRecord> = records.into_iter().collect();
        sort_newest_first(&mut all);

        let mut by_archetype: BTreeMap<Category, usize> = BTreeMap::new();
        for record in &all {
            *by_archetype.entry(record.report.archetype).or_insert(0) += 1;
        }

        Self {
            total: all.len(),
            by_archetype,
            recent: all
                .iter()
                .take(RECENT_LIMIT)
                .map(|record| record.listing())
                .collect(),
        }
    }
}

fn sort_newest_first(records: &mut [&ReportRecord]) {
    records.sort_by(|left, right| {
        right
            .created_at
            .cmp(&left.created_at)
            .then_with(|| left.email.cmp(&right.email))
    });
}
