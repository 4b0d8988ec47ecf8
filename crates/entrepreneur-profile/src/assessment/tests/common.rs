use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::Utc;
use serde_json::{json, Value};

use crate::assessment::content::ContentCatalog;
use crate::assessment::intake::NativeSubmission;
use crate::assessment::repository::{
    ReportPage, ReportQuery, ReportRecord, ReportRepository, ReportStats, RepositoryError,
};
use crate::assessment::service::AssessmentService;
use crate::assessment::store::{
    CachedConfigStore, ConfigRepository, StoreError, StoredScoringConfig,
};
use crate::scoring::{Category, ScoringConfig};

pub(super) type MemoryService = AssessmentService<MemoryConfigs, MemoryReports>;

#[derive(Default)]
pub(super) struct MemoryConfigs {
    scoring: Mutex<Option<StoredScoringConfig>>,
    content: Mutex<Option<ContentCatalog>>,
}

impl MemoryConfigs {
    pub(super) fn seeded() -> Self {
        let configs = Self::default();
        configs
            .save_scoring(ScoringConfig::reference())
            .expect("seed scoring");
        configs
            .save_content(ContentCatalog::reference())
            .expect("seed content");
        configs
    }
}

impl ConfigRepository for MemoryConfigs {
    fn load_scoring(&self) -> Result<Option<StoredScoringConfig>, StoreError> {
        Ok(self.scoring.lock().expect("scoring mutex poisoned").clone())
    }

    fn save_scoring(&self, config: ScoringConfig) -> Result<StoredScoringConfig, StoreError> {
        let mut slot = self.scoring.lock().expect("scoring mutex poisoned");
        let version = slot.as_ref().map_or(1, |stored| stored.version + 1);
        let stored = StoredScoringConfig {
            version,
            updated_at: Utc::now(),
            config,
        };
        *slot = Some(stored.clone());
        Ok(stored)
    }

    fn load_content(&self) -> Result<Option<ContentCatalog>, StoreError> {
        Ok(self.content.lock().expect("content mutex poisoned").clone())
    }

    fn save_content(&self, catalog: ContentCatalog) -> Result<(), StoreError> {
        *self.content.lock().expect("content mutex poisoned") = Some(catalog);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryReports {
    pub(super) records: Arc<Mutex<HashMap<String, ReportRecord>>>,
}

impl ReportRepository for MemoryReports {
    fn upsert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, email: &str) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(email).cloned())
    }

    fn list(&self, query: &ReportQuery) -> Result<ReportPage, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(query.apply(guard.values()))
    }

    fn stats(&self) -> Result<ReportStats, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(ReportStats::from_records(guard.values()))
    }
}

pub(super) struct UnavailableReports;

impl ReportRepository for UnavailableReports {
    fn upsert(&self, _record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _email: &str) -> Result<Option<ReportRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _query: &ReportQuery) -> Result<ReportPage, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn stats(&self) -> Result<ReportStats, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service_with(
    configs: MemoryConfigs,
) -> (MemoryService, Arc<MemoryConfigs>, Arc<MemoryReports>) {
    let configs = Arc::new(configs);
    let reports = Arc::new(MemoryReports::default());
    let store = Arc::new(CachedConfigStore::new(
        configs.clone(),
        Duration::from_secs(300),
    ));
    let service = AssessmentService::new(store, reports.clone())
        .with_public_base_url("https://profile.example.com/");
    (service, configs, reports)
}

pub(super) fn build_service() -> (MemoryService, Arc<MemoryConfigs>, Arc<MemoryReports>) {
    build_service_with(MemoryConfigs::seeded())
}

/// Answers that vote `category` on every question of the reference battery
/// and pick the highest-scoring option on both additive axes.
pub(super) fn decisive_answers(category: Category) -> serde_json::Map<String, Value> {
    let config = ScoringConfig::reference();
    let mut answers = serde_json::Map::new();
    for question in config
        .risk_questions
        .iter()
        .chain(config.reward_questions.iter())
    {
        let (option, _) = question
            .point_map
            .iter()
            .max_by_key(|(_, points)| **points)
            .expect("question has options");
        answers.insert(question.reference.clone(), json!(option));
    }
    for question in &config.category_questions {
        let (letter, _) = question
            .option_to_category
            .iter()
            .find(|(_, name)| name.as_str() == category.name())
            .expect("category mapped on every question");
        answers.insert(question.reference.clone(), json!(letter));
    }
    answers
}

pub(super) fn submission(email: &str) -> NativeSubmission {
    let mut answers = decisive_answers(Category::Tiger);
    answers.insert("select_driver".to_string(), json!("Impact"));
    answers.insert("select_aoi1".to_string(), json!("Health"));
    answers.insert("rank_q".to_string(), json!(["Money", "Legacy"]));
    NativeSubmission {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        answers: answers.into_iter().collect(),
    }
}

pub(super) fn webhook_payload(email: &str) -> Value {
    json!({
        "event_id": "evt-1",
        "event_type": "form_response",
        "form_response": {
            "hidden": { "email": email },
            "variables": [
                { "key": "solve", "type": "number", "number": 1 },
                { "key": "contractor", "type": "number", "number": 1 }
            ],
            "answers": [
                { "type": "choice", "choice": { "label": "A" }, "field": { "ref": "risk_q1" } },
                { "type": "number", "number": 1, "field": { "ref": "risk_q8" } },
                { "type": "choice", "choice": { "label": "B" }, "field": { "ref": "type_q1" } },
                { "type": "choice", "choice": { "label": "A" }, "field": { "ref": "type_q2" } }
            ]
        }
    })
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
