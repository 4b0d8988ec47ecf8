use chrono::Utc;
use entrepreneur_profile::assessment::{
    AssessmentService, CachedConfigStore, ConfigRepository, ContentCatalog, ReportPage,
    ReportQuery, ReportRecord, ReportRepository, ReportStats, RepositoryError, StoreError,
    StoredScoringConfig,
};
use entrepreneur_profile::scoring::ScoringConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) type InMemoryAssessmentService =
    AssessmentService<InMemoryConfigRepository, InMemoryReportRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConfigRepository {
    scoring: Arc<Mutex<Option<StoredScoringConfig>>>,
    content: Arc<Mutex<Option<ContentCatalog>>>,
}

impl InMemoryConfigRepository {
    /// Repository holding the shipped scoring battery and report copy at version 1.
    pub(crate) fn seeded() -> Self {
        let repository = Self::default();
        *repository.scoring.lock().expect("config mutex poisoned") = Some(StoredScoringConfig {
            version: 1,
            updated_at: Utc::now(),
            config: ScoringConfig::reference(),
        });
        *repository.content.lock().expect("config mutex poisoned") =
            Some(ContentCatalog::reference());
        repository
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn load_scoring(&self) -> Result<Option<StoredScoringConfig>, StoreError> {
        let guard = self.scoring.lock().expect("config mutex poisoned");
        Ok(guard.clone())
    }

    fn save_scoring(&self, config: ScoringConfig) -> Result<StoredScoringConfig, StoreError> {
        let mut guard = self.scoring.lock().expect("config mutex poisoned");
        let version = guard.as_ref().map_or(1, |stored| stored.version + 1);
        let stored = StoredScoringConfig {
            version,
            updated_at: Utc::now(),
            config,
        };
        *guard = Some(stored.clone());
        Ok(stored)
    }

    fn load_content(&self) -> Result<Option<ContentCatalog>, StoreError> {
        let guard = self.content.lock().expect("config mutex poisoned");
        Ok(guard.clone())
    }

    fn save_content(&self, catalog: ContentCatalog) -> Result<(), StoreError> {
        let mut guard = self.content.lock().expect("config mutex poisoned");
        *guard = Some(catalog);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<String, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
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

/// Assessment service over seeded in-memory repositories.
pub(crate) fn in_memory_service(
    cache_ttl: Duration,
    public_base_url: &str,
) -> Arc<InMemoryAssessmentService> {
    let configs = Arc::new(CachedConfigStore::new(
        Arc::new(InMemoryConfigRepository::seeded()),
        cache_ttl,
    ));
    let reports = Arc::new(InMemoryReportRepository::default());
    Arc::new(AssessmentService::new(configs, reports).with_public_base_url(public_base_url))
}
