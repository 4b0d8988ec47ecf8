use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::content::ContentCatalog;
use crate::scoring::ScoringConfig;

/// Scoring configuration as persisted, with its edit counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScoringConfig {
    pub version: u32,
    pub updated_at: DateTime<Utc>,
    pub config: ScoringConfig,
}

/// Storage for the editable scoring configuration and report copy.
///
/// `save_scoring` must assign a version one higher than the previously
/// stored one (starting at 1).
pub trait ConfigRepository: Send + Sync {
    fn load_scoring(&self) -> Result<Option<StoredScoringConfig>, StoreError>;
    fn save_scoring(&self, config: ScoringConfig) -> Result<StoredScoringConfig, StoreError>;
    fn load_content(&self) -> Result<Option<ContentCatalog>, StoreError>;
    fn save_content(&self, catalog: ContentCatalog) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} configuration not found")]
    NotFound(&'static str),
    #[error("configuration store unavailable: {0}")]
    Unavailable(String),
}

struct Cached<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

impl<T> Cached<T> {
    fn fresh(&self, ttl: Duration) -> Option<Arc<T>> {
        (self.loaded_at.elapsed() < ttl).then(|| Arc::clone(&self.value))
    }
}

/// Read-through cache in front of a [`ConfigRepository`].
///
/// Snapshots are served for `ttl` after loading. Any save through this store
/// drops both snapshots so the next read sees the edit.
pub struct CachedConfigStore<R> {
    repository: Arc<R>,
    ttl: Duration,
    scoring: Mutex<Option<Cached<StoredScoringConfig>>>,
    content: Mutex<Option<Cached<ContentCatalog>>>,
}

impl<R> CachedConfigStore<R>
where
    R: ConfigRepository,
{
    pub fn new(repository: Arc<R>, ttl: Duration) -> Self {
        Self {
            repository,
            ttl,
            scoring: Mutex::new(None),
            content: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn scoring(&self) -> Result<Arc<StoredScoringConfig>, StoreError> {
        let mut slot = self.scoring.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = slot.as_ref().and_then(|cached| cached.fresh(self.ttl)) {
            return Ok(value);
        }

        let stored = self
            .repository
            .load_scoring()?
            .ok_or(StoreError::NotFound("scoring"))?;
        debug!(version = stored.version, "scoring configuration loaded");
        let value = Arc::new(stored);
        *slot = Some(Cached {
            value: Arc::clone(&value),
            loaded_at: Instant::now(),
        });
        Ok(value)
    }

    pub fn content(&self) -> Result<Arc<ContentCatalog>, StoreError> {
        let mut slot = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = slot.as_ref().and_then(|cached| cached.fresh(self.ttl)) {
            return Ok(value);
        }

        let catalog = self
            .repository
            .load_content()?
            .ok_or(StoreError::NotFound("content"))?;
        let value = Arc::new(catalog);
        *slot = Some(Cached {
            value: Arc::clone(&value),
            loaded_at: Instant::now(),
        });
        Ok(value)
    }

    pub fn save_scoring(&self, config: ScoringConfig) -> Result<StoredScoringConfig, StoreError> {
        let stored = self.repository.save_scoring(config)?;
        self.invalidate();
        Ok(stored)
    }

    pub fn save_content(&self, catalog: ContentCatalog) -> Result<(), StoreError> {
        self.repository.save_content(catalog)?;
        self.invalidate();
        Ok(())
    }

    pub fn invalidate(&self) {
        *self.scoring.lock().unwrap_or_else(PoisonError::into_inner) = None;
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
