//! Refresh coordination.
//!
//! Runs the pipeline, compares the newest record against the stored cursor
//! and persists the batch when it is newer. The whole check-update step runs
//! under one async lock, so two overlapping triggers (a webhook firing during
//! a forced refresh) cannot both decide to post.

use crate::database::state_repo;
use crate::services::workout;
use crate::types::errors::{PipelineResult, RefreshError};
use crate::types::SessionBatch;
use rusqlite::Connection;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Bytes handed over by the storage collaborator.
#[derive(Debug, Clone)]
pub enum RefreshSource {
    /// The encrypted backup archive.
    ArchiveBytes(Vec<u8>),
    /// The bare database, when storage exposes it directly.
    DatabaseBytes(Vec<u8>),
}

impl RefreshSource {
    fn process(&self) -> PipelineResult<SessionBatch> {
        match self {
            RefreshSource::ArchiveBytes(bytes) => workout::process_archive(bytes),
            RefreshSource::DatabaseBytes(bytes) => workout::process_database(bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum RefreshOutcome {
    /// The batch is newer than the cursor (or the refresh was forced) and has
    /// been stored. The caller should render and post it.
    #[serde(rename_all = "camelCase")]
    Updated { batch: SessionBatch, latest: i64 },
    /// Nothing newer than what was already posted.
    #[serde(rename_all = "camelCase")]
    Unchanged { latest: i64, cursor: i64 },
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated { .. })
    }
}

/// Owns the state store; acquired for the full duration of each refresh.
pub struct RefreshCoordinator {
    state: Arc<Mutex<Connection>>,
}

impl RefreshCoordinator {
    pub fn new(state: Connection) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub async fn refresh(
        &self,
        source: RefreshSource,
        force: bool,
    ) -> Result<RefreshOutcome, RefreshError> {
        let mut state = self.state.lock().await;

        let batch = tokio::task::spawn_blocking(move || source.process())
            .await
            .map_err(|e| RefreshError::Worker(e.to_string()))??;

        let latest = batch
            .latest_timestamp()
            .map(|t| t.timestamp())
            .unwrap_or(0);
        let cursor = state_repo::last_updated(&state)?;

        if force || latest > cursor {
            state_repo::commit_refresh(&mut state, latest, &batch)?;
            log::info!(
                "Refresh accepted: latest={latest} cursor={cursor} force={force} groups={}",
                batch.groups.len()
            );
            Ok(RefreshOutcome::Updated { batch, latest })
        } else {
            log::info!("Refresh skipped: latest={latest} is not newer than cursor={cursor}");
            Ok(RefreshOutcome::Unchanged { latest, cursor })
        }
    }

    /// The last stored batch, for redisplay without re-fetching.
    pub async fn cached_batch(&self) -> Result<Option<SessionBatch>, RefreshError> {
        let state = self.state.lock().await;
        Ok(state_repo::load_batch(&state)?)
    }

    pub async fn last_updated(&self) -> Result<i64, RefreshError> {
        let state = self.state.lock().await;
        Ok(state_repo::last_updated(&state)?)
    }
}

#[cfg(test)]
#[path = "tests/refresh_tests.rs"]
mod tests;
