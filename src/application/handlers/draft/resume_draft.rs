//! ResumeDraftHandler - Command handler for continuing a pending draft.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::draft::{DraftError, DraftProgress};
use crate::domain::foundation::{DomainError, TestType, Timestamp};
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::scoring::AnswerSet;
use crate::ports::KeyValueStore;

#[derive(Debug, Clone)]
pub struct ResumeDraftCommand {
    pub test_type: TestType,
}

/// Answers recorded so far and where to pick up.
#[derive(Debug, Clone)]
pub struct ResumeDraftResult {
    pub answers: AnswerSet,
    pub progress: DraftProgress,
    pub saved_at: Timestamp,
}

impl ResumeDraftResult {
    /// Zero-based position of the next unanswered item, if any.
    pub fn next_position(&self) -> Option<usize> {
        (!self.progress.is_complete()).then_some(self.progress.current)
    }
}

pub struct ResumeDraftHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl ResumeDraftHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    pub async fn handle(&self, cmd: ResumeDraftCommand) -> Result<ResumeDraftResult, DomainError> {
        let instrument = self.registry.require(&cmd.test_type)?;

        let draft = self
            .store
            .load_draft(&cmd.test_type)
            .await?
            .ok_or_else(|| DraftError::NotFound(cmd.test_type.clone()))?;
        draft.validate_against(instrument)?;

        let progress = draft.progress(instrument);
        tracing::info!(
            test_type = %cmd.test_type,
            current = progress.current,
            total = progress.total,
            "draft resumed"
        );

        Ok(ResumeDraftResult {
            answers: draft.answer_set(),
            progress,
            saved_at: *draft.saved_at(),
        })
    }
}
