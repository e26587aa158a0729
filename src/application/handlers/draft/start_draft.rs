//! StartDraftHandler - Command handler for recording the first answer.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::draft::{DraftError, DraftProgress, DraftSession};
use crate::domain::foundation::{DomainError, TestType};
use crate::domain::instrument::InstrumentRegistry;
use crate::ports::KeyValueStore;

/// Command to start a draft with its first answer.
#[derive(Debug, Clone)]
pub struct StartDraftCommand {
    pub test_type: TestType,
    pub first_answer: i32,
}

#[derive(Debug, Clone)]
pub struct StartDraftResult {
    pub draft: DraftSession,
    pub progress: DraftProgress,
}

pub struct StartDraftHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl StartDraftHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    /// # Errors
    ///
    /// - `DRAFT_CONFLICT` if a draft already exists; resume or discard it first
    /// - `INVALID_INPUT` if the answer is out of range
    pub async fn handle(&self, cmd: StartDraftCommand) -> Result<StartDraftResult, DomainError> {
        let instrument = self.registry.require(&cmd.test_type)?;

        if self.store.load_draft(&cmd.test_type).await?.is_some() {
            return Err(DraftError::Conflict(cmd.test_type).into());
        }

        let draft = DraftSession::start(instrument, cmd.first_answer)?;
        self.store.save_draft(&draft).await?;

        let progress = draft.progress(instrument);
        tracing::info!(test_type = %cmd.test_type, total = progress.total, "draft started");

        Ok(StartDraftResult { draft, progress })
    }
}
