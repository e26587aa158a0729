//! RecordAnswerHandler - Command handler for answering one more item.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::draft::{DraftError, DraftProgress};
use crate::domain::foundation::{DomainError, TestType};
use crate::domain::instrument::InstrumentRegistry;
use crate::ports::KeyValueStore;

/// Command to record (or change) the answer at a zero-based position.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub test_type: TestType,
    pub position: usize,
    pub value: i32,
}

pub struct RecordAnswerHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl RecordAnswerHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<DraftProgress, DomainError> {
        let instrument = self.registry.require(&cmd.test_type)?;

        let mut draft = self
            .store
            .load_draft(&cmd.test_type)
            .await?
            .ok_or_else(|| DraftError::NotFound(cmd.test_type.clone()))?;

        let progress = draft.record_answer(instrument, cmd.position, cmd.value)?;
        self.store.save_draft(&draft).await?;

        tracing::debug!(
            test_type = %cmd.test_type,
            position = cmd.position,
            current = progress.current,
            "answer recorded"
        );
        Ok(progress)
    }
}
