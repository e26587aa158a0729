//! DiscardDraftHandler - Command handler for "start fresh".

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::foundation::{DomainError, ErrorCode, TestType};
use crate::domain::instrument::InstrumentRegistry;
use crate::ports::KeyValueStore;

#[derive(Debug, Clone)]
pub struct DiscardDraftCommand {
    pub test_type: TestType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscardDraftResult {
    /// False when there was no draft to discard.
    pub discarded: bool,
}

pub struct DiscardDraftHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl DiscardDraftHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    /// Deletes the pending draft. Discarding nothing is not an error.
    pub async fn handle(&self, cmd: DiscardDraftCommand) -> Result<DiscardDraftResult, DomainError> {
        self.registry.require(&cmd.test_type)?;

        let discarded = match self.store.load_draft(&cmd.test_type).await {
            Ok(Some(mut draft)) => {
                draft.discard()?;
                true
            }
            Ok(None) => false,
            // A draft that no longer decodes is still removed
            Err(err) if err.code == ErrorCode::SerializationError => {
                tracing::warn!(test_type = %cmd.test_type, error = %err, "removing undecodable draft");
                true
            }
            Err(err) => return Err(err),
        };

        self.store.remove_draft(&cmd.test_type).await?;
        if discarded {
            tracing::info!(test_type = %cmd.test_type, "draft discarded");
        }
        Ok(DiscardDraftResult { discarded })
    }
}
