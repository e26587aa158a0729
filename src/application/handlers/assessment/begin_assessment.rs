//! BeginAssessmentHandler - Query handler for entering an instrument.
//!
//! Re-entry never silently resumes or discards a pending draft. The caller
//! gets the draft's progress and must choose between `ResumeDraft` and
//! `DiscardDraft`.

use serde::Serialize;
use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::draft::DraftProgress;
use crate::domain::foundation::{DomainError, TestType, Timestamp};
use crate::domain::instrument::InstrumentRegistry;
use crate::ports::KeyValueStore;

/// Query issued when the user opens an instrument.
#[derive(Debug, Clone)]
pub struct BeginAssessmentQuery {
    pub test_type: TestType,
}

/// What the caller must do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BeginAssessmentResult {
    /// No draft; start answering from the first item.
    Ready { total: usize },
    /// A draft is pending; resume or discard it.
    DraftPending {
        progress: DraftProgress,
        saved_at: Timestamp,
    },
}

pub struct BeginAssessmentHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl BeginAssessmentHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    pub async fn handle(&self, query: BeginAssessmentQuery) -> Result<BeginAssessmentResult, DomainError> {
        let instrument = self.registry.require(&query.test_type)?;

        match self.store.load_draft(&query.test_type).await? {
            None => Ok(BeginAssessmentResult::Ready {
                total: instrument.item_count(),
            }),
            Some(draft) => {
                draft.validate_against(instrument)?;
                let progress = draft.progress(instrument);
                tracing::debug!(
                    test_type = %query.test_type,
                    current = progress.current,
                    total = progress.total,
                    "pending draft found"
                );
                Ok(BeginAssessmentResult::DraftPending {
                    progress,
                    saved_at: *draft.saved_at(),
                })
            }
        }
    }
}
