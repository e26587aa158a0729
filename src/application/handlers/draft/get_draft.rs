//! GetDraftHandler - Query handler for the pending draft of an instrument.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::draft::DraftSession;
use crate::domain::foundation::{DomainError, TestType};
use crate::domain::instrument::InstrumentRegistry;
use crate::ports::KeyValueStore;

#[derive(Debug, Clone)]
pub struct GetDraftQuery {
    pub test_type: TestType,
}

pub struct GetDraftHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl GetDraftHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    /// Returns the draft, or `None` if there is nothing pending.
    pub async fn handle(&self, query: GetDraftQuery) -> Result<Option<DraftSession>, DomainError> {
        self.registry.require(&query.test_type)?;
        self.store.load_draft(&query.test_type).await
    }
}
