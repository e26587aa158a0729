//! GetCompletenessHandler - Query handler for cross-instrument completeness.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::foundation::{DomainError, Percentage};
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::profile::ProfileSynthesizer;
use crate::ports::KeyValueStore;

pub struct GetCompletenessHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl GetCompletenessHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    /// Completed catalog instruments over catalog size, as a whole percentage.
    pub async fn handle(&self) -> Result<Percentage, DomainError> {
        let profile = self.store.load_profile().await?;
        Ok(ProfileSynthesizer::completeness(&profile, &self.registry))
    }
}
