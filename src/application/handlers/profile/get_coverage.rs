//! GetCoverageHandler - Query handler for completed vs pending instruments.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::foundation::DomainError;
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::profile::{ProfileCoverage, ProfileSynthesizer};
use crate::ports::KeyValueStore;

pub struct GetCoverageHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl GetCoverageHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    pub async fn handle(&self) -> Result<ProfileCoverage, DomainError> {
        let profile = self.store.load_profile().await?;
        Ok(ProfileSynthesizer::coverage(&profile, &self.registry))
    }
}
