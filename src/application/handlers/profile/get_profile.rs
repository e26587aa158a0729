//! GetProfileHandler - Query handler for the user profile.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::KeyValueStore;

pub struct GetProfileHandler {
    store: AssessmentStore,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store: AssessmentStore::new(store),
        }
    }

    /// Returns the stored profile, or an empty one before the first completion.
    pub async fn handle(&self) -> Result<UserProfile, DomainError> {
        self.store.load_profile().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{clarity, memory_store};
    use crate::domain::foundation::ScorePercentage;
    use crate::domain::profile::ProfileSynthesizer;
    use crate::domain::scoring::{Classification, ScoreResult};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn empty_profile_before_any_completion() {
        let handler = GetProfileHandler::new(memory_store());
        let profile = handler.handle().await.unwrap();
        assert_eq!(profile.completed_count(), 0);
    }

    #[tokio::test]
    async fn returns_saved_profile() {
        let store = memory_store();
        let result = ScoreResult::new(
            48,
            ScorePercentage::HUNDRED,
            Classification::Level {
                tag: "very_high".to_string(),
                label: "Very high".to_string(),
            },
            BTreeMap::new(),
        );
        let profile = ProfileSynthesizer::record_completion(UserProfile::new(), clarity(), result);
        AssessmentStore::new(store.clone()).save_profile(&profile).await.unwrap();

        let handler = GetProfileHandler::new(store);
        assert_eq!(handler.handle().await.unwrap(), profile);
    }
}
