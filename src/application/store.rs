//! AssessmentStore - typed access to the documents of one user context.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::draft::DraftSession;
use crate::domain::foundation::{DomainError, TestType};
use crate::domain::profile::UserProfile;
use crate::ports::{draft_key, KeyValueStore, StorageError, PROFILE_KEY};

/// Decodes and encodes profile and draft documents over a [`KeyValueStore`].
#[derive(Clone)]
pub struct AssessmentStore {
    store: Arc<dyn KeyValueStore>,
}

impl AssessmentStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the profile, or an empty one if none has been saved yet.
    pub async fn load_profile(&self) -> Result<UserProfile, DomainError> {
        Ok(self.load(PROFILE_KEY).await?.unwrap_or_default())
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.save(PROFILE_KEY, profile).await
    }

    pub async fn load_draft(&self, test_type: &TestType) -> Result<Option<DraftSession>, DomainError> {
        self.load(&draft_key(test_type)).await
    }

    pub async fn save_draft(&self, draft: &DraftSession) -> Result<(), DomainError> {
        self.save(&draft_key(draft.test_type()), draft).await
    }

    pub async fn remove_draft(&self, test_type: &TestType) -> Result<(), DomainError> {
        self.store.remove(&draft_key(test_type)).await?;
        Ok(())
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(value) = self.store.get(key).await? else {
            return Ok(None);
        };
        let document = serde_json::from_value(value).map_err(|e| StorageError::DeserializationFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(document))
    }

    async fn save<T: Serialize>(&self, key: &str, document: &T) -> Result<(), DomainError> {
        let value = serde_json::to_value(document).map_err(|e| StorageError::SerializationFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use serde_json::json;

    #[tokio::test]
    async fn missing_profile_loads_as_empty() {
        let store = AssessmentStore::new(Arc::new(InMemoryStore::new()));
        let profile = store.load_profile().await.unwrap();
        assert_eq!(profile.completed_count(), 0);
    }

    #[tokio::test]
    async fn drafts_are_keyed_by_test_type() {
        let backing = Arc::new(InMemoryStore::new());
        let store = AssessmentStore::new(backing.clone());
        let test_type = TestType::new("rses").unwrap();
        let draft = DraftSession::reconstitute(test_type.clone(), vec![3, 2], Timestamp::now());

        store.save_draft(&draft).await.unwrap();
        assert_eq!(backing.keys().await, vec!["draft:rses".to_string()]);
        assert_eq!(store.load_draft(&test_type).await.unwrap(), Some(draft));

        store.remove_draft(&test_type).await.unwrap();
        assert_eq!(store.load_draft(&test_type).await.unwrap(), None);
    }

    #[tokio::test]
    async fn undecodable_document_is_a_serialization_error() {
        let backing = Arc::new(InMemoryStore::new());
        backing.set("profile", json!({"completed_tests": 7})).await.unwrap();
        let store = AssessmentStore::new(backing);

        let err = store.load_profile().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
