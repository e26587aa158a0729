//! UserProfile aggregate root and its value objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{TestType, Timestamp};
use crate::domain::scoring::ScoreResult;

/// A completed instrument: its score and when it was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub result: ScoreResult,
    pub completed_at: Timestamp,
}

/// Profile bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The long-lived record of every completed instrument for one user context.
///
/// # Invariants
///
/// - at most one `TestResult` per test type; a new completion replaces the old one
/// - `metadata.updated_at` is never before `metadata.created_at`
/// - only [`ProfileSynthesizer`](super::ProfileSynthesizer) mutates a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    completed_tests: BTreeMap<TestType, TestResult>,
    metadata: ProfileMetadata,
}

impl UserProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::created_at(Timestamp::now())
    }

    /// Creates an empty profile with an explicit creation time.
    pub fn created_at(timestamp: Timestamp) -> Self {
        Self {
            completed_tests: BTreeMap::new(),
            metadata: ProfileMetadata {
                created_at: timestamp,
                updated_at: timestamp,
            },
        }
    }

    pub fn completed_tests(&self) -> &BTreeMap<TestType, TestResult> {
        &self.completed_tests
    }

    pub fn result_for(&self, test_type: &TestType) -> Option<&TestResult> {
        self.completed_tests.get(test_type)
    }

    pub fn has_completed(&self, test_type: &TestType) -> bool {
        self.completed_tests.contains_key(test_type)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_tests.len()
    }

    pub fn metadata(&self) -> &ProfileMetadata {
        &self.metadata
    }

    pub(super) fn insert(&mut self, test_type: TestType, entry: TestResult) {
        if self.metadata.updated_at.is_before(&entry.completed_at) {
            self.metadata.updated_at = entry.completed_at;
        }
        self.completed_tests.insert(test_type, entry);
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_is_empty() {
        let profile = UserProfile::new();
        assert_eq!(profile.completed_count(), 0);
        assert_eq!(profile.metadata().created_at, profile.metadata().updated_at);
    }

    #[test]
    fn serializes_completed_tests_keyed_by_test_type() {
        let profile = UserProfile::new();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["completed_tests"].as_object().unwrap().is_empty());
        assert!(json["metadata"].get("updated_at").is_some());

        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
