//! Profile Synthesizer - the only mutation path into a [`UserProfile`].

use serde::{Deserialize, Serialize};

use super::{TestResult, UserProfile};
use crate::domain::foundation::{Percentage, TestType, Timestamp};
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::scoring::ScoreResult;

/// Which catalog instruments are done and which remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCoverage {
    pub completed: Vec<TestType>,
    pub pending: Vec<TestType>,
    pub completeness: Percentage,
    pub last_completed_at: Option<Timestamp>,
}

pub struct ProfileSynthesizer;

impl ProfileSynthesizer {
    /// Records a completion at the current time.
    pub fn record_completion(
        profile: UserProfile,
        test_type: TestType,
        result: ScoreResult,
    ) -> UserProfile {
        Self::record_completion_at(profile, test_type, result, Timestamp::now())
    }

    /// Records a completion, replacing any earlier result for `test_type`.
    pub fn record_completion_at(
        mut profile: UserProfile,
        test_type: TestType,
        result: ScoreResult,
        completed_at: Timestamp,
    ) -> UserProfile {
        profile.insert(
            test_type,
            TestResult {
                result,
                completed_at,
            },
        );
        profile
    }

    /// Distinct completed registry instruments over registry size, rounded.
    ///
    /// Results for instruments no longer in the registry do not count. Zero
    /// for an empty catalog, never above 100.
    pub fn completeness(profile: &UserProfile, registry: &InstrumentRegistry) -> Percentage {
        let completed = registry.ids().filter(|id| profile.has_completed(id)).count();
        Percentage::from_ratio(completed, registry.len())
    }

    /// Coverage against the instruments of `registry`.
    ///
    /// Results for instruments no longer in the registry are ignored.
    pub fn coverage(profile: &UserProfile, registry: &InstrumentRegistry) -> ProfileCoverage {
        let (completed, pending): (Vec<TestType>, Vec<TestType>) = registry
            .ids()
            .cloned()
            .partition(|id| profile.has_completed(id));

        let last_completed_at = completed
            .iter()
            .filter_map(|id| profile.result_for(id))
            .map(|entry| entry.completed_at)
            .max();

        ProfileCoverage {
            completeness: Self::completeness(profile, registry),
            completed,
            pending,
            last_completed_at,
        }
    }
}
