//! SubmitAnswersHandler - Command handler for scoring a completed answer set.

use std::sync::Arc;

use crate::application::store::AssessmentStore;
use crate::domain::foundation::{DomainError, ErrorCode, TestType, Timestamp};
use crate::domain::instrument::InstrumentRegistry;
use crate::domain::profile::ProfileSynthesizer;
use crate::domain::scoring::{AnswerSet, ScoreEvaluator, ScoreResult};
use crate::ports::KeyValueStore;

/// Command to score a complete answer set and record it in the profile.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub test_type: TestType,
    pub answers: AnswerSet,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswersResult {
    pub result: ScoreResult,
    pub completed_at: Timestamp,
}

/// Handler for submitting answers.
pub struct SubmitAnswersHandler {
    registry: Arc<InstrumentRegistry>,
    store: AssessmentStore,
}

impl SubmitAnswersHandler {
    pub fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            registry,
            store: AssessmentStore::new(store),
        }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<SubmitAnswersResult, DomainError> {
        // 1. Resolve instrument
        let instrument = self.registry.require(&cmd.test_type)?;

        // 2. Score; invalid answers leave draft and profile untouched
        let result = ScoreEvaluator::evaluate(instrument, &cmd.answers).map_err(|e| {
            tracing::warn!(test_type = %cmd.test_type, error = %e, "submission rejected");
            e
        })?;

        // 3. Close the pending draft; an undecodable one is only removed
        let closed_draft = match self.store.load_draft(&cmd.test_type).await {
            Ok(Some(mut draft)) => {
                draft.mark_submitted()?;
                Some(draft)
            }
            Ok(None) => None,
            Err(err) if err.code == ErrorCode::SerializationError => None,
            Err(err) => return Err(err),
        };

        // 4. Merge into profile
        let completed_at = Timestamp::now();
        let profile = self.store.load_profile().await?;
        let profile = ProfileSynthesizer::record_completion_at(
            profile,
            cmd.test_type.clone(),
            result.clone(),
            completed_at,
        );
        self.store.save_profile(&profile).await?;

        // 5. Clear the draft only once the result is safely stored
        self.store.remove_draft(&cmd.test_type).await?;

        tracing::info!(
            test_type = %cmd.test_type,
            raw_score = result.raw_score(),
            percentage = %result.percentage(),
            level = result.level().label(),
            draft_closed = closed_draft.is_some(),
            "assessment submitted"
        );

        Ok(SubmitAnswersResult {
            result,
            completed_at,
        })
    }
}
