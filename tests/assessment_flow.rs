//! Integration tests for the assessment lifecycle.
//!
//! These tests drive the application handlers end to end:
//! 1. Entering an instrument reports whether a draft is pending
//! 2. Answers are recorded into a resumable draft
//! 3. Submission scores the answers, updates the profile and clears the draft
//! 4. Profile queries report completeness and coverage
//!
//! Uses the built-in catalog over in-memory and file-backed stores.

use std::sync::Arc;
use tempfile::TempDir;

use psyche_profile::adapters::{FileStore, InMemoryStore};
use psyche_profile::application::{
    BeginAssessmentHandler, BeginAssessmentQuery, BeginAssessmentResult, DiscardDraftCommand,
    DiscardDraftHandler, GetCompletenessHandler, GetCoverageHandler, GetDraftHandler,
    GetDraftQuery, GetProfileHandler, RecordAnswerCommand, RecordAnswerHandler,
    ResumeDraftCommand, ResumeDraftHandler, StartDraftCommand, StartDraftHandler,
    SubmitAnswersCommand, SubmitAnswersHandler,
};
use psyche_profile::domain::foundation::{ErrorCode, Percentage, ScorePercentage, TestType};
use psyche_profile::domain::instrument::{catalog, InstrumentDefinition, InstrumentRegistry, Quadrant};
use psyche_profile::domain::scoring::AnswerSet;
use psyche_profile::ports::KeyValueStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Every handler, wired to one user context
struct Engine {
    begin: BeginAssessmentHandler,
    start: StartDraftHandler,
    record: RecordAnswerHandler,
    get_draft: GetDraftHandler,
    resume: ResumeDraftHandler,
    discard: DiscardDraftHandler,
    submit: SubmitAnswersHandler,
    profile: GetProfileHandler,
    completeness: GetCompletenessHandler,
    coverage: GetCoverageHandler,
}

impl Engine {
    fn new(registry: Arc<InstrumentRegistry>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            begin: BeginAssessmentHandler::new(registry.clone(), store.clone()),
            start: StartDraftHandler::new(registry.clone(), store.clone()),
            record: RecordAnswerHandler::new(registry.clone(), store.clone()),
            get_draft: GetDraftHandler::new(registry.clone(), store.clone()),
            resume: ResumeDraftHandler::new(registry.clone(), store.clone()),
            discard: DiscardDraftHandler::new(registry.clone(), store.clone()),
            submit: SubmitAnswersHandler::new(registry.clone(), store.clone()),
            profile: GetProfileHandler::new(store.clone()),
            completeness: GetCompletenessHandler::new(registry.clone(), store.clone()),
            coverage: GetCoverageHandler::new(registry, store),
        }
    }

    fn in_memory() -> Self {
        Self::new(builtin(), Arc::new(InMemoryStore::new()))
    }

    /// Answer every item through the draft workflow
    async fn answer_all(&self, test_type: &TestType, answers: &[i32]) {
        self.start
            .handle(StartDraftCommand {
                test_type: test_type.clone(),
                first_answer: answers[0],
            })
            .await
            .unwrap();
        for (position, value) in answers.iter().enumerate().skip(1) {
            self.record
                .handle(RecordAnswerCommand {
                    test_type: test_type.clone(),
                    position,
                    value: *value,
                })
                .await
                .unwrap();
        }
    }
}

fn builtin() -> Arc<InstrumentRegistry> {
    Arc::new(InstrumentRegistry::builtin().unwrap())
}

fn tt(id: &str) -> TestType {
    TestType::new(id).unwrap()
}

/// Responses that code every item to the bottom (or top) of the scale
fn extreme_answers(instrument: &InstrumentDefinition, high: bool) -> Vec<i32> {
    let scale = instrument.scale();
    instrument
        .items()
        .iter()
        .map(|item| if item.reverse == high { scale.min } else { scale.max })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn draft_to_profile_round_trip() {
    let engine = Engine::in_memory();
    let phq9 = tt(catalog::DEPRESSION_PHQ9);

    let entered = engine.begin.handle(BeginAssessmentQuery { test_type: phq9.clone() }).await.unwrap();
    assert_eq!(entered, BeginAssessmentResult::Ready { total: 9 });

    // Raw 5 is the first "mild" score
    engine.answer_all(&phq9, &[1, 1, 1, 1, 1, 0, 0, 0, 0]).await;

    let resumed = engine.resume.handle(ResumeDraftCommand { test_type: phq9.clone() }).await.unwrap();
    assert!(resumed.progress.is_complete());

    let submitted = engine
        .submit
        .handle(SubmitAnswersCommand {
            test_type: phq9.clone(),
            answers: resumed.answers,
        })
        .await
        .unwrap();

    assert_eq!(submitted.result.raw_score(), 5);
    assert_eq!(submitted.result.percentage().tenths(), 185);
    assert_eq!(submitted.result.level().level_tag(), Some("mild"));

    let draft = engine.get_draft.handle(GetDraftQuery { test_type: phq9.clone() }).await.unwrap();
    assert!(draft.is_none());

    let profile = engine.profile.handle().await.unwrap();
    assert_eq!(profile.result_for(&phq9).unwrap().result, submitted.result);
    assert_eq!(engine.completeness.handle().await.unwrap().value(), 14);
}

#[tokio::test]
async fn re_entry_requires_explicit_resume_or_discard() {
    let engine = Engine::in_memory();
    let rses = tt(catalog::ROSENBERG_SELF_ESTEEM);

    engine.answer_all(&rses, &[3, 2, 4]).await;

    let entered = engine.begin.handle(BeginAssessmentQuery { test_type: rses.clone() }).await.unwrap();
    let BeginAssessmentResult::DraftPending { progress, .. } = entered else {
        panic!("expected a pending draft");
    };
    assert_eq!((progress.current, progress.total), (3, 10));
    assert_eq!(progress.percentage, Percentage::new(30));

    // Starting over without discarding conflicts
    let err = engine
        .start
        .handle(StartDraftCommand {
            test_type: rses.clone(),
            first_answer: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DraftConflict);

    let discarded = engine.discard.handle(DiscardDraftCommand { test_type: rses.clone() }).await.unwrap();
    assert!(discarded.discarded);

    let entered = engine.begin.handle(BeginAssessmentQuery { test_type: rses.clone() }).await.unwrap();
    assert_eq!(entered, BeginAssessmentResult::Ready { total: 10 });
    assert_eq!(engine.profile.handle().await.unwrap().completed_count(), 0);
}

#[tokio::test]
async fn incomplete_submission_changes_nothing() {
    let engine = Engine::in_memory();
    let sccs = tt(catalog::SELF_CONCEPT_CLARITY);

    engine.answer_all(&sccs, &[3; 11]).await;

    let err = engine
        .submit
        .handle(SubmitAnswersCommand {
            test_type: sccs.clone(),
            answers: AnswerSet::new(vec![3; 11]),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let draft = engine.get_draft.handle(GetDraftQuery { test_type: sccs }).await.unwrap().unwrap();
    assert_eq!(draft.answers().len(), 11);
    assert_eq!(engine.profile.handle().await.unwrap().completed_count(), 0);
}

#[tokio::test]
async fn quadrant_instrument_classifies_by_axes() {
    let engine = Engine::in_memory();
    let industriousness = tt(catalog::INDUSTRIOUSNESS);

    // Drive items 1-4 max out (item 3 is reversed), discipline items 5-8 bottom out (item 7 is reversed)
    let submitted = engine
        .submit
        .handle(SubmitAnswersCommand {
            test_type: industriousness,
            answers: AnswerSet::new(vec![5, 5, 1, 5, 1, 1, 5, 1]),
        })
        .await
        .unwrap();

    let result = submitted.result;
    assert_eq!(result.level().quadrant(), Some(Quadrant::Q2));
    assert_eq!(result.level().label(), "Sprinter");
    assert_eq!(result.dimension("drive").unwrap().percentage, ScorePercentage::HUNDRED);
    assert_eq!(result.dimension("discipline").unwrap().percentage, ScorePercentage::ZERO);
}

#[tokio::test]
async fn every_builtin_instrument_reaches_both_extremes() {
    let registry = builtin();
    let engine = Engine::new(registry.clone(), Arc::new(InMemoryStore::new()));

    for instrument in registry.iter() {
        for (high, expected) in [(false, ScorePercentage::ZERO), (true, ScorePercentage::HUNDRED)] {
            let submitted = engine
                .submit
                .handle(SubmitAnswersCommand {
                    test_type: instrument.id().clone(),
                    answers: AnswerSet::new(extreme_answers(instrument, high)),
                })
                .await
                .unwrap();
            assert_eq!(submitted.result.percentage(), expected, "{}", instrument.id());
        }
    }

    let coverage = engine.coverage.handle().await.unwrap();
    assert_eq!(coverage.completed.len(), registry.len());
    assert!(coverage.pending.is_empty());
    assert_eq!(coverage.completeness, Percentage::HUNDRED);
}

#[tokio::test]
async fn file_store_keeps_drafts_and_profile_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let swls = tt(catalog::LIFE_SATISFACTION_SWLS);
    let k10 = tt(catalog::DISTRESS_K10);

    {
        let engine = Engine::new(builtin(), Arc::new(FileStore::new(temp_dir.path())));
        engine.answer_all(&swls, &[6, 6]).await;
        engine
            .submit
            .handle(SubmitAnswersCommand {
                test_type: k10.clone(),
                answers: AnswerSet::new(vec![1; 10]),
            })
            .await
            .unwrap();
    }

    let engine = Engine::new(builtin(), Arc::new(FileStore::new(temp_dir.path())));

    let resumed = engine.resume.handle(ResumeDraftCommand { test_type: swls }).await.unwrap();
    assert_eq!(resumed.answers.values(), &[6, 6]);
    assert_eq!(resumed.progress.percentage, Percentage::new(40));

    let profile = engine.profile.handle().await.unwrap();
    let k10_result = &profile.result_for(&k10).unwrap().result;
    assert_eq!(k10_result.raw_score(), 10);
    assert_eq!(k10_result.percentage(), ScorePercentage::ZERO);

    let coverage = engine.coverage.handle().await.unwrap();
    assert_eq!(coverage.completed, vec![k10]);
}
