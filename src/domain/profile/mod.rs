//! Profile Synthesizer domain.
//!
//! Merges completed instrument results into the per-user [`UserProfile`]
//! and derives completeness and coverage from it. Completeness is always
//! computed, never stored.

mod aggregate;
mod synthesizer;

pub use aggregate::{ProfileMetadata, TestResult, UserProfile};
pub use synthesizer::{ProfileCoverage, ProfileSynthesizer};
