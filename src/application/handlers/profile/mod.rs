//! Profile query handlers.

mod get_completeness;
mod get_coverage;
mod get_profile;

pub use get_completeness::GetCompletenessHandler;
pub use get_coverage::GetCoverageHandler;
pub use get_profile::GetProfileHandler;
