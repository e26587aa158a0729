//! Draft Session Manager domain.
//!
//! Drafts track in-progress answer sets so an assessment can be resumed.
//! On re-entry the caller must explicitly resume or discard; drafts are
//! never silently resumed or dropped.

mod errors;
mod progress;
mod session;
mod status;

pub use errors::DraftError;
pub use progress::DraftProgress;
pub use session::DraftSession;
pub use status::DraftStatus;
