//! Draft command and query handlers.

mod discard_draft;
mod get_draft;
mod record_answer;
mod resume_draft;
mod start_draft;

pub use discard_draft::{DiscardDraftCommand, DiscardDraftHandler, DiscardDraftResult};
pub use get_draft::{GetDraftHandler, GetDraftQuery};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler};
pub use resume_draft::{ResumeDraftCommand, ResumeDraftHandler, ResumeDraftResult};
pub use start_draft::{StartDraftCommand, StartDraftHandler, StartDraftResult};
