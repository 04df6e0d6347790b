// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Issue, IssueCard};
pub use requests::{Profile, ProfileDraft, ProfilePayload};
pub use responses::{ResultsEnvelope, GENERIC_PROCESSING_ERROR};
