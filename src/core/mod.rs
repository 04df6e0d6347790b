// Core flow exports
pub mod codec;
pub mod filters;
pub mod form;
pub mod state;

pub use codec::{encode, CodecError};
pub use filters::{filter_issues, matches_selection, toggle, distinct_labels, distinct_languages, FilterState};
pub use form::{FormError, ProfileForm, MIN_INTERESTS};
pub use state::{Phase, RenderState, RequestState, RequestTicket};
