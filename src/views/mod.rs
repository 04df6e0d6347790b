// View exports
pub mod matches;
pub mod search;

pub use matches::{MatchingView, SubmitOutcome};
pub use search::SearchView;
