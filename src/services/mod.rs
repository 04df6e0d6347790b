// Service exports
pub mod envelope;
pub mod matching;
pub mod search;

pub use envelope::{normalize_results, read_results, ClientError};
pub use matching::MatchingClient;
pub use search::{CatalogueSource, SearchClient, SourceError};
