//! Open Match - profile submission and issue discovery client
//!
//! Collects a contributor profile, submits it to the matching service and
//! presents ranked open-source issues. A second view browses and filters the
//! issue catalogue by label and language.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{filter_issues, FilterState, ProfileForm, RequestState, RenderState, Phase};
pub use crate::models::{Issue, IssueCard, Profile, ProfilePayload};
pub use crate::services::{CatalogueSource, ClientError, MatchingClient, SearchClient};
pub use crate::views::{MatchingView, SearchView, SubmitOutcome};
