use serde::{Deserialize, Deserializer, Serialize};

/// Read a field whose value may be an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Issue recommendation returned by the matching endpoint
///
/// Elements are taken as received; missing fields fall back to empty values
/// instead of rejecting the whole result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueCard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "repoName", default, deserialize_with = "null_as_default")]
    pub repo_name: String,
    #[serde(rename = "issueNumber", default, deserialize_with = "null_as_default")]
    pub issue_number: String,
    #[serde(rename = "issueLink", default, deserialize_with = "null_as_default")]
    pub issue_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Match percentage, display only
    #[serde(rename = "match", default, deserialize_with = "null_as_default")]
    pub match_score: f64,
}

/// Catalogue entry returned by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_html_url: String,
    #[serde(default)]
    pub repo_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_stars: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_watchers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue_html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue_number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
}

impl Issue {
    /// Helper to get the repository description, empty when the repo has none
    pub fn description(&self) -> &str {
        self.repo_description.as_deref().unwrap_or("")
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}
