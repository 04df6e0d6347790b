use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;
use validator::{Validate, ValidateUrl, ValidationError};

/// Profile handed to the matching flow once the form allows submission
///
/// `urls` never contains blank entries; the form strips them on submit.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Profile {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(custom(function = "validate_urls"))]
    pub urls: Vec<String>,
    pub resume: Option<PathBuf>,
    #[validate(length(min = 3))]
    pub interests: Vec<String>,
}

#[allow(clippy::ptr_arg)]
fn validate_urls(urls: &Vec<String>) -> Result<(), ValidationError> {
    for url in urls {
        if !url.validate_url() {
            let mut err = ValidationError::new("url");
            err.message = Some(Cow::from(format!("'{}' is not a valid URL", url)));
            err.add_param(Cow::from("value"), url);
            return Err(err);
        }
    }
    Ok(())
}

/// Wire payload for the matching endpoint
///
/// Key order follows the endpoint's documented example; optional keys are
/// omitted entirely rather than sent empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePayload {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

impl ProfilePayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Profile as written in a TOML file for the command-line driver
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub resume: Option<PathBuf>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl ProfileDraft {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
