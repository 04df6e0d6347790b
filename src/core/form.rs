use crate::models::requests::Profile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

/// Interests required before the form may be submitted
pub const MIN_INTERESTS: usize = 3;

/// Reasons a submit attempt does not produce a profile
#[derive(Debug, Error)]
pub enum FormError {
    #[error("At least {required} interests are required to run the algorithm (have {current})")]
    SubmitDisabled { current: usize, required: usize },

    #[error("Invalid profile: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Editable profile state behind the submission form
///
/// Edits apply immediately. The form never talks to the network; `submit`
/// only hands back a validated `Profile` and leaves the state intact so the
/// user can correct and retry.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    first_name: String,
    last_name: String,
    email: String,
    url_slots: Vec<String>,
    resume: Option<PathBuf>,
    interests: Vec<String>,
    interest_input: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            url_slots: vec![String::new()],
            resume: None,
            interests: Vec::new(),
            interest_input: String::new(),
        }
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// URL input slots, including empty placeholders
    pub fn url_slots(&self) -> &[String] {
        &self.url_slots
    }

    /// Set the URL in slot `index`; returns false for an out-of-range slot
    pub fn set_url(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.url_slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_url_field(&mut self) {
        self.url_slots.push(String::new());
    }

    /// Remove a URL slot. The last remaining slot is never removed.
    pub fn remove_url_field(&mut self, index: usize) -> bool {
        if self.url_slots.len() <= 1 || index >= self.url_slots.len() {
            return false;
        }
        self.url_slots.remove(index);
        true
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn interest_input(&self) -> &str {
        &self.interest_input
    }

    pub fn set_interest_input(&mut self, value: impl Into<String>) {
        self.interest_input = value.into();
    }

    /// Add a trimmed interest; empty or duplicate tokens are ignored
    ///
    /// On success the interest input buffer is cleared.
    pub fn add_interest(&mut self, text: &str) -> bool {
        let interest = text.trim();
        if interest.is_empty() || self.interests.iter().any(|i| i == interest) {
            return false;
        }
        self.interests.push(interest.to_string());
        self.interest_input.clear();
        true
    }

    /// Add whatever is currently in the interest input buffer
    pub fn commit_interest_input(&mut self) -> bool {
        let text = self.interest_input.clone();
        self.add_interest(&text)
    }

    pub fn remove_interest(&mut self, text: &str) -> bool {
        let before = self.interests.len();
        self.interests.retain(|i| i != text);
        self.interests.len() != before
    }

    pub fn resume(&self) -> Option<&Path> {
        self.resume.as_deref()
    }

    /// Select the resume file, replacing any earlier selection
    pub fn select_resume(&mut self, path: impl Into<PathBuf>) {
        self.resume = Some(path.into());
    }

    pub fn clear_resume(&mut self) {
        self.resume = None;
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self) -> bool {
        self.interests.len() >= MIN_INTERESTS
    }

    /// Non-blank URLs, trimmed, in slot order
    pub fn submitted_urls(&self) -> Vec<String> {
        self.url_slots
            .iter()
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Produce the profile to submit
    pub fn submit(&self) -> Result<Profile, FormError> {
        if !self.can_submit() {
            return Err(FormError::SubmitDisabled {
                current: self.interests.len(),
                required: MIN_INTERESTS,
            });
        }

        let profile = Profile {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            urls: self.submitted_urls(),
            resume: self.resume.clone(),
            interests: self.interests.clone(),
        };

        profile.validate()?;

        Ok(profile)
    }

    /// Submit and hand the profile to `on_submit` when validation passes
    pub fn submit_with<R>(&self, on_submit: impl FnOnce(Profile) -> R) -> Result<R, FormError> {
        self.submit().map(on_submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set_first_name("Grace");
        form.set_last_name("Hopper");
        form.set_email("grace@example.com");
        for interest in ["cobol", "compilers", "navy"] {
            form.add_interest(interest);
        }
        form
    }

    #[test]
    fn test_starts_with_one_url_slot() {
        let form = ProfileForm::new();
        assert_eq!(form.url_slots(), &[String::new()]);
    }

    #[test]
    fn test_last_url_slot_is_kept() {
        let mut form = ProfileForm::new();
        assert!(!form.remove_url_field(0));

        form.add_url_field();
        form.set_url(1, "https://example.com");
        assert!(form.remove_url_field(0));
        assert_eq!(form.url_slots(), &["https://example.com".to_string()]);
        assert!(!form.remove_url_field(0));
    }

    #[test]
    fn test_add_interest_trims_and_dedupes() {
        let mut form = ProfileForm::new();
        form.set_interest_input("  rust ");
        assert!(form.commit_interest_input());
        assert_eq!(form.interest_input(), "");

        assert!(!form.add_interest("rust"));
        assert!(!form.add_interest("   "));
        assert!(form.add_interest("Rust"));
        assert_eq!(form.interests(), &["rust".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_rejected_interest_keeps_buffer() {
        let mut form = ProfileForm::new();
        form.add_interest("rust");
        form.set_interest_input("rust");
        assert!(!form.commit_interest_input());
        assert_eq!(form.interest_input(), "rust");
    }

    #[test]
    fn test_remove_interest() {
        let mut form = filled_form();
        assert!(form.remove_interest("navy"));
        assert!(!form.remove_interest("navy"));
        assert_eq!(form.interests().len(), 2);
    }

    #[test]
    fn test_submit_disabled_below_three_interests() {
        let mut form = filled_form();
        form.remove_interest("navy");

        assert!(!form.can_submit());
        assert!(matches!(
            form.submit(),
            Err(FormError::SubmitDisabled { current: 2, required: 3 })
        ));
    }

    #[test]
    fn test_submit_strips_blank_urls() {
        let mut form = filled_form();
        form.add_url_field();
        form.add_url_field();
        form.set_url(1, " https://github.com/grace ");
        form.set_url(2, "   ");

        let profile = form.submit().unwrap();
        assert_eq!(profile.urls, vec!["https://github.com/grace"]);
    }

    #[test]
    fn test_select_resume_replaces() {
        let mut form = filled_form();
        form.select_resume("/tmp/a.pdf");
        form.select_resume("/tmp/b.pdf");
        assert_eq!(form.resume(), Some(Path::new("/tmp/b.pdf")));

        form.clear_resume();
        assert!(form.resume().is_none());
    }

    #[test]
    fn test_submit_invalid_email() {
        let mut form = filled_form();
        form.set_email("grace");
        assert!(matches!(form.submit(), Err(FormError::Invalid(_))));
    }

    #[test]
    fn test_submit_with_callback() {
        let form = filled_form();
        let name = form.submit_with(|p| p.first_name).unwrap();
        assert_eq!(name, "Grace");
    }
}
