use crate::models::Issue;
use std::collections::HashSet;

/// Check if an issue carries every selected label and every selected language
///
/// An empty selection on either dimension matches everything.
#[inline]
pub fn matches_selection(
    issue: &Issue,
    selected_labels: &HashSet<String>,
    selected_languages: &HashSet<String>,
) -> bool {
    let labels_ok = selected_labels.iter().all(|label| issue.has_label(label));
    let languages_ok = selected_languages.iter().all(|lang| issue.has_language(lang));

    labels_ok && languages_ok
}

/// Filter the catalogue by label and language selections, preserving order
pub fn filter_issues(
    issues: &[Issue],
    selected_labels: &HashSet<String>,
    selected_languages: &HashSet<String>,
) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| matches_selection(issue, selected_labels, selected_languages))
        .cloned()
        .collect()
}

/// Add `value` if absent, remove it if present
pub fn toggle(selection: &mut HashSet<String>, value: &str) {
    if !selection.remove(value) {
        selection.insert(value.to_string());
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&String> = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Distinct labels across the catalogue, in first-appearance order
pub fn distinct_labels(issues: &[Issue]) -> Vec<String> {
    distinct(issues.iter().flat_map(|i| i.labels.iter()))
}

/// Distinct languages across the catalogue, in first-appearance order
pub fn distinct_languages(issues: &[Issue]) -> Vec<String> {
    distinct(issues.iter().flat_map(|i| i.languages.iter()))
}

/// Filter selections over a catalogue with derived results
///
/// `filtered` and the option lists are recomputed on every change to the
/// source list or a selection.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    issues: Vec<Issue>,
    selected_labels: HashSet<String>,
    selected_languages: HashSet<String>,
    filtered: Vec<Issue>,
    label_options: Vec<String>,
    language_options: Vec<String>,
}

impl FilterState {
    pub fn new(issues: Vec<Issue>) -> Self {
        let mut state = Self::default();
        state.set_issues(issues);
        state
    }

    /// Replace the source catalogue; selections are kept
    pub fn set_issues(&mut self, issues: Vec<Issue>) {
        self.issues = issues;
        self.label_options = distinct_labels(&self.issues);
        self.language_options = distinct_languages(&self.issues);
        self.recompute();
    }

    pub fn toggle_label(&mut self, label: &str) {
        toggle(&mut self.selected_labels, label);
        self.recompute();
    }

    pub fn toggle_language(&mut self, language: &str) {
        toggle(&mut self.selected_languages, language);
        self.recompute();
    }

    pub fn clear_selections(&mut self) {
        self.selected_labels.clear();
        self.selected_languages.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter_issues(&self.issues, &self.selected_labels, &self.selected_languages);
        tracing::trace!(
            "Filter recomputed: {} of {} issues (labels: {}, languages: {})",
            self.filtered.len(),
            self.issues.len(),
            self.selected_labels.len(),
            self.selected_languages.len()
        );
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filtered(&self) -> &[Issue] {
        &self.filtered
    }

    pub fn selected_labels(&self) -> &HashSet<String> {
        &self.selected_labels
    }

    pub fn selected_languages(&self) -> &HashSet<String> {
        &self.selected_languages
    }

    pub fn label_options(&self) -> &[String] {
        &self.label_options
    }

    pub fn language_options(&self) -> &[String] {
        &self.language_options
    }
}
