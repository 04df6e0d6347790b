//! Command-line driver for the matching and search flows.

use crate::config::{CatalogueMode, Settings};
use crate::core::{RenderState, MIN_INTERESTS};
use crate::models::{Issue, IssueCard, ProfileDraft};
use crate::services::{CatalogueSource, MatchingClient, SearchClient};
use crate::views::{MatchingView, SearchView, SubmitOutcome};
use std::error::Error;
use std::path::Path;

/// Print command-line usage information.
pub fn print_usage() {
    println!("Usage:");
    println!("  open-match [COMMAND] [OPTIONS]\n");
    println!("Commands:");
    println!("  match PROFILE      Submit a profile (TOML) and show matched issues");
    println!("  search             Browse the issue catalogue");
    println!("  help               Show this help\n");
    println!("Search options:");
    println!("  --label LABEL      Only show issues carrying LABEL (repeatable, all must match)");
    println!("  --language LANG    Only show issues using LANG (repeatable, all must match)\n");
    println!("Examples:");
    println!("  open-match match profile.toml");
    println!("  open-match search --label \"good first issue\" --language Rust");
}

/// Main entry point for the command-line driver.
///
/// # Arguments
///
/// * `args` - Command-line arguments (including program name)
/// * `settings` - Loaded application settings
pub async fn run(args: Vec<String>, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    match command {
        "match" => {
            let Some(path) = args.get(2) else {
                println!("Error: PROFILE argument required\n");
                print_usage();
                return Ok(());
            };
            run_match(Path::new(path), settings).await
        }
        "search" => {
            let (labels, languages) = parse_filter_flags(&args[2..])?;
            run_search(&labels, &languages, settings).await
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            println!("Unknown command: {}\n", other);
            print_usage();
            Ok(())
        }
    }
}

/// Split `--label X` / `--language Y` pairs into two lists
pub fn parse_filter_flags(args: &[String]) -> Result<(Vec<String>, Vec<String>), Box<dyn Error>> {
    let mut labels = Vec::new();
    let mut languages = Vec::new();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let target = match flag.as_str() {
            "--label" => &mut labels,
            "--language" => &mut languages,
            other => return Err(format!("Unknown option: {}", other).into()),
        };
        let value = iter
            .next()
            .ok_or_else(|| format!("{} requires a value", flag))?;
        target.push(value.clone());
    }

    Ok((labels, languages))
}

/// Copy a profile draft into the form the way a user would type it in
pub fn fill_form(view: &mut MatchingView, draft: &ProfileDraft) {
    let form = view.form_mut();
    form.set_first_name(draft.first_name.as_str());
    form.set_last_name(draft.last_name.as_str());
    form.set_email(draft.email.as_str());

    for (index, url) in draft.urls.iter().enumerate() {
        if index > 0 {
            form.add_url_field();
        }
        form.set_url(index, url.as_str());
    }

    if let Some(resume) = &draft.resume {
        form.select_resume(resume.clone());
    }

    for interest in &draft.interests {
        form.add_interest(interest);
    }
}

async fn run_match(path: &Path, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let text = tokio::fs::read_to_string(path).await?;
    let draft = ProfileDraft::from_toml(&text)?;

    let client = MatchingClient::new(settings.endpoints.matching_url.as_str(), settings.http.timeout())?;
    let mut view = MatchingView::new();
    fill_form(&mut view, &draft);

    match view.submit(&client).await {
        SubmitOutcome::Disabled => {
            println!("At least {} interests are required to run the algorithm", MIN_INTERESTS);
            return Ok(());
        }
        SubmitOutcome::Invalid(errors) => {
            println!("Profile is not valid:\n{}", errors);
            return Ok(());
        }
        SubmitOutcome::Ignored | SubmitOutcome::Completed(_) => {}
    }

    match view.render() {
        RenderState::Success(cards) => print_cards(cards),
        RenderState::Error(message) => println!("Oops! Something went wrong: {}", message),
        RenderState::Loading | RenderState::Idle => {}
    }

    Ok(())
}

/// Build the catalogue source selected in the settings
pub async fn catalogue_source(settings: &Settings) -> Result<CatalogueSource, Box<dyn Error>> {
    match settings.catalogue.source {
        CatalogueMode::Live => {
            let client = SearchClient::new(settings.endpoints.search_url.as_str(), settings.http.timeout())?;
            Ok(CatalogueSource::Live(client))
        }
        CatalogueMode::Static => {
            let path = settings
                .catalogue
                .seed_path
                .as_deref()
                .ok_or("catalogue.seed_path is required for a static catalogue")?;
            Ok(CatalogueSource::from_seed_file(path).await?)
        }
    }
}

async fn run_search(
    labels: &[String],
    languages: &[String],
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    let source = catalogue_source(settings).await?;
    let mut view = SearchView::new();
    view.activate(&source).await;

    for label in labels {
        view.toggle_label(label);
    }
    for language in languages {
        view.toggle_language(language);
    }

    match view.render() {
        RenderState::Success(issues) => {
            println!("Labels: {}", view.filters().label_options().join(", "));
            println!("Languages: {}\n", view.filters().language_options().join(", "));
            print_issues(issues);
        }
        RenderState::Error(message) => println!("Oops! Something went wrong: {}", message),
        RenderState::Loading | RenderState::Idle => {}
    }

    Ok(())
}

fn print_cards(cards: &[IssueCard]) {
    if cards.is_empty() {
        println!("No matching issues found.");
        return;
    }

    for card in cards {
        println!("{} ({:.0}%)", card.title, card.match_score);
        println!("  Repository: {} | Issue #{}", card.repo_name, card.issue_number);
        println!("  {}", card.issue_link);
        if !card.description.is_empty() {
            println!("  {}", card.description);
        }
        if !card.tags.is_empty() {
            println!("  Tags: {}", card.tags.join(", "));
        }
        println!();
    }
}

fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No results match your filters.");
        return;
    }

    for issue in issues {
        println!("{}", issue.issue_title);
        println!("  Repository: {} ({})", issue.repo_full_name, issue.repo_html_url);
        if !issue.description().is_empty() {
            println!("  {}", issue.description());
        }
        println!("  Labels: {}", issue.labels.join(", "));
        println!("  Languages: {}", issue.languages.join(", "));
        println!("  Stars: {} | Watchers: {}", issue.repo_stars, issue.repo_watchers);
        println!("  {}", issue.issue_html_url);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_filter_flags() {
        let (labels, languages) =
            parse_filter_flags(&args(&["--label", "bug", "--language", "Rust", "--label", "docs"])).unwrap();
        assert_eq!(labels, vec!["bug", "docs"]);
        assert_eq!(languages, vec!["Rust"]);
    }

    #[test]
    fn test_parse_filter_flags_missing_value() {
        assert!(parse_filter_flags(&args(&["--label"])).is_err());
        assert!(parse_filter_flags(&args(&["--stars", "5"])).is_err());
    }

    #[test]
    fn test_fill_form_from_draft() {
        let draft = ProfileDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            urls: vec!["https://a.example".to_string(), "https://b.example".to_string()],
            resume: None,
            interests: vec!["x".to_string(), "y".to_string(), "x".to_string()],
        };

        let mut view = MatchingView::new();
        fill_form(&mut view, &draft);

        assert_eq!(view.form().url_slots().len(), 2);
        assert_eq!(view.form().interests().len(), 2);
        assert!(!view.form().can_submit());
    }
}
