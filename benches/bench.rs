// Criterion benchmarks for Open Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use open_match::core::filters::{distinct_labels, filter_issues, FilterState};
use open_match::models::Issue;
use std::collections::HashSet;

const LABELS: [&str; 5] = ["bug", "docs", "good first issue", "help wanted", "enhancement"];
const LANGUAGES: [&str; 4] = ["Rust", "Python", "Go", "TypeScript"];

fn create_issue(id: usize) -> Issue {
    Issue {
        repo_full_name: format!("org/repo{}", id % 50),
        issue_number: id as u64,
        issue_title: format!("Issue {}", id),
        labels: vec![
            LABELS[id % LABELS.len()].to_string(),
            LABELS[(id / 3) % LABELS.len()].to_string(),
        ],
        languages: vec![LANGUAGES[id % LANGUAGES.len()].to_string()],
        ..Default::default()
    }
}

fn selection(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn bench_filter_issues(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_issues");

    for size in [100, 1000, 10000].iter() {
        let issues: Vec<Issue> = (0..*size).map(create_issue).collect();
        let labels = selection(&["bug"]);
        let languages = selection(&["Rust"]);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_issues(black_box(&issues), black_box(&labels), black_box(&languages)));
        });
    }

    group.finish();
}

fn bench_distinct_labels(c: &mut Criterion) {
    let issues: Vec<Issue> = (0..1000).map(create_issue).collect();

    c.bench_function("distinct_labels_1000", |b| {
        b.iter(|| distinct_labels(black_box(&issues)));
    });
}

fn bench_toggle_recompute(c: &mut Criterion) {
    let issues: Vec<Issue> = (0..1000).map(create_issue).collect();
    let mut state = FilterState::new(issues);

    c.bench_function("filter_state_toggle_1000", |b| {
        b.iter(|| {
            state.toggle_label(black_box("docs"));
        });
    });
}

criterion_group!(benches, bench_filter_issues, bench_distinct_labels, bench_toggle_recompute);
criterion_main!(benches);
