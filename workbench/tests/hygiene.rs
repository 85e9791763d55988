//! Hygiene: source-scan budgets for the workbench crate.
//!
//! Production code here must never panic and must never swallow an error
//! without looking at it: storage failures are logged, bad input becomes a
//! typed error. Every budget is zero; `_test.rs` files are exempt.

use std::fs;
use std::path::Path;

/// `(pattern, budget, what it costs)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on bad input"),
    (".expect(", 0, "panics on bad input"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards an error unseen"),
    (".ok()", 0, "discards an error unseen"),
    ("println!(", 0, "bypasses the log facade"),
    ("eprintln!(", 0, "bypasses the log facade"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|(path, content)| (path.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("history.rs")), "scan found no sources");
}

#[test]
fn antipattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut report = Vec::new();
    for &(pattern, budget, cost) in BUDGETS {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > budget {
            let places: Vec<String> = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect();
            report.push(format!("{pattern} ({cost}): {total} > {budget}\n{}", places.join("\n")));
        }
    }

    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
