//! Hygiene: source-level budgets for the canvas crate.
//!
//! The engine runs inside event handlers on the page; a panic there takes the
//! whole drawing pad down. These tests scan `src/` (test files excluded) and
//! fail when a forbidden pattern appears. Budgets only ever go down.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is forbidden)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "aborts the handler"),
    ("unreachable!(", 0, "aborts the handler"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result unseen"),
    (".ok()", 0, "discards an error unseen"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the canvas crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}
