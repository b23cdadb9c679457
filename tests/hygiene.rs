//! Hygiene — source-level rules checked at test time.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that would let a page
//! behavior crash or fail silently. Each rule has a budget; budgets only go down.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics abort every behavior on the page" },
    Rule { pattern: ".expect(", budget: 0, why: "panics abort every behavior on the page" },
    Rule { pattern: "panic!(", budget: 0, why: "panics abort every behavior on the page" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics abort every behavior on the page" },
    Rule { pattern: "todo!(", budget: 0, why: "stubs ship as runtime panics" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "stubs ship as runtime panics" },
    Rule { pattern: "let _ =", budget: 0, why: "use `Absorb::absorb` so failures are logged" },
    Rule { pattern: ".ok()", budget: 0, why: "match the error and log it instead" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code instead" },
];

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
        let path_str = path.to_string_lossy().replace('\\', "/");
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
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("src/lib.rs")), "run from the crate root");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{}",
                rule.pattern,
                rule.budget,
                rule.why,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn only_the_preference_store_touches_local_storage() {
    let files = source_files();
    let outside: Vec<_> = hits(&files, "local_storage()")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("theme/store.rs"))
        .collect();
    assert!(
        outside.is_empty(),
        "read and write the theme through `PreferenceStore`:\n{}",
        format_hits(&outside)
    );
}

#[test]
fn browser_modules_are_feature_gated() {
    let files = source_files();
    let Some(lib) = files.iter().find(|f| f.path.ends_with("src/lib.rs")) else {
        return;
    };
    for module in ["app", "dom", "hover"] {
        let declaration = format!("pub mod {module};");
        let gated = lib
            .content
            .lines()
            .collect::<Vec<_>>()
            .windows(2)
            .any(|pair| pair[0].trim() == r#"#[cfg(feature = "browser")]"# && pair[1].trim() == declaration);
        assert!(gated, "`{declaration}` must sit behind the `browser` feature");
    }
}
