//! Path extraction from `diff`, `---` and `+++` lines.

use regex::Regex;
use std::sync::OnceLock;

/// Read the source and target paths from a `diff` header line.
///
/// The last two whitespace-separated tokens are taken as paths, so this works
/// for `diff --git a/x b/x` as well as `diff -r <rev> -r <rev> x`-style lines
/// (where the `---`/`+++` lines later replace the guess). Returns `None` when
/// fewer than two tokens follow the `diff` keyword.
pub fn header_paths(line: &str) -> Option<(String, String)> {
    let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
    match tokens.as_slice() {
        [.., from, to] => Some((
            strip_git_prefix(from).to_string(),
            strip_git_prefix(to).to_string(),
        )),
        _ => None,
    }
}

/// Read a path from a `---` or `+++` line.
///
/// Drops the markers, anything after a tab, and a trailing
/// `YYYY-MM-DD HH:MM:SS[.frac] ±HHMM` timestamp as written by `diff -u`.
pub fn fallback_path(line: &str) -> String {
    static METADATA_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = METADATA_REGEX.get_or_init(|| {
        Regex::new(r"\t.*|\d{4}-\d\d-\d\d\s\d\d:\d\d:\d\d(\.\d+)?\s[+-]\d{4}")
            .expect("metadata pattern is valid")
    });

    let mut path = line.trim_start_matches(['-', '+']).trim();

    if let Some(m) = re.find(path) {
        path = path[..m.start()].trim();
    }

    strip_git_prefix(path).to_string()
}

/// Remove the `a/` or `b/` prefix git puts in front of paths.
fn strip_git_prefix(path: &str) -> &str {
    path.strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path)
}
