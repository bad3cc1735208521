//! # parse-diff
//!
//! Parses unified diff text (as produced by `git diff`, `hg diff` or `diff -u`)
//! into files, chunks and classified lines.
//!
//! ## Design Principles
//!
//! - **Total**: every input produces a result. Unknown lines become context
//!   lines or are skipped; nothing returns an error.
//! - **Pure**: no I/O. Callers hand in the text and own the returned model.
//! - **Comparable**: the model implements structural `Eq`/`Hash`, so two
//!   diffs of the same change compare equal even when their surrounding
//!   commit metadata differs (e.g. a rebased patch).
//!
//! ## Usage
//!
//! ```rust
//! use parse_diff::{parse, DiffStats};
//!
//! let diff = "diff --git a/file b/file
//! index 123..456 789
//! --- a/file
//! +++ b/file
//! @@ -1,2 +1,2 @@
//! - line1
//! + line2";
//!
//! let files = parse(diff);
//! assert_eq!(files[0].from.as_deref(), Some("file"));
//! assert_eq!(DiffStats::from_files(&files).additions, 1);
//! ```

pub mod filename;
pub mod model;
pub mod parser;
pub mod rules;

pub use filename::{fallback_path, header_paths};
pub use model::{
    ChangeType, ChunkEntry, DEV_NULL, DiffStats, FileEntry, LineEntry, LineKind,
    NO_NEWLINE_MARKER,
};
pub use parser::{DEFAULT_LINE_ENDING, Parser, parse, parse_with_line_ending};
pub use rules::{ChunkHeader, Rule, classify};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_is_deterministic() {
        let diff = "diff --git a/a.txt b/a.txt\n@@ -1,2 +1,2 @@\n keep\n-drop\n+take\n";
        let first = parse(diff);
        let second = parse(diff);
        assert_eq!(first, second);
        assert_eq!(DiffStats::from_files(&first), DiffStats::from_files(&second));
    }

    #[test]
    fn test_model_serializes_to_json() {
        let files = parse("diff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n-x\n+y");
        let json = serde_json::to_string(&files).unwrap();
        let back: Vec<FileEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, files);
        assert!(json.contains("\"change_type\":\"Modify\""));
    }
}
