//! Line classification
//!
//! Each input line is tested against an ordered rule table and the first
//! matching rule wins. Order matters: `---`/`+++` have to be tried before the
//! plain `-`/`+` content rules, and the header rules before both.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// What a recognized diff line asks the parser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `diff ...` header starting a new file.
    StartFile,
    /// `new file mode <mode>`
    NewFileMode,
    /// `deleted file mode <mode>`
    DeletedFileMode,
    /// `index <a>..<b> [<mode>]`
    Index,
    /// `--- <path>`
    FromFile,
    /// `+++ <path>`
    ToFile,
    /// `@@ -a,b +c,d @@` chunk header.
    Chunk(ChunkHeader),
    /// Removed content line.
    DeleteLine,
    /// Added content line.
    AddLine,
}

/// Numbers carried by a chunk header. Omitted lengths are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub old_start: u32,
    pub old_lines: u32,
    pub new_start: u32,
    pub new_lines: u32,
}

impl ChunkHeader {
    /// Build from the four capture groups of the chunk pattern.
    ///
    /// Returns `None` when a number does not fit, which makes the line fall
    /// through to the remaining rules.
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let number = |group: usize| -> Option<u32> {
            match caps.get(group) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(0),
            }
        };

        Some(Self {
            old_start: number(1)?,
            old_lines: number(2)?,
            new_start: number(3)?,
            new_lines: number(4)?,
        })
    }
}

/// One entry of the rule table: a pattern and how to turn its match into a rule.
struct LineRule {
    pattern: Regex,
    build: fn(&Captures<'_>) -> Option<Rule>,
}

impl LineRule {
    fn new(pattern: &str, build: fn(&Captures<'_>) -> Option<Rule>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is valid"),
            build,
        }
    }
}

fn rule_table() -> &'static [LineRule] {
    static RULES: OnceLock<Vec<LineRule>> = OnceLock::new();

    RULES.get_or_init(|| {
        vec![
            LineRule::new(r"^diff\s", |_| Some(Rule::StartFile)),
            LineRule::new(r"^new file mode \d+$", |_| Some(Rule::NewFileMode)),
            LineRule::new(r"^deleted file mode \d+$", |_| Some(Rule::DeletedFileMode)),
            LineRule::new(r"^index\s[\da-zA-Z]+\.\.[\da-zA-Z]+(\s\d+)?$", |_| Some(Rule::Index)),
            LineRule::new(r"^---\s", |_| Some(Rule::FromFile)),
            LineRule::new(r"^\+\+\+\s", |_| Some(Rule::ToFile)),
            LineRule::new(r"^@@\s+-(\d+),?(\d+)?\s+\+(\d+),?(\d+)?\s@@", |caps| {
                ChunkHeader::from_captures(caps).map(Rule::Chunk)
            }),
            LineRule::new(r"^-", |_| Some(Rule::DeleteLine)),
            LineRule::new(r"^\+", |_| Some(Rule::AddLine)),
        ]
    })
}

/// Classify one line.
///
/// Returns `None` for context lines and for anything unrecognized; the parser
/// treats both as normal lines.
pub fn classify(line: &str) -> Option<Rule> {
    rule_table().iter().find_map(|rule| {
        let caps = rule.pattern.captures(line)?;
        (rule.build)(&caps)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(old_start: u32, old_lines: u32, new_start: u32, new_lines: u32) -> Option<Rule> {
        Some(Rule::Chunk(ChunkHeader {
            old_start,
            old_lines,
            new_start,
            new_lines,
        }))
    }

    #[test]
    fn test_header_lines() {
        assert_eq!(classify("diff --git a/file b/file"), Some(Rule::StartFile));
        assert_eq!(classify("diff -r 514fc757521e x"), Some(Rule::StartFile));
        assert_eq!(classify("new file mode 100644"), Some(Rule::NewFileMode));
        assert_eq!(classify("deleted file mode 100755"), Some(Rule::DeletedFileMode));
        assert_eq!(classify("index 123..456 789"), Some(Rule::Index));
        assert_eq!(classify("index abc1234..0000000"), Some(Rule::Index));
        assert_eq!(classify("--- a/file"), Some(Rule::FromFile));
        assert_eq!(classify("+++ b/file"), Some(Rule::ToFile));
    }

    #[test]
    fn test_exact_header_lines_must_match_fully() {
        // Trailing text makes these ordinary lines.
        assert_eq!(classify("new file mode 100644 extra"), None);
        assert_eq!(classify("index 123..456 mode"), None);
        assert_eq!(classify("diffstat"), None);
    }

    #[test]
    fn test_chunk_headers() {
        assert_eq!(classify("@@ -1,2 +1,2 @@"), chunk(1, 2, 1, 2));
        assert_eq!(classify("@@ -43,6 +43,9 @@ fn main()"), chunk(43, 6, 43, 9));
        assert_eq!(classify("@@ -1 +1 @@"), chunk(1, 0, 1, 0));
        assert_eq!(classify("@@ -0,0 +1,3 @@"), chunk(0, 0, 1, 3));
    }

    #[test]
    fn test_overflowing_chunk_header_is_not_a_chunk() {
        assert_eq!(classify("@@ -99999999999,1 +1,1 @@"), None);
    }

    #[test]
    fn test_file_markers_win_over_content_lines() {
        assert_eq!(classify("--- removed"), Some(Rule::FromFile));
        assert_eq!(classify("+++ added"), Some(Rule::ToFile));
        assert_eq!(classify("---"), Some(Rule::DeleteLine));
        assert_eq!(classify("- line1"), Some(Rule::DeleteLine));
        assert_eq!(classify("+ line2"), Some(Rule::AddLine));
        assert_eq!(classify("+"), Some(Rule::AddLine));
    }

    #[test]
    fn test_context_lines() {
        assert_eq!(classify(" unchanged"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("\\ No newline at end of file"), None);
        assert_eq!(classify("# HG changeset patch"), None);
    }
}
