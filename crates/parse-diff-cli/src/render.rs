//! Text output for parsed diffs.

use parse_diff::{DiffStats, FileEntry};

/// One line per file followed by a totals line, in the style of `git diff --stat`.
pub fn summary(files: &[FileEntry]) -> String {
    let mut out = String::new();

    for file in files {
        out.push_str(&format!(
            "{} {} +{} -{}\n",
            file.change_type.as_char(),
            file_label(file),
            file.additions,
            file.deletions
        ));
    }

    out.push_str(&totals(&DiffStats::from_files(files)));
    out.push('\n');
    out
}

fn file_label(file: &FileEntry) -> String {
    let name = file.display_name();
    if name.is_empty() {
        "<unknown>".to_string()
    } else {
        name
    }
}

fn totals(stats: &DiffStats) -> String {
    format!(
        "{} file{} changed, {} insertion{}(+), {} deletion{}(-)",
        stats.files,
        plural(stats.files),
        stats.additions,
        plural(stats.additions),
        stats.deletions,
        plural(stats.deletions)
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Explain why two parsed diffs are not equivalent, or None when they are.
pub fn difference(left: &[FileEntry], right: &[FileEntry]) -> Option<String> {
    if left == right {
        return None;
    }

    if left.len() != right.len() {
        return Some(format!(
            "file count differs: {} vs {}",
            left.len(),
            right.len()
        ));
    }

    left.iter()
        .zip(right)
        .enumerate()
        .find(|(_, (l, r))| l != r)
        .map(|(position, (l, r))| {
            let what = if l.from != r.from || l.to != r.to {
                "paths"
            } else if l.change_type != r.change_type {
                "change type"
            } else if l.index != r.index {
                "index line"
            } else {
                "chunks"
            };
            format!("file #{} ({}) differs in {}", position + 1, file_label(l), what)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parse_diff::parse;
    use pretty_assertions::assert_eq;

    const MODIFY: &str = "diff --git a/src/main.rs b/src/main.rs
@@ -1,2 +1,2 @@
-old
+new
+more";

    const ADD: &str = "diff --git a/new.rs b/new.rs
new file mode 100644
--- /dev/null
+++ b/new.rs
@@ -0,0 +1 @@
+fn main() {}";

    #[test]
    fn test_summary_lines() {
        let mut files = parse(MODIFY);
        files.extend(parse(ADD));

        assert_eq!(
            summary(&files),
            "M src/main.rs +2 -1\nA new.rs +1 -0\n2 files changed, 3 insertions(+), 1 deletion(-)\n"
        );
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summary(&[]), "0 files changed, 0 insertions(+), 0 deletions(-)\n");
    }

    #[test]
    fn test_difference_equal() {
        assert_eq!(difference(&parse(MODIFY), &parse(MODIFY)), None);
    }

    #[test]
    fn test_difference_file_count() {
        let mut both = parse(MODIFY);
        both.extend(parse(ADD));
        assert_eq!(
            difference(&parse(MODIFY), &both),
            Some("file count differs: 1 vs 2".to_string())
        );
    }

    #[test]
    fn test_difference_in_chunks() {
        let changed = MODIFY.replace("+more", "+less");
        assert_eq!(
            difference(&parse(MODIFY), &parse(&changed)),
            Some("file #1 (src/main.rs) differs in chunks".to_string())
        );
    }

    #[test]
    fn test_difference_in_index() {
        let with_index = MODIFY.replace("@@ -1,2", "index 123..456\n@@ -1,2");
        assert_eq!(
            difference(&parse(MODIFY), &parse(&with_index)),
            Some("file #1 (src/main.rs) differs in index line".to_string())
        );
    }
}
