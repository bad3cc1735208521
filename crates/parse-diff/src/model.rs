//! Data structures produced by the parser.
//!
//! Equality and hashing are structural over every field, so two parses of the
//! same diff body compare equal no matter what commit metadata surrounded them.

use serde::{Deserialize, Serialize};

/// Path used for the missing side of an added or deleted file.
pub const DEV_NULL: &str = "/dev/null";

/// Marker line emitted by diff tools when a file lacks a trailing newline.
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Summary over a parsed diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of file entries.
    pub files: usize,
    /// Added lines across all files.
    pub additions: usize,
    /// Deleted lines across all files.
    pub deletions: usize,
}

impl DiffStats {
    /// Sum the counters of every file.
    pub fn from_files(files: &[FileEntry]) -> Self {
        Self {
            files: files.len(),
            additions: files.iter().map(|f| f.additions).sum(),
            deletions: files.iter().map(|f| f.deletions).sum(),
        }
    }
}

/// A single file's changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    /// Chunks in order of appearance.
    pub chunks: Vec<ChunkEntry>,
    /// Number of added lines.
    pub additions: usize,
    /// Number of deleted lines.
    pub deletions: usize,
    /// Source path, `/dev/null` for added files.
    pub from: Option<String>,
    /// Target path, `/dev/null` for deleted files.
    pub to: Option<String>,
    /// Kind of change.
    pub change_type: ChangeType,
    /// Tokens of the `index <a>..<b> [<mode>]` line, without the keyword.
    pub index: Option<Vec<String>>,
}

impl FileEntry {
    /// Create an empty entry with no paths and `Modify` as change type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_added(&self) -> bool {
        self.change_type == ChangeType::Add
    }

    pub fn is_deleted(&self) -> bool {
        self.change_type == ChangeType::Delete
    }

    /// Name to show for the file.
    ///
    /// Added files show the target, deleted files the source, and renames show
    /// both sides joined by an arrow. Returns an empty string while neither
    /// path is known.
    pub fn display_name(&self) -> String {
        let from = self.from.as_deref().filter(|p| *p != DEV_NULL);
        let to = self.to.as_deref().filter(|p| *p != DEV_NULL);

        match (from, to) {
            (Some(from), Some(to)) if from != to => format!("{} → {}", from, to),
            (_, Some(path)) | (Some(path), None) => path.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Total number of content lines over all chunks.
    pub fn line_count(&self) -> usize {
        self.chunks.iter().map(|c| c.changes.len()).sum()
    }
}

/// Kind of change a file underwent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    #[default]
    Modify,
    Add,
    Delete,
}

impl ChangeType {
    /// Single-character status, as printed by `git diff --name-status`.
    pub fn as_char(&self) -> char {
        match self {
            ChangeType::Modify => 'M',
            ChangeType::Add => 'A',
            ChangeType::Delete => 'D',
        }
    }
}

/// A contiguous region of changes introduced by an `@@` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkEntry {
    /// Header line exactly as it appeared (e.g. "@@ -10,5 +10,7 @@ fn example()").
    pub header: String,
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in old version.
    pub old_lines: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in new version.
    pub new_lines: u32,
    /// Lines in this chunk.
    pub changes: Vec<LineEntry>,
}

impl ChunkEntry {
    pub fn new(
        header: impl Into<String>,
        old_start: u32,
        old_lines: u32,
        new_start: u32,
        new_lines: u32,
    ) -> Self {
        Self {
            header: header.into(),
            old_start,
            old_lines,
            new_start,
            new_lines,
            changes: Vec::new(),
        }
    }

    /// Function context following the closing `@@`, if the tool emitted one.
    pub fn section(&self) -> Option<&str> {
        let rest = self.header.strip_prefix("@@")?;
        let (_, section) = rest.split_once("@@")?;
        let section = section.trim();
        (!section.is_empty()).then_some(section)
    }
}

/// A single content line inside a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineEntry {
    /// Classification together with the line positions.
    pub kind: LineKind,
    /// Raw line including its leading `+`, `-` or space marker.
    pub content: String,
}

impl LineEntry {
    pub fn add(content: impl Into<String>, line_index: u32) -> Self {
        Self {
            kind: LineKind::Add { line_index },
            content: content.into(),
        }
    }

    pub fn delete(content: impl Into<String>, line_index: u32) -> Self {
        Self {
            kind: LineKind::Delete { line_index },
            content: content.into(),
        }
    }

    pub fn normal(content: impl Into<String>, old_index: u32, new_index: u32) -> Self {
        Self {
            kind: LineKind::Normal {
                old_index,
                new_index,
            },
            content: content.into(),
        }
    }

    pub fn is_add(&self) -> bool {
        matches!(self.kind, LineKind::Add { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.kind, LineKind::Delete { .. })
    }

    pub fn is_normal(&self) -> bool {
        matches!(self.kind, LineKind::Normal { .. })
    }

    /// Line content without its one-character marker.
    pub fn text(&self) -> &str {
        let mut chars = self.content.chars();
        match chars.next() {
            Some('+' | '-' | ' ') => chars.as_str(),
            _ => &self.content,
        }
    }
}

/// Line classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Added line (+), numbered on the new side.
    Add { line_index: u32 },
    /// Removed line (-), numbered on the old side.
    Delete { line_index: u32 },
    /// Context line, numbered on both sides. Both are 0 for the no-newline marker.
    Normal { old_index: u32, new_index: u32 },
}

impl LineKind {
    /// Prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Add { .. } => '+',
            LineKind::Delete { .. } => '-',
            LineKind::Normal { .. } => ' ',
        }
    }
}
