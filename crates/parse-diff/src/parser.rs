//! Single-pass parsing of unified diff text.

use crate::filename::{fallback_path, header_paths};
use crate::model::{ChangeType, ChunkEntry, DEV_NULL, FileEntry, LineEntry, NO_NEWLINE_MARKER};
use crate::rules::{ChunkHeader, Rule, classify};

/// Delimiter used by [`parse`].
pub const DEFAULT_LINE_ENDING: &str = "\n";

/// Parse a unified diff using `\n` as line delimiter.
///
/// # Example
/// ```
/// let files = parse_diff::parse("diff --git a/f b/f\n@@ -1 +1 @@\n-old\n+new");
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].to.as_deref(), Some("f"));
/// assert_eq!((files[0].additions, files[0].deletions), (1, 1));
/// ```
pub fn parse(input: &str) -> Vec<FileEntry> {
    parse_with_line_ending(input, DEFAULT_LINE_ENDING)
}

/// Parse a unified diff, splitting lines on `line_ending`.
///
/// Empty or whitespace-only input gives an empty result. An empty
/// `line_ending` is treated as `\n`. Parsing never fails: lines that are not
/// recognized become context lines, or are dropped when there is no chunk to
/// attach them to.
pub fn parse_with_line_ending(input: &str, line_ending: &str) -> Vec<FileEntry> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let line_ending = if line_ending.is_empty() {
        log::debug!("Empty line ending given, splitting on \\n");
        DEFAULT_LINE_ENDING
    } else {
        line_ending
    };

    let mut parser = Parser::new();
    for line in input.split(line_ending) {
        parser.feed(line);
    }
    parser.finish()
}

/// Parser state carried from one line to the next.
///
/// The current file is the last entry of `files`, and the current chunk is
/// the last chunk of that file.
#[derive(Debug, Default)]
pub struct Parser {
    files: Vec<FileEntry>,
    /// Next old-side line number.
    in_delete: u32,
    /// Next new-side line number.
    in_add: u32,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line (without its delimiter).
    pub fn feed(&mut self, line: &str) {
        match classify(line) {
            Some(rule) => self.apply(rule, line),
            None => self.normal_line(line),
        }
    }

    /// Return the files collected so far, in discovery order.
    pub fn finish(self) -> Vec<FileEntry> {
        log::debug!("Parsed {} file(s) from diff", self.files.len());
        self.files
    }

    fn apply(&mut self, rule: Rule, line: &str) {
        match rule {
            Rule::StartFile => {
                self.start_file(Some(line));
            }
            Rule::NewFileMode => {
                let file = self.restart_if_needed();
                file.change_type = ChangeType::Add;
                file.from = Some(DEV_NULL.to_string());
            }
            Rule::DeletedFileMode => {
                let file = self.restart_if_needed();
                file.change_type = ChangeType::Delete;
                file.to = Some(DEV_NULL.to_string());
            }
            Rule::Index => {
                let file = self.restart_if_needed();
                file.index = Some(line.split_whitespace().skip(1).map(String::from).collect());
            }
            Rule::FromFile => {
                let file = self.restart_if_needed();
                file.from = Some(fallback_path(line));
            }
            Rule::ToFile => {
                let file = self.restart_if_needed();
                file.to = Some(fallback_path(line));
            }
            Rule::Chunk(header) => self.start_chunk(header, line),
            Rule::DeleteLine => self.delete_line(line),
            Rule::AddLine => self.add_line(line),
        }
    }

    fn start_file(&mut self, header: Option<&str>) -> &mut FileEntry {
        let mut file = FileEntry::new();

        if let Some((from, to)) = header.and_then(header_paths) {
            file.from = Some(from);
            file.to = Some(to);
        }

        self.files.push(file);
        let index = self.files.len() - 1;
        &mut self.files[index]
    }

    /// Begin a new file when header lines show up with no file yet, or after
    /// the current file already received chunks (diffs without `diff` lines).
    fn restart_if_needed(&mut self) -> &mut FileEntry {
        let needs_restart = self.files.last().is_none_or(|file| !file.chunks.is_empty());

        if needs_restart {
            log::trace!("Header line without open file, starting file #{}", self.files.len() + 1);
            return self.start_file(None);
        }

        let index = self.files.len() - 1;
        &mut self.files[index]
    }

    fn start_chunk(&mut self, header: ChunkHeader, line: &str) {
        self.in_delete = header.old_start;
        self.in_add = header.new_start;

        let chunk = ChunkEntry::new(
            line,
            header.old_start,
            header.old_lines,
            header.new_start,
            header.new_lines,
        );

        match self.files.last_mut() {
            Some(file) => file.chunks.push(chunk),
            None => {
                log::trace!("Chunk header before any file header, starting file");
                self.start_file(None).chunks.push(chunk);
            }
        }
    }

    fn delete_line(&mut self, line: &str) {
        let Some(file) = self.files.last_mut() else {
            return dropped(line);
        };
        let Some(chunk) = file.chunks.last_mut() else {
            return dropped(line);
        };

        chunk.changes.push(LineEntry::delete(line, next(&mut self.in_delete)));
        file.deletions += 1;
    }

    fn add_line(&mut self, line: &str) {
        let Some(file) = self.files.last_mut() else {
            return dropped(line);
        };
        let Some(chunk) = file.chunks.last_mut() else {
            return dropped(line);
        };

        chunk.changes.push(LineEntry::add(line, next(&mut self.in_add)));
        file.additions += 1;
    }

    fn normal_line(&mut self, line: &str) {
        let Some(chunk) = self.files.last_mut().and_then(|f| f.chunks.last_mut()) else {
            return dropped(line);
        };

        let entry = if line == NO_NEWLINE_MARKER {
            LineEntry::normal(line, 0, 0)
        } else {
            LineEntry::normal(line, next(&mut self.in_delete), next(&mut self.in_add))
        };
        chunk.changes.push(entry);
    }
}

/// Read a running line counter and advance it.
fn next(counter: &mut u32) -> u32 {
    let value = *counter;
    *counter = counter.saturating_add(1);
    value
}

fn dropped(line: &str) {
    log::trace!("Dropping line outside of any chunk: {:?}", line);
}
