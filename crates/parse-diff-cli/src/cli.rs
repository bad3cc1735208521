//! CLI argument parsing using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parse unified diffs and summarize or compare them.
#[derive(Parser, Debug)]
#[command(name = "parse-diff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Line delimiter: `lf`, `crlf`, `cr` or a literal string.
    /// Overrides `line_ending` from the config file.
    #[arg(long, global = true)]
    pub line_ending: Option<String>,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one line per changed file and the totals.
    Show(ShowArgs),

    /// Check whether two diffs describe the same change.
    ///
    /// Exits with 0 when they are equivalent and 1 when they differ.
    /// Commit metadata outside the diff body is ignored.
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Diff file to read; standard input when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Print the parsed files as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First diff.
    pub left: PathBuf,

    /// Second diff.
    pub right: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_file_and_json() {
        let cli = Cli::try_parse_from(["parse-diff", "show", "change.diff", "--json"]).unwrap();
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.file, Some(PathBuf::from("change.diff")));
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_show_without_file() {
        let cli = Cli::try_parse_from(["parse-diff", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show(ShowArgs { file: None, json: false })));
    }

    #[test]
    fn parses_compare_with_global_line_ending() {
        let cli = Cli::try_parse_from([
            "parse-diff",
            "compare",
            "a.patch",
            "b.patch",
            "--line-ending",
            "crlf",
        ])
        .unwrap();
        assert_eq!(cli.line_ending.as_deref(), Some("crlf"));
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.left, PathBuf::from("a.patch"));
                assert_eq!(args.right, PathBuf::from("b.patch"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn compare_requires_two_files() {
        assert!(Cli::try_parse_from(["parse-diff", "compare", "a.patch"]).is_err());
    }
}
