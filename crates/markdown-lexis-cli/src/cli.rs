//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use markdown_lexis_config::OutputFormat;

/// Parse Markdown into a token stream.
#[derive(Debug, Parser)]
#[command(name = "markdown-lexis", version, about = "Markdown to token stream parser")]
pub struct Cli {
    /// Markdown file to read (stdin when omitted or "-").
    pub file: Option<PathBuf>,

    /// Output format, overriding the config file: json or html.
    #[arg(long, short)]
    pub format: Option<OutputFormat>,

    /// Trace block rule decisions to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
