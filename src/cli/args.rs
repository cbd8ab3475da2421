//! CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::domain::{DocumentRequest, ExportFormat, ExportRequest, ImportRequest};

const EXAMPLES: &str = "\
Examples:
  Export a document as PDF:
    rmhook export 12345678-1234-1234-1234-123456789abc file:///tmp/test.pdf

  Export as PNG with grayscale:
    rmhook export <doc-id> <target> --format 1 --grayscale

  Export specific pages:
    rmhook export <doc-id> <target> --pages 0 1 2

  Import a document:
    rmhook import file:///tmp/test.pdf 2166c19d-d2cc-456c-9f0e-49482031092a

  Import with password:
    rmhook import <file-url> <directory-id> --password mypassword";

/// RMHook HTTP server API client: export and import documents
#[derive(Parser, Debug)]
#[command(name = "rmhook")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Server base URL (default: http://localhost:8080)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a document
    Export(ExportArgs),

    /// Import a document
    Import(ImportArgs),

    /// Check that the server is reachable
    Health,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// UUID of the document to export
    pub document_id: String,

    /// Target path for export (use file:// prefix)
    #[arg(value_hint = ValueHint::Url)]
    pub target_path: String,

    /// Export format: 0=PDF, 1=PNG, 2=SVG, 3=RmBundle, 4=RmHtml
    #[arg(short, long, default_value = "0", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Export with grayscale pens
    #[arg(short, long)]
    pub grayscale: bool,

    /// Do not keep password protection (for PDFs)
    #[arg(long)]
    pub no_keep_password: bool,

    /// Password for protected documents
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Page indices to export (default: all pages)
    #[arg(long, num_args = 1..)]
    pub pages: Option<Vec<u32>>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ImportArgs {
    /// File URL to import (use file:// prefix)
    #[arg(value_hint = ValueHint::Url)]
    pub file_url: String,

    /// UUID of the target directory
    pub directory_id: String,

    /// Password for protected documents
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Additional flag passed to the server
    #[arg(long)]
    pub flag1: bool,

    /// Additional flag passed to the server
    #[arg(long)]
    pub flag2: bool,
}

/// clap value parser for `--format`.
pub fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}

impl From<ExportArgs> for DocumentRequest {
    fn from(args: ExportArgs) -> Self {
        ExportRequest::new(args.document_id, args.target_path)
            .with_format(args.format)
            .with_grayscale(args.grayscale)
            .with_keep_password(!args.no_keep_password)
            .with_password(args.password)
            .with_pages(args.pages.unwrap_or_default())
            .into()
    }
}

impl From<ImportArgs> for DocumentRequest {
    fn from(args: ImportArgs) -> Self {
        ImportRequest::new(args.file_url, args.directory_id)
            .with_password(args.password)
            .with_flags(args.flag1, args.flag2)
            .into()
    }
}
