//! Smoke-test utility: health check first, then an optional export or import
//! given as plain positional arguments.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, instrument};

use crate::application::services::DocumentService;
use crate::cli::args::parse_format;
use crate::cli::report::Reporter;
use crate::domain::{DocumentRequest, ExportFormat, ExportRequest, ImportRequest};
use crate::exitcode;

/// RMHook HTTP server smoke test
#[derive(Parser, Debug)]
#[command(name = "rmhook-smoke")]
#[command(author, version, about, long_about = None)]
pub struct SmokeCli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Server base URL (default: http://localhost:8080)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<SmokeCommands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SmokeCommands {
    /// Export a document: <doc-id> <target-path> [format] [grayscale]
    Export {
        document_id: String,
        target_path: String,
        /// 0=PDF, 1=PNG, 2=SVG, 3=RmBundle, 4=RmHtml
        #[arg(default_value = "0", value_parser = parse_format)]
        format: ExportFormat,
        /// "true" (any case) enables grayscale, anything else disables it
        #[arg(default_value = "false", value_parser = parse_truthy, action = ArgAction::Set)]
        grayscale: bool,
    },

    /// Import a document: <file-url> <directory-id> [password]
    Import {
        file_url: String,
        directory_id: String,
        #[arg(default_value = "")]
        password: String,
    },
}

const COMMAND_WORDS: [&str; 2] = ["export", "import"];

impl SmokeCli {
    /// Parse an argument vector, accepting the command word in any case.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = args.into_iter().map(Into::into).enumerate().map(|(i, arg)| {
            if i == 1 {
                lowercase_command(arg)
            } else {
                arg
            }
        });
        Self::try_parse_from(args)
    }
}

fn lowercase_command(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(word) if COMMAND_WORDS.iter().any(|c| c.eq_ignore_ascii_case(word)) => {
            word.to_ascii_lowercase().into()
        }
        _ => arg,
    }
}

/// Only the word "true" counts, ignoring case.
pub fn parse_truthy(s: &str) -> Result<bool, String> {
    Ok(s.eq_ignore_ascii_case("true"))
}

impl From<SmokeCommands> for DocumentRequest {
    fn from(command: SmokeCommands) -> Self {
        match command {
            SmokeCommands::Export {
                document_id,
                target_path,
                format,
                grayscale,
            } => ExportRequest::new(document_id, target_path)
                .with_format(format)
                .with_grayscale(grayscale)
                .into(),
            SmokeCommands::Import {
                file_url,
                directory_id,
                password,
            } => ImportRequest::new(file_url, directory_id)
                .with_password(password)
                .into(),
        }
    }
}

/// Usage examples shown when the utility runs without arguments.
pub fn usage_examples() -> String {
    let rule = "=".repeat(60);
    format!(
        "\n{rule}\nUsage Examples\n{rule}\n\
         \n1. Export a document:\
         \n   rmhook-smoke export <doc-id> <target-path> [format] [grayscale]\
         \n\n   Example:\
         \n   rmhook-smoke export \"abc-123\" \"file:///tmp/test.pdf\" 0 false\
         \n\n2. Import a document:\
         \n   rmhook-smoke import <file-url> <directory-id> [password]\
         \n\n   Example:\
         \n   rmhook-smoke import \"file:///tmp/test.pdf\" \"2166c19d-d2cc-456c-9f0e-49482031092a\"\n"
    )
}

/// Run the smoke test and return the process exit code.
///
/// The health check gates everything: if it fails nothing else is sent.
#[instrument(skip(service, out))]
pub fn run<W: Write>(
    command: Option<SmokeCommands>,
    service: &DocumentService,
    out: W,
) -> io::Result<i32> {
    let mut reporter = Reporter::new(out);
    reporter.title("RMHook HTTP Server Test Script")?;

    let health = service.health();
    if !reporter.health(&health)? {
        info!("health check failed, aborting");
        return Ok(exitcode::FAILURE);
    }

    match command {
        None => {
            reporter.plain(&usage_examples())?;
            Ok(exitcode::OK)
        }
        Some(command) => {
            let request = DocumentRequest::from(command);
            reporter.announce(&request)?;
            let result = service.submit(&request);
            reporter.report(request.kind(), &result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_smoke_cli() {
        SmokeCli::command().debug_assert();
    }

    #[test]
    fn given_positional_export_when_parsing_then_format_and_grayscale_are_read() {
        let cli = SmokeCli::try_parse_from([
            "rmhook-smoke",
            "export",
            "abc-123",
            "file:///tmp/t.pdf",
            "1",
            "TRUE",
        ])
        .expect("parse");

        let request = DocumentRequest::from(cli.command.expect("command"));
        let expected: DocumentRequest = ExportRequest::new("abc-123", "file:///tmp/t.pdf")
            .with_format(ExportFormat::Png)
            .with_grayscale(true)
            .into();
        assert_eq!(request, expected);
    }

    #[test]
    fn given_non_true_word_when_parsing_grayscale_then_false() {
        assert_eq!(parse_truthy("yes"), Ok(false));
        assert_eq!(parse_truthy("True"), Ok(true));
    }

    #[test]
    fn given_uppercase_command_when_parsing_then_accepted() {
        let cli = SmokeCli::try_parse_args([
            "rmhook-smoke",
            "EXPORT",
            "abc-123",
            "file:///tmp/t.pdf",
        ])
        .expect("parse");

        let expected = SmokeCommands::Export {
            document_id: "abc-123".into(),
            target_path: "file:///tmp/t.pdf".into(),
            format: ExportFormat::Pdf,
            grayscale: false,
        };
        assert_eq!(cli.command, Some(expected));
    }

    #[test]
    fn given_mixed_case_import_when_parsing_then_arguments_keep_their_case() {
        let cli = SmokeCli::try_parse_args([
            "rmhook-smoke",
            "Import",
            "file:///A.pdf",
            "Dir-1",
            "PW",
        ])
        .expect("parse");

        let expected = SmokeCommands::Import {
            file_url: "file:///A.pdf".into(),
            directory_id: "Dir-1".into(),
            password: "PW".into(),
        };
        assert_eq!(cli.command, Some(expected));
    }

    #[test]
    fn given_unknown_command_when_parsing_then_fails_with_exit_failure() {
        let err = SmokeCli::try_parse_args(["rmhook-smoke", "delete", "abc"]).unwrap_err();
        assert_eq!(exitcode::for_clap_error(&err), exitcode::FAILURE);
    }

    #[test]
    fn given_no_arguments_when_parsing_then_no_command() {
        let cli = SmokeCli::try_parse_from(["rmhook-smoke"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn given_missing_directory_when_parsing_import_then_errors() {
        let result = SmokeCli::try_parse_from(["rmhook-smoke", "import", "file:///a.pdf"]);
        assert!(result.is_err());
    }
}
