//! Tests for command-line parsing into request descriptors

use clap::error::ErrorKind;
use clap::Parser;
use rstest::rstest;

use rmhook::cli::args::{Cli, Commands};
use rmhook::domain::{DocumentRequest, ExportFormat, ExportRequest, ImportRequest};
use rmhook::exitcode;

fn parse_request(args: &[&str]) -> DocumentRequest {
    let cli = Cli::try_parse_from(args).expect("parse");
    match cli.command {
        Some(Commands::Export(export)) => export.into(),
        Some(Commands::Import(import)) => import.into(),
        other => panic!("expected export or import, got {other:?}"),
    }
}

#[test]
fn given_export_positionals_only_when_parsing_then_uses_defaults() {
    let request = parse_request(&["rmhook", "export", "abc-123", "file:///tmp/out.pdf"]);

    assert_eq!(
        request,
        ExportRequest::new("abc-123", "file:///tmp/out.pdf").into()
    );
}

#[test]
fn given_all_export_flags_when_parsing_then_descriptor_reflects_them() {
    let request = parse_request(&[
        "rmhook",
        "export",
        "doc",
        "file:///tmp/out.png",
        "--format",
        "1",
        "--grayscale",
        "--no-keep-password",
        "-p",
        "secret",
        "--pages",
        "0",
        "2",
        "5",
    ]);

    let expected: DocumentRequest = ExportRequest::new("doc", "file:///tmp/out.png")
        .with_format(ExportFormat::Png)
        .with_grayscale(true)
        .with_keep_password(false)
        .with_password("secret")
        .with_pages(vec![0, 2, 5])
        .into();
    assert_eq!(request, expected);
}

#[test]
fn given_import_flags_when_parsing_then_descriptor_reflects_them() {
    let request = parse_request(&[
        "rmhook",
        "import",
        "file:///tmp/in.pdf",
        "dir-1",
        "--password",
        "pw",
        "--flag2",
    ]);

    let expected: DocumentRequest = ImportRequest::new("file:///tmp/in.pdf", "dir-1")
        .with_password("pw")
        .with_flags(false, true)
        .into();
    assert_eq!(request, expected);
}

#[rstest]
#[case("5")]
#[case("-1")]
#[case("99")]
#[case("pdf")]
fn given_out_of_range_format_when_parsing_then_rejected(#[case] format: &str) {
    let flag = format!("--format={format}");
    let result = Cli::try_parse_from(["rmhook", "export", "doc", "file:///x", flag.as_str()]);

    let err = result.expect_err("format must be rejected");
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert_eq!(exitcode::for_clap_error(&err), exitcode::FAILURE);
}

#[test]
fn given_missing_target_when_parsing_export_then_rejected() {
    let err = Cli::try_parse_from(["rmhook", "export", "doc"]).expect_err("missing positional");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(exitcode::for_clap_error(&err), exitcode::FAILURE);
}

#[test]
fn given_negative_page_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["rmhook", "export", "doc", "file:///x", "--pages", "1", "-3"]);
    assert!(result.is_err());
}

#[test]
fn given_pages_flag_without_values_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["rmhook", "export", "doc", "file:///x", "--pages"]);
    assert!(result.is_err());
}

#[test]
fn given_global_flags_when_parsing_then_available_after_subcommand() {
    let cli = Cli::try_parse_from([
        "rmhook",
        "health",
        "--base-url",
        "http://10.11.99.1:8080",
        "-vv",
    ])
    .expect("parse");

    assert_eq!(cli.base_url.as_deref(), Some("http://10.11.99.1:8080"));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Some(Commands::Health)));
}

#[test]
fn given_help_flag_when_parsing_then_not_a_failure() {
    let err = Cli::try_parse_from(["rmhook", "export", "--help"]).expect_err("help short-circuits");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(exitcode::for_clap_error(&err), exitcode::OK);
}

#[test]
fn given_version_flag_when_parsing_then_exit_ok() {
    let err = Cli::try_parse_from(["rmhook", "--version"]).expect_err("version short-circuits");
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    assert_eq!(exitcode::for_clap_error(&err), exitcode::OK);
}

#[test]
fn given_unknown_subcommand_when_parsing_then_rejected_with_failure() {
    let err = Cli::try_parse_from(["rmhook", "config", "show"]).expect_err("no config command");
    assert_eq!(exitcode::for_clap_error(&err), exitcode::FAILURE);
}
