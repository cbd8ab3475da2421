//! Command dispatch for the `rmhook` binary

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::DocumentService;
use crate::cli::args::{Cli, Commands};
use crate::cli::report::Reporter;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::DocumentRequest;
use crate::exitcode;
use crate::infrastructure::{InfraError, ServiceContainer};

/// Run the parsed command line and return the process exit code.
///
/// A failed server exchange is reported on stdout and yields
/// [`exitcode::FAILURE`]; `Err` is reserved for local problems
/// (bad `--base-url`, I/O) that main prints itself.
pub fn execute_command(cli: Cli) -> CliResult<i32> {
    match cli.command {
        Some(Commands::Export(args)) => {
            let container = build_container(cli.base_url)?;
            submit(&container.document_service(), args.into())
        }
        Some(Commands::Import(args)) => {
            let container = build_container(cli.base_url)?;
            submit(&container.document_service(), args.into())
        }
        Some(Commands::Health) => {
            let container = build_container(cli.base_url)?;
            health(&container.document_service())
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(exitcode::OK)
        }
    }
}

/// Default settings with the `--base-url` flag applied.
pub fn load_settings(base_url: Option<String>) -> CliResult<Settings> {
    let settings = Settings::default().with_base_url(base_url)?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_container(base_url: Option<String>) -> CliResult<ServiceContainer> {
    let settings = load_settings(base_url)?;
    Ok(ServiceContainer::new(settings)?)
}

/// Announce, send and report one document request on stdout.
#[instrument(skip(service))]
fn submit(service: &DocumentService, request: DocumentRequest) -> CliResult<i32> {
    let stdout = io::stdout();
    let code = run_request(service, &request, stdout.lock())
        .map_err(|e| InfraError::io("write report", e))?;
    Ok(code)
}

#[instrument(skip(service))]
fn health(service: &DocumentService) -> CliResult<i32> {
    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let healthy = reporter
        .health(&service.health())
        .map_err(|e| InfraError::io("write report", e))?;
    Ok(exitcode::from_success(healthy))
}

/// Send a single request and write the full report to `out`.
pub fn run_request<W: Write>(
    service: &DocumentService,
    request: &DocumentRequest,
    out: W,
) -> io::Result<i32> {
    let mut reporter = Reporter::new(out);
    reporter.announce(request)?;
    let result = service.submit(request);
    reporter.report(request.kind(), &result)
}
