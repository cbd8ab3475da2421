use rmhook::cli::commands::load_settings;
use rmhook::cli::output;
use rmhook::cli::smoke::{self, SmokeCli};
use rmhook::cli::CliError;
use rmhook::exitcode;
use rmhook::infrastructure::{InfraError, ServiceContainer};
use rmhook::util::logging::setup_logging;

fn main() {
    // Arguments are checked before the health check: a typo never reaches the network.
    let cli = match SmokeCli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = exitcode::for_clap_error(&e);
            if code != exitcode::OK {
                println!("Run without arguments to see usage examples.");
            }
            std::process::exit(code);
        }
    };

    setup_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: SmokeCli) -> Result<i32, CliError> {
    let settings = load_settings(cli.base_url)?;
    let container = ServiceContainer::new(settings)?;
    let stdout = std::io::stdout();
    let code = smoke::run(cli.command, &container.document_service(), stdout.lock())
        .map_err(|e| InfraError::io("write report", e))?;
    Ok(code)
}
