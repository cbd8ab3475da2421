use clap::Parser;

use rmhook::cli::args::Cli;
use rmhook::cli::commands::execute_command;
use rmhook::cli::output;
use rmhook::exitcode;
use rmhook::util::logging::setup_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exitcode::for_clap_error(&e));
        }
    };

    setup_logging(cli.verbose);

    match execute_command(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmhook::util::testing;
    use tracing::info;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        use clap::CommandFactory;
        Cli::command().debug_assert();
        info!("Debug mode: info");
    }
}
