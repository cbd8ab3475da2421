//! Process exit codes
//!
//! Every failure (bad arguments, transport error, non-200 reply, failed
//! health check) exits with the same code.

/// Successful termination (also help and usage display)
pub const OK: i32 = 0;

/// Any failure
pub const FAILURE: i32 = 1;

/// Exit code for a finished request.
pub fn from_success(success: bool) -> i32 {
    if success {
        OK
    } else {
        FAILURE
    }
}

/// Exit code for an argument parse result that stopped the program.
///
/// clap would exit with 2 on errors; here every parse error is a plain
/// failure. `--help`/`--version` are rendered through the same error path
/// but go to stdout and count as success.
pub fn for_clap_error(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        FAILURE
    } else {
        OK
    }
}
