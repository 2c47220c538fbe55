// Logging initialisation

use tracing::Level;

use crate::error::{CliError, CliResult};

/// Level for the `debug` setting
pub fn level_for(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the stderr subscriber
///
/// Targets, thread ids and source locations are shown only in debug mode.
/// Stdout is left to command output.
pub fn init_logging(debug: bool) -> CliResult<()> {
    use tracing_subscriber::fmt;

    fmt()
        .with_max_level(level_for(debug))
        .with_target(debug)
        .with_thread_ids(debug)
        .with_file(debug)
        .with_line_number(debug)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Internal(format!("Failed to initialize logging: {}", e)))
}
