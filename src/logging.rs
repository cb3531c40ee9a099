//! Diagnostic output for the `vbit-config` binary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a debug level.
pub fn level_directive(debug_level: u8) -> &'static str {
    match debug_level {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the
/// debug level. Colour is used only when stderr is a terminal. Calling
/// this twice is harmless.
pub fn init(debug_level: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(debug_level)));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_env_filter(filter)
        .try_init();
}
