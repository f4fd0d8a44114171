use std::str::FromStr;

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[macro_export]
macro_rules! log_warning {
    ($msg:literal) => {
        eprint!("warning: ");
        eprintln!($msg);
    };
}

/// Install a subscriber that writes logs to stderr, so that stdout only carries the result line.
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn setup(level: LevelFilter, display_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mongodb_probe={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(display_color)
        .init();
}

/// Accepts the level names `tracing` understands (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`), in any case.
pub fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(value.trim()).map_err(|_| {
        format!("unknown log level \"{value}\"; expected one of off, error, warn, info, debug, trace")
    })
}
