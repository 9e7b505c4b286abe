use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over `--log-level` when set. Output goes to stderr so
/// `--format json` stays parseable.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    // A second init (tests calling `run` twice) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directives(level: LogLevel) -> String {
    format!("warn,loma={level},loma_cli={level},loma_catalog={level},loma_types={level}")
}
