//! Diagnostic logging
//!
//! Library code logs through `tracing`; this installs the stderr subscriber.
//! `RUST_LOG` wins when set, then `-v` flags, then the configured verbosity.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use firelayout::config::Verbosity;

pub fn init(verbose: u8, configured: Verbosity) {
    let level = level_for(verbose, configured);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("firelayout={level}")));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn level_for(verbose: u8, configured: Verbosity) -> &'static str {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        },
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
