//! Structured logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
//! Logs stay on stderr so query output on stdout can be piped.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug,hyper=warn,reqwest=warn,rustls=warn"
    } else {
        "info,hyper=warn,reqwest=warn"
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
