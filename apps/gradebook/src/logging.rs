//! Tracing subscriber setup.
//!
//! Call-trace events carry their complete line as the message, so the fmt
//! layer is stripped down to bare messages: no time, no level, no target,
//! no colour. They go to stdout, interleaved with the command output.

use gradebook_core::CALL_TARGET;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;

/// Filter used when call tracing is enabled and `RUST_LOG` is unset.
fn default_directives() -> String {
    format!("warn,{}=info", CALL_TARGET)
}

/// Build the filter: `--quiet` silences call traces, otherwise `RUST_LOG`
/// wins over the default directives.
pub fn filter(quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new(format!("warn,{}=off", CALL_TARGET));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()))
}

/// Subscriber writing bare event messages to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt = fmt::layer()
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry().with(filter).with(fmt)
}

/// Install the global subscriber on stdout.
pub fn init(quiet: bool) {
    subscriber(filter(quiet), std::io::stdout).init();
}
