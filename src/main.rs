use std::{env, io, process};

use cpp_demo::cli::{execute_command, output, Cli};
use cpp_demo::exitcode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    setup_logging();

    let cli = Cli::try_from_args(env::args_os().skip(1)).unwrap_or_else(|e| {
        tracing::debug!("argument parsing failed, greeting instead: {}", e);
        Cli::default()
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute_command(&cli, &mut out) {
        tracing::debug!("{}", e);
        if tracing::enabled!(tracing::Level::DEBUG) {
            output::error(&e);
        }
        process::exit(e.exit_code());
    }
    process::exit(exitcode::OK);
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warn).
fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
