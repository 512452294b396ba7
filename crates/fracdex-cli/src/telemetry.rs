//! Log output for the `fracdex` binary.
//!
//! Events are written to stderr through `tracing_subscriber::fmt` so that
//! stdout only ever carries generated keys. Verbosity follows `RUST_LOG` and
//! defaults to `warn`; `RUST_LOG=fracdex=trace` additionally shows the spans
//! the library opens around each generator call.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_line_number(true)
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
