//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console tracing. Compact format; filter overridable via
/// `RUST_LOG`.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "sonic_api=debug,sonic_telegram=debug,sonic_core=debug,tower_http=debug".into()
        }))
        .with(console_fmt)
        .init();
}
