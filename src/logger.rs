use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Directives used when `RUST_LOG` is unset: this crate at `info`, dependencies at `warn`.
const DEFAULT_DIRECTIVES: &str = "warn,region_sampler=info";

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_DIRECTIVES`].
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Span timings are only worth the noise once some directive enables debug output.
fn span_events(filter: &EnvFilter) -> FmtSpan {
    match filter.max_level_hint() {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}
