//! Telemetry helpers for applications embedding `line-chart-rs`.
//!
//! The engine only emits `tracing` events (`debug` on data and frame
//! replacement, `trace` on hit-tests). Installing a subscriber is left to the
//! host; the helpers below cover demos, benches and quick debugging sessions.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "line_chart_rs=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"line_chart_rs=trace"` to follow every pointer hit-test.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
