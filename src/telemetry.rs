//! Tracing setup for hosts embedding `chart-shapes`.
//!
//! The geometry core never installs a subscriber on its own. Hosts either
//! call [`init_default_tracing`] once at startup or wire their own
//! `tracing` subscriber. Series and animation state transitions are emitted
//! under the `chart_shapes` target.

/// Installs a compact `tracing-subscriber` fmt subscriber (feature `telemetry`).
///
/// The filter is read from `RUST_LOG` and falls back to `default_directive`.
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// Same as [`init_tracing_with_default`] with an `info` fallback filter.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}
