//! Telemetry helpers for applications embedding `plotboard`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call one of the
//! init helpers here or wire their own `tracing` subscriber and filters.
//! The library itself only emits events, it never installs a subscriber.

/// Initializes a `tracing` subscriber honoring `RUST_LOG`, falling back to
/// `default_filter`, when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}

/// [`init_tracing`] at `info` level, the default for the bundled tools.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}
