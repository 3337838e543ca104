//! Tracing helpers for applications embedding `chartmotion-rs`.
//!
//! Subscriber setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` once at startup or install their own `tracing`
//! subscriber and filtering.

/// Installs a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` on successful installation, `false` when the feature is
/// disabled or the host already registered a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
