//! Opt-in tracing setup for hosts that want to watch recalculate passes.
//!
//! The engine itself only emits `tracing` events; it never installs a
//! subscriber. Hosts with their own subscriber stack ignore this module
//! entirely. Hosts without one can call [`init_default_tracing`] once at
//! startup to get a compact stderr log of pass stages, filtered through
//! `RUST_LOG` as usual.

/// Installs a compact `tracing` subscriber for axis pass diagnostics.
///
/// Does nothing and returns `false` unless the crate is built with the
/// `telemetry` feature. Also returns `false` when a global subscriber is
/// already installed, so calling this from library code inside a host that
/// configured its own logging is harmless.
///
/// The filter honors `RUST_LOG` and defaults to `info`, which keeps the
/// per-stage `trace!`/`debug!` events quiet until explicitly requested.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
