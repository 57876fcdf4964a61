//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays reserved for command output.
//! The filter comes from `SHORTLY_LOG` (same syntax as `RUST_LOG`); without it only warnings
//! are shown, or debug output when `verbose` is set.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHORTLY_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "shortly=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "shortly=debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
