//! Diagnostic logging setup.
//!
//! Everything in the crate logs through `tracing` macros. The binary calls
//! [`init`] once before the window opens; `RUST_LOG` overrides the default
//! filter.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "conversation_viewer=info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber. Calling it twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init() {
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
