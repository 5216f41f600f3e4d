//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

const DEVELOPMENT_FILTER: &str = "modedit=debug,tower_http=debug";
const PRODUCTION_FILTER: &str = "modedit=info,tower_http=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Map a `--log-format` value to a profile; unknown values fall back
    /// to `Development`.
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Profile::Production,
            "test" => Profile::Test,
            _ => Profile::Development,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops. `RUST_LOG` overrides the
/// profile's default filter. Output goes to stderr.
///
/// - **Development**: human-readable logs at debug level
/// - **Production**: JSON logs at info level
/// - **Test**: bare registry; use `init_test_capture()` to record events
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEVELOPMENT_FILTER)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PRODUCTION_FILTER)),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parse() {
        assert_eq!(Profile::parse("json"), Profile::Production);
        assert_eq!(Profile::parse("pretty"), Profile::Development);
        assert_eq!(Profile::parse("test"), Profile::Test);
        assert_eq!(Profile::parse("anything"), Profile::Development);
    }
}
