//! Logging configuration
//!
//! Initializes tracing for the application. Output goes to stderr so a
//! pipeline printed on stdout can be piped cleanly.

/// Initializes logging with the specified level
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a second call, e.g. from another test, keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        init_logging("debug");
        init_logging("info");
    }
}
