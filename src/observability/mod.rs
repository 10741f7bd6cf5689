//! Logging setup.
//!
//! Logs always go to stderr. `RUST_LOG` overrides the level chosen for the
//! environment.

use crate::config::Environment;
use tracing_subscriber::EnvFilter;

/// Default filter directive and whether to emit JSON for `env`.
pub fn log_format(env: Environment) -> (&'static str, bool) {
    match env {
        Environment::Local => ("debug", false),
        Environment::Dev => ("debug", true),
        Environment::Prod => ("info", true),
    }
}

/// Install the global tracing subscriber for `env`.
pub fn init_tracing(env: Environment) {
    let (default_directive, json) = log_format(env);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_per_environment() {
        assert_eq!(log_format(Environment::Local), ("debug", false));
        assert_eq!(log_format(Environment::Dev), ("debug", true));
        assert_eq!(log_format(Environment::Prod), ("info", true));
    }
}
