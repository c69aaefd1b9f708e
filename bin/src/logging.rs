//! Tracing subscriber setup.
//!
//! Events go to stderr so the report on stdout can be piped.

use tracing_subscriber::EnvFilter;

/// Library modules held at `warn` unless `RUST_LOG` says otherwise.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

/// Filter from `RUST_LOG`, else `log_level` with noisy modules quietened.
fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }
    EnvFilter::new(directives)
}

/// Install the global subscriber. Later calls are no-ops.
pub(crate) fn init(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
