//! Tracing setup. Logs go to stderr so they never mix with the board.

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from an explicit directive, then `RUST_LOG`, then `warn`.
pub fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

pub fn init(directive: Option<&str>) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    if let Err(err) = installed {
        debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn explicit_directive_wins() {
        assert_eq!(filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("off"));
        init(Some("off"));
    }
}
