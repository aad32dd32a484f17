//! Logger setup for native hosts
//!
//! The sim only talks to the `log` facade; hosts pick the backend. The
//! headless runner uses `env_logger` through [`init`].

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset
fn fallback_level(verbose: bool) -> LevelFilter {
    match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    }
}

/// Install `env_logger` with millisecond timestamps.
///
/// `RUST_LOG` filters take precedence; `--verbose` only moves the fallback
/// from info to debug. Safe to call more than once.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(fallback_level(verbose).as_str());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();
    if builder.try_init().is_err() {
        log::debug!("Logger already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_lowers_fallback() {
        assert_eq!(fallback_level(false), LevelFilter::Info);
        assert_eq!(fallback_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("logger still usable");
    }
}
