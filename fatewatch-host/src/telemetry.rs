//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use fatewatch_core::config::{GeneralConfig, LogFormat};
use fatewatch_core::error::{FateError, Result};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `general.log_level`. Calling this again after a
/// subscriber is installed leaves the existing one in place.
///
/// # Errors
/// Returns `FateError::Config` if the log level is not a valid filter.
pub fn init(general: &GeneralConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&general.log_level)
            .map_err(|e| FateError::Config(format!("general.log_level: {e}")))?,
    };

    let installed = match general.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let general = GeneralConfig::default();
        assert!(init(&general).is_ok());
        assert!(init(&general).is_ok());
    }
}
