use crate::config::types::{Config, FetcherConfig};
use crate::ConfigError;

/// Longest fetch timeout accepted from a config file (milliseconds)
const MAX_TIMEOUT_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces/tabs
    if !config
        .user_agent
        .chars()
        .all(|c| c == ' ' || c == '\t' || c.is_ascii_graphic())
    {
        return Err(ConfigError::Validation(format!(
            "user_agent contains characters not allowed in a header: '{}'",
            config.user_agent
        )));
    }

    if config.timeout_ms < 1 || config.timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::Validation(format!(
            "timeout_ms must be between 1 and {}, got {}",
            MAX_TIMEOUT_MS, config.timeout_ms
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_user_agent() {
        let mut config = FetcherConfig::default();
        config.user_agent = "html-insight/1.0 (+https://example.com)".to_string();
        assert!(validate_fetcher_config(&config).is_ok());

        config.user_agent = "   ".to_string();
        assert!(validate_fetcher_config(&config).is_err());

        config.user_agent = "bad\nagent".to_string();
        assert!(validate_fetcher_config(&config).is_err());
    }

    #[test]
    fn test_validate_timeout_bounds() {
        let mut config = FetcherConfig::default();

        config.timeout_ms = 0;
        assert!(validate_fetcher_config(&config).is_err());

        config.timeout_ms = 1;
        assert!(validate_fetcher_config(&config).is_ok());

        config.timeout_ms = MAX_TIMEOUT_MS;
        assert!(validate_fetcher_config(&config).is_ok());

        config.timeout_ms = MAX_TIMEOUT_MS + 1;
        assert!(matches!(
            validate_fetcher_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
