use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Upstream timeout is not 0
/// - Upstream base URL is http(s) and the ticket parameter is named
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let upstream = &config.upstream;
    if upstream.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "upstream.timeout_secs cannot be 0".to_string(),
        ));
    }

    if upstream.ticket_param.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "upstream.ticket_param cannot be empty".to_string(),
        ));
    }

    match reqwest::Url::parse(&upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => {
            return Err(ConfigError::ValidationError(format!(
                "upstream.base_url must be http or https, got scheme '{}'",
                url.scheme()
            )));
        }
        Err(e) => {
            return Err(ConfigError::ValidationError(format!(
                "upstream.base_url is not a valid URL: {}",
                e
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, UpstreamConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            upstream: UpstreamConfig::default(),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_timeout_zero_fails() {
        let config = Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                timeout_secs: 0,
                ..Default::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_blank_ticket_param_fails() {
        let config = Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                ticket_param: "  ".to_string(),
                ..Default::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_non_http_base_url_fails() {
        let config = Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                base_url: "ftp://newtina.nc811.org/display".to_string(),
                ..Default::default()
            },
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("scheme 'ftp'"));
    }

    #[test]
    fn test_validate_unparseable_base_url_fails() {
        let config = Config {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                base_url: "not a url".to_string(),
                ..Default::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }
}
