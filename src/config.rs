use std::env;
use std::net::{IpAddr, SocketAddr};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults, which bind every interface
    /// on port 443.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "443".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .service_host
            .parse::<IpAddr>()
            .with_context(|| {
                format!("SERVICE_HOST must be an IP address, got '{}'", self.service_host)
            })?;

        Ok(SocketAddr::new(ip, self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        if self.service_port < 1024 {
            tracing::info!("  Port {} is privileged; the process needs root or CAP_NET_BIND_SERVICE", self.service_port);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[("SERVICE_PORT", "8080"), ("SERVICE_HOST", "127.0.0.1")]).unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_port, 443);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.socket_addr().unwrap(), "0.0.0.0:443".parse().unwrap());
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ipv6_host() {
        let config = config_from(&[("SERVICE_HOST", "::1"), ("SERVICE_PORT", "9443")]).unwrap();

        assert_eq!(config.socket_addr().unwrap(), "[::1]:9443".parse().unwrap());
    }

    #[test]
    fn test_hostname_is_rejected() {
        let config = config_from(&[("SERVICE_HOST", "localhost")]).unwrap();

        let error = config.socket_addr().unwrap_err();
        assert!(error.to_string().contains("SERVICE_HOST"));
        assert!(error.to_string().contains("localhost"));
    }
}
