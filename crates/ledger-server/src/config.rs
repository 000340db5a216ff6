//! Server configuration, read from runtime secrets

use anyhow::{bail, Context, Result};
use std::time::Duration;

const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the customer service, without trailing slash
    pub customer_service_url: String,
    /// Bearer token forwarded to the customer service
    pub customer_service_token: Option<String>,
    pub customer_lookup_timeout: Duration,
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup (secrets, environment, tests)
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let customer_service_url = get("CUSTOMER_SERVICE_URL")
            .context("CUSTOMER_SERVICE_URL is required")?
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(customer_service_url.starts_with("http://")
            || customer_service_url.starts_with("https://"))
        {
            bail!("CUSTOMER_SERVICE_URL must be an http(s) URL, got {customer_service_url:?}");
        }

        let customer_lookup_timeout = match get("CUSTOMER_LOOKUP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid CUSTOMER_LOOKUP_TIMEOUT_SECS: {raw:?}"))?;
                if secs == 0 {
                    bail!("CUSTOMER_LOOKUP_TIMEOUT_SECS must be positive");
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        };

        Ok(Self {
            customer_service_url,
            customer_service_token: get("CUSTOMER_SERVICE_TOKEN").filter(|t| !t.is_empty()),
            customer_lookup_timeout,
            api_key: get("LEDGER_API_KEY").filter(|k| !k.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("CUSTOMER_SERVICE_URL", "http://customers:8081/")]).unwrap();

        assert_eq!(cfg.customer_service_url, "http://customers:8081");
        assert_eq!(cfg.customer_lookup_timeout, Duration::from_secs(10));
        assert_eq!(cfg.customer_service_token, None);
        assert_eq!(cfg.api_key, None);
    }

    #[test]
    fn test_all_values() {
        let cfg = config(&[
            ("CUSTOMER_SERVICE_URL", "https://customers.internal"),
            ("CUSTOMER_SERVICE_TOKEN", "tok"),
            ("CUSTOMER_LOOKUP_TIMEOUT_SECS", "3"),
            ("LEDGER_API_KEY", "key"),
        ])
        .unwrap();

        assert_eq!(cfg.customer_lookup_timeout, Duration::from_secs(3));
        assert_eq!(cfg.customer_service_token.as_deref(), Some("tok"));
        assert_eq!(cfg.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_missing_url_fails() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("CUSTOMER_SERVICE_URL", "customers:8081")]).is_err());
        assert!(config(&[
            ("CUSTOMER_SERVICE_URL", "http://customers"),
            ("CUSTOMER_LOOKUP_TIMEOUT_SECS", "0"),
        ])
        .is_err());
        assert!(config(&[
            ("CUSTOMER_SERVICE_URL", "http://customers"),
            ("CUSTOMER_LOOKUP_TIMEOUT_SECS", "soon"),
        ])
        .is_err());
    }
}
