//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by [`crate::BiliClient`] and [`crate::CommClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Fixed User-Agent; a desktop browser string is picked at random when unset
    pub user_agent: Option<String>,
    /// Log every request and raw response body at debug level
    pub debug: bool,
    /// Whole-request timeout in seconds
    pub timeout_seconds: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_seconds: u64,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            debug: false,
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

/// Base URLs, each ending with `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub api: String,
    pub vc: String,
    pub live: String,
    pub main: String,
    pub passport: String,
    /// Charge (elec) rankings
    pub elec: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api: "https://api.bilibili.com/".to_string(),
            vc: "https://api.vc.bilibili.com/".to_string(),
            live: "https://api.live.bilibili.com/".to_string(),
            main: "https://www.bilibili.com/".to_string(),
            passport: "https://passport.bilibili.com/".to_string(),
            elec: "https://elec.bilibili.com/".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every base at one server, e.g. a local mock.
    #[must_use]
    pub fn all(base: &str) -> Self {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Self {
            api: base.clone(),
            vc: base.clone(),
            live: base.clone(),
            main: base.clone(),
            passport: base.clone(),
            elec: base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.user_agent.is_none());
        assert!(!config.debug);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.endpoints.api, "https://api.bilibili.com/");
        assert_eq!(config.endpoints.passport, "https://passport.bilibili.com/");
        assert_eq!(config.endpoints.elec, "https://elec.bilibili.com/");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"debug":true,"endpoints":{"api":"http://localhost:8080/"}}"#)
                .unwrap();
        assert!(config.debug);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.endpoints.api, "http://localhost:8080/");
        assert_eq!(config.endpoints.vc, "https://api.vc.bilibili.com/");
    }

    #[test]
    fn test_endpoints_all_adds_trailing_slash() {
        let endpoints = Endpoints::all("http://127.0.0.1:9000");
        assert_eq!(endpoints.api, "http://127.0.0.1:9000/");
        assert_eq!(endpoints.live, "http://127.0.0.1:9000/");
        assert_eq!(endpoints.elec, "http://127.0.0.1:9000/");
        assert_eq!(Endpoints::all("http://x/").main, "http://x/");
    }
}
