use std::{collections::BTreeMap, net::IpAddr, time::Duration};

use duration_str::deserialize_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("geocodr.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub webserver: Option<WebServer>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub default_service: Option<String>,
    pub max_batch_size: Option<usize>,
    pub rate_limits: Option<BTreeMap<String, RateLimit>>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RateLimit {
    Seconds(f64),
    Duration(#[serde(deserialize_with = "deserialize_duration")] Duration),
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
    pub upload_limit_mib: Option<u64>,
    pub cors: Option<bool>,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub google: Option<Google>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub endpoint: Option<String>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Google {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.geocoding.is_some());
        assert!(cfg.webserver.is_some());
        let gateway = cfg.gateway.unwrap();
        assert!(gateway.google.unwrap().api_key.is_none());
    }

    #[test]
    fn default_geocoding_config() {
        let cfg = Geocoding::default();
        assert_eq!(cfg.default_service.as_deref(), Some("nominatim"));
        assert_eq!(cfg.max_batch_size, Some(1000));
        let rate_limits = cfg.rate_limits.unwrap();
        assert_eq!(rate_limits["nominatim"], RateLimit::Seconds(1.0));
        assert_eq!(rate_limits["google"], RateLimit::Seconds(0.1));
    }

    #[test]
    fn parse_rate_limits_as_seconds_or_duration_strings() {
        let cfg: Config = toml::from_str(
            r#"
            [geocoding.rate-limits]
            nominatim = 2
            google = "250ms"
            "#,
        )
        .unwrap();
        let rate_limits = cfg.geocoding.unwrap().rate_limits.unwrap();
        assert_eq!(
            rate_limits["google"],
            RateLimit::Duration(Duration::from_millis(250))
        );
        // whole seconds
        assert_eq!(rate_limits["nominatim"], RateLimit::Seconds(2.0));
    }

    #[test]
    fn parse_empty_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.geocoding.is_none());
        assert!(cfg.webserver.is_none());
        assert!(cfg.gateway.is_none());
    }
}
