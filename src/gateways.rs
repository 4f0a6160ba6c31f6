use anyhow::{anyhow, Result};
use std::time::Duration;

use geocodr_core::{entities::ProviderConfig, registry::ProviderRegistry};
use geocodr_gateways::{google, nominatim, GoogleMaps, Nominatim};

use crate::config::Config;

pub fn provider_registry(cfg: &Config) -> Result<ProviderRegistry> {
    let rate_limit = |name: &str, default: Duration| {
        cfg.geocoding
            .rate_limits
            .get(name)
            .copied()
            .unwrap_or(default)
    };

    let mut registry = ProviderRegistry::new(cfg.geocoding.default_service.clone());

    let mut nominatim_cfg = ProviderConfig::new(
        nominatim::DEFAULT_NAME,
        rate_limit(nominatim::DEFAULT_NAME, nominatim::DEFAULT_RATE_LIMIT),
    );
    nominatim_cfg.endpoint = cfg.gateways.nominatim.endpoint.clone();
    registry = registry.with_provider(nominatim::DEFAULT_NAME, Nominatim::new(nominatim_cfg));

    match &cfg.gateways.google {
        Some(google_cfg) => {
            let mut provider_cfg = ProviderConfig::new(
                google::DEFAULT_NAME,
                rate_limit(google::DEFAULT_NAME, google::DEFAULT_RATE_LIMIT),
            );
            provider_cfg.credentials = Some(google_cfg.api_key.clone());
            provider_cfg.endpoint = google_cfg.endpoint.clone();
            match GoogleMaps::new(provider_cfg) {
                Some(gw) => registry = registry.with_provider(google::DEFAULT_NAME, gw),
                None => log::warn!("Invalid Google Maps API key"),
            }
        }
        None => {
            log::info!("No Google Maps API key configured");
        }
    }

    for name in cfg.geocoding.rate_limits.keys() {
        if !registry.is_registered(name) {
            log::debug!("Ignore rate limit of unavailable service '{name}'");
        }
    }

    if !registry.is_registered(registry.default_service()) {
        return Err(anyhow!(
            "The default geocoding service '{}' is not available (available: {})",
            registry.default_service(),
            registry.list_available().join(", ")
        ));
    }
    log::info!(
        "Registered geocoding services: {} (default: {})",
        registry.list_available().join(", "),
        registry.default_service()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GoogleGateway;

    fn default_config() -> Config {
        Config::default()
    }

    #[test]
    fn register_nominatim_only_without_api_key() {
        let mut cfg = default_config();
        cfg.gateways.google = None;
        let registry = provider_registry(&cfg).unwrap();
        assert_eq!(registry.list_available(), vec!["nominatim"]);
        assert_eq!(registry.default_service(), "nominatim");
    }

    #[test]
    fn register_google_with_api_key() {
        let mut cfg = default_config();
        cfg.gateways.google = Some(GoogleGateway {
            api_key: "secret".to_string(),
            endpoint: None,
        });
        let registry = provider_registry(&cfg).unwrap();
        assert_eq!(registry.list_available(), vec!["nominatim", "google"]);
    }

    #[test]
    fn reject_unavailable_default_service() {
        let mut cfg = default_config();
        cfg.geocoding.default_service = "google".to_string();
        cfg.gateways.google = None;
        assert!(provider_registry(&cfg).is_err());
    }
}
