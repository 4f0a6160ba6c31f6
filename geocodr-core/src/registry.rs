use crate::gateways::geocode::GeocodingGateway;
use geocodr_entities::geocode::GeocodeResult;

type Gateway = Box<dyn GeocodingGateway + Send + Sync>;

/// All configured providers, addressed by name.
///
/// The registry is assembled once at startup and only read afterwards.
pub struct ProviderRegistry {
    default_service: String,
    providers: Vec<(String, Gateway)>,
}

impl ProviderRegistry {
    pub fn new(default_service: impl Into<String>) -> Self {
        Self {
            default_service: default_service.into(),
            providers: vec![],
        }
    }

    /// Registers a provider, replacing any previous one with the same name.
    pub fn with_provider<G>(mut self, name: impl Into<String>, gateway: G) -> Self
    where
        G: GeocodingGateway + Send + Sync + 'static,
    {
        let name = name.into();
        let gateway: Gateway = Box::new(gateway);
        match self.providers.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = gateway,
            None => self.providers.push((name, gateway)),
        }
        self
    }

    pub fn default_service(&self) -> &str {
        &self.default_service
    }

    /// Names of the registered providers in registration order.
    pub fn list_available(&self) -> Vec<&str> {
        self.providers.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.providers.iter().any(|(n, _)| n == name)
    }

    /// Resolves `address` with the named provider or the default one.
    ///
    /// An unknown provider name yields an `invalid_service` result instead
    /// of an error.
    pub fn geocode(&self, address: &str, service_name: Option<&str>) -> GeocodeResult {
        let name = service_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_service.as_str());
        let Some((_, gateway)) = self.providers.iter().find(|(n, _)| n == name) else {
            log::warn!("Requested geocoding service '{name}' is not available");
            return GeocodeResult::invalid_service(name);
        };
        log::debug!("Resolving '{address}' with {name}");
        let mut result = gateway.geocode(address);
        if result.provider != name {
            result.provider = name.to_string();
        }
        result
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("default_service", &self.default_service)
            .field("providers", &self.list_available())
            .finish()
    }
}
