use std::time::Duration;

/// Static settings of a single geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub name: String,
    /// Fixed delay before every request.
    pub rate_limit: Duration,
    pub credentials: Option<String>,
    /// Overrides the public endpoint of the provider.
    pub endpoint: Option<String>,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>, rate_limit: Duration) -> Self {
        Self {
            name: name.into(),
            rate_limit,
            credentials: None,
            endpoint: None,
        }
    }
}
