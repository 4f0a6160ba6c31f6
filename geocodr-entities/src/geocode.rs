use crate::geo::Coordinates;
use std::fmt;

/// Outcome of a single lookup.
///
/// Coordinates only exist for [`GeocodeStatus::Success`], so a result can
/// never carry a position together with a failure status.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeStatus {
    Success(Coordinates),
    NotFound,
    /// The provider could not be queried or answered with garbage.
    Error(String),
    /// No provider is registered under the requested name.
    InvalidService,
}

impl GeocodeStatus {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Success(pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Success(_) => f.write_str("success"),
            Self::NotFound => f.write_str("not_found"),
            Self::Error(cause) => write!(f, "error: {cause}"),
            Self::InvalidService => f.write_str("error: invalid_service"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub status: GeocodeStatus,
    /// Name of the provider that produced (or should have produced) the result.
    pub provider: String,
}

impl GeocodeResult {
    pub fn success(provider: impl Into<String>, pos: Coordinates) -> Self {
        Self {
            status: GeocodeStatus::Success(pos),
            provider: provider.into(),
        }
    }

    pub fn not_found(provider: impl Into<String>) -> Self {
        Self {
            status: GeocodeStatus::NotFound,
            provider: provider.into(),
        }
    }

    pub fn error(provider: impl Into<String>, cause: impl fmt::Display) -> Self {
        Self {
            status: GeocodeStatus::Error(cause.to_string()),
            provider: provider.into(),
        }
    }

    pub fn invalid_service(provider: impl Into<String>) -> Self {
        Self {
            status: GeocodeStatus::InvalidService,
            provider: provider.into(),
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.status.coordinates().map(|pos| pos.lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.status.coordinates().map(|pos| pos.lng)
    }
}
