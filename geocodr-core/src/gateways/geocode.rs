use geocodr_entities::geocode::GeocodeResult;

/// A single external geocoding provider.
///
/// Implementations never fail: every problem while talking to the
/// provider is reported through [`GeocodeStatus::Error`](geocodr_entities::geocode::GeocodeStatus::Error).
pub trait GeocodingGateway {
    fn geocode(&self, address: &str) -> GeocodeResult;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use geocodr_entities::{geo::Coordinates, geocode::GeocodeStatus};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Answers every lookup with a fixed status and counts the calls.
    #[derive(Debug, Clone)]
    pub struct MockGateway {
        pub name: &'static str,
        pub status: GeocodeStatus,
        pub calls: Arc<AtomicUsize>,
    }

    impl MockGateway {
        pub fn hit(name: &'static str, lat: f64, lng: f64) -> Self {
            Self::with_status(name, GeocodeStatus::Success(Coordinates::new(lat, lng)))
        }

        pub fn with_status(name: &'static str, status: GeocodeStatus) -> Self {
            Self {
                name,
                status,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl GeocodingGateway for MockGateway {
        fn geocode(&self, _: &str) -> GeocodeResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            GeocodeResult {
                status: self.status.clone(),
                provider: self.name.to_string(),
            }
        }
    }
}
