//! Free geocoding with the public [Nominatim](https://nominatim.org) service of OpenStreetMap.

use std::time::Duration;

use geocoding::{Forward, Openstreetmap, Point};

use geocodr_core::{
    entities::{Coordinates, GeocodeResult, ProviderConfig},
    gateways::geocode::GeocodingGateway,
};

use crate::rate_limit;

pub const DEFAULT_NAME: &str = "nominatim";
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/";
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_secs(1);

pub struct Nominatim {
    name: String,
    rate_limit: Duration,
    osm: Openstreetmap,
}

impl Nominatim {
    pub fn new(cfg: ProviderConfig) -> Self {
        let ProviderConfig {
            name,
            rate_limit,
            endpoint,
            ..
        } = cfg;
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let osm = Openstreetmap::new_with_endpoint(with_trailing_slash(endpoint));
        Self {
            name,
            rate_limit,
            osm,
        }
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new(ProviderConfig::new(DEFAULT_NAME, DEFAULT_RATE_LIMIT))
    }
}

// The search path is appended to the endpoint as is.
fn with_trailing_slash(mut endpoint: String) -> String {
    if !endpoint.ends_with('/') {
        endpoint.push('/');
    }
    endpoint
}

fn first_match(points: &[Point<f64>]) -> Option<Result<Coordinates, String>> {
    points.first().map(|point| {
        // GeoJSON positions are (lng, lat)
        Coordinates::try_from_lat_lng_deg(point.y(), point.x()).map_err(|err| err.to_string())
    })
}

impl GeocodingGateway for Nominatim {
    fn geocode(&self, address: &str) -> GeocodeResult {
        rate_limit::wait(self.rate_limit);
        let points: Vec<Point<f64>> = match self.osm.forward(address) {
            Ok(points) => points,
            Err(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
                return GeocodeResult::error(&self.name, err);
            }
        };
        match first_match(&points) {
            Some(Ok(pos)) => {
                log::debug!("Resolved address location '{address}': {pos}");
                GeocodeResult::success(&self.name, pos)
            }
            Some(Err(err)) => {
                log::warn!("Invalid location for address '{address}': {err}");
                GeocodeResult::error(&self.name, err)
            }
            None => {
                log::debug!("No location found for address '{address}'");
                GeocodeResult::not_found(&self.name)
            }
        }
    }
}
