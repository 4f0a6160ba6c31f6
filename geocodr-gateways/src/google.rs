//! Commercial geocoding with the [Google Maps Geocoding API](https://developers.google.com/maps/documentation/geocoding).

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use geocodr_core::{
    entities::{Coordinates, GeocodeResult, GeocodeStatus, ProviderConfig},
    gateways::geocode::GeocodingGateway,
};

use crate::rate_limit;

pub const DEFAULT_NAME: &str = "google";
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(100);

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug)]
pub struct GoogleMaps {
    name: String,
    rate_limit: Duration,
    api_key: String,
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl GoogleMaps {
    /// Returns `None` if no API key is configured.
    pub fn new(cfg: ProviderConfig) -> Option<Self> {
        let ProviderConfig {
            name,
            rate_limit,
            credentials,
            endpoint,
        } = cfg;
        let api_key = credentials.filter(|key| !key.is_empty())?;
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Some(Self {
            name,
            rate_limit,
            api_key,
            endpoint,
            client: reqwest::blocking::Client::new(),
        })
    }

    fn fetch(&self, address: &str) -> Result<GeocodeResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            // The request URL contains the API key.
            .map_err(reqwest::Error::without_url)?;
        Ok(response.json().map_err(reqwest::Error::without_url)?)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeMatch>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn status_from_response(response: GeocodeResponse) -> GeocodeStatus {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = response;
    match status.as_str() {
        STATUS_OK => match results.first() {
            Some(GeocodeMatch {
                geometry: Geometry { location },
            }) => match Coordinates::try_from_lat_lng_deg(location.lat, location.lng) {
                Ok(pos) => GeocodeStatus::Success(pos),
                Err(err) => GeocodeStatus::Error(err.to_string()),
            },
            None => GeocodeStatus::NotFound,
        },
        STATUS_ZERO_RESULTS => GeocodeStatus::NotFound,
        _ => match error_message {
            Some(msg) => GeocodeStatus::Error(format!("{status} ({msg})")),
            None => GeocodeStatus::Error(status),
        },
    }
}

impl GeocodingGateway for GoogleMaps {
    fn geocode(&self, address: &str) -> GeocodeResult {
        rate_limit::wait(self.rate_limit);
        let status = match self.fetch(address) {
            Ok(response) => status_from_response(response),
            Err(err) => GeocodeStatus::Error(err.to_string()),
        };
        match &status {
            GeocodeStatus::Success(pos) => {
                log::debug!("Resolved address location '{address}': {pos}");
            }
            GeocodeStatus::Error(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
            }
            _ => {
                log::debug!("No location found for address '{address}'");
            }
        }
        GeocodeResult {
            status,
            provider: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GeocodeStatus {
        status_from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn first_result_location() {
        let status = parse(
            r#"{
              "status": "OK",
              "results": [
                { "formatted_address": "Alexanderplatz, Berlin",
                  "geometry": { "location": { "lat": 52.5219, "lng": 13.4132 },
                                "location_type": "APPROXIMATE" } },
                { "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
              ]
            }"#,
        );
        assert_eq!(status, GeocodeStatus::Success(Coordinates::new(52.5219, 13.4132)));
    }

    #[test]
    fn zero_results() {
        assert_eq!(
            parse(r#"{ "status": "ZERO_RESULTS", "results": [] }"#),
            GeocodeStatus::NotFound
        );
        assert_eq!(parse(r#"{ "status": "OK" }"#), GeocodeStatus::NotFound);
    }

    #[test]
    fn provider_failures() {
        assert_eq!(
            parse(r#"{ "status": "OVER_QUERY_LIMIT", "results": [] }"#).to_string(),
            "error: OVER_QUERY_LIMIT"
        );
        assert_eq!(
            parse(
                r#"{ "status": "REQUEST_DENIED",
                     "error_message": "The provided API key is invalid.",
                     "results": [] }"#
            )
            .to_string(),
            "error: REQUEST_DENIED (The provided API key is invalid.)"
        );
    }

    #[test]
    fn out_of_range_location() {
        let status = parse(
            r#"{ "status": "OK",
                 "results": [ { "geometry": { "location": { "lat": 120.0, "lng": 0.0 } } } ] }"#,
        );
        assert!(matches!(status, GeocodeStatus::Error(_)));
    }

    #[test]
    fn require_an_api_key() {
        let cfg = ProviderConfig::new(DEFAULT_NAME, DEFAULT_RATE_LIMIT);
        assert!(GoogleMaps::new(cfg.clone()).is_none());
        let cfg = ProviderConfig {
            credentials: Some(String::new()),
            ..cfg
        };
        assert!(GoogleMaps::new(cfg.clone()).is_none());
        let cfg = ProviderConfig {
            credentials: Some("secret".into()),
            ..cfg
        };
        assert!(GoogleMaps::new(cfg).is_some());
    }

    #[test]
    fn network_errors_become_an_error_status() {
        let gw = GoogleMaps::new(ProviderConfig {
            name: DEFAULT_NAME.into(),
            rate_limit: Duration::ZERO,
            credentials: Some("secret".into()),
            endpoint: Some("http://127.0.0.1:9/maps/api/geocode/json".into()),
        })
        .unwrap();
        let res = gw.geocode("Berlin");
        assert_eq!(res.provider, "google");
        assert!(matches!(res.status, GeocodeStatus::Error(_)));
        assert!(res.longitude().is_none());
    }

    #[test]
    fn keep_the_api_key_out_of_error_messages() {
        let gw = GoogleMaps::new(ProviderConfig {
            name: DEFAULT_NAME.into(),
            rate_limit: Duration::ZERO,
            credentials: Some("TOPSECRETKEY".into()),
            endpoint: Some("http://127.0.0.1:9/maps/api/geocode/json".into()),
        })
        .unwrap();
        let res = gw.geocode("Berlin");
        let status = res.status.to_string();
        assert!(status.starts_with("error: "));
        assert!(!status.contains("TOPSECRETKEY"));
        assert!(!status.contains("key="));
    }
}
