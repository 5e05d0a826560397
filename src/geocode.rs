// src/geocode.rs

use crate::domain::Coordinate;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("geoimoveis/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Malformed coordinates in response: {0}")]
    BadCoordinates(String),
}

/// Best match for an address query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub query: String,
    pub display_name: String,
    pub coordinate: Coordinate,
}

/// Free-text address search. Returns at most one hit.
pub trait AddressLookup: Send + Sync {
    fn lookup(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError>;
}

/// Nominatim-compatible search endpoint.
pub struct NominatimGeocoder {
    endpoint: Url,
    country_hint: String,
    client: Client,
}

#[derive(Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: Url, country_hint: String, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::RequestFailed(e.to_string()))?;

        Ok(Self {
            endpoint,
            country_hint,
            client,
        })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("q", &format!("{query}{}", self.country_hint));
        url
    }
}

impl AddressLookup for NominatimGeocoder {
    fn lookup(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError> {
        let url = self.search_url(query);
        debug!(%url, "address lookup");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| GeocodeError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeocodeError::ApiError(format!("HTTP {status}: {body}")));
        }

        let places: Vec<NominatimPlace> = resp
            .json()
            .map_err(|e| GeocodeError::ApiError(e.to_string()))?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| GeocodeError::BadCoordinates(format!("{}, {}", place.lat, place.lon)))
        };
        let coordinate = Coordinate {
            lat: parse(&place.lat)?,
            lng: parse(&place.lon)?,
        };

        Ok(Some(GeocodeHit {
            query: query.to_string(),
            display_name: place.display_name,
            coordinate,
        }))
    }
}
