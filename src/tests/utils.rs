use crate::app::App;
use crate::catalog::{Catalog, CatalogSource, CatalogStore, RawCatalog, RawRegions};
use crate::config::Config;
use crate::domain::{
    Bounds, Contact, Coordinate, Opportunity, Property, PropertyType, Region, Source,
};
use crate::errors::{ResultResp, ServerError};
use crate::geocode::{AddressLookup, GeocodeError, GeocodeHit};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;

pub fn porto_alegre() -> Region {
    Region {
        key: "porto_alegre".to_string(),
        name: "Porto Alegre".to_string(),
        bounds: Bounds {
            southwest: Coordinate { lat: -30.27, lng: -51.30 },
            northeast: Coordinate { lat: -29.93, lng: -51.01 },
        },
        center: Coordinate { lat: -30.0346, lng: -51.2177 },
        zoom: 11,
    }
}

/// A listing inside Porto Alegre with the given tier and score.
pub fn property(id: &str, opportunity: Opportunity, score: f64) -> Property {
    Property {
        id: id.to_string(),
        location: Coordinate { lat: -30.03, lng: -51.22 },
        price: 450_000,
        area: 90.0,
        value_per_m2: 5000.0,
        property_type: PropertyType::Apartment,
        source: Source::new("zap"),
        opportunity,
        opportunity_score: score,
        title: format!("Imóvel {id}"),
        address: "Rua dos Andradas, 1000".to_string(),
        description: "Apartamento bem localizado".to_string(),
        features: vec!["Sacada".to_string()],
        photos: vec![],
        contact: Contact::default(),
        url: None,
        bedrooms: 2,
        bathrooms: 1,
        parking_spaces: 0,
    }
}

pub fn property_at(id: &str, lat: f64, lng: f64) -> Property {
    let mut p = property(id, Opportunity::Medium, 1.0);
    p.location = Coordinate { lat, lng };
    p
}

/// Two regions, five listings:
/// - porto_alegre: pa-high-1 (high, 10), pa-high-2 (high, 20), pa-medium (medium, 99),
///   pa-house (low, house, olx, 1.2M)
/// - canoas: canoas-land (none, land)
/// - outside every region: `casa 1/ção%`, an id that needs percent-encoding
pub fn catalog() -> Catalog {
    let regions: RawRegions = serde_json::from_str(
        r#"{
            "porto_alegre": {
                "name": "Porto Alegre",
                "bounds": [[-30.27, -51.30], [-29.93, -51.01]],
                "center": [-30.0346, -51.2177],
                "zoom": 11
            },
            "canoas": {
                "name": "Canoas",
                "bounds": [[-29.97, -51.23], [-29.85, -51.10]],
                "center": [-29.9178, -51.1839],
                "zoom": 12
            }
        }"#,
    )
    .unwrap();

    let raw: RawCatalog = serde_json::from_str(
        r#"{
            "last_updated": "2024-06-01 08:00",
            "properties": [
                {"id": "pa-high-1", "lat": -30.03, "lng": -51.22, "price": 500000, "area": 100,
                 "value_per_m2": 5000, "type": "apartment", "source": "zap",
                 "opportunity": "high", "opportunity_score": 10, "title": "Apartamento Centro",
                 "address": "Rua A, 1", "description": "Perto de tudo",
                 "photos": ["https://img.example/1.jpg", "https://img.example/2.jpg"],
                 "features": ["Sacada", "Elevador"],
                 "contact": {"phone": "(51) 99999-0000", "email": "corretor@example.com"},
                 "url": "https://listing.example/pa-high-1", "bedrooms": 2, "bathrooms": 1},
                {"id": "pa-high-2", "lat": -30.05, "lng": -51.18, "price": 800000, "area": 100,
                 "value_per_m2": 8000, "type": "apartment", "source": "vivareal",
                 "opportunity": "high", "opportunity_score": 20, "title": "Apartamento Moinhos"},
                {"id": "pa-medium", "lat": -30.10, "lng": -51.20, "price": 300000, "area": 60,
                 "value_per_m2": 5000, "type": "apartment", "source": "zap",
                 "opportunity": "medium", "opportunity_score": 99, "title": "Apartamento Sul"},
                {"id": "pa-house", "lat": -30.00, "lng": -51.15, "price": 1200000, "area": 200,
                 "value_per_m2": 6000, "type": "house", "source": "olx",
                 "opportunity": "low", "opportunity_score": 50, "title": "Casa Petrópolis"},
                {"id": "canoas-land", "lat": -29.90, "lng": -51.15, "price": 200000, "area": 400,
                 "value_per_m2": 500, "type": "land", "source": "olx",
                 "title": "Terreno Canoas"},
                {"id": "casa 1/ção%", "lat": 0.0, "lng": 0.0, "price": 100000, "area": 50,
                 "type": "house", "source": "zap", "title": "Casa fora das regiões"}
            ]
        }"#,
    )
    .unwrap();

    Catalog::from_raw(regions, raw).unwrap()
}

/// Address lookup stub with a canned answer.
pub enum StubLookup {
    Hit(Coordinate),
    Miss,
    Fail,
}

impl AddressLookup for StubLookup {
    fn lookup(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError> {
        match self {
            StubLookup::Hit(coordinate) => Ok(Some(GeocodeHit {
                query: query.to_string(),
                display_name: format!("{query}, Porto Alegre"),
                coordinate: *coordinate,
            })),
            StubLookup::Miss => Ok(None),
            StubLookup::Fail => Err(GeocodeError::RequestFailed("connection refused".into())),
        }
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

/// App over the in-memory test catalog.
pub fn test_app(lookup: StubLookup) -> App {
    App {
        config: test_config(),
        catalog: CatalogStore::preloaded(CatalogSource::Dir(PathBuf::from("data")), catalog()),
        geocoder: Box::new(lookup),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// The error from a handler that was expected to fail.
pub fn handler_error(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(err) => err,
    }
}
