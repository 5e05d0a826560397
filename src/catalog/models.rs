use serde::Deserialize;
use std::collections::BTreeMap;

// regions.json
//  └── <key>
//       ├── name
//       ├── bounds   [[sw_lat, sw_lng], [ne_lat, ne_lng]]
//       ├── center   [lat, lng]
//       └── zoom
//
// properties.json
//  ├── last_updated
//  └── properties[]
//       ├── id, lat, lng
//       ├── price, area, value_per_m2
//       ├── type, source, opportunity, opportunity_score
//       ├── title, address, description, features[], photos[]
//       ├── contact { phone, email }, url
//       └── bedrooms, bathrooms, parking_spaces

pub type RawRegions = BTreeMap<String, RawRegion>;

#[derive(Debug, Deserialize)]
pub struct RawRegion {
    pub name: String,
    pub bounds: [[f64; 2]; 2],
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_zoom() -> u8 {
    11
}

#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub last_updated: Option<String>,
    pub properties: Vec<RawProperty>,
}

/// Some exports write ids as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawProperty {
    pub id: RawId,
    pub lat: f64,
    pub lng: f64,

    pub price: f64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub value_per_m2: Option<f64>,

    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub opportunity: Option<String>,
    #[serde(default)]
    pub opportunity_score: Option<f64>,

    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub contact: Option<RawContact>,
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub parking_spaces: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawContact {
    pub phone: Option<String>,
    pub email: Option<String>,
}
