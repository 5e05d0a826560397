// catalog.rs
use crate::catalog::models::{RawCatalog, RawProperty, RawRegion, RawRegions};
use crate::catalog::CatalogError;
use crate::domain::{Bounds, Contact, Coordinate, Opportunity, Property, PropertyType, Region, Source};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Immutable reference data: every region and every listing, loaded once.
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: BTreeMap<String, Region>,
    properties: Vec<Property>,
    pub last_updated: String,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Validates the raw files into a catalog. Any bad record rejects the whole load.
    pub fn from_raw(regions: RawRegions, raw: RawCatalog) -> Result<Self, CatalogError> {
        if regions.is_empty() {
            return Err(CatalogError::NoRegions);
        }

        let regions = regions
            .into_iter()
            .map(|(key, region)| {
                let region = region_from_raw(&key, region)?;
                Ok((key, region))
            })
            .collect::<Result<BTreeMap<_, _>, CatalogError>>()?;

        let mut seen = HashSet::new();
        let mut properties = Vec::with_capacity(raw.properties.len());
        for raw_property in raw.properties {
            let property = property_from_raw(raw_property)?;
            if !seen.insert(property.id.clone()) {
                return Err(CatalogError::DuplicateId(property.id));
            }
            properties.push(property);
        }

        Ok(Self {
            regions,
            properties,
            last_updated: raw.last_updated.unwrap_or_default(),
            loaded_at: Utc::now(),
        })
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn region(&self, key: &str) -> Option<&Region> {
        self.regions.get(key)
    }

    /// The requested region, else the default, else the first region by key.
    /// `None` only for a catalog without regions, which `from_raw` never builds.
    pub fn resolve_region(&self, requested: Option<&str>, default_key: &str) -> Option<&Region> {
        requested
            .and_then(|key| self.region(key))
            .or_else(|| self.regions.get(default_key))
            .or_else(|| self.regions.values().next())
    }

    /// Distinct providers present in the catalog, sorted.
    pub fn sources(&self) -> Vec<&Source> {
        self.properties
            .iter()
            .map(|p| &p.source)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn region_from_raw(key: &str, raw: RawRegion) -> Result<Region, CatalogError> {
    let [[sw_lat, sw_lng], [ne_lat, ne_lng]] = raw.bounds;

    if sw_lat > ne_lat || sw_lng > ne_lng {
        return Err(CatalogError::InvertedBounds(key.to_string()));
    }

    Ok(Region {
        key: key.to_string(),
        name: raw.name,
        bounds: Bounds {
            southwest: Coordinate { lat: sw_lat, lng: sw_lng },
            northeast: Coordinate { lat: ne_lat, lng: ne_lng },
        },
        center: Coordinate {
            lat: raw.center[0],
            lng: raw.center[1],
        },
        zoom: raw.zoom,
    })
}

fn property_from_raw(raw: RawProperty) -> Result<Property, CatalogError> {
    let id = raw.id.into_string();

    if !raw.lat.is_finite() || !raw.lng.is_finite() {
        return Err(CatalogError::InvalidCoordinate(id));
    }

    // Helper rejecting negative or non-finite numbers for a named field.
    let non_negative = |value: f64, field: &'static str| {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(CatalogError::InvalidNumber {
                id: id.clone(),
                field,
            })
        }
    };
    let count = |value: Option<f64>, field: &'static str| {
        non_negative(value.unwrap_or(0.0), field).map(|v| v.round() as u32)
    };

    let price = non_negative(raw.price, "price")?.round() as u64;
    let area = non_negative(raw.area.unwrap_or(0.0), "area")?;
    let value_per_m2 = match raw.value_per_m2 {
        Some(v) => non_negative(v, "value_per_m2")?,
        None if area > 0.0 => price as f64 / area,
        None => 0.0,
    };
    let opportunity_score = non_negative(raw.opportunity_score.unwrap_or(0.0), "opportunity_score")?;
    let bedrooms = count(raw.bedrooms, "bedrooms")?;
    let bathrooms = count(raw.bathrooms, "bathrooms")?;
    let parking_spaces = count(raw.parking_spaces, "parking_spaces")?;

    Ok(Property {
        location: Coordinate {
            lat: raw.lat,
            lng: raw.lng,
        },
        price,
        area,
        value_per_m2,
        property_type: raw
            .property_type
            .as_deref()
            .map(PropertyType::parse)
            .unwrap_or(PropertyType::Unknown),
        source: Source::new(raw.source.as_deref().unwrap_or_default()),
        opportunity: Opportunity::parse(raw.opportunity.as_deref()),
        opportunity_score,
        title: raw.title.unwrap_or_default(),
        address: raw.address.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        features: raw.features,
        photos: raw.photos,
        contact: raw
            .contact
            .map(|c| Contact {
                phone: c.phone,
                email: c.email,
            })
            .unwrap_or_default(),
        url: raw.url.filter(|u| !u.is_empty()),
        bedrooms,
        bathrooms,
        parking_spaces,
        id,
    })
}
