// src/domain/property.rs

use serde::Serialize;
use std::fmt;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Kind of real estate. Anything the catalog spells differently lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Commercial,
    Unknown,
}

impl PropertyType {
    pub const KNOWN: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "house" => PropertyType::House,
            "apartment" => PropertyType::Apartment,
            "land" => PropertyType::Land,
            "commercial" => PropertyType::Commercial,
            _ => PropertyType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "Casa",
            PropertyType::Apartment => "Apartamento",
            PropertyType::Land => "Terreno",
            PropertyType::Commercial => "Comercial",
            PropertyType::Unknown => "Outro",
        }
    }
}

/// Pre-computed desirability tier.
///
/// A missing tier in the catalog is `None`; text we do not recognize is `Unknown`.
/// Both rank below every real tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opportunity {
    High,
    Medium,
    Low,
    None,
    Unknown,
}

impl Opportunity {
    pub const SELECTABLE: [Opportunity; 4] = [
        Opportunity::High,
        Opportunity::Medium,
        Opportunity::Low,
        Opportunity::None,
    ];

    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Opportunity::None;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Opportunity::High,
            "medium" => Opportunity::Medium,
            "low" => Opportunity::Low,
            "none" | "" => Opportunity::None,
            _ => Opportunity::Unknown,
        }
    }

    /// Sort rank: known tiers always outrank unset or unrecognized ones.
    pub fn rank(&self) -> u8 {
        match self {
            Opportunity::High => 3,
            Opportunity::Medium => 2,
            Opportunity::Low => 1,
            Opportunity::None | Opportunity::Unknown => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Opportunity::High => "high",
            Opportunity::Medium => "medium",
            Opportunity::Low => "low",
            Opportunity::None => "none",
            Opportunity::Unknown => "unknown",
        }
    }

    pub fn badge_text(&self) -> &'static str {
        match self {
            Opportunity::High => "⭐ ALTA OPORTUNIDADE",
            Opportunity::Medium => "💡 BOA OFERTA",
            Opportunity::Low => "⚠️ ACIMA DA MÉDIA",
            Opportunity::None | Opportunity::Unknown => "💲 PREÇO EQUILIBRADO",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Opportunity::High => "opportunity-high",
            Opportunity::Medium => "opportunity-medium",
            Opportunity::Low => "opportunity-low",
            Opportunity::None | Opportunity::Unknown => "opportunity-none",
        }
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            Opportunity::High => "#4CAF50",
            Opportunity::Medium => "#FF9800",
            Opportunity::Low => "#F44336",
            Opportunity::None | Opportunity::Unknown => "#9E9E9E",
        }
    }

    /// Label used in the filter dropdown.
    pub fn option_label(&self) -> &'static str {
        match self {
            Opportunity::High => "Alta",
            Opportunity::Medium => "Média",
            Opportunity::Low => "Baixa",
            Opportunity::None | Opportunity::Unknown => "Sem classificação",
        }
    }
}

/// Originating data provider, normalized to a trimmed lower-case id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Source(String);

impl Source {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(raw: &str) -> Self {
        let id = raw.trim().to_lowercase();
        if id.is_empty() {
            Source(Self::UNKNOWN.to_string())
        } else {
            Source(id)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A single listing, validated and normalized from the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    #[serde(flatten)]
    pub location: Coordinate,

    pub price: u64,
    pub area: f64,
    pub value_per_m2: f64,

    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub source: Source,
    pub opportunity: Opportunity,
    pub opportunity_score: f64,

    pub title: String,
    pub address: String,
    pub description: String,
    pub features: Vec<String>,
    pub photos: Vec<String>,
    pub contact: Contact,
    pub url: Option<String>,

    pub bedrooms: u32,
    pub bathrooms: u32,
    pub parking_spaces: u32,
}

impl Property {
    /// Link to the detail page. The id is percent-encoded as one path segment.
    pub fn detail_path(&self) -> String {
        format!("/properties/{}", urlencoding::encode(&self.id))
    }

    /// First `max_chars` characters of the description, for list cards.
    pub fn description_excerpt(&self, max_chars: usize) -> String {
        let excerpt: String = self.description.chars().take(max_chars).collect();
        format!("{excerpt}...")
    }
}
