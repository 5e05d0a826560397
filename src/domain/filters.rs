// src/domain/filters.rs

use crate::domain::property::{Opportunity, Property, PropertyType, Source};
use std::collections::HashMap;
use url::form_urlencoded;

/// Query parameter names, shared by the explorer page, the JSON view and the export.
pub const PARAM_REGION: &str = "region";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_PRICE: &str = "price";
pub const PARAM_OPPORTUNITY: &str = "opportunity";
pub const PARAM_SOURCE: &str = "source";

const ALL: &str = "all";

/// Either no restriction, or one exact value the field must equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v),
        }
    }
}

/// Price restriction. Both bounds of `Between` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    Between { min: u64, max: u64 },
    AtLeast { min: u64 },
}

impl PriceRange {
    /// Parses `"min-max"` or `"min+"`. Anything without a usable bound is `Any`.
    ///
    /// An unencoded `+` in a query string decodes to a space, so `"min "` reads as
    /// `"min+"`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start();
        let space_suffix = raw.ends_with(' ');
        let raw = raw.trim_end();
        if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
            return PriceRange::Any;
        }

        if space_suffix {
            if let Ok(min) = raw.parse::<u64>() {
                return PriceRange::AtLeast { min };
            }
        }

        if let Some(min) = raw.strip_suffix('+') {
            return match min.trim().parse::<u64>() {
                Ok(min) => PriceRange::AtLeast { min },
                Err(_) => PriceRange::Any,
            };
        }

        let Some((min, max)) = raw.split_once('-') else {
            return PriceRange::Any;
        };
        let (min, max) = (min.trim(), max.trim());
        if min.is_empty() && max.is_empty() {
            return PriceRange::Any;
        }

        let min = if min.is_empty() {
            Some(0)
        } else {
            min.parse::<u64>().ok()
        };

        match (min, max) {
            (Some(min), "") => PriceRange::AtLeast { min },
            (Some(min), max) => match max.parse::<u64>() {
                Ok(max) if min <= max => PriceRange::Between { min, max },
                _ => PriceRange::Any,
            },
            (None, _) => PriceRange::Any,
        }
    }

    pub fn admits(&self, price: u64) -> bool {
        match *self {
            PriceRange::Any => true,
            PriceRange::Between { min, max } => price >= min && price <= max,
            PriceRange::AtLeast { min } => price >= min,
        }
    }

    /// Canonical query value; `None` for `Any`.
    pub fn to_param(&self) -> Option<String> {
        match self {
            PriceRange::Any => None,
            PriceRange::Between { min, max } => Some(format!("{min}-{max}")),
            PriceRange::AtLeast { min } => Some(format!("{min}+")),
        }
    }
}

/// The preset price brackets offered in the filter form.
pub const PRICE_PRESETS: [(&str, &str); 5] = [
    ("0-300000", "Até R$ 300 mil"),
    ("300000-500000", "R$ 300 mil a R$ 500 mil"),
    ("500000-800000", "R$ 500 mil a R$ 800 mil"),
    ("800000-1000000", "R$ 800 mil a R$ 1 mi"),
    ("1000000+", "Acima de R$ 1 mi"),
];

/// The user's active query. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    /// Requested region key; resolved against the catalog by the caller.
    pub region: Option<String>,
    pub property_type: Choice<PropertyType>,
    pub price_range: PriceRange,
    pub opportunity: Choice<Opportunity>,
    pub source: Choice<Source>,
}

impl FilterSelection {
    /// Every field unrestricted, keeping only the region.
    pub fn reset(region: Option<String>) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        };

        let property_type = match get(PARAM_TYPE).map(PropertyType::parse) {
            Some(PropertyType::Unknown) | None => Choice::All,
            Some(t) => Choice::Only(t),
        };

        let opportunity = match get(PARAM_OPPORTUNITY).map(|v| Opportunity::parse(Some(v))) {
            Some(Opportunity::Unknown) | None => Choice::All,
            Some(o) => Choice::Only(o),
        };

        let source = match get(PARAM_SOURCE) {
            Some(v) => Choice::Only(Source::new(v)),
            None => Choice::All,
        };

        Self {
            region: get(PARAM_REGION).map(str::to_string),
            property_type,
            // Raw value: trailing whitespace is meaningful to the price parser.
            price_range: params
                .get(PARAM_PRICE)
                .map(|v| PriceRange::parse(v))
                .unwrap_or_default(),
            opportunity,
            source,
        }
    }

    /// All clauses except region membership, which the pipeline checks first.
    pub fn admits(&self, property: &Property) -> bool {
        self.property_type.admits(&property.property_type)
            && self.price_range.admits(property.price)
            && self.opportunity.admits(&property.opportunity)
            && self.source.admits(&property.source)
    }

    /// Encodes the selection back into a query string, omitting unrestricted fields.
    pub fn to_query_string(&self, region_key: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(PARAM_REGION, region_key);
        if let Some(t) = self.property_type.selected() {
            query.append_pair(PARAM_TYPE, t.as_str());
        }
        if let Some(price) = self.price_range.to_param() {
            query.append_pair(PARAM_PRICE, &price);
        }
        if let Some(o) = self.opportunity.selected() {
            query.append_pair(PARAM_OPPORTUNITY, o.as_str());
        }
        if let Some(s) = self.source.selected() {
            query.append_pair(PARAM_SOURCE, s.as_str());
        }
        query.finish()
    }
}
