use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Invalid data source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parse error in {resource}: {source}")]
    JsonParse {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate property id: {0}")]
    DuplicateId(String),

    #[error("Property {id}: field '{field}' must be a non-negative number")]
    InvalidNumber { id: String, field: &'static str },

    #[error("Property {0}: coordinates must be finite")]
    InvalidCoordinate(String),

    #[error("Region {0}: southwest corner must not lie north or east of the northeast corner")]
    InvertedBounds(String),

    #[error("No regions defined")]
    NoRegions,

    #[error("Catalog is still loading")]
    LoadInProgress,

    #[error("Catalog store unavailable")]
    StorePoisoned,
}
