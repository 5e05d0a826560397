use crate::catalog::{CatalogError, CatalogSource, CatalogStore};
use crate::config::Config;
use crate::geocode::{AddressLookup, GeocodeError, NominatimGeocoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Address lookup client: {0}")]
    Geocoder(#[from] GeocodeError),
}

/// Shared, read-only state handed to every request handler.
pub struct App {
    pub config: Config,
    pub catalog: CatalogStore,
    pub geocoder: Box<dyn AddressLookup>,
}

impl App {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let source = CatalogSource::parse(&config.data_source, config.catalog_timeout)?;
        let geocoder = NominatimGeocoder::new(
            config.geocoder_url.clone(),
            config.geocoder_country_hint.clone(),
            config.geocoder_timeout,
        )?;

        Ok(Self {
            catalog: CatalogStore::new(source),
            geocoder: Box::new(geocoder),
            config,
        })
    }
}
