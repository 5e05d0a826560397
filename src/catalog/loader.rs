// loader.rs
use crate::catalog::models::{RawCatalog, RawRegions};
use crate::catalog::{Catalog, CatalogError};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const REGIONS_FILE: &str = "regions.json";
pub const PROPERTIES_FILE: &str = "properties.json";

/// Where the two catalog files live: a local directory or an HTTP base URL.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Dir(PathBuf),
    Remote { base: Url, timeout: Duration },
}

impl CatalogSource {
    /// `http://` and `https://` values are remote; anything else is a directory.
    pub fn parse(raw: &str, timeout: Duration) -> Result<Self, CatalogError> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            // A trailing slash makes `join` append instead of replacing the last segment.
            let base = if raw.ends_with('/') {
                raw.to_string()
            } else {
                format!("{raw}/")
            };
            Ok(CatalogSource::Remote {
                base: Url::parse(&base)?,
                timeout,
            })
        } else {
            Ok(CatalogSource::Dir(PathBuf::from(raw)))
        }
    }

    /// Reads both files. Either one failing fails the whole load.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let regions: RawRegions = self.fetch_json(REGIONS_FILE, "regions")?;
        let raw: RawCatalog = self.fetch_json(PROPERTIES_FILE, "properties")?;

        let catalog = Catalog::from_raw(regions, raw)?;
        info!(
            regions = catalog.regions().count(),
            properties = catalog.properties().len(),
            last_updated = %catalog.last_updated,
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn fetch_json<T: DeserializeOwned>(
        &self,
        file: &str,
        resource: &'static str,
    ) -> Result<T, CatalogError> {
        let text = match self {
            CatalogSource::Dir(dir) => {
                let path = dir.join(file);
                debug!(path = %path.display(), "reading catalog file");
                std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?
            }
            CatalogSource::Remote { base, timeout } => fetch_remote(&base.join(file)?, *timeout)?,
        };

        serde_json::from_str(&text).map_err(|source| CatalogError::JsonParse { resource, source })
    }
}

fn fetch_remote(url: &Url, timeout: Duration) -> Result<String, CatalogError> {
    debug!(%url, "fetching catalog file");

    let network = |message: String| CatalogError::Network {
        url: url.to_string(),
        message,
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| network(e.to_string()))?;

    let resp = client
        .get(url.clone())
        .send()
        .map_err(|e| network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(network(format!("HTTP {status}")));
    }

    resp.text().map_err(|e| network(e.to_string()))
}
