use crate::catalog::{Catalog, CatalogError, CatalogSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{error, info};

/// Holds the catalog once it has loaded.
///
/// A failed load leaves the slot empty; the next request (a user-initiated reload)
/// tries again. Nothing retries on its own. The load runs without holding the lock,
/// and at most one load is in flight: callers arriving meanwhile get
/// `CatalogError::LoadInProgress` instead of queueing behind it.
pub struct CatalogStore {
    source: CatalogSource,
    slot: RwLock<Option<Arc<Catalog>>>,
    loading: AtomicBool,
}

impl CatalogStore {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            slot: RwLock::new(None),
            loading: AtomicBool::new(false),
        }
    }

    /// A store that already holds `catalog`.
    #[cfg(test)]
    pub fn preloaded(source: CatalogSource, catalog: Catalog) -> Self {
        Self {
            source,
            slot: RwLock::new(Some(Arc::new(catalog))),
            loading: AtomicBool::new(false),
        }
    }

    /// Returns the loaded catalog, loading it first if the slot is empty.
    pub fn get(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.current()? {
            return Ok(catalog);
        }

        if self.loading.swap(true, Ordering::AcqRel) {
            return Err(CatalogError::LoadInProgress);
        }
        let result = self.load_and_publish();
        self.loading.store(false, Ordering::Release);
        result
    }

    fn current(&self) -> Result<Option<Arc<Catalog>>, CatalogError> {
        let slot = self.slot.read().map_err(|_| CatalogError::StorePoisoned)?;
        Ok(slot.as_ref().map(Arc::clone))
    }

    /// Runs with the `loading` flag held.
    fn load_and_publish(&self) -> Result<Arc<Catalog>, CatalogError> {
        // Another worker may have published while we were acquiring the flag.
        if let Some(catalog) = self.current()? {
            return Ok(catalog);
        }

        let catalog = match self.source.load() {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                error!(source = ?self.source, "catalog load failed: {e}");
                return Err(e);
            }
        };

        let mut slot = self.slot.write().map_err(|_| CatalogError::StorePoisoned)?;
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Provides the catalog to the closure.
    pub fn with_catalog<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Catalog) -> Result<T, E>,
        E: From<CatalogError>,
    {
        let catalog = self.get()?;
        f(&catalog)
    }

    /// Attempts the first load eagerly so problems show up in the startup log.
    pub fn warm_up(&self) {
        if let Ok(catalog) = self.get() {
            info!(loaded_at = %catalog.loaded_at, "catalog ready");
        }
    }
}
