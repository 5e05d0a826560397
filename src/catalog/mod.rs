mod catalog;
mod catalog_error;
mod loader;
mod models;
mod store;

pub use catalog::Catalog;
pub use catalog_error::CatalogError;
pub use loader::CatalogSource;
#[cfg(test)]
pub use models::{RawCatalog, RawRegions};
pub use store::CatalogStore;
