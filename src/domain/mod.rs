pub mod filters;
pub mod format;
pub mod pipeline;
pub mod property;
pub mod region;

pub use filters::FilterSelection;
pub use pipeline::{filter_catalog, FilteredView, Summary};
pub use property::{Contact, Coordinate, Opportunity, Property, PropertyType, Source};
pub use region::{Bounds, Region};
