pub mod error;
pub mod explorer;
pub mod property_detail;
pub mod search;

pub use error::error_page;
pub use explorer::{explorer_page, ExplorerVm};
pub use property_detail::property_detail_page;
pub use search::{search_page, search_result, SearchOutcome};
