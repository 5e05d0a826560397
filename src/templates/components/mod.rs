pub mod error;
pub mod filter_form;
pub mod map;
pub mod property_card;
pub mod stats;

pub use error::{empty_results, error_panel};
pub use filter_form::{filter_form, region_selector, reset_href, search_form};
pub use map::{map_container, MapData};
pub use property_card::{opportunity_badge, property_card, source_badge};
pub use stats::stats_panel;
