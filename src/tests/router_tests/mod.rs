mod api_tests;
mod asset_tests;
mod explorer_tests;
mod export_tests;
mod property_tests;
mod search_tests;
