use crate::catalog::{CatalogSource, CatalogStore};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, handler_error, test_app, StubLookup};
use std::path::PathBuf;

#[test]
fn detail_page_shows_everything() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/properties/pa-high-1"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Apartamento Centro"));
    assert!(body.contains("R$ 500.000"));
    assert!(body.contains("Elevador"));
    assert!(body.contains("corretor@example.com"));
    assert!(body.contains("https://listing.example/pa-high-1"));
    assert!(body.contains("⭐ ALTA OPORTUNIDADE"));
    assert!(body.contains("ZAP"));
}

#[test]
fn unknown_property_is_not_found() {
    let app = test_app(StubLookup::Miss);

    let err = handler_error(handle(get("/properties/does-not-exist"), &app));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn failed_catalog_load_blocks_with_retry() {
    let mut app = test_app(StubLookup::Miss);
    app.catalog = CatalogStore::new(CatalogSource::Dir(PathBuf::from("/nonexistent/catalog")));

    let err = handler_error(handle(get("/"), &app));
    assert!(matches!(err, ServerError::CatalogUnavailable(_)));

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 503);
    let body = body_string(&mut resp);
    assert!(body.contains("Erro ao carregar os dados da aplicação"));
    assert!(body.contains("Tentar novamente"));
}

#[test]
fn ids_needing_encoding_round_trip_through_links() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/properties/casa%201%2F%C3%A7%C3%A3o%25"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Casa fora das regiões"));
    // The map payload links back to the same encoded path.
    assert!(body.contains("/properties/casa%201%2F%C3%A7%C3%A3o%25"));
}
