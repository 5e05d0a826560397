use crate::domain::Coordinate;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, StubLookup};

fn htmx_get(uri: &str) -> astra::Request {
    let mut req = get(uri);
    req.headers_mut()
        .insert("hx-request", "true".parse().unwrap());
    req
}

#[test]
fn hit_returns_focus_button() {
    let app = test_app(StubLookup::Hit(Coordinate {
        lat: -30.0277,
        lng: -51.2287,
    }));

    let mut resp = handle(htmx_get("/search?q=Rua+da+Praia"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Local buscado: </strong>Rua da Praia"));
    assert!(body.contains("data-lat=\"-30.0277\""));
    assert!(body.contains("data-lng=\"-51.2287\""));
    // Fragment only, no layout.
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn miss_reports_not_found() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(htmx_get("/search?q=Lugar+Nenhum"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Endereço não encontrado"));
}

#[test]
fn lookup_failure_is_a_notice_not_an_error() {
    let app = test_app(StubLookup::Fail);

    let mut resp = handle(get("/search?q=Rua+A"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Erro ao buscar endereço"));
    assert!(body.contains("<!DOCTYPE html>"));
}

#[test]
fn blank_query_does_nothing() {
    let app = test_app(StubLookup::Fail);

    let mut resp = handle(htmx_get("/search?q=+++"), &app).unwrap();

    assert_eq!(body_string(&mut resp), "");
}
