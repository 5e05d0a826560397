// src/tests/router_tests/explorer_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, handler_error, test_app, StubLookup};

/// Byte offset of each needle in the body, panicking if one is missing.
fn positions(body: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| {
            body.find(n)
                .unwrap_or_else(|| panic!("'{n}' not found in page"))
        })
        .collect()
}

#[test]
fn default_region_lists_ranked_properties() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Melhores Oportunidades - Porto Alegre"));
    assert!(body.contains("(4 imóveis)"));
    assert!(!body.contains("id=\"property-canoas-land\""));

    let order = positions(
        &body,
        &[
            "id=\"property-pa-high-2\"",
            "id=\"property-pa-high-1\"",
            "id=\"property-pa-medium\"",
            "id=\"property-pa-house\"",
        ],
    );
    assert!(order.windows(2).all(|w| w[0] < w[1]), "unexpected order {order:?}");
}

#[test]
fn statistics_reflect_filtered_set() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?region=porto_alegre"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(r#"<span class="stat-value" id="total-properties">4</span>"#));
    assert!(body.contains(r#"<span class="stat-value" id="high-opportunity">2</span>"#));
    assert!(body.contains(r#"<span class="stat-value" id="avg-price-m2">R$ 6.000</span>"#));
    assert!(body.contains(r#"<span class="stat-value" id="best-opportunity">8.000/m²</span>"#));
}

#[test]
fn switching_region_keeps_filters() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?region=canoas&type=land"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Melhores Oportunidades - Canoas"));
    assert!(body.contains("id=\"property-canoas-land\""));
    assert!(body.contains("(1 imóveis)"));
    // The link back to Porto Alegre carries the type filter along.
    assert!(body.contains("href=\"/?region=porto_alegre&amp;type=land\""));
}

#[test]
fn filters_combine() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(
        get("/?region=porto_alegre&type=apartment&source=zap&price=400000-600000"),
        &app,
    )
    .unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("(1 imóveis)"));
    assert!(body.contains("id=\"property-pa-high-1\""));
}

#[test]
fn plus_price_range_is_a_lower_bound() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?price=1000000%2B"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("(1 imóveis)"));
    assert!(body.contains("id=\"property-pa-house\""));
}

#[test]
fn unencoded_plus_in_price_is_a_lower_bound() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?price=1000000+"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("(1 imóveis)"));
    assert!(body.contains("id=\"property-pa-house\""));
}

#[test]
fn custom_price_range_is_shown_as_selected() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?price=250000-600000"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("(2 imóveis)"));
    assert!(body.contains(
        r#"<option value="250000-600000" selected>R$ 250.000 a R$ 600.000</option>"#
    ));
}

#[test]
fn malformed_filters_are_ignored() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(
        get("/?region=atlantis&type=castle&price=cheap&opportunity=great"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Melhores Oportunidades - Porto Alegre"));
    assert!(body.contains("(4 imóveis)"));
}

#[test]
fn empty_result_offers_reset() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/?region=canoas&opportunity=high"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Nenhum imóvel encontrado com os filtros atuais"));
    assert!(body.contains("Limpar filtros"));
    assert!(body.contains(r#"<span class="stat-value" id="avg-price-m2">R$ 0</span>"#));
    assert!(body.contains(r#"<span class="stat-value" id="best-opportunity">-</span>"#));
}

#[test]
fn footer_shows_catalog_timestamp() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("2024-06-01 08:00"));
}

#[test]
fn unknown_path_is_not_found() {
    let app = test_app(StubLookup::Miss);

    let err = handler_error(handle(get("/nope"), &app));
    assert_eq!(err.status(), 404);
}
