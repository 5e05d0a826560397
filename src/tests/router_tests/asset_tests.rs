use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, StubLookup};

#[test]
fn static_assets_are_served() {
    let app = test_app(StubLookup::Miss);

    let mut resp = handle(get("/static/app.js"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let script = body_string(&mut resp);
    assert!(script.contains("dataset.map"));
    assert!(script.contains("escapeHtml(m.title)"));

    assert!(handle(get("/static/missing.js"), &app).is_err());
}
