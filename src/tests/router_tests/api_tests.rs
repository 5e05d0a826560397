use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, StubLookup};
use serde_json::Value;

fn view(uri: &str) -> Value {
    let app = test_app(StubLookup::Miss);
    let mut resp = handle(get(uri), &app).unwrap();
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(&mut resp)).unwrap()
}

fn ids(view: &Value) -> Vec<&str> {
    view["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[test]
fn view_is_ranked_with_summary() {
    let view = view("/api/view?region=porto_alegre");

    assert_eq!(ids(&view), vec!["pa-high-2", "pa-high-1", "pa-medium", "pa-house"]);
    assert_eq!(view["region"]["key"], "porto_alegre");
    assert_eq!(view["summary"]["count"], 4);
    assert_eq!(view["summary"]["high_opportunity_count"], 2);
    assert_eq!(view["summary"]["average_value_per_area"], 6000);
    assert_eq!(view["summary"]["best_value_per_area"], 8000.0);
}

#[test]
fn bounded_price_range_is_inclusive() {
    let view = view("/api/view?price=500000-800000");

    assert_eq!(ids(&view), vec!["pa-high-2", "pa-high-1"]);
}

#[test]
fn empty_view_has_null_best() {
    let view = view("/api/view?region=canoas&source=zap");

    assert_eq!(view["summary"]["count"], 0);
    assert_eq!(view["summary"]["average_value_per_area"], 0);
    assert!(view["summary"]["best_value_per_area"].is_null());
}

#[test]
fn same_query_twice_is_identical() {
    let first = view("/api/view?opportunity=high");
    let second = view("/api/view?opportunity=high");

    assert_eq!(first, second);
}
