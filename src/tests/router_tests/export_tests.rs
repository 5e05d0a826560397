use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{get, test_app, StubLookup};

#[test]
fn export_downloads_region_workbook() {
    let app = test_app(StubLookup::Miss);

    let resp = handle(get("/export.xlsx?region=canoas"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], XLSX_CONTENT_TYPE);
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"imoveis_canoas.xlsx\""
    );
}
