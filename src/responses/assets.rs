// responses/assets.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;

const APP_JS: &str = include_str!("../../static/app.js");
const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serves the assets compiled into the binary; `None` for unknown names.
pub fn static_asset(name: &str) -> Option<ResultResp> {
    let (content, content_type): (&'static str, Mime) = match name {
        "app.js" => (APP_JS, mime::APPLICATION_JAVASCRIPT_UTF_8),
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8),
        _ => return None,
    };

    Some(
        ResponseBuilder::new()
            .status(200)
            .header("Content-Type", content_type.as_ref())
            .header("Cache-Control", "public, max-age=3600")
            .body(Body::from(content))
            .map_err(|_| ServerError::InternalError),
    )
}
