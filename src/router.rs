use crate::app::App;
use crate::catalog::Catalog;
use crate::domain::{filter_catalog, FilterSelection, FilteredView, Property, Region, Summary};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response, static_asset};
use crate::spreadsheets::export_properties_xlsx;
use crate::templates::pages::{
    explorer_page, property_detail_page, search_page, search_result, ExplorerVm, SearchOutcome,
};
use astra::Request;
use maud::html;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};
use url::form_urlencoded;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => with_view(app, &params, |catalog, region, selection, view| {
            html_response(explorer_page(&ExplorerVm {
                catalog,
                region,
                selection,
                view,
            }))
        }),

        ("GET", "/api/view") => with_view(app, &params, |catalog, region, _, view| {
            json_response(&ApiView {
                region,
                last_updated: &catalog.last_updated,
                summary: &view.summary,
                properties: &view.properties,
            })
        }),

        ("GET", "/export.xlsx") => with_view(app, &params, |_, region, _, view| {
            export_properties_xlsx(&view.properties, &region.key)
        }),

        ("GET", "/search") => {
            let is_htmx = req.headers().contains_key("hx-request");
            search(app, params.get("q").map(String::as_str), is_htmx)
        }

        ("GET", p) if p.starts_with("/properties/") => {
            let id = urlencoding::decode(&p["/properties/".len()..])
                .map_err(|_| ServerError::NotFound)?;
            app.catalog.with_catalog(|catalog| {
                let property = catalog.property(&id).ok_or(ServerError::NotFound)?;
                html_response(property_detail_page(property, &catalog.last_updated))
            })
        }

        ("GET", p) if p.starts_with("/static/") => {
            static_asset(&p["/static/".len()..]).unwrap_or(Err(ServerError::NotFound))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// JSON shape of `/api/view`.
#[derive(Serialize)]
struct ApiView<'a> {
    region: &'a Region,
    last_updated: &'a str,
    summary: &'a Summary,
    properties: &'a [&'a Property],
}

/// Parses the filter selection, resolves the region and runs the pipeline
/// before handing everything to `render`.
fn with_view<F>(app: &App, params: &HashMap<String, String>, render: F) -> ResultResp
where
    F: FnOnce(&Catalog, &Region, &FilterSelection, &FilteredView) -> ResultResp,
{
    app.catalog.with_catalog(|catalog| {
        let selection = FilterSelection::from_query(params);
        let region = catalog
            .resolve_region(selection.region.as_deref(), &app.config.default_region)
            .ok_or(ServerError::InternalError)?;

        let view = filter_catalog(catalog.properties(), region, &selection);
        debug!(
            region = %region.key,
            matches = view.summary.count,
            "filtered catalog"
        );

        render(catalog, region, &selection, &view)
    })
}

fn search(app: &App, query: Option<&str>, is_htmx: bool) -> ResultResp {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return html_response(html! {});
    };

    let outcome = match app.geocoder.lookup(query) {
        Ok(Some(hit)) => SearchOutcome::Found(hit),
        Ok(None) => SearchOutcome::NotFound,
        Err(e) => {
            warn!(query, "address lookup failed: {e}");
            SearchOutcome::Failed
        }
    };

    if is_htmx {
        html_response(search_result(&outcome))
    } else {
        html_response(search_page(&outcome))
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
