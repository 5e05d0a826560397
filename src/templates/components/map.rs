use crate::domain::format::{area, brl, per_m2};
use crate::domain::{Coordinate, Property, Region};
use maud::{html, Markup};
use serde::Serialize;
use tracing::error;

/// Above this many markers the map groups them into clusters.
pub const CLUSTER_THRESHOLD: usize = 10;

#[derive(Debug, Serialize)]
pub struct MapMarker<'a> {
    pub id: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub title: &'a str,
    pub price: String,
    pub area: String,
    pub value_per_m2: String,
    pub opportunity: &'static str,
    pub detail_url: String,
}

/// Everything the browser-side map widget needs to redraw from scratch.
#[derive(Debug, Serialize)]
pub struct MapData<'a> {
    pub center: Coordinate,
    pub zoom: u8,
    pub cluster: bool,
    pub markers: Vec<MapMarker<'a>>,
}

impl<'a> MapData<'a> {
    pub fn new(region: &Region, properties: &[&'a Property]) -> Self {
        let markers: Vec<MapMarker> = properties
            .iter()
            .map(|&p| MapMarker {
                id: &p.id,
                lat: p.location.lat,
                lng: p.location.lng,
                color: p.opportunity.marker_color(),
                title: &p.title,
                price: brl(p.price),
                area: area(p.area),
                value_per_m2: per_m2(p.value_per_m2),
                opportunity: p.opportunity.badge_text(),
                detail_url: p.detail_path(),
            })
            .collect();

        Self {
            center: region.center,
            zoom: region.zoom,
            cluster: markers.len() > CLUSTER_THRESHOLD,
            markers,
        }
    }
}

pub fn map_container(data: &MapData) -> Markup {
    let payload = serde_json::to_string(data).unwrap_or_else(|e| {
        error!("map payload encoding failed: {e}");
        "{}".to_string()
    });

    html! {
        div id="map" class="map" data-map=(payload) {}
    }
}
