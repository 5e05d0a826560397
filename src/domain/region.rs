// src/domain/region.rs

use crate::domain::property::Coordinate;
use serde::Serialize;

/// Axis-aligned box; both edges are part of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub southwest: Coordinate,
    pub northeast: Coordinate,
}

impl Bounds {
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lat >= self.southwest.lat
            && point.lat <= self.northeast.lat
            && point.lng >= self.southwest.lng
            && point.lng <= self.northeast.lng
    }
}

/// A named area the explorer can be scoped to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub key: String,
    pub name: String,
    pub bounds: Bounds,
    // Map hint only, never used for filtering.
    pub center: Coordinate,
    pub zoom: u8,
}
