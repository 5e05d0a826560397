// src/domain/pipeline.rs

use crate::domain::filters::FilterSelection;
use crate::domain::property::{Opportunity, Property};
use crate::domain::region::Region;
use serde::Serialize;
use std::cmp::Ordering;

/// Summary figures shown above the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub high_opportunity_count: usize,
    /// Mean value per m², rounded. Zero when nothing matched.
    pub average_value_per_area: u64,
    /// Value per m² of the top-ranked match; `None` when nothing matched.
    pub best_value_per_area: Option<f64>,
}

/// Ranked matches for one region + filter selection, borrowed from the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView<'a> {
    pub properties: Vec<&'a Property>,
    pub summary: Summary,
}

/// Selects the properties inside `region` that pass every filter clause, ranks them
/// and computes the summary. Never mutates the input and never fails.
pub fn filter_catalog<'a>(
    properties: &'a [Property],
    region: &Region,
    selection: &FilterSelection,
) -> FilteredView<'a> {
    let mut matches: Vec<&Property> = properties
        .iter()
        .filter(|p| region.bounds.contains(&p.location))
        .filter(|p| selection.admits(p))
        .collect();

    // sort_by is stable: exact ties keep their catalog order.
    matches.sort_by(|a, b| rank_order(a, b));

    let summary = summarize(&matches);

    FilteredView {
        properties: matches,
        summary,
    }
}

/// Tier rank descending, then opportunity score descending.
fn rank_order(a: &Property, b: &Property) -> Ordering {
    b.opportunity
        .rank()
        .cmp(&a.opportunity.rank())
        .then_with(|| b.opportunity_score.total_cmp(&a.opportunity_score))
}

fn summarize(ranked: &[&Property]) -> Summary {
    let count = ranked.len();

    let high_opportunity_count = ranked
        .iter()
        .filter(|p| p.opportunity == Opportunity::High)
        .count();

    let average_value_per_area = if count == 0 {
        0
    } else {
        let total: f64 = ranked.iter().map(|p| p.value_per_m2).sum();
        (total / count as f64).round() as u64
    };

    Summary {
        count,
        high_opportunity_count,
        average_value_per_area,
        best_value_per_area: ranked.first().map(|p| p.value_per_m2),
    }
}
