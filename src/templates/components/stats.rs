use crate::domain::format::{brl, group_thousands};
use crate::domain::Summary;
use maud::{html, Markup};

pub fn stats_panel(summary: &Summary) -> Markup {
    let best = match summary.best_value_per_area {
        Some(v) => format!("{}/m²", group_thousands(v.round() as u64)),
        None => "-".to_string(),
    };

    html! {
        section class="stats" {
            div class="stat" {
                span class="stat-value" id="total-properties" { (summary.count) }
                span class="stat-label" { "Imóveis" }
            }
            div class="stat" {
                span class="stat-value" id="high-opportunity" { (summary.high_opportunity_count) }
                span class="stat-label" { "Alta oportunidade" }
            }
            div class="stat" {
                span class="stat-value" id="avg-price-m2" { (brl(summary.average_value_per_area)) }
                span class="stat-label" { "Preço médio/m²" }
            }
            div class="stat" {
                span class="stat-value" id="best-opportunity" { (best) }
                span class="stat-label" { "Melhor oportunidade" }
            }
        }
    }
}
