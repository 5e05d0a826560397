use crate::geocode::GeocodeHit;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Outcome of an address lookup, as shown to the user.
pub enum SearchOutcome {
    Found(GeocodeHit),
    NotFound,
    Failed,
}

/// Transient notice; never touches the filter state.
pub fn search_result(outcome: &SearchOutcome) -> Markup {
    html! {
        @match outcome {
            SearchOutcome::Found(hit) => {
                div class="notice notice-info search-hit" {
                    p { strong { "Local buscado: " } (hit.query) }
                    @if !hit.display_name.is_empty() {
                        p class="small muted" { (hit.display_name) }
                    }
                    button
                        type="button"
                        class="btn btn-outline focus-map"
                        data-lat=(hit.coordinate.lat)
                        data-lng=(hit.coordinate.lng)
                        data-label=(hit.query)
                    { "Ver no mapa" }
                }
            }
            SearchOutcome::NotFound => {
                div class="notice notice-warn" { p { "Endereço não encontrado" } }
            }
            SearchOutcome::Failed => {
                div class="notice notice-warn" { p { "Erro ao buscar endereço" } }
            }
        }
    }
}

/// Full page for clients that followed the form without htmx.
pub fn search_page(outcome: &SearchOutcome) -> Markup {
    desktop_layout(
        "Busca",
        None,
        html! {
            main class="container" {
                (search_result(outcome))
                a href="/" class="back" { "← Voltar" }
            }
        },
    )
}
