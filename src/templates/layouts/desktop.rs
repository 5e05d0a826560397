use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, last_updated: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · GeoImóveis" }
                link rel="stylesheet" href=(LEAFLET_CSS);
                link rel="stylesheet" href=(CLUSTER_CSS);
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_JS) defer {}
                script src=(LEAFLET_JS) defer {}
                script src=(CLUSTER_JS) defer {}
                script src="/static/app.js" defer {}
            }
            body {
                header class="topbar" {
                    a href="/" class="brand" { "GeoImóveis" }
                    span class="tagline" { "Explorador de oportunidades imobiliárias" }
                }

                (content)

                footer class="footer" {
                    @if let Some(stamp) = last_updated.filter(|s| !s.is_empty()) {
                        "Última atualização: " span id="last-update" { (stamp) }
                    }
                }
            }
        }
    }
}
