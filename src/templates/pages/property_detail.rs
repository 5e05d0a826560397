use crate::domain::format::{area, brl, per_m2};
use crate::domain::Property;
use crate::templates::components::{opportunity_badge, source_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_detail_page(property: &Property, last_updated: &str) -> Markup {
    desktop_layout(
        &property.title,
        Some(last_updated),
        html! {
            main class="container detail" {
                a href="/" class="back" { "← Voltar" }
                h1 { (property.title) }

                div class="detail-grid" {
                    div class="gallery" {
                        @if let Some(main) = property.photos.first() {
                            img class="photo-main" src=(main) alt=(property.title);
                        }
                        div class="thumbs" {
                            @for photo in property.photos.iter().skip(1).take(3) {
                                img class="photo-thumb" src=(photo) alt="";
                            }
                        }
                    }

                    div class="facts" {
                        h2 class="price" { (brl(property.price)) }
                        p { strong { "Endereço: " } (property.address) }
                        p { strong { "Tipo: " } (property.property_type.label()) }
                        p { strong { "Área: " } (area(property.area)) }
                        p { strong { "Valor/m²: " } (per_m2(property.value_per_m2)) }
                        p { strong { "Quartos: " } (property.bedrooms) }
                        p { strong { "Banheiros: " } (property.bathrooms) }
                        p { strong { "Vagas: " } (property.parking_spaces) }

                        div class="badges" {
                            (opportunity_badge(property.opportunity))
                            (source_badge(property))
                        }

                        p { (property.description) }

                        @if !property.features.is_empty() {
                            h3 { "Características:" }
                            div class="badges" {
                                @for feature in &property.features {
                                    span class="badge" { (feature) }
                                }
                            }
                        }

                        div class="contact-info" {
                            h3 { "Contato:" }
                            @if let Some(phone) = &property.contact.phone {
                                p { "Telefone: " (phone) }
                            }
                            @if let Some(email) = &property.contact.email {
                                p { "E-mail: " a href={ "mailto:" (email) } { (email) } }
                            }
                        }

                        div class="actions" {
                            @if let Some(url) = &property.url {
                                a class="btn" href=(url) target="_blank" rel="noopener" { "Ver no site original" }
                            }
                        }

                        div id="map"
                            class="map map-small"
                            data-map=(single_marker_payload(property)) {}
                    }
                }
            }
        },
    )
}

/// Centers the map on one property at street zoom.
fn single_marker_payload(property: &Property) -> String {
    serde_json::json!({
        "center": property.location,
        "zoom": 15,
        "cluster": false,
        "markers": [{
            "id": property.id,
            "lat": property.location.lat,
            "lng": property.location.lng,
            "color": property.opportunity.marker_color(),
            "title": property.title,
            "price": brl(property.price),
            "area": area(property.area),
            "value_per_m2": per_m2(property.value_per_m2),
            "opportunity": property.opportunity.badge_text(),
            "detail_url": property.detail_path(),
        }],
    })
    .to_string()
}
