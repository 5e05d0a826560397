use crate::domain::format::{area, brl, per_m2};
use crate::domain::{Opportunity, Property};
use maud::{html, Markup};

const EXCERPT_CHARS: usize = 100;

pub fn opportunity_badge(opportunity: Opportunity) -> Markup {
    html! {
        span class=(format!("badge {}", opportunity.badge_class())) { (opportunity.badge_text()) }
    }
}

pub fn source_badge(property: &Property) -> Markup {
    html! {
        span class="badge badge-source" { (property.source.as_str().to_uppercase()) }
    }
}

/// Rooms, bathrooms and parking, each shown only when present.
pub fn room_counts(property: &Property) -> Markup {
    html! {
        div class="property-features" {
            @if property.bedrooms > 0 {
                span { (property.bedrooms) " quartos" }
            }
            @if property.bathrooms > 0 {
                span { (property.bathrooms) " banheiros" }
            }
            @if property.parking_spaces > 0 {
                span { (property.parking_spaces) " vagas" }
            }
        }
    }
}

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="property-card" id={ "property-" (property.id) } {
            div class="property-card-head" {
                h3 { (property.title) }
                span class="price-tag" { (brl(property.price)) }
            }

            p class="muted" { (property.address) }

            div class="badges" {
                span class="badge" { (area(property.area)) }
                span class="badge" { (per_m2(property.value_per_m2)) }
                (opportunity_badge(property.opportunity))
                (source_badge(property))
            }

            (room_counts(property))

            p class="muted small" { (property.description_excerpt(EXCERPT_CHARS)) }

            div class="actions" {
                a class="btn" href=(property.detail_path()) { "Detalhes" }
                button
                    type="button"
                    class="btn btn-outline focus-map"
                    data-lat=(property.location.lat)
                    data-lng=(property.location.lng)
                { "Ver no mapa" }
            }
        }
    }
}
