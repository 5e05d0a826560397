use crate::catalog::Catalog;
use crate::domain::filters::{
    PriceRange, PARAM_OPPORTUNITY, PARAM_PRICE, PARAM_REGION, PARAM_SOURCE, PARAM_TYPE,
    PRICE_PRESETS,
};
use crate::domain::format::brl;
use crate::domain::{FilterSelection, Opportunity, PropertyType, Region};
use maud::{html, Markup};

/// One link per region. Switching region keeps the other filters.
pub fn region_selector(catalog: &Catalog, active: &Region, selection: &FilterSelection) -> Markup {
    html! {
        nav id="region-selector" class="region-selector" {
            @for region in catalog.regions() {
                a.region-link.active[region.key == active.key]
                    href={ "/?" (selection.to_query_string(&region.key)) }
                { (region.name) }
            }
        }
    }
}

pub fn filter_form(catalog: &Catalog, region: &Region, selection: &FilterSelection) -> Markup {
    let price_param = selection.price_range.to_param();
    // A hand-written range that matches no preset still gets an option of its own.
    let custom_price = price_param
        .as_deref()
        .filter(|p| !PRICE_PRESETS.iter().any(|(value, _)| value == p));

    html! {
        form id="filters" class="filters" method="get" action="/" {
            input type="hidden" name=(PARAM_REGION) value=(region.key);

            label for="property-type" { "Tipo" }
            select id="property-type" name=(PARAM_TYPE) {
                option value="all" { "Todos" }
                @for t in PropertyType::KNOWN {
                    option value=(t.as_str()) selected[selection.property_type.selected() == Some(&t)] {
                        (t.label())
                    }
                }
            }

            label for="price-range" { "Preço" }
            select id="price-range" name=(PARAM_PRICE) {
                option value="all" { "Qualquer" }
                @if let Some(custom) = custom_price {
                    option value=(custom) selected { (price_label(selection.price_range)) }
                }
                @for (value, label) in PRICE_PRESETS {
                    option value=(value) selected[price_param.as_deref() == Some(value)] { (label) }
                }
            }

            label for="opportunity-level" { "Oportunidade" }
            select id="opportunity-level" name=(PARAM_OPPORTUNITY) {
                option value="all" { "Todas" }
                @for o in Opportunity::SELECTABLE {
                    option value=(o.as_str()) selected[selection.opportunity.selected() == Some(&o)] {
                        (o.option_label())
                    }
                }
            }

            label for="data-source" { "Fonte" }
            select id="data-source" name=(PARAM_SOURCE) {
                option value="all" { "Todas" }
                @for source in catalog.sources() {
                    option value=(source.as_str()) selected[selection.source.selected() == Some(source)] {
                        (source.as_str().to_uppercase())
                    }
                }
            }

            div class="actions" {
                button type="submit" id="apply-filters" class="btn" { "Aplicar filtros" }
                a id="reset-filters" class="btn btn-outline" href=(reset_href(region)) { "Limpar" }
            }
        }
    }
}

fn price_label(range: PriceRange) -> String {
    match range {
        PriceRange::Any => "Qualquer".to_string(),
        PriceRange::Between { min, max } => format!("{} a {}", brl(min), brl(max)),
        PriceRange::AtLeast { min } => format!("Acima de {}", brl(min)),
    }
}

pub fn reset_href(region: &Region) -> String {
    format!("/?{}", FilterSelection::reset(None).to_query_string(&region.key))
}

pub fn search_form() -> Markup {
    html! {
        form
            class="search"
            method="get"
            action="/search"
            hx-get="/search"
            hx-target="#search-result"
            hx-swap="innerHTML"
        {
            input type="search" id="address-search" name="q" placeholder="Buscar endereço..." required;
            button type="submit" id="search-btn" class="btn" { "Buscar" }
        }
        div id="search-result" {}
    }
}
