// templates/pages/explorer.rs

use crate::catalog::Catalog;
use crate::domain::{FilterSelection, FilteredView, Region};
use crate::templates::components::{
    empty_results, filter_form, map_container, property_card, region_selector, reset_href,
    search_form, stats_panel, MapData,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ExplorerVm<'a> {
    pub catalog: &'a Catalog,
    pub region: &'a Region,
    pub selection: &'a FilterSelection,
    pub view: &'a FilteredView<'a>,
}

pub fn explorer_page(vm: &ExplorerVm) -> Markup {
    let query = vm.selection.to_query_string(&vm.region.key);
    let map = MapData::new(vm.region, &vm.view.properties);

    desktop_layout(
        &vm.region.name,
        Some(vm.catalog.last_updated.as_str()),
        html! {
            main class="explorer" {
                aside class="sidebar" {
                    (region_selector(vm.catalog, vm.region, vm.selection))
                    (search_form())
                    (filter_form(vm.catalog, vm.region, vm.selection))
                    (stats_panel(&vm.view.summary))
                }

                section class="results" {
                    div class="results-head" {
                        h2 id="results-title" { "Melhores Oportunidades - " (vm.region.name) }
                        span id="results-count" { "(" (vm.view.summary.count) " imóveis)" }
                        div class="exports" {
                            a href={ "/export.xlsx?" (query) } { "Planilha" }
                            a href={ "/api/view?" (query) } { "JSON" }
                        }
                    }

                    div id="properties-list" {
                        @if vm.view.properties.is_empty() {
                            (empty_results(&reset_href(vm.region)))
                        } @else {
                            @for property in &vm.view.properties {
                                (property_card(property))
                            }
                        }
                    }
                }

                section class="map-pane" {
                    (map_container(&map))
                }
            }
        },
    )
}
