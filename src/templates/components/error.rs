use maud::{html, Markup};

/// Blocking notice with a single action link.
pub fn error_panel(message: &str, action_href: &str, action_label: &str) -> Markup {
    html! {
        div class="notice notice-error" {
            p { (message) }
            a class="btn btn-outline" href=(action_href) { (action_label) }
        }
    }
}

/// Shown in place of the result list when nothing matches.
pub fn empty_results(reset_href: &str) -> Markup {
    html! {
        div class="notice" {
            p { "Nenhum imóvel encontrado com os filtros atuais" }
            a class="btn btn-outline" href=(reset_href) { "Limpar filtros" }
        }
    }
}
