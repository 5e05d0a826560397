use crate::errors::ServerError;
use crate::templates::components::error_panel;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(err: &ServerError) -> Markup {
    let body = match err {
        ServerError::NotFound => error_panel("Página não encontrada", "/", "Voltar ao início"),
        // Load failures block the whole view; reloading is the only way to retry.
        ServerError::CatalogUnavailable(_) => error_panel(
            "Erro ao carregar os dados da aplicação",
            "",
            "Tentar novamente",
        ),
        ServerError::XlsxError(_) | ServerError::InternalError => {
            error_panel("Erro interno do servidor", "/", "Voltar ao início")
        }
    };

    desktop_layout(
        &format!("Erro {}", err.status()),
        None,
        html! {
            main class="container" {
                (body)
            }
        },
    )
}
