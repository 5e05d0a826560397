// errors.rs
use crate::catalog::CatalogError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the request handling
/// (routing, missing resources, etc.) or downstream layers (catalog, exports).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::CatalogUnavailable(_) => 503,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
