use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    // Message format is load-bearing: existing clients match it verbatim
    #[error("Product with Id + {0} was not found.")]
    NotFound(String),

    #[error("Product and Product Id must not be null.")]
    InvalidArgument,

    #[error("Template error: {0}")]
    Template(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => {
                AppError::NotFound(format!("Product with Id + {} was not found.", id))
            }
            CatalogError::InvalidArgument => {
                AppError::BadRequest("Product and Product Id must not be null.".to_string())
            }
            CatalogError::Template(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<handlebars::RenderError> for CatalogError {
    fn from(err: handlebars::RenderError) -> Self {
        CatalogError::Template(err.to_string())
    }
}
