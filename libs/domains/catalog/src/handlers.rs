use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductForm};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::templates::TemplateEngine;

/// Shared state for the catalog pages: the service plus the view engine
struct PageState<R: ProductRepository> {
    service: ProductService<R>,
    templates: TemplateEngine,
}

/// Create the catalog router with all product pages.
///
/// The router is meant to be nested under `/product`; redirects issued by
/// the handlers assume that prefix.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
) -> CatalogResult<Router> {
    let state = Arc::new(PageState {
        service,
        templates: TemplateEngine::new()?,
    });

    Ok(Router::new()
        .route("/create", get(create_form).post(create_product))
        .route("/list", get(list_products))
        .route("/edit", get(edit_form).post(edit_product))
        .route("/delete/{id}", get(delete_product))
        .with_state(state))
}

/// Render the create form with an empty product bound to it
async fn create_form<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
) -> CatalogResult<Html<String>> {
    let page = state.templates.render_create(&Product::default())?;
    Ok(Html(page))
}

/// Bind the submitted form, create the product, and return to the list.
/// The page flow does not surface creation failures; they are only logged.
async fn create_product<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
    Form(form): Form<ProductForm>,
) -> Redirect {
    if let Err(error) = state.service.create_product(form.into_product()).await {
        warn!(%error, "Create product failed");
    }

    Redirect::to("list")
}

/// Render the table of all products
async fn list_products<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
) -> CatalogResult<Html<String>> {
    let products = state.service.find_all().await?;
    let page = state.templates.render_list(&products)?;
    Ok(Html(page))
}

#[derive(Debug, Deserialize)]
struct EditQuery {
    id: String,
}

/// Render the edit form for the product named by `?id=`.
/// Unknown ids fall back to the list instead of an error page.
async fn edit_form<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
    Query(query): Query<EditQuery>,
) -> CatalogResult<Response> {
    match state.service.find_by_id(&query.id).await {
        Ok(product) => {
            let page = state.templates.render_edit(&product)?;
            Ok(Html(page).into_response())
        }
        Err(CatalogError::NotFound(_)) => Ok(Redirect::to("list").into_response()),
        Err(err) => Err(err),
    }
}

/// Apply the submitted edit and return to the list.
/// Like creation, failures are logged rather than rendered.
async fn edit_product<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
    Form(form): Form<ProductForm>,
) -> Redirect {
    if let Err(error) = state.service.update_product(form.into_product()).await {
        warn!(%error, "Update product failed");
    }

    Redirect::to("list")
}

/// Delete the product with the given path id, then return to the list.
/// Ids that are no longer stored fall through silently.
async fn delete_product<R: ProductRepository>(
    State(state): State<Arc<PageState<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Redirect> {
    match state.service.find_by_id(&id).await {
        Ok(product) => state.service.delete_product(&product).await?,
        Err(CatalogError::NotFound(_)) => {}
        Err(err) => return Err(err),
    }

    Ok(Redirect::to("/product/list"))
}
