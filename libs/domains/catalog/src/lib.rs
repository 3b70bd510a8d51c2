//! Product catalog domain.
//!
//! Server-rendered CRUD pages for a product catalog backed by an
//! in-memory store:
//!
//! - `models` - the Product entity and its form payload
//! - `repository` - storage trait plus the in-memory implementation
//! - `service` - pass-through orchestration over the repository
//! - `templates` - Handlebars views for the create/edit/list pages
//! - `handlers` - axum routes wiring forms and redirects together
//!
//! The router from [`handlers::router`] is meant to be nested under
//! `/product` by the hosting app.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod templates;

pub use error::{CatalogError, CatalogResult};
pub use models::{Product, ProductForm};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use templates::TemplateEngine;
