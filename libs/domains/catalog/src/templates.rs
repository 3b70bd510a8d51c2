//! Server-rendered views for the product catalog.
//!
//! Templates are compiled once at startup and rendered per request.
//! Handlebars escapes interpolated values by default, so user-supplied
//! product names are safe to embed.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;

const CREATE_PRODUCT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Create New Product</title>
</head>
<body>
<h2>Create New Product</h2>
<form method="post" action="create">
    <div>
        <label for="nameInput">Name</label>
        <input id="nameInput" type="text" name="productName" value="{{product.productName}}" placeholder="Enter product's name">
    </div>
    <div>
        <label for="quantityInput">Quantity</label>
        <input id="quantityInput" type="number" name="productQuantity" value="{{product.productQuantity}}" placeholder="Enter product's quantity">
    </div>
    <button type="submit">Submit</button>
</form>
</body>
</html>
"#;

const EDIT_PRODUCT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Edit Product</title>
</head>
<body>
<h2>Edit Product</h2>
<form method="post" action="edit">
    <input type="hidden" name="productId" value="{{product.productId}}">
    <div>
        <label for="nameInput">Name</label>
        <input id="nameInput" type="text" name="productName" value="{{product.productName}}">
    </div>
    <div>
        <label for="quantityInput">Quantity</label>
        <input id="quantityInput" type="number" name="productQuantity" value="{{product.productQuantity}}">
    </div>
    <button type="submit">Submit</button>
</form>
</body>
</html>
"#;

const PRODUCT_LIST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Product List</title>
</head>
<body>
<h2>Product List</h2>
<a href="create">Create Product</a>
<table border="1">
    <thead>
    <tr>
        <th>Name</th>
        <th>Quantity</th>
        <th>Actions</th>
    </tr>
    </thead>
    <tbody>
    {{#each products}}
    <tr>
        <td>{{productName}}</td>
        <td>{{productQuantity}}</td>
        <td>
            <a href="edit?id={{productId}}">Edit</a>
            <a href="delete/{{productId}}">Delete</a>
        </td>
    </tr>
    {{/each}}
    </tbody>
</table>
</body>
</html>
"#;

/// View engine for the catalog pages
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> CatalogResult<Self> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string("create_product", CREATE_PRODUCT_TEMPLATE)
            .map_err(|e| {
                CatalogError::Template(format!("Failed to register create_product: {}", e))
            })?;

        handlebars
            .register_template_string("edit_product", EDIT_PRODUCT_TEMPLATE)
            .map_err(|e| {
                CatalogError::Template(format!("Failed to register edit_product: {}", e))
            })?;

        handlebars
            .register_template_string("product_list", PRODUCT_LIST_TEMPLATE)
            .map_err(|e| {
                CatalogError::Template(format!("Failed to register product_list: {}", e))
            })?;

        Ok(Self { handlebars })
    }

    fn render<T: Serialize>(&self, template_name: &str, data: &T) -> CatalogResult<String> {
        Ok(self.handlebars.render(template_name, data)?)
    }

    /// Render the create form. The bound product is usually empty.
    pub fn render_create(&self, product: &Product) -> CatalogResult<String> {
        debug!("Rendering create product view");
        self.render("create_product", &json!({ "product": product }))
    }

    /// Render the edit form pre-filled with the product's current values
    pub fn render_edit(&self, product: &Product) -> CatalogResult<String> {
        debug!(product_id = %product.id, "Rendering edit product view");
        self.render("edit_product", &json!({ "product": product }))
    }

    /// Render the product table
    pub fn render_list(&self, products: &[Product]) -> CatalogResult<String> {
        debug!(count = products.len(), "Rendering product list view");
        self.render("product_list", &json!({ "products": products }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_registers_all_templates() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_render_list_shows_each_product() {
        let engine = TemplateEngine::new().unwrap();
        let products = vec![
            Product::new("p1", "Soap", 100),
            Product::new("p2", "Shampoo", 50),
        ];

        let html = engine.render_list(&products).unwrap();

        assert!(html.contains("Soap"));
        assert!(html.contains("Shampoo"));
        assert!(html.contains("edit?id=p1"));
        assert!(html.contains("delete/p2"));
    }

    #[test]
    fn test_render_edit_carries_the_id_in_a_hidden_field() {
        let engine = TemplateEngine::new().unwrap();
        let product = Product::new("p1", "Soap", 100);

        let html = engine.render_edit(&product).unwrap();

        assert!(html.contains(r#"name="productId" value="p1""#));
        assert!(html.contains(r#"value="Soap""#));
    }

    #[test]
    fn test_render_escapes_markup_in_names() {
        let engine = TemplateEngine::new().unwrap();
        let products = vec![Product::new("p1", "<script>alert(1)</script>", 1)];

        let html = engine.render_list(&products).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_create_with_empty_product() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine.render_create(&Product::default()).unwrap();

        assert!(html.contains("Create New Product"));
        assert!(html.contains(r#"name="productName""#));
    }
}
