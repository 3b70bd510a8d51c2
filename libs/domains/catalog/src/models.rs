use serde::{Deserialize, Serialize};

/// Product entity stored by the catalog.
///
/// Ids are plain strings: callers may supply their own, and the repository
/// assigns a generated one when the incoming id is blank. Wire and view
/// field names follow the `productId`/`productName`/`productQuantity`
/// convention used by the HTML forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: String,
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productQuantity")]
    pub quantity: i32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Whether this product still needs an id assigned
    pub fn has_blank_id(&self) -> bool {
        self.id.trim().is_empty()
    }
}

/// Form payload bound from the create and edit pages.
///
/// The create form omits `productId`, so it defaults to an empty string
/// and the repository generates one.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    #[serde(rename = "productId", default)]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productQuantity")]
    pub product_quantity: i32,
}

impl ProductForm {
    pub fn into_product(self) -> Product {
        Product {
            id: self.product_id,
            name: self.product_name,
            quantity: self.product_quantity,
        }
    }
}
