use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product record as exposed over HTTP.
///
/// The id is the store key suffix (a stringified counter value); numeric
/// fields are parsed back out of the string-typed field map on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    /// Rebuilds a product from its stored field map.
    ///
    /// Returns `None` if a field is missing or fails to parse; callers
    /// decide whether that is a skip (list) or an error (get).
    pub fn from_fields(id: &str, fields: &HashMap<String, String>) -> Option<Self> {
        let name = fields.get("name")?.clone();
        let price = fields.get("price")?.parse().ok()?;
        let quantity = fields.get("quantity")?.parse().ok()?;

        Some(Self {
            id: id.to_string(),
            name,
            price,
            quantity,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub product_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}
