use axum::extract::{Extension, Path, Query};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::Arc;

use super::error::{ApiError, ApiResult};
use super::types::{
    CreateProductRequest, CreateProductResponse, DeleteProductResponse, ListParams, Product,
};
use crate::store::kv::KvStore;

/// Prefix under which product field maps are stored.
pub const PRODUCT_KEY_PREFIX: &str = "product:";
/// Store-resident counter that issues product ids.
pub const PRODUCT_COUNTER: &str = "product_counter";

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

/// Builds the catalog router with the store handle layered in.
pub fn router(store: Arc<KvStore>) -> Router {
    Router::new()
        .route("/product/all", get(handle_list_products))
        .route("/product", post(handle_create_product))
        .route(
            "/product/:id",
            get(handle_get_product).delete(handle_delete_product),
        )
        .layer(Extension(store))
}

fn product_key(id: &str) -> String {
    format!("{PRODUCT_KEY_PREFIX}{id}")
}

pub async fn handle_list_products(
    Query(params): Query<ListParams>,
    Extension(store): Extension<Arc<KvStore>>,
) -> ApiResult<Json<Vec<Product>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if limit > MAX_LIMIT {
        return Err(ApiError::bad_request(format!(
            "limit must be at most {MAX_LIMIT}"
        )));
    }

    let keys = store.keys_with_prefix(PRODUCT_KEY_PREFIX)?;
    let mut products = Vec::new();

    for key in keys.into_iter().take(limit) {
        let fields = store.get_fields(&key)?;
        if fields.is_empty() {
            // Raced with a delete between enumeration and fetch.
            continue;
        }
        let id = key.trim_start_matches(PRODUCT_KEY_PREFIX);
        match Product::from_fields(id, &fields) {
            Some(product) => products.push(product),
            None => tracing::warn!("Skipping malformed record under key {}", key),
        }
    }

    Ok(Json(products))
}

pub async fn handle_get_product(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<KvStore>>,
) -> ApiResult<Json<Product>> {
    let fields = store.get_fields(&product_key(&id))?;
    if fields.is_empty() {
        return Err(ApiError::not_found("Product not found"));
    }

    Product::from_fields(&id, &fields)
        .map(Json)
        .ok_or_else(|| ApiError::internal(format!("Malformed record for product id={id}")))
}

pub async fn handle_create_product(
    Extension(store): Extension<Arc<KvStore>>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Json<CreateProductResponse>> {
    validate_create(&req)?;

    let product_id = store.incr(PRODUCT_COUNTER)?;
    let fields = HashMap::from([
        ("name".to_string(), req.name),
        ("price".to_string(), req.price.to_string()),
        ("quantity".to_string(), req.quantity.to_string()),
    ]);

    // The id is consumed even if this write fails; the key then simply
    // never comes into existence.
    store.set_fields(&product_key(&product_id.to_string()), fields)?;

    tracing::debug!("Created product id={}", product_id);
    Ok(Json(CreateProductResponse { product_id }))
}

pub async fn handle_delete_product(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<KvStore>>,
) -> ApiResult<Json<DeleteProductResponse>> {
    let key = product_key(&id);
    if !store.exists(&key)? {
        return Err(ApiError::not_found(format!(
            "Product with id={id} does not exist"
        )));
    }

    // A key that vanished since the existence check is not an error.
    store.delete(&key)?;

    tracing::debug!("Deleted product id={}", id);
    Ok(Json(DeleteProductResponse {
        message: format!("Product with id={id} is deleted"),
    }))
}

fn validate_create(req: &CreateProductRequest) -> ApiResult<()> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("name must not be empty"));
    }
    if req.price < 0.0 {
        return Err(ApiError::bad_request("price must be non-negative"));
    }
    if req.quantity < 0 {
        return Err(ApiError::bad_request("quantity must be non-negative"));
    }
    Ok(())
}
