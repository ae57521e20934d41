use crate::services::catalog::{self, Category, Product};
use crate::types::AppError;
use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    category: Option<Category>,
}

pub async fn list_products(
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<&'static Product>>, AppError> {
    let Query(query) = query?;
    let products = match query.category {
        Some(category) => catalog::by_category(category),
        None => catalog::all().iter().collect(),
    };
    Ok(Json(products))
}

pub async fn get_product(Path(id): Path<String>) -> Result<Json<&'static Product>, AppError> {
    catalog::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))
}
