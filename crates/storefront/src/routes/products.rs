//! Product catalog route handlers.
//!
//! The catalog is compiled into the binary; these handlers serve it as JSON
//! for the front-end shell.

use axum::{Json, extract::Path};
use tracing::instrument;

use legionnaire_core::{Product, catalog};

use crate::error::{AppError, Result};

/// List the full catalog.
///
/// GET /products
pub async fn index() -> Json<&'static [Product]> {
    Json(catalog::products())
}

/// Show a single product by its stable identifier.
///
/// GET /products/{id}
#[instrument]
pub async fn show(Path(id): Path<String>) -> Result<Json<&'static Product>> {
    catalog::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(id))
}
