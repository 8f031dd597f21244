//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::Price;

/// A product in the catalog.
///
/// Products are immutable and sourced from the compiled-in catalog; they live
/// for the lifetime of the process. A product without a price is sold on a
/// price-on-request basis and contributes zero to cart totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable, unique identifier (e.g. `ftac-evolution`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label (e.g. `Premium`).
    pub category: String,
    /// Short marketing description.
    pub short_description: String,
    /// Ordered list of feature strings.
    pub features: Vec<String>,
    /// Unit price; `None` means price on request.
    pub price: Option<Price>,
    /// Available color variants; may be empty.
    pub colors: Vec<String>,
    /// Human-readable delivery estimate (e.g. `6-8 weeks`).
    pub delivery: String,
    /// Image path relative to the static asset root.
    pub image: String,
}

impl Product {
    /// Whether this product is sold on a price-on-request basis.
    #[must_use]
    pub const fn is_price_on_request(&self) -> bool {
        self.price.is_none()
    }
}
