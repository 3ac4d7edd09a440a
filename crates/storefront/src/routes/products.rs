//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use clothing_co_core::Product;
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::VisitorStorage;
use crate::routes::cart::CartView;
use crate::routes::layout::{Chrome, ThemeView};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_string(),
            price: product.price.to_string(),
            image: format!("/static/{}", product.image),
            category: product.category.to_string(),
            description: product.description.to_string(),
            url: format!("/product?id={}", product.id),
        }
    }
}

/// Product detail query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub id: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductShowTemplate {
    pub theme: ThemeView,
    pub cart: CartView,
    /// `None` renders the "Product not found." message.
    pub product: Option<ProductView>,
}

/// Display a single product, or a not-found message for unknown ids.
#[instrument(skip(state, storage))]
pub async fn show(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Query(query): Query<ProductQuery>,
) -> impl IntoResponse {
    let Chrome { theme, cart } = Chrome::restore(&mut storage, state.catalogue());

    let product = query
        .id
        .as_deref()
        .and_then(|id| state.catalogue().find_by_id(id))
        .map(ProductView::from);
    if product.is_none() {
        tracing::debug!(id = ?query.id, "Product not found");
    }

    ProductShowTemplate {
        theme,
        cart,
        product,
    }
}
