//! Cart route handlers.
//!
//! Cart operations use HTMX: every mutation returns the freshly rendered
//! cart panel plus an out-of-band cart count, and triggers `cart-updated`
//! so other page elements can refresh.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use clothing_co_core::{CartStore, CartSummary};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::VisitorStorage;
use crate::state::AppState;

/// Message shown when the visitor presses the checkout button.
pub const CHECKOUT_UNAVAILABLE: &str = "Checkout is not implemented in this MVP.";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Total price, two decimals, no currency symbol.
    pub total: String,
    pub count: u64,
}

impl From<&CartSummary> for CartView {
    fn from(summary: &CartSummary) -> Self {
        Self {
            items: summary
                .items
                .iter()
                .map(|item| CartItemView {
                    id: item.product.id.to_string(),
                    name: item.product.name.to_string(),
                    image: format!("/static/{}", item.product.image),
                    quantity: item.quantity,
                    line_total: item.line_total.to_string(),
                })
                .collect(),
            total: summary.total_price.format_amount(),
            count: summary.total_count,
        }
    }
}

/// Form data naming a cart entry.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub id: String,
}

/// Form data for a quantity change.
#[derive(Debug, Deserialize)]
pub struct ChangeQuantityForm {
    pub id: String,
    pub delta: i64,
}

/// Cart panel fragment (items + total).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Cart panel fragment with an out-of-band cart count (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_update.html")]
pub struct CartUpdateTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Checkout notice fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_notice.html")]
pub struct CheckoutNoticeTemplate {
    pub message: &'static str,
}

/// Reject blank ids; anything else is used exactly as submitted.
fn require_id(id: &str) -> Result<&str> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("missing product id".to_string()));
    }
    Ok(id)
}

/// Render the mutation response and signal `cart-updated`.
fn cart_updated(summary: &CartSummary) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartUpdateTemplate {
            cart: CartView::from(summary),
        },
    )
        .into_response()
}

/// Display the cart panel.
#[instrument(skip(state, storage))]
pub async fn show(State(state): State<AppState>, mut storage: VisitorStorage) -> impl IntoResponse {
    let summary = CartStore::restore(&mut storage, state.catalogue()).summary();
    CartPanelTemplate {
        cart: CartView::from(&summary),
    }
}

/// Cart count badge.
#[instrument(skip(state, storage))]
pub async fn count(State(state): State<AppState>, mut storage: VisitorStorage) -> impl IntoResponse {
    let summary = CartStore::restore(&mut storage, state.catalogue()).summary();
    CartCountTemplate {
        count: summary.total_count,
    }
}

/// Add one unit of a product (HTMX).
#[instrument(skip(state, storage))]
pub async fn add(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Form(form): Form<CartItemForm>,
) -> Result<Response> {
    let id = require_id(&form.id)?;
    let summary = CartStore::restore(&mut storage, state.catalogue()).add_to_cart(id);
    storage.commit().await?;

    add_breadcrumb("cart", "Added to cart", &[("product_id", id)]);
    tracing::info!(product_id = id, total_count = summary.total_count, "Added to cart");
    Ok(cart_updated(&summary))
}

/// Remove a product entirely (HTMX).
#[instrument(skip(state, storage))]
pub async fn remove(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Form(form): Form<CartItemForm>,
) -> Result<Response> {
    let id = require_id(&form.id)?;
    let summary = CartStore::restore(&mut storage, state.catalogue()).remove_from_cart(id);
    storage.commit().await?;

    add_breadcrumb("cart", "Removed from cart", &[("product_id", id)]);
    Ok(cart_updated(&summary))
}

/// Increment or decrement a product's quantity (HTMX).
#[instrument(skip(state, storage))]
pub async fn change_quantity(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Form(form): Form<ChangeQuantityForm>,
) -> Result<Response> {
    let id = require_id(&form.id)?;
    let summary =
        CartStore::restore(&mut storage, state.catalogue()).change_quantity(id, form.delta);
    storage.commit().await?;

    add_breadcrumb("cart", "Changed quantity", &[("product_id", id)]);
    Ok(cart_updated(&summary))
}

/// Checkout is not available; tell the visitor so.
#[instrument]
pub async fn checkout() -> impl IntoResponse {
    CheckoutNoticeTemplate {
        message: CHECKOUT_UNAVAILABLE,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_rejects_blank() {
        assert!(matches!(require_id(""), Err(AppError::BadRequest(_))));
        assert!(matches!(require_id("   "), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_require_id_keeps_id_verbatim() {
        assert_eq!(require_id("tshirt").unwrap(), "tshirt");
        assert_eq!(require_id(" tshirt").unwrap(), " tshirt");
    }
}
