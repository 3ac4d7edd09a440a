//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero + product strip)
//! GET  /health                 - Health check
//!
//! # Shop
//! GET  /shop                   - Product grid with search and category filter
//! GET  /shop/grid              - Grid fragment (HTMX, every keystroke)
//! GET  /product?id=            - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart panel (items + total)
//! GET  /cart/count             - Cart count badge
//! POST /cart/add               - Add one unit
//! POST /cart/remove            - Remove a product
//! POST /cart/quantity          - Change quantity by a delta
//! POST /checkout               - Checkout-unavailable notice
//!
//! # Preferences
//! POST /preferences/dark       - Toggle dark mode
//!
//! # Contact
//! GET  /contact                - Contact page
//! POST /contact                - Submit contact form
//! ```

pub mod cart;
pub mod contact;
pub mod home;
pub mod layout;
pub mod preferences;
pub mod products;
pub mod shop;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/quantity", post(cart::change_quantity))
}

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/grid", get(shop::grid))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop and product detail
        .nest("/shop", shop_routes())
        .route("/product", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        // Preferences
        .route("/preferences/dark", post(preferences::toggle_dark))
        // Contact
        .route("/contact", get(contact::show).post(contact::submit))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
