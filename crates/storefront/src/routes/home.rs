//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use clothing_co_core::effects::{PARALLAX_FACTOR, TILT_DIVISOR, Tilt, parallax_background_position};
use tracing::instrument;

use crate::filters;
use crate::middleware::VisitorStorage;
use crate::routes::cart::CartView;
use crate::routes::layout::{Chrome, ThemeView};
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Home page template: parallax hero and the horizontal product strip.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub theme: ThemeView,
    pub cart: CartView,
    pub products: Vec<ProductView>,
    pub tilt_divisor: f64,
    /// Transform restored when the pointer leaves a card.
    pub tilt_reset: String,
    pub parallax_factor: f64,
    /// Hero background offset before any scrolling.
    pub parallax_start: String,
}

/// Display the home page.
#[instrument(skip(state, storage))]
pub async fn home(State(state): State<AppState>, mut storage: VisitorStorage) -> impl IntoResponse {
    let Chrome { theme, cart } = Chrome::restore(&mut storage, state.catalogue());

    HomeTemplate {
        theme,
        cart,
        products: state
            .catalogue()
            .products()
            .iter()
            .map(ProductView::from)
            .collect(),
        tilt_divisor: TILT_DIVISOR,
        tilt_reset: Tilt::RESET.css_transform(),
        parallax_factor: PARALLAX_FACTOR,
        parallax_start: parallax_background_position(0.0),
    }
}
