//! Shop page route handlers: product grid with search and category filter.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use clothing_co_core::{ALL_CATEGORIES, Category, filter_products};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::VisitorStorage;
use crate::routes::cart::CartView;
use crate::routes::layout::{Chrome, ThemeView};
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Shop filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    /// Search term matched against name and description.
    #[serde(default)]
    pub q: String,
    /// Category id, or `all`.
    #[serde(default)]
    pub category: String,
}

impl ShopQuery {
    /// Selected category, with an empty selection meaning all.
    fn category(&self) -> &str {
        if self.category.is_empty() {
            ALL_CATEGORIES
        } else {
            &self.category
        }
    }
}

/// An entry in the category select.
#[derive(Clone)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn category_options(selected: &str) -> Vec<CategoryOption> {
    std::iter::once((ALL_CATEGORIES, "All"))
        .chain(Category::ALL.iter().map(|c| (c.as_str(), c.label())))
        .map(|(value, label)| CategoryOption {
            value,
            label,
            selected: value == selected,
        })
        .collect()
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub theme: ThemeView,
    pub cart: CartView,
    pub query: String,
    pub categories: Vec<CategoryOption>,
    pub products: Vec<ProductView>,
}

/// Shop grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/shop_grid.html")]
pub struct ShopGridTemplate {
    pub products: Vec<ProductView>,
}

fn filtered(state: &AppState, query: &ShopQuery) -> Vec<ProductView> {
    filter_products(state.catalogue().products(), &query.q, query.category())
        .into_iter()
        .map(ProductView::from)
        .collect()
}

/// Display the shop page.
#[instrument(skip(state, storage))]
pub async fn index(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    let Chrome { theme, cart } = Chrome::restore(&mut storage, state.catalogue());

    ShopTemplate {
        theme,
        cart,
        products: filtered(&state, &query),
        categories: category_options(query.category()),
        query: query.q,
    }
}

/// Re-render the grid for the current filter (HTMX, on every keystroke).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    ShopGridTemplate {
        products: filtered(&state, &query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_means_all() {
        let query = ShopQuery::default();
        assert_eq!(query.category(), ALL_CATEGORIES);
    }

    #[test]
    fn test_category_options_mark_selection() {
        let options = category_options("outerwear");
        let values: Vec<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["all", "tops", "bottoms", "outerwear"]);
        assert!(options.iter().filter(|o| o.selected).all(|o| o.value == "outerwear"));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }
}
