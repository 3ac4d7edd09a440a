//! Page chrome shared by every full page.
//!
//! Each page restores the visitor's preference and cart from storage and
//! renders them into the header (dark-mode toggle, cart count), the cart
//! overlay and the footer.

use clothing_co_core::{Catalogue, CartStore, PreferenceStore, Theme};

use crate::middleware::VisitorStorage;
use crate::routes::cart::CartView;

/// Dark-mode display data for templates.
#[derive(Clone)]
pub struct ThemeView {
    pub dark: bool,
    pub icon: &'static str,
}

impl From<Theme> for ThemeView {
    fn from(theme: Theme) -> Self {
        Self {
            dark: theme.is_dark(),
            icon: theme.toggle_icon(),
        }
    }
}

/// Chrome state restored at the start of a page load.
pub struct Chrome {
    pub theme: ThemeView,
    pub cart: CartView,
}

impl Chrome {
    /// Restore the preference and cart stores and derive their views.
    pub fn restore(storage: &mut VisitorStorage, catalogue: &Catalogue) -> Self {
        let theme = PreferenceStore::restore(&mut *storage).theme();
        let cart = CartStore::restore(&mut *storage, catalogue).summary();

        Self {
            theme: theme.into(),
            cart: CartView::from(&cart),
        }
    }
}
