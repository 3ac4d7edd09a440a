//! The fixed product catalogue.
//!
//! Products are defined in code and never change at runtime. Everything that
//! needs a product (renderers, cart summaries) resolves it by id through
//! [`Catalogue::find_by_id`].

use std::sync::LazyLock;

use serde::Serialize;

use crate::types::{Category, Price};

/// A product for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique id, also used in URLs and persisted carts.
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
    /// Image path relative to the static asset root.
    pub image: &'static str,
    pub category: Category,
    pub description: &'static str,
}

impl Product {
    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A read-only, ordered set of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    products: Vec<Product>,
}

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(|| {
    Catalogue::new(vec![
        Product {
            id: "tshirt",
            name: "Classic T\u{2011}Shirt",
            price: Price::from_cents(2499),
            image: "images/tshirt.png",
            category: Category::Tops,
            description: "A versatile crew\u{2011}neck tee crafted from soft cotton, perfect for everyday wear.",
        },
        Product {
            id: "hoodie",
            name: "Comfy Hoodie",
            price: Price::from_cents(3999),
            image: "images/hoodie.png",
            category: Category::Outerwear,
            description: "Our warm and plush hoodie is ideal for layering on cooler days or lounging at home.",
        },
        Product {
            id: "jeans",
            name: "Denim Jeans",
            price: Price::from_cents(4999),
            image: "images/jeans.png",
            category: Category::Bottoms,
            description: "Classic straight\u{2011}leg denim jeans featuring a comfortable fit and timeless wash.",
        },
        Product {
            id: "jacket",
            name: "Casual Jacket",
            price: Price::from_cents(5999),
            image: "images/jacket.png",
            category: Category::Outerwear,
            description: "A lightweight jacket with subtle detailing, designed to complement any outfit.",
        },
    ])
});

impl Catalogue {
    /// Create a catalogue from an ordered list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalogue the shop sells from.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All products in catalogue order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
