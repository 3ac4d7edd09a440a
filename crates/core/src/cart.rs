//! Shopping cart state machine.
//!
//! A [`Cart`] maps product ids to quantities in insertion order. The
//! [`CartStore`] owns a cart together with the storage it persists to: every
//! mutation writes the cart back under [`CART_KEY`], recomputes the
//! [`CartSummary`] and hands it to subscribers.
//!
//! # Invariants
//!
//! - A product id present in the cart always has quantity ≥ 1.
//! - Dropping to quantity ≤ 0 removes the entry entirely.
//! - Ids are not validated against the catalogue. Unknown ids still occupy a
//!   slot and count towards [`CartSummary::total_count`], but contribute no
//!   line item and no price.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalogue::{Catalogue, Product};
use crate::storage::{CART_KEY, KeyValueStore, StorageError};
use crate::types::Price;

/// Product id → quantity, in the order ids were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: IndexMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity held for `id` (0 if absent).
    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of distinct ids in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Sum of all quantities, including ids the catalogue does not know.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.entries.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Increment the quantity for `id` by one.
    pub fn add(&mut self, id: &str) {
        let qty = self.entries.entry(id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Remove `id` entirely, returning its previous quantity.
    pub fn remove(&mut self, id: &str) -> Option<u32> {
        self.entries.shift_remove(id)
    }

    /// Apply `delta` to the quantity for `id`.
    ///
    /// A result of zero or less removes the entry.
    pub fn change_quantity(&mut self, id: &str, delta: i64) {
        let new_qty = i64::from(self.quantity(id)).saturating_add(delta);
        if new_qty <= 0 {
            self.remove(id);
            return;
        }

        let new_qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        match self.entries.get_mut(id) {
            Some(qty) => *qty = new_qty,
            None => {
                self.entries.insert(id.to_string(), new_qty);
            }
        }
    }

    /// Serialize as a JSON object of id → quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Parse a JSON object of id → quantity.
    ///
    /// Entries with a quantity of zero or less are dropped so a restored cart
    /// upholds the same invariants as one built through mutations.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object of integer quantities.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let raw: IndexMap<String, i64> = serde_json::from_str(raw)?;
        let entries = raw
            .into_iter()
            .filter(|&(_, qty)| qty > 0)
            .map(|(id, qty)| (id, u32::try_from(qty).unwrap_or(u32::MAX)))
            .collect();
        Ok(Self { entries })
    }

    /// Load the cart persisted in `storage`.
    ///
    /// Missing or malformed data yields an empty cart.
    #[must_use]
    pub fn load(storage: &impl KeyValueStore) -> Self {
        let Some(raw) = storage.get(CART_KEY) else {
            return Self::new();
        };

        Self::from_json(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding malformed persisted cart");
            Self::new()
        })
    }

    /// Write the cart to `storage`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn save(&self, storage: &mut impl KeyValueStore) -> Result<(), StorageError> {
        storage.set(CART_KEY, self.to_json()?)
    }

    /// Derive line items and totals against `catalogue`.
    #[must_use]
    pub fn summary(&self, catalogue: &Catalogue) -> CartSummary {
        let items: Vec<LineItem> = self
            .iter()
            .filter_map(|(id, quantity)| {
                let product = catalogue.find_by_id(id)?;
                Some(LineItem {
                    product: product.clone(),
                    quantity,
                    line_total: product.price * quantity,
                })
            })
            .collect();

        CartSummary {
            total_price: items.iter().map(|item| item.line_total).sum(),
            total_count: self.total_count(),
            items,
        }
    }
}

/// A resolved cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
    /// `product.price × quantity`.
    pub line_total: Price,
}

/// Derived view of a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Line items for ids that resolve in the catalogue, in cart order.
    pub items: Vec<LineItem>,
    /// Sum of all quantities.
    pub total_count: u64,
    /// Sum of line totals.
    pub total_price: Price,
}

type Listener<'c> = Box<dyn FnMut(&CartSummary) + 'c>;

/// A cart bound to its storage and catalogue.
///
/// Build one per page load with [`CartStore::restore`] and pass it to
/// whatever needs to read or mutate the cart.
pub struct CartStore<'c, S> {
    storage: S,
    catalogue: &'c Catalogue,
    cart: Cart,
    listeners: Vec<Listener<'c>>,
}

impl<S> fmt::Debug for CartStore<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<'c, S: KeyValueStore> CartStore<'c, S> {
    /// Restore the persisted cart from `storage`.
    ///
    /// Never fails: missing or malformed data starts an empty cart.
    #[must_use]
    pub fn restore(storage: S, catalogue: &'c Catalogue) -> Self {
        let cart = Cart::load(&storage);
        debug!(entries = cart.len(), "Cart restored");

        Self {
            storage,
            catalogue,
            cart,
            listeners: Vec::new(),
        }
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a listener called with the fresh summary after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartSummary) + 'c) {
        self.listeners.push(Box::new(listener));
    }

    /// Add one unit of `product_id`.
    pub fn add_to_cart(&mut self, product_id: &str) -> CartSummary {
        self.cart.add(product_id);
        self.commit()
    }

    /// Remove `product_id` entirely. No-op on the cart if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) -> CartSummary {
        self.cart.remove(product_id);
        self.commit()
    }

    /// Adjust the quantity of `product_id` by `delta`, removing it at ≤ 0.
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) -> CartSummary {
        self.cart.change_quantity(product_id, delta);
        self.commit()
    }

    /// Recompute the summary from the current state.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary(self.catalogue)
    }

    /// Write the current state to storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        self.cart.save(&mut self.storage)
    }

    /// Persist (best effort), recompute and notify.
    fn commit(&mut self) -> CartSummary {
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist cart");
        }

        let summary = self.summary();
        for listener in &mut self.listeners {
            listener(&summary);
        }
        summary
    }
}
