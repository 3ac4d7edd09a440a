//! Clothing Co Core - catalogue, cart and preference stores.
//!
//! This crate provides the stateful logic shared by the storefront and CLI:
//! - `storefront` - Server-rendered shop (axum + askama)
//! - `cli` - Command-line tools for browsing and driving a cart
//!
//! # Architecture
//!
//! The core crate contains no rendering and no network I/O. Persistence goes
//! through the [`storage::KeyValueStore`] trait, so the stores can be driven
//! by a browser session, a JSON file or an in-memory map alike.
//!
//! # Modules
//!
//! - [`types`] - Prices and product categories
//! - [`catalogue`] - The fixed product catalogue and id lookup
//! - [`storage`] - Key-value storage trait and in-memory implementation
//! - [`cart`] - Cart state machine, persistence and summaries
//! - [`preference`] - Dark-mode preference store
//! - [`filter`] - Shop search and category filtering
//! - [`effects`] - Tilt and parallax computations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalogue;
pub mod effects;
pub mod filter;
pub mod preference;
pub mod storage;
pub mod types;

pub use cart::{Cart, CartStore, CartSummary, LineItem};
pub use catalogue::{Catalogue, Product};
pub use filter::{ALL_CATEGORIES, filter_products};
pub use preference::{PreferenceStore, Theme};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use types::*;
