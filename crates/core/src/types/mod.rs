//! Core value types for the storefront.

pub mod category;
pub mod price;

pub use category::{Category, UnknownCategory};
pub use price::Price;
