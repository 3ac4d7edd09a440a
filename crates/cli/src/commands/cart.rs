//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! cc-cli cart add tshirt
//! cc-cli cart qty tshirt -1
//! cc-cli cart remove tshirt
//! cc-cli cart show
//! ```

use std::io::{self, Write};

use clothing_co_core::{CartStore, CartSummary, Catalogue, KeyValueStore};

use crate::error::CliError;

/// A single cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation<'a> {
    Add(&'a str),
    Remove(&'a str),
    ChangeQuantity(&'a str, i64),
}

/// Print the current cart.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn show(
    storage: impl KeyValueStore,
    catalogue: &Catalogue,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let store = CartStore::restore(storage, catalogue);
    write_summary(out, &store.summary())?;
    Ok(())
}

/// Apply `mutation` and print the recomputed cart.
///
/// The summary is printed by a store subscriber after the cart is persisted.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn mutate(
    storage: impl KeyValueStore,
    catalogue: &Catalogue,
    mutation: Mutation<'_>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut written = Ok(());
    {
        let mut store = CartStore::restore(storage, catalogue);
        store.subscribe(|summary| written = write_summary(&mut *out, summary));

        let summary = match mutation {
            Mutation::Add(id) => store.add_to_cart(id),
            Mutation::Remove(id) => store.remove_from_cart(id),
            Mutation::ChangeQuantity(id, delta) => store.change_quantity(id, delta),
        };
        tracing::debug!(?mutation, total_count = summary.total_count, "Cart updated");
    }
    Ok(written?)
}

/// Render a cart summary, one line per resolvable entry.
fn write_summary(out: &mut impl Write, summary: &CartSummary) -> io::Result<()> {
    if summary.items.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    }
    for item in &summary.items {
        writeln!(
            out,
            "{:>3} x {:<18} {:>8}",
            item.quantity,
            item.product.name,
            item.line_total.to_string()
        )?;
    }
    writeln!(out, "Items: {}", summary.total_count)?;
    writeln!(out, "Total: {}", summary.total_price)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clothing_co_core::MemoryStore;
    use clothing_co_core::storage::CART_KEY;

    use super::*;

    fn run(storage: &mut MemoryStore, mutation: Mutation<'_>) -> String {
        let mut out = Vec::new();
        mutate(storage, Catalogue::builtin(), mutation, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_mutations_print_summary() {
        let mut storage = MemoryStore::new();
        run(&mut storage, Mutation::Add("tshirt"));
        run(&mut storage, Mutation::Add("tshirt"));
        let text = run(&mut storage, Mutation::Add("jeans"));
        assert!(text.contains("Items: 3"));
        assert!(text.contains("Total: $99.97"));
        assert!(text.contains("$49.98"));

        let text = run(&mut storage, Mutation::ChangeQuantity("tshirt", -2));
        assert!(text.contains("Items: 1"));
        assert!(text.contains("Total: $49.99"));
        assert!(!text.contains("Classic T"));
    }

    #[test]
    fn test_mutations_persist() {
        let mut storage = MemoryStore::new();
        run(&mut storage, Mutation::Add("hoodie"));
        run(&mut storage, Mutation::ChangeQuantity("jacket", 2));
        assert_eq!(
            storage.get(CART_KEY).as_deref(),
            Some(r#"{"hoodie":1,"jacket":2}"#)
        );

        let text = run(&mut storage, Mutation::Remove("hoodie"));
        assert!(text.contains("Total: $119.98"));
    }

    #[test]
    fn test_show_empty_cart() {
        let mut out = Vec::new();
        show(MemoryStore::new(), Catalogue::builtin(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Your cart is empty.\nItems: 0\nTotal: $0.00\n");
    }

    #[test]
    fn test_show_skips_unknown_ids() {
        let storage: MemoryStore = [(CART_KEY, r#"{"socks":2,"jeans":1}"#)].into_iter().collect();
        let mut out = Vec::new();
        show(storage, Catalogue::builtin(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Denim Jeans"));
        assert!(!text.contains("socks"));
        assert!(text.contains("Items: 3"));
        assert!(text.contains("Total: $49.99"));
    }
}
