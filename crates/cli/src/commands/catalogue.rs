//! Catalogue browsing commands.
//!
//! # Usage
//!
//! ```bash
//! cc-cli catalogue
//! cc-cli search -q jean
//! cc-cli search -c outerwear
//! cc-cli show hoodie
//! ```

use std::io::{self, Write};

use clothing_co_core::{ALL_CATEGORIES, Catalogue, Category, Product, filter_products};

use crate::error::CliError;

/// List every product in catalogue order.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn list(catalogue: &Catalogue, out: &mut impl Write) -> Result<(), CliError> {
    for product in catalogue.products() {
        write_row(out, product)?;
    }
    Ok(())
}

/// List the products matching `term` within `category` (or `all`).
///
/// # Errors
///
/// Returns `CliError::UnknownCategory` if `category` is neither `all` nor a
/// known category.
pub fn search(
    catalogue: &Catalogue,
    term: &str,
    category: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if category != ALL_CATEGORIES {
        category.parse::<Category>()?;
    }

    let hits = filter_products(catalogue.products(), term, category);
    tracing::debug!(term, category, hits = hits.len(), "Filtered catalogue");

    if hits.is_empty() {
        writeln!(out, "No products match your search.")?;
        return Ok(());
    }
    for product in hits {
        write_row(out, product)?;
    }
    Ok(())
}

/// Show one product's detail, or a not-found message for unknown ids.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the output fails.
pub fn show(catalogue: &Catalogue, id: &str, out: &mut impl Write) -> Result<(), CliError> {
    let Some(product) = catalogue.find_by_id(id) else {
        writeln!(out, "Product not found.")?;
        return Ok(());
    };

    writeln!(out, "{}", product.name)?;
    writeln!(out, "{} | {}", product.price, product.category.label())?;
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;
    Ok(())
}

fn write_row(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:<18} {:>8}  {}",
        product.id,
        product.name,
        product.price.to_string(),
        product.category.label()
    )
}
