//! Shop search and category filtering.

use crate::catalogue::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Products whose name or description contains `search_term`
/// (case-insensitive, surrounding whitespace ignored) and whose category is
/// `category`, or any category when `category` is [`ALL_CATEGORIES`].
///
/// The result keeps catalogue order.
///
/// ```
/// use clothing_co_core::{Catalogue, filter_products};
///
/// let hits = filter_products(Catalogue::builtin().products(), "jean", "all");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Denim Jeans");
/// ```
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    category: &str,
) -> Vec<&'a Product> {
    let needle = search_term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category.as_str() == category)
        .filter(|p| p.matches_term(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    fn names(products: &[&Product]) -> Vec<&'static str> {
        products.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_empty_term_all_categories_is_full_catalogue() {
        let products = Catalogue::builtin().products();
        let hits = filter_products(products, "", ALL_CATEGORIES);
        assert_eq!(hits.len(), products.len());
        assert!(hits.iter().zip(products).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_term_matches_name() {
        let hits = filter_products(Catalogue::builtin().products(), "jean", ALL_CATEGORIES);
        assert_eq!(names(&hits), ["Denim Jeans"]);
    }

    #[test]
    fn test_category_only() {
        let hits = filter_products(Catalogue::builtin().products(), "", "outerwear");
        assert_eq!(names(&hits), ["Comfy Hoodie", "Casual Jacket"]);
    }

    #[test]
    fn test_term_is_case_insensitive_and_trimmed() {
        let hits = filter_products(Catalogue::builtin().products(), "  HOODIE ", ALL_CATEGORIES);
        assert_eq!(names(&hits), ["Comfy Hoodie"]);
    }

    #[test]
    fn test_term_matches_description() {
        let hits = filter_products(Catalogue::builtin().products(), "cotton", ALL_CATEGORIES);
        assert_eq!(names(&hits), ["Classic T\u{2011}Shirt"]);
    }

    #[test]
    fn test_term_and_category_are_conjunctive() {
        let hits = filter_products(Catalogue::builtin().products(), "classic", "bottoms");
        assert_eq!(names(&hits), ["Denim Jeans"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        assert!(filter_products(Catalogue::builtin().products(), "", "shoes").is_empty());
    }
}
