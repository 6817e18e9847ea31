use super::data::Product;

/// Derive the visible products from the snapshot and the search query.
///
/// A product is kept when its title contains the query, ignoring case.
/// The empty query keeps everything. Snapshot order is preserved.
pub fn filter<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| title_matches(&product.title, &needle))
        .collect()
}

/// `needle` must already be lowercased
fn title_matches(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}
