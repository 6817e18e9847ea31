/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer and the UI layer.

use serde::Deserialize;

/// Stable identifier of a product, as assigned by the catalog
pub type ProductId = u64;

/// Represents a single product in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique catalog ID
    pub id: ProductId,
    /// Display title (the field the search matches against)
    pub title: String,
    /// Category slug (e.g., "smartphones")
    pub category: String,
    /// Units in stock; a negative value fails decoding
    pub stock: u32,
    /// Average rating, usually 0.0 - 5.0
    pub rating: f64,
    /// Image URLs; only the first one is shown
    pub images: Vec<String>,
}

impl Product {
    /// URL of the image shown on the card, if the product has any
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }
}

/// The product list exactly as the endpoint returned it.
///
/// A snapshot is never patched: a successful fetch replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    products: Vec<Product>,
}

impl Snapshot {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode the `{ "products": [...] }` payload.
    ///
    /// One bad record fails the whole batch.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn product(id: ProductId, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        category: "smartphones".to_string(),
        stock: 10,
        rating: 4.5,
        images: vec![format!("https://cdn.example.com/{}.png", id)],
    }
}
