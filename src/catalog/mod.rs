/// Remote catalog access
///
/// This module handles:
/// - Fetching the product list from the catalog endpoint
/// - Downloading and shrinking product images for the cards

pub mod loader;
pub mod thumbnail;

pub use loader::CatalogClient;
