use iced::widget::image::Handle;
use image::imageops::FilterType;
use tracing::debug;

use crate::error::FetchError;
use crate::state::data::{ProductId, Snapshot};

/// Which images a snapshot needs: one `(product, url)` pair per product
/// that has an image. Products without one keep the placeholder.
pub fn thumbnail_requests(snapshot: &Snapshot) -> Vec<(ProductId, String)> {
    snapshot
        .products()
        .iter()
        .filter_map(|product| Some((product.id, product.first_image()?.to_string())))
        .collect()
}

/// Download a product image and scale it down for a card.
///
/// Decoding runs on a blocking thread so large JPEGs don't stall the
/// UI runtime.
pub async fn fetch_thumbnail(
    http: reqwest::Client,
    url: String,
    size: u32,
) -> Result<Handle, FetchError> {
    let response = http.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    debug!("📸 Downloaded {}KB image from {}", bytes.len() / 1024, url);

    tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, size))
        .await
        .map_err(|e| FetchError::Decode(format!("Task join error: {}", e)))?
}

/// Decode any format the `image` crate understands and fit it in a
/// `size` x `size` square, keeping the aspect ratio.
pub fn decode_thumbnail(bytes: &[u8], size: u32) -> Result<Handle, FetchError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| FetchError::Decode(format!("Failed to decode image: {}", e)))?;

    let thumbnail = img.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = thumbnail.dimensions();

    Ok(Handle::from_rgba(width, height, thumbnail.into_raw()))
}
