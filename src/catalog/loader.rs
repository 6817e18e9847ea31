/// Catalog loader
///
/// Fetches the product list from the remote endpoint with a single GET.
/// No retries, no timeout override: a failed attempt is reported and the
/// caller decides whether to start a new one.

use tracing::debug;

use crate::error::FetchError;
use crate::state::data::Snapshot;

/// HTTP client bound to one catalog endpoint.
///
/// Cheap to clone: `reqwest::Client` is reference counted internally, so
/// a clone can be moved into a background task.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The shared HTTP client, reused for image downloads
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetch and decode the full product list.
    ///
    /// # Returns
    /// * `Ok(snapshot)` - every record decoded
    /// * `Err(FetchError)` - transport failure, non-2xx status, or a body
    ///   where any record is malformed
    pub async fn load(&self) -> Result<Snapshot, FetchError> {
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), self.endpoint);

        Ok(Snapshot::from_json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    const PHONES: &str = r#"{
        "products": [
            {"id": 1, "title": "iPhone 9", "category": "smartphones", "stock": 94,
             "rating": 4.69, "images": ["https://cdn.dummyjson.com/product-images/1/1.jpg"]},
            {"id": 2, "title": "Samsung Galaxy", "category": "smartphones", "stock": 36,
             "rating": 4.09, "images": []}
        ],
        "total": 2
    }"#;

    #[tokio::test]
    async fn test_load_decodes_products() {
        let base = serve(Router::new().route("/products", get(|| async { PHONES }))).await;
        let client = CatalogClient::new(format!("{}/products", base));

        let snapshot = client.load().await.unwrap();

        let titles: Vec<&str> = snapshot.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["iPhone 9", "Samsung Galaxy"]);
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let base = serve(Router::new().route(
            "/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let client = CatalogClient::new(format!("{}/products", base));

        let err = client.load().await.unwrap_err();

        assert_eq!(err, FetchError::Status(500));
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = serve(Router::new().route(
            "/products",
            get(|| async { r#"{"products": [{"id": 1, "title": "No fields"}]}"# }),
        ))
        .await;
        let client = CatalogClient::new(format!("{}/products", base));

        let err = client.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CatalogClient::new(format!("http://{}/products", addr));
        let err = client.load().await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }
}
