//! HTTP catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    catalog::{CatalogError, CatalogService},
    domain::products::{CatalogProduct, ProductId, Stock},
};

/// Configuration for reaching the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the service, e.g. `"http://localhost:3333"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// `reqwest` client for the `/stock` and `/products` endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.base_url);

        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn stock(&self, product: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(&format!("stock/{product}")).await
    }

    async fn product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.get_json(&format!("products/{product}")).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Server;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn client(server: &Server) -> Result<HttpCatalogClient, CatalogError> {
        HttpCatalogClient::new(CatalogConfig {
            base_url: format!("{}/", server.url()),
            timeout: Duration::from_secs(5),
        })
    }

    #[tokio::test]
    async fn stock_decodes_response() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/stock/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1,"amount":3}"#)
            .create_async()
            .await;

        let stock = client(&server)?.stock(ProductId::new(1)).await?;

        mock.assert_async().await;

        assert_eq!(
            stock,
            Stock {
                id: ProductId::new(1),
                amount: 3
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn product_decodes_response() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/products/2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":2,"title":"Tênis VR Caminhada Confortável","price":139.9,"image":"https://example.com/tenis2.jpg"}"#,
            )
            .create_async()
            .await;

        let product = client(&server)?.product(ProductId::new(2)).await?;

        mock.assert_async().await;

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.title, "Tênis VR Caminhada Confortável");
        assert_eq!(product.price, Decimal::new(139_9, 1));

        Ok(())
    }

    #[tokio::test]
    async fn missing_product_returns_not_found() -> TestResult {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/products/99")
            .with_status(404)
            .with_body("{}")
            .create_async()
            .await;

        let result = client(&server)?.product(ProductId::new(99)).await;

        assert!(
            matches!(result, Err(CatalogError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn server_error_returns_unexpected_response() -> TestResult {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/stock/1")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let result = client(&server)?.stock(ProductId::new(1)).await;

        assert!(
            matches!(
                &result,
                Err(CatalogError::UnexpectedResponse { status: 503, body }) if body == "maintenance"
            ),
            "expected UnexpectedResponse, got {result:?}"
        );

        Ok(())
    }
}
