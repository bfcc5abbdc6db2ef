//! Drawing API Bindings
//!
//! Frontend bindings to the external customer/drawing HTTP API, organized by
//! resource. Every request is raced against the configured timeout.

mod customer;
mod drawing;

use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{Customer, Drawing, PdfFile};

/// Errors from talking to the drawing API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

/// Operations the admin page needs from the backend
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    async fn list_customers(&self) -> Result<Vec<Customer>, ApiError>;
    async fn create_customer(&self, name: &str) -> Result<Customer, ApiError>;
    async fn list_drawings(&self) -> Result<Vec<Drawing>, ApiError>;
    async fn upload_drawing(&self, file: &PdfFile, drawing_no: &str) -> Result<Drawing, ApiError>;
}

/// Production API client over `reqwest` (browser fetch on wasm32)
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn get(&self, resource: &str) -> RequestBuilder {
        self.client.get(self.config.endpoint(resource))
    }

    fn post(&self, resource: &str) -> RequestBuilder {
        self.client.post(self.config.endpoint(resource))
    }

    /// Send a request and decode a JSON body, failing on non-2xx or timeout
    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.with_timeout(async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }
            Ok(response.json::<T>().await?)
        })
        .await
    }

    async fn with_timeout<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let timeout_ms = self.config.timeout_ms;
        let timer = Box::pin(TimeoutFuture::new(timeout_ms));
        match select(Box::pin(request), timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(timeout_ms)),
        }
    }
}

impl AdminApi for HttpApi {
    async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        customer::list_customers(self).await
    }

    async fn create_customer(&self, name: &str) -> Result<Customer, ApiError> {
        customer::create_customer(self, name).await
    }

    async fn list_drawings(&self) -> Result<Vec<Drawing>, ApiError> {
        drawing::list_drawings(self).await
    }

    async fn upload_drawing(&self, file: &PdfFile, drawing_no: &str) -> Result<Drawing, ApiError> {
        drawing::upload_drawing(self, file, drawing_no).await
    }
}
