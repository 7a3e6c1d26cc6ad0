//! REST clients for the café's order API.

use super::{OrderService, PaymentMethodSource, ServiceError};
use crate::model::{OrderRequest, PaymentMethodInfo, PlacedOrder};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Error body of the order API. Either field may carry the message.
#[derive(Debug, Default, Deserialize)]
struct ApiError {
    message: Option<String>,
    error: Option<String>,
}

/// Connection settings shared by the REST services.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    /// Turns a non-success response into `ServiceError::Rejected` carrying
    /// the server's message.
    async fn check(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ApiError = response.json().await.unwrap_or_default();
        let message = body.message.or(body.error).unwrap_or_else(|| {
            if status == StatusCode::TOO_MANY_REQUESTS {
                "rate limit exceeded".to_string()
            } else {
                format!("Request failed with status {}", status)
            }
        });
        warn!(%status, %message, "Order API rejected request");
        Err(ServiceError::Rejected(message))
    }
}

/// `POST {base}/orders`
pub struct RestOrderService {
    api: ApiClient,
}

impl RestOrderService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderService for RestOrderService {
    #[instrument(skip(self, request), fields(customer = %request.customer_name))]
    async fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, ServiceError> {
        debug!(?request, "create_order called");
        let response = self
            .api
            .authorize(self.api.client.post(self.api.url("orders")))
            .json(&request)
            .send()
            .await?;
        let placed: PlacedOrder = ApiClient::check(response).await?.json().await?;
        info!(order_id = %placed.id, "Order created");
        Ok(placed)
    }
}

/// `GET {base}/payment_methods`
pub struct RestPaymentMethods {
    api: ApiClient,
}

impl RestPaymentMethods {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentMethodSource for RestPaymentMethods {
    #[instrument(skip(self))]
    async fn payment_methods(&self) -> Result<Vec<PaymentMethodInfo>, ServiceError> {
        let response = self
            .api
            .authorize(self.api.client.get(self.api.url("payment_methods")))
            .send()
            .await?;
        let methods: Vec<PaymentMethodInfo> = ApiClient::check(response).await?.json().await?;
        Ok(super::active_sorted(methods))
    }
}
