//! # Order Client
//!
//! Provides a high-level API for the order desk. Stock reservation happens in
//! the order actor's `on_create` hook.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{Order, OrderId, OrderRequest};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(order_error) = e.entity_error::<OrderError>() {
            return order_error.clone();
        }
        if let Some(menu_error) = e.entity_error::<MenuError>() {
            return OrderError::Menu(menu_error.clone());
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, request), fields(customer = %request.customer_name))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<OrderId, OrderError> {
        debug!(?request, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(request).await.map_err(Self::map_error)
    }

    /// Fetches an order, treating a missing one as an error.
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}
