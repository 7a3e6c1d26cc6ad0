use super::{OrderService, ServiceError};
use crate::clients::OrderClient;
use crate::model::{OrderRequest, PlacedOrder};
use async_trait::async_trait;

/// [`OrderService`] backed by the in-process order actor.
#[derive(Clone)]
pub struct ActorOrderService {
    orders: OrderClient,
}

impl ActorOrderService {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderService for ActorOrderService {
    async fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, ServiceError> {
        let id = self.orders.create_order(request).await?;
        let order = self.orders.order(id).await?;
        Ok(order.placed())
    }
}
