//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are immutable once placed. Creating one reserves stock for every
//! line through the injected [`MenuClient`]; if any reservation fails the
//! earlier ones are released and the order is not stored.

use super::error::OrderError;
use crate::clients::MenuClient;
use crate::framework::ActorEntity;
use crate::model::{MenuItemId, Order, OrderId, OrderRequest};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderRequest;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = MenuClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, request: OrderRequest) -> Result<Self, OrderError> {
        if request.customer_name.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "customer name is required".to_string(),
            ));
        }
        if request.items.is_empty() {
            return Err(OrderError::ValidationError("order has no items".to_string()));
        }
        if let Some(line) = request.items.iter().find(|l| l.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "{} has quantity 0",
                line.name
            )));
        }
        let expected: Decimal = request.items.iter().map(|l| l.line_total()).sum();
        if expected != request.total {
            return Err(OrderError::ValidationError(format!(
                "total {} does not match items {}",
                request.total, expected
            )));
        }
        Ok(Order::new(id, request))
    }

    /// Reserves stock line by line, rolling back on the first failure.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), OrderError> {
        let mut reserved: Vec<(MenuItemId, u32)> = Vec::new();

        for line in &self.request.items {
            if let Err(e) = menu.reserve_stock(line.menu_item_id, line.quantity).await {
                warn!(order_id = %self.id, error = %e, "Reservation failed, rolling back");
                for (item_id, quantity) in reserved.into_iter().rev() {
                    if let Err(release) = menu.release_stock(item_id, quantity).await {
                        warn!(%item_id, error = %release, "Release failed");
                    }
                }
                return Err(e.into());
            }
            reserved.push((line.menu_item_id, line.quantity));
        }

        info!(order_id = %self.id, lines = reserved.len(), "Stock reserved");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &MenuClient) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &MenuClient) -> Result<(), OrderError> {
        Ok(())
    }
}
