use crate::clients::{CartClient, MenuClient, OrderClient};
use tracing::{error, info};

/// Starts and stops the café's actors.
///
/// Three actors run, each in its own task:
/// - **Menu**: menu items and their stock (no dependencies)
/// - **Cart**: customer carts, pricing lines through the menu
/// - **Order desk**: placed orders, reserving stock through the menu
///
/// ```ignore
/// let system = CafeSystem::new();
/// let latte = system.menu_client.create_item(latte_params).await?;
/// let cart = system.cart_client.open_cart().await?;
/// system.cart_client.add(cart, addition).await?;
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    pub menu_client: MenuClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Spawns all actors. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (menu_actor, menu_client) = crate::menu_actor::new();
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let menu_client = MenuClient::new(menu_client);

        let menu_handle = tokio::spawn(menu_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(menu_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        Self {
            menu_client,
            cart_client: CartClient::new(cart_client),
            order_client: OrderClient::new(order_client),
            handles: vec![cart_handle, order_handle, menu_handle],
        }
    }

    /// Drops the clients and waits for every actor to drain.
    ///
    /// The cart and order actors hold menu clients in their context, so the
    /// menu actor only stops once both of them have.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cafe...");

        drop(self.cart_client);
        drop(self.order_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cafe shutdown complete.");
        Ok(())
    }
}

impl Default for CafeSystem {
    fn default() -> Self {
        Self::new()
    }
}
