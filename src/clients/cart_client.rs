//! # Cart Client
//!
//! Wraps a `ResourceClient<Cart>` with the operations the cart view and menu
//! cards need.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{Cart, CartAddition, CartCreate, CartId, LineId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(cart_error) = e.entity_error::<CartError>() {
            return cart_error.clone();
        }
        if let Some(menu_error) = e.entity_error::<MenuError>() {
            return CartError::Menu(menu_error.clone());
        }
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn open_cart(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartCreate).await.map_err(Self::map_error)
    }

    /// Snapshot of the cart, treating a missing one as an error.
    pub async fn cart(&self, id: CartId) -> Result<Cart, CartError> {
        self.get(id)
            .await?
            .ok_or_else(|| CartError::NotFound(id.to_string()))
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, id: CartId, addition: CartAddition) -> Result<LineId, CartError> {
        debug!("Adding to cart");
        match self.act(id, CartAction::Add(addition)).await? {
            CartActionResult::Added(line_id) => Ok(line_id),
            other => Err(unexpected(other)),
        }
    }

    /// Sets the quantity of a line; zero removes it. Returns the new quantity,
    /// `None` if the line is gone.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        line_id: LineId,
        quantity: u32,
    ) -> Result<Option<u32>, CartError> {
        debug!("Updating quantity");
        self.quantity_action(id, CartAction::UpdateQuantity { line_id, quantity })
            .await
    }

    pub async fn increment(&self, id: CartId, line_id: LineId) -> Result<Option<u32>, CartError> {
        self.quantity_action(id, CartAction::Increment(line_id)).await
    }

    pub async fn decrement(&self, id: CartId, line_id: LineId) -> Result<Option<u32>, CartError> {
        self.quantity_action(id, CartAction::Decrement(line_id)).await
    }

    async fn quantity_action(
        &self,
        id: CartId,
        action: CartAction,
    ) -> Result<Option<u32>, CartError> {
        match self.act(id, action).await? {
            CartActionResult::Quantity(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: CartId, line_id: LineId) -> Result<(), CartError> {
        debug!("Removing line");
        match self.act(id, CartAction::Remove(line_id)).await? {
            CartActionResult::Removed => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<(), CartError> {
        debug!("Clearing cart");
        match self.act(id, CartAction::Clear).await? {
            CartActionResult::Cleared => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}
