//! # Menu Client
//!
//! High-level API over a `ResourceClient<MenuItem>`: menu management, browsing
//! and stock bookkeeping.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    /// Entity errors come back as the `MenuError` the actor raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(menu_error) = e.entity_error::<MenuError>() {
            return menu_error.clone();
        }
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Fetches an item, treating a missing one as an error.
    pub async fn item(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    /// Menu items in id order, optionally limited to one category.
    /// Unavailable items are included; the card greys them out.
    #[instrument(skip(self))]
    pub async fn menu(&self, category: Option<&str>) -> Result<Vec<MenuItem>, MenuError> {
        let items = self.list().await?;
        Ok(match category {
            Some(category) => items.into_iter().filter(|i| i.category == category).collect(),
            None => items,
        })
    }

    /// Only what can be ordered right now.
    pub async fn available_menu(&self, category: Option<&str>) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.menu(category).await?;
        items.retain(|i| i.available);
        Ok(items)
    }

    /// Distinct categories in first-seen order.
    pub async fn categories(&self) -> Result<Vec<String>, MenuError> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.list().await? {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        Ok(categories)
    }

    /// Current stock, `None` for untracked items.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: MenuItemId) -> Result<Option<u32>, MenuError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, MenuAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: MenuItemId,
        quantity: u32,
    ) -> Result<Option<u32>, MenuError> {
        debug!("Reserving {} units of {}", quantity, id);
        match self
            .inner
            .perform_action(id, MenuAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::ReserveStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(
        &self,
        id: MenuItemId,
        quantity: u32,
    ) -> Result<Option<u32>, MenuError> {
        debug!("Releasing {} units of {}", quantity, id);
        match self
            .inner
            .perform_action(id, MenuAction::ReleaseStock(quantity))
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: MenuActionResult) -> MenuError {
    MenuError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_list};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.check_stock(MenuItemId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId(1));
        assert_eq!(action, MenuAction::CheckStock);
        responder
            .send(Ok(MenuActionResult::CheckStock(Some(42))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some(42));
    }

    #[tokio::test]
    async fn test_reserve_stock_keeps_typed_error() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.reserve_stock(MenuItemId(4), 9).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, MenuAction::ReserveStock(9));
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                MenuError::InsufficientStock {
                    name: "Ube Cheese Pandesal".into(),
                    requested: 9,
                    available: 2,
                },
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(
            err,
            MenuError::InsufficientStock {
                name: "Ube Cheese Pandesal".into(),
                requested: 9,
                available: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_menu_filters_by_category() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.menu(Some("coffee")).await });

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder
            .send(Ok(vec![
                MenuItem::from_create(
                    MenuItemId(1),
                    MenuItemCreate::new("Latte", "coffee", dec!(150)),
                ),
                MenuItem::from_create(
                    MenuItemId(2),
                    MenuItemCreate::new("Silog", "rice-meals", dec!(180)),
                ),
            ]))
            .unwrap();

        let items = task.await.unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Latte");
    }

    #[tokio::test]
    async fn test_available_menu_hides_unavailable_items() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.available_menu(None).await });

        let responder = expect_list(&mut receiver).await.expect("Expected List");
        responder
            .send(Ok(vec![
                MenuItem::from_create(
                    MenuItemId(1),
                    MenuItemCreate::new("Latte", "coffee", dec!(150)),
                ),
                MenuItem::from_create(
                    MenuItemId(2),
                    MenuItemCreate::new("Ube Cheesecake", "desserts", dec!(160)).unavailable(),
                ),
            ]))
            .unwrap();

        let items = task.await.unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Latte");
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<MenuItem>(1);
        drop(receiver);
        let menu = MenuClient::new(client);

        let err = menu.item(MenuItemId(1)).await.unwrap_err();
        assert!(matches!(err, MenuError::ActorCommunicationError(_)));
    }
}
