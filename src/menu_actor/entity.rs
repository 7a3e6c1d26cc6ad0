//! [`ActorEntity`] implementation for [`MenuItem`].
//!
//! The menu actor has no dependencies (`Context = ()`); it validates payloads
//! and keeps the stock count honest.

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;

fn check_price(field: &str, price: Option<Decimal>) -> Result<(), MenuError> {
    match price {
        Some(p) if p.is_sign_negative() => {
            Err(MenuError::Invalid(format!("{} must not be negative", field)))
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::Invalid("name is required".to_string()));
        }
        check_price("base price", Some(params.base_price))?;
        check_price("effective price", params.effective_price)?;
        check_price("discount price", params.discount_price)?;
        for variation in &params.variations {
            if params.variations.iter().filter(|v| v.id == variation.id).count() > 1 {
                return Err(MenuError::Invalid(format!(
                    "duplicate variation id {}",
                    variation.id
                )));
            }
        }
        for add_on in &params.add_ons {
            check_price("add-on price", Some(add_on.price))?;
        }
        Ok(MenuItem::from_create(id, params))
    }

    /// Applies every `Some` field of the update.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        check_price("base price", update.base_price)?;
        check_price("effective price", update.effective_price)?;
        check_price("discount price", update.discount_price)?;

        if let Some(price) = update.base_price {
            self.base_price = price;
        }
        if let Some(price) = update.effective_price {
            self.effective_price = Some(price);
        }
        if let Some(price) = update.discount_price {
            self.discount_price = Some(price);
        }
        if let Some(on) = update.is_on_discount {
            self.is_on_discount = on;
        }
        if let Some(popular) = update.popular {
            self.popular = popular;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(quantity) = update.stock_quantity {
            self.track_inventory = true;
            self.stock_quantity = Some(quantity);
        }
        if let Some(threshold) = update.low_stock_threshold {
            self.low_stock_threshold = threshold;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: current level
    /// - `ReserveStock`: decrements tracked stock; untracked items always succeed
    /// - `ReleaseStock`: increments tracked stock
    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, MenuError> {
        let tracked = if self.track_inventory {
            self.stock_quantity
        } else {
            None
        };

        match action {
            MenuAction::CheckStock => Ok(MenuActionResult::CheckStock(tracked)),
            MenuAction::ReserveStock(quantity) => {
                if !self.available {
                    return Err(MenuError::Unavailable(self.name.clone()));
                }
                let Some(available) = tracked else {
                    return Ok(MenuActionResult::ReserveStock(None));
                };
                if available < quantity {
                    return Err(MenuError::InsufficientStock {
                        name: self.name.clone(),
                        requested: quantity,
                        available,
                    });
                }
                self.stock_quantity = Some(available - quantity);
                Ok(MenuActionResult::ReserveStock(self.stock_quantity))
            }
            MenuAction::ReleaseStock(quantity) => {
                let Some(available) = tracked else {
                    return Ok(MenuActionResult::ReleaseStock(None));
                };
                self.stock_quantity = Some(available.saturating_add(quantity));
                Ok(MenuActionResult::ReleaseStock(self.stock_quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pandesal(stock: u32) -> MenuItem {
        MenuItem::from_create_params(
            MenuItemId(1),
            MenuItemCreate::new("Pandesal", "bread", dec!(15)).with_stock(stock, 3),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_reserve_and_release() {
        let mut item = pandesal(5);
        let result = item.handle_action(MenuAction::ReserveStock(4), &()).await;
        assert_eq!(result, Ok(MenuActionResult::ReserveStock(Some(1))));

        let result = item.handle_action(MenuAction::ReleaseStock(2), &()).await;
        assert_eq!(result, Ok(MenuActionResult::ReleaseStock(Some(3))));
    }

    #[tokio::test]
    async fn test_insufficient_stock_message() {
        let mut item = pandesal(2);
        let err = item
            .handle_action(MenuAction::ReserveStock(3), &())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Pandesal: requested 3, available 2"
        );
        assert_eq!(item.stock_quantity, Some(2));
    }

    #[tokio::test]
    async fn test_untracked_item_always_reserves() {
        let mut item = MenuItem::from_create_params(
            MenuItemId(2),
            MenuItemCreate::new("Brewed Coffee", "coffee", dec!(90)),
        )
        .unwrap();
        let result = item.handle_action(MenuAction::ReserveStock(100), &()).await;
        assert_eq!(result, Ok(MenuActionResult::ReserveStock(None)));
    }

    #[tokio::test]
    async fn test_unavailable_item_cannot_be_reserved() {
        let mut item = pandesal(10);
        item.on_update(
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
            &(),
        )
        .await
        .unwrap();
        let err = item
            .handle_action(MenuAction::ReserveStock(1), &())
            .await
            .unwrap_err();
        assert_eq!(err, MenuError::Unavailable("Pandesal".into()));
    }

    #[test]
    fn test_create_validation() {
        let blank = MenuItem::from_create_params(
            MenuItemId(1),
            MenuItemCreate::new("  ", "bread", dec!(15)),
        );
        assert!(matches!(blank, Err(MenuError::Invalid(_))));

        let negative = MenuItem::from_create_params(
            MenuItemId(1),
            MenuItemCreate::new("Ensaymada", "bread", dec!(-1)),
        );
        assert!(matches!(negative, Err(MenuError::Invalid(_))));
    }
}
