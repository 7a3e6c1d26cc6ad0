//! [`ActorEntity`] implementation for [`Cart`].
//!
//! The cart depends on the menu (`Context = MenuClient`): names and prices of
//! added items are always read from the menu actor, never trusted from the
//! caller.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::MenuClient;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartAddition, CartCreate, CartId, CartLine, LineId, SelectedAddOn};
use crate::pricing::unit_price;
use async_trait::async_trait;
use tracing::debug;

impl Cart {
    fn line_mut(&mut self, line_id: LineId) -> Result<&mut CartLine, CartError> {
        self.lines
            .iter_mut()
            .find(|l| l.line_id == line_id)
            .ok_or(CartError::LineNotFound(line_id))
    }

    fn set_quantity(&mut self, line_id: LineId, quantity: u32) -> Result<Option<u32>, CartError> {
        if quantity == 0 {
            self.remove_line(line_id)?;
            return Ok(None);
        }
        self.line_mut(line_id)?.quantity = quantity;
        Ok(Some(quantity))
    }

    fn remove_line(&mut self, line_id: LineId) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|l| l.line_id != line_id);
        if self.lines.len() == before {
            return Err(CartError::LineNotFound(line_id));
        }
        Ok(())
    }

    async fn add(&mut self, addition: CartAddition, menu: &MenuClient) -> Result<LineId, CartError> {
        if addition.quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }

        let item = menu.item(addition.menu_item_id).await?;
        if !item.available {
            return Err(CartError::ItemUnavailable(item.name));
        }

        let selected_variation = match &addition.variation_id {
            Some(id) => Some(item.variation(id).cloned().ok_or_else(|| {
                CartError::UnknownVariation {
                    item: item.name.clone(),
                    variation: id.clone(),
                }
            })?),
            None => None,
        };

        let mut selected_add_ons: Vec<SelectedAddOn> = Vec::with_capacity(addition.add_ons.len());
        for (id, quantity) in addition.add_ons.iter().filter(|(_, q)| *q > 0) {
            if let Some(selected) = selected_add_ons.iter_mut().find(|a| &a.add_on.id == id) {
                selected.quantity = selected
                    .quantity
                    .checked_add(*quantity)
                    .ok_or(CartError::InvalidQuantity(*quantity))?;
                continue;
            }
            let add_on = item.add_on(id).ok_or_else(|| CartError::UnknownAddOn {
                item: item.name.clone(),
                add_on: id.clone(),
            })?;
            selected_add_ons.push(SelectedAddOn {
                add_on: add_on.clone(),
                quantity: *quantity,
            });
        }

        let price = unit_price(
            &item,
            selected_variation.as_ref(),
            selected_add_ons.iter().map(|a| (&a.add_on, a.quantity)),
        );

        let candidate = CartLine {
            line_id: self.next_line_id,
            menu_item_id: item.id,
            name: item.name,
            selected_variation,
            selected_add_ons,
            unit_price: price,
            quantity: addition.quantity,
        };

        if let Some(existing) = self.lines.iter_mut().find(|l| l.same_selection(&candidate)) {
            existing.quantity = existing
                .quantity
                .checked_add(candidate.quantity)
                .ok_or(CartError::InvalidQuantity(candidate.quantity))?;
            debug!(line_id = existing.line_id, quantity = existing.quantity, "Merged");
            return Ok(existing.line_id);
        }

        self.next_line_id += 1;
        let line_id = candidate.line_id;
        self.lines.push(candidate);
        Ok(line_id)
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = MenuClient;
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &MenuClient) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        menu: &MenuClient,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add(addition) => self.add(addition, menu).await.map(CartActionResult::Added),
            CartAction::UpdateQuantity { line_id, quantity } => self
                .set_quantity(line_id, quantity)
                .map(CartActionResult::Quantity),
            CartAction::Increment(line_id) => {
                let quantity = self.line_mut(line_id)?.quantity;
                let next = quantity
                    .checked_add(1)
                    .ok_or(CartError::InvalidQuantity(quantity))?;
                self.set_quantity(line_id, next)
                    .map(CartActionResult::Quantity)
            }
            CartAction::Decrement(line_id) => {
                let quantity = self.line_mut(line_id)?.quantity;
                self.set_quantity(line_id, quantity.saturating_sub(1))
                    .map(CartActionResult::Quantity)
            }
            CartAction::Remove(line_id) => {
                self.remove_line(line_id)?;
                Ok(CartActionResult::Removed)
            }
            CartAction::Clear => {
                self.lines.clear();
                Ok(CartActionResult::Cleared)
            }
        }
    }
}
