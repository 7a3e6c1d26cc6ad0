//! # Customization
//!
//! The in-progress selection for one menu item (size and add-on quantities)
//! before it goes into the cart.

use crate::model::{CartAddition, MenuItem, SelectedAddOn, Variation};
use crate::pricing::{format_price, unit_price};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomizationError {
    #[error("{0} is currently unavailable")]
    ItemUnavailable(String),

    #[error("{0} has sizes or add-ons to choose")]
    NeedsCustomization(String),

    #[error("Unknown variation: {0}")]
    UnknownVariation(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),
}

/// Selection state for a menu item. The first size is preselected.
#[derive(Debug, Clone)]
pub struct Customization {
    item: MenuItem,
    variation: Option<Variation>,
    add_ons: Vec<SelectedAddOn>,
}

impl Customization {
    pub fn new(item: MenuItem) -> Result<Self, CustomizationError> {
        if !item.available {
            return Err(CustomizationError::ItemUnavailable(item.name));
        }
        let variation = item.variations.first().cloned();
        Ok(Self {
            item,
            variation,
            add_ons: Vec::new(),
        })
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn selected_variation(&self) -> Option<&Variation> {
        self.variation.as_ref()
    }

    /// Selected add-ons in the order they were first picked.
    pub fn selected_add_ons(&self) -> &[SelectedAddOn] {
        &self.add_ons
    }

    pub fn add_on_quantity(&self, add_on_id: &str) -> u32 {
        self.add_ons
            .iter()
            .find(|a| a.add_on.id == add_on_id)
            .map_or(0, |a| a.quantity)
    }

    pub fn select_variation(&mut self, variation_id: &str) -> Result<(), CustomizationError> {
        let variation = self
            .item
            .variation(variation_id)
            .ok_or_else(|| CustomizationError::UnknownVariation(variation_id.to_string()))?;
        self.variation = Some(variation.clone());
        Ok(())
    }

    /// Zero removes the add-on; otherwise the quantity is set in place, or
    /// the add-on is appended.
    pub fn set_add_on_quantity(
        &mut self,
        add_on_id: &str,
        quantity: u32,
    ) -> Result<(), CustomizationError> {
        let add_on = self
            .item
            .add_on(add_on_id)
            .ok_or_else(|| CustomizationError::UnknownAddOn(add_on_id.to_string()))?;

        if quantity == 0 {
            self.add_ons.retain(|a| a.add_on.id != add_on_id);
            return Ok(());
        }

        match self.add_ons.iter_mut().find(|a| a.add_on.id == add_on_id) {
            Some(selected) => selected.quantity = quantity,
            None => self.add_ons.push(SelectedAddOn {
                add_on: add_on.clone(),
                quantity,
            }),
        }
        Ok(())
    }

    pub fn increment_add_on(&mut self, add_on_id: &str) -> Result<(), CustomizationError> {
        let quantity = self.add_on_quantity(add_on_id);
        self.set_add_on_quantity(add_on_id, quantity + 1)
    }

    pub fn decrement_add_on(&mut self, add_on_id: &str) -> Result<(), CustomizationError> {
        let quantity = self.add_on_quantity(add_on_id);
        self.set_add_on_quantity(add_on_id, quantity.saturating_sub(1))
    }

    /// Price of one unit with the current selection.
    pub fn total(&self) -> Decimal {
        unit_price(
            &self.item,
            self.variation.as_ref(),
            self.add_ons.iter().map(|a| (&a.add_on, a.quantity)),
        )
    }

    /// "Add to Cart - ₱185.00"
    pub fn add_to_cart_label(&self) -> String {
        format!("Add to Cart - {}", format_price(self.total()))
    }

    pub fn into_addition(self) -> CartAddition {
        CartAddition {
            menu_item_id: self.item.id,
            variation_id: self.variation.map(|v| v.id),
            add_ons: self
                .add_ons
                .into_iter()
                .map(|a| (a.add_on.id, a.quantity))
                .collect(),
            quantity: 1,
        }
    }
}

/// One unit of an item that goes straight into the cart.
pub fn quick_addition(item: &MenuItem) -> Result<CartAddition, CustomizationError> {
    if !item.available {
        return Err(CustomizationError::ItemUnavailable(item.name.clone()));
    }
    if item.needs_customization() {
        return Err(CustomizationError::NeedsCustomization(item.name.clone()));
    }
    Ok(CartAddition {
        menu_item_id: item.id,
        variation_id: None,
        add_ons: Vec::new(),
        quantity: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddOn, MenuItemCreate, MenuItemId};
    use rust_decimal_macros::dec;

    fn latte() -> MenuItem {
        MenuItem::from_create(
            MenuItemId(3),
            MenuItemCreate::new("Spanish Latte", "coffee", dec!(150))
                .with_variation(Variation::new("reg", "Regular", dec!(0)))
                .with_variation(Variation::new("lg", "Large", dec!(30)))
                .with_add_on(AddOn::new("shot", "Extra Shot", dec!(25), "extras"))
                .with_add_on(AddOn::new("oat", "Oat Milk", dec!(35), "milk")),
        )
    }

    #[test]
    fn test_first_variation_preselected() {
        let c = Customization::new(latte()).unwrap();
        assert_eq!(c.selected_variation().unwrap().id, "reg");
        assert_eq!(c.total(), dec!(150));
    }

    #[test]
    fn test_add_on_quantity_rules() {
        let mut c = Customization::new(latte()).unwrap();
        c.set_add_on_quantity("oat", 1).unwrap();
        c.set_add_on_quantity("shot", 2).unwrap();
        c.set_add_on_quantity("oat", 3).unwrap();

        let ids: Vec<_> = c
            .selected_add_ons()
            .iter()
            .map(|a| (a.add_on.id.as_str(), a.quantity))
            .collect();
        assert_eq!(ids, vec![("oat", 3), ("shot", 2)]);

        c.set_add_on_quantity("oat", 0).unwrap();
        assert_eq!(c.add_on_quantity("oat"), 0);
        assert_eq!(c.selected_add_ons().len(), 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut c = Customization::new(latte()).unwrap();
        c.increment_add_on("shot").unwrap();
        c.increment_add_on("shot").unwrap();
        assert_eq!(c.add_on_quantity("shot"), 2);
        c.decrement_add_on("shot").unwrap();
        c.decrement_add_on("shot").unwrap();
        assert!(c.selected_add_ons().is_empty());
        c.decrement_add_on("shot").unwrap();
        assert!(c.selected_add_ons().is_empty());
    }

    #[test]
    fn test_total_and_addition() {
        let mut c = Customization::new(latte()).unwrap();
        c.select_variation("lg").unwrap();
        c.set_add_on_quantity("shot", 2).unwrap();
        assert_eq!(c.total(), dec!(230));
        assert_eq!(c.add_to_cart_label(), "Add to Cart - ₱230.00");

        let addition = c.into_addition();
        assert_eq!(addition.menu_item_id, MenuItemId(3));
        assert_eq!(addition.variation_id.as_deref(), Some("lg"));
        assert_eq!(addition.add_ons, vec![("shot".to_string(), 2)]);
        assert_eq!(addition.quantity, 1);
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut c = Customization::new(latte()).unwrap();
        assert_eq!(
            c.select_variation("xl"),
            Err(CustomizationError::UnknownVariation("xl".into()))
        );
        assert_eq!(
            c.set_add_on_quantity("cream", 1),
            Err(CustomizationError::UnknownAddOn("cream".into()))
        );
    }

    #[test]
    fn test_unavailable_item() {
        let mut item = latte();
        item.available = false;
        assert!(matches!(
            Customization::new(item.clone()),
            Err(CustomizationError::ItemUnavailable(_))
        ));
        assert!(matches!(
            quick_addition(&item),
            Err(CustomizationError::ItemUnavailable(_))
        ));
    }

    #[test]
    fn test_quick_addition() {
        let water = MenuItem::from_create(
            MenuItemId(9),
            MenuItemCreate::new("Water", "drinks", dec!(20)),
        );
        let addition = quick_addition(&water).unwrap();
        assert_eq!(addition.quantity, 1);
        assert!(addition.add_ons.is_empty());

        assert!(matches!(
            quick_addition(&latte()),
            Err(CustomizationError::NeedsCustomization(_))
        ));
    }
}
