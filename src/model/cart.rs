//! A customer's shopping cart.
//!
//! [`Cart`] implements [`ActorEntity`](crate::framework::ActorEntity); every
//! mutation goes through a [`CartAction`](crate::cart_actor::CartAction).

use crate::model::{AddOn, MenuItemId, Variation};
use crate::pricing::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const EMPTY_CART_TITLE: &str = "Your cart is empty";
pub const EMPTY_CART_HINT: &str = "Add some delicious items to get started!";

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Identifier of a line inside one cart.
pub type LineId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAddOn {
    #[serde(flatten)]
    pub add_on: AddOn,
    pub quantity: u32,
}

impl SelectedAddOn {
    /// "Name" for a single unit, "Name xN" otherwise.
    pub fn label(&self) -> String {
        if self.quantity > 1 {
            format!("{} x{}", self.add_on.name, self.quantity)
        } else {
            self.add_on.name.clone()
        }
    }
}

/// One line of the cart: a menu item with a fixed selection.
///
/// `unit_price` is computed once, when the line is added, from the menu's
/// prices at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub line_id: LineId,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub selected_variation: Option<Variation>,
    pub selected_add_ons: Vec<SelectedAddOn>,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// "Size: Large", when a variation was chosen.
    pub fn size_label(&self) -> Option<String> {
        self.selected_variation
            .as_ref()
            .map(|v| format!("Size: {}", v.name))
    }

    /// Add-ons joined by ", ", quantities shown as "xN" above one.
    pub fn add_on_summary(&self) -> Option<String> {
        if self.selected_add_ons.is_empty() {
            return None;
        }
        Some(
            self.selected_add_ons
                .iter()
                .map(SelectedAddOn::label)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn unit_label(&self) -> String {
        format!("{} each", format_amount(self.unit_price))
    }

    pub fn total_label(&self) -> String {
        format_amount(self.line_total())
    }

    /// `(add-on id, quantity)` sorted by id.
    fn add_on_key(&self) -> Vec<(&str, u32)> {
        let mut key: Vec<(&str, u32)> = self
            .selected_add_ons
            .iter()
            .map(|a| (a.add_on.id.as_str(), a.quantity))
            .collect();
        key.sort_unstable();
        key
    }

    /// Same item, same size and same add-ons (in any order) with the same
    /// quantities.
    pub(crate) fn same_selection(&self, other: &CartLine) -> bool {
        self.menu_item_id == other.menu_item_id
            && self.selected_variation.as_ref().map(|v| &v.id)
                == other.selected_variation.as_ref().map(|v| &v.id)
            && self.add_on_key() == other.add_on_key()
    }
}

/// Request to put a menu item into the cart, by ids only. The cart resolves
/// names and prices against the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddition {
    pub menu_item_id: MenuItemId,
    pub variation_id: Option<String>,
    /// `(add-on id, quantity)` in selection order.
    pub add_ons: Vec<(String, u32)>,
    pub quantity: u32,
}

/// Payload for opening a new cart.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub lines: Vec<CartLine>,
    pub(crate) next_line_id: LineId,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    pub fn line(&self, line_id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.line_id == line_id)
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `menu_item_id` across all lines, and the first line holding
    /// it. Backs the +/- counter on a menu card.
    pub fn quantity_of(&self, menu_item_id: MenuItemId) -> (u32, Option<LineId>) {
        let mut lines = self
            .lines
            .iter()
            .filter(|l| l.menu_item_id == menu_item_id)
            .peekable();
        let first = lines.peek().map(|l| l.line_id);
        (lines.map(|l| l.quantity).sum(), first)
    }
}
