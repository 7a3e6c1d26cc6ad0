/// A dish or drink on the café menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemUpdate`])
/// - Custom actions ([`MenuAction`](crate::menu_actor::MenuAction))
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A size option. `price` is added to the item's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl Variation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// An optional extra, priced per unit and grouped by `category` in the
/// customization view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl AddOn {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub base_price: Decimal,
    /// Current price computed by the server (discounts, promos).
    pub effective_price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub is_on_discount: bool,
    pub popular: bool,
    pub available: bool,
    pub image: Option<String>,
    pub track_inventory: bool,
    pub stock_quantity: Option<u32>,
    pub low_stock_threshold: u32,
    pub variations: Vec<Variation>,
    pub add_ons: Vec<AddOn>,
}

impl MenuItem {
    pub fn from_create(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            category: params.category,
            base_price: params.base_price,
            effective_price: params.effective_price,
            discount_price: params.discount_price,
            is_on_discount: params.is_on_discount,
            popular: params.popular,
            available: params.available,
            image: params.image,
            track_inventory: params.track_inventory,
            stock_quantity: params.stock_quantity,
            low_stock_threshold: params.low_stock_threshold,
            variations: params.variations,
            add_ons: params.add_ons,
        }
    }

    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Items with sizes or extras open the customization view instead of
    /// going straight into the cart.
    pub fn needs_customization(&self) -> bool {
        !self.variations.is_empty() || !self.add_ons.is_empty()
    }
}

/// Payload for creating a new menu item.
///
/// Built with [`MenuItemCreate::new`] and the `with_*` helpers; everything not
/// set is available, untracked and without discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub base_price: Decimal,
    pub effective_price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub is_on_discount: bool,
    pub popular: bool,
    pub available: bool,
    pub image: Option<String>,
    pub track_inventory: bool,
    pub stock_quantity: Option<u32>,
    pub low_stock_threshold: u32,
    pub variations: Vec<Variation>,
    pub add_ons: Vec<AddOn>,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: category.into(),
            base_price,
            effective_price: None,
            discount_price: None,
            is_on_discount: false,
            popular: false,
            available: true,
            image: None,
            track_inventory: false,
            stock_quantity: None,
            low_stock_threshold: 0,
            variations: Vec::new(),
            add_ons: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effective_price(mut self, price: Decimal) -> Self {
        self.effective_price = Some(price);
        self
    }

    /// Marks the item as on sale at `price`.
    pub fn with_discount(mut self, price: Decimal) -> Self {
        self.is_on_discount = true;
        self.discount_price = Some(price);
        self
    }

    pub fn with_stock(mut self, quantity: u32, low_stock_threshold: u32) -> Self {
        self.track_inventory = true;
        self.stock_quantity = Some(quantity);
        self.low_stock_threshold = low_stock_threshold;
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Partial update for a menu item. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub base_price: Option<Decimal>,
    pub effective_price: Option<Decimal>,
    pub discount_price: Option<Decimal>,
    pub is_on_discount: Option<bool>,
    pub popular: Option<bool>,
    pub available: Option<bool>,
    pub stock_quantity: Option<u32>,
    pub low_stock_threshold: Option<u32>,
}
