//! # Pricing
//!
//! Everything a menu card shows about money and stock: the effective price,
//! the sale/discount presentation, size and add-on prices, the price of a
//! customized unit, and the stock indicator.
//!
//! All amounts are [`Decimal`]; nothing here rounds except the percentage.

use crate::model::{AddOn, MenuItem, Variation};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// The price the customer pays before customization.
pub fn effective_price(item: &MenuItem) -> Decimal {
    item.effective_price.unwrap_or(item.base_price)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountDisplay {
    pub original: Decimal,
    pub discounted: Decimal,
    pub percent_off: u32,
    pub savings: Decimal,
}

/// Strike-through presentation, when the item is cheaper than its base price.
///
/// An explicit sale (`is_on_discount` with a discount price) wins over an
/// effective price below base.
pub fn discount(item: &MenuItem) -> Option<DiscountDisplay> {
    let base = item.base_price;
    let effective = effective_price(item);

    let discounted = match item.discount_price {
        Some(price) if item.is_on_discount => price,
        _ if effective < base => effective,
        _ => return None,
    };

    let percent_off = if base.is_zero() {
        0
    } else {
        ((base - discounted) / base * dec!(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    };

    Some(DiscountDisplay {
        original: base,
        discounted,
        percent_off,
        savings: base - discounted,
    })
}

/// Price text on the menu card: the discount with the original price struck
/// through, otherwise what the item actually costs.
pub fn card_price(item: &MenuItem) -> String {
    match discount(item) {
        Some(d) => format!(
            "{} (was {}, {}% off)",
            format_price(d.discounted),
            format_price(d.original),
            d.percent_off
        ),
        None => format_price(effective_price(item)),
    }
}

/// The "Sale" badge needs a non-zero discount price.
pub fn shows_sale_badge(item: &MenuItem) -> bool {
    item.is_on_discount && item.discount_price.is_some_and(|p| !p.is_zero())
}

/// Price shown next to a size option. A zero effective price falls back to
/// the base price.
pub fn variation_price(item: &MenuItem, variation: &Variation) -> Decimal {
    let price = match item.effective_price {
        Some(p) if !p.is_zero() => p,
        _ => item.base_price,
    };
    price + variation.price
}

/// Price of one unit with the given size and add-on quantities.
pub fn unit_price<'a>(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: impl IntoIterator<Item = (&'a AddOn, u32)>,
) -> Decimal {
    let mut price = effective_price(item);
    if let Some(v) = variation {
        price += v.price;
    }
    for (add_on, quantity) in add_ons {
        price += add_on.price * Decimal::from(quantity);
    }
    price
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Untracked,
    InStock(u32),
    LowStock(u32),
    OutOfStock,
}

impl StockStatus {
    /// Label on the menu card.
    pub fn card_label(&self) -> Option<String> {
        match self {
            StockStatus::Untracked => None,
            StockStatus::InStock(n) => Some(format!("{} in stock", n)),
            StockStatus::LowStock(n) => Some(format!("Only {} left!", n)),
            StockStatus::OutOfStock => Some("Out of stock".to_string()),
        }
    }

    /// Label in the customization view.
    pub fn detail_label(&self) -> Option<String> {
        match self {
            StockStatus::Untracked => None,
            StockStatus::InStock(n) => Some(format!("{} available in stock", n)),
            StockStatus::LowStock(n) => Some(format!("Hurry! Only {} left in stock", n)),
            StockStatus::OutOfStock => Some("Currently out of stock".to_string()),
        }
    }
}

pub fn stock_status(item: &MenuItem) -> StockStatus {
    match item.stock_quantity {
        Some(n) if item.track_inventory => {
            if n > item.low_stock_threshold {
                StockStatus::InStock(n)
            } else if n > 0 {
                StockStatus::LowStock(n)
            } else {
                StockStatus::OutOfStock
            }
        }
        _ => StockStatus::Untracked,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOnGroup<'a> {
    pub category: &'a str,
    pub add_ons: Vec<&'a AddOn>,
}

impl AddOnGroup<'_> {
    pub fn label(&self) -> String {
        category_label(self.category)
    }
}

/// Add-ons grouped by category, categories in first-seen order.
pub fn group_add_ons(item: &MenuItem) -> Vec<AddOnGroup<'_>> {
    let mut groups: Vec<AddOnGroup<'_>> = Vec::new();
    for add_on in &item.add_ons {
        match groups.iter_mut().find(|g| g.category == add_on.category) {
            Some(group) => group.add_ons.push(add_on),
            None => groups.push(AddOnGroup {
                category: &add_on.category,
                add_ons: vec![add_on],
            }),
        }
    }
    groups
}

/// "hot-extras" -> "Hot Extras". Only the first `-` becomes a space.
pub fn category_label(category: &str) -> String {
    category
        .replacen('-', " ", 1)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn add_on_price_label(add_on: &AddOn) -> String {
    if add_on.price > Decimal::ZERO {
        format!("{} each", format_price(add_on.price))
    } else {
        "Free".to_string()
    }
}

pub fn sizes_label(item: &MenuItem) -> Option<String> {
    (!item.variations.is_empty()).then(|| format!("{} sizes", item.variations.len()))
}

pub fn add_ons_label(item: &MenuItem) -> Option<String> {
    match item.add_ons.len() {
        0 => None,
        1 => Some("1 add-on available".to_string()),
        n => Some(format!("{} add-ons available", n)),
    }
}

/// Card button: "Unavailable", "Customize" or "Add to Cart".
pub fn action_label(item: &MenuItem) -> &'static str {
    if !item.available {
        "Unavailable"
    } else if item.needs_customization() {
        "Customize"
    } else {
        "Add to Cart"
    }
}

/// "₱12.50"
pub fn format_price(amount: Decimal) -> String {
    format!("₱{:.2}", amount)
}

/// "₱12.5", "₱150": no trailing zeros.
pub fn format_amount(amount: Decimal) -> String {
    format!("₱{}", amount.normalize())
}
