/// Orders: the request the checkout sends, the answer it gets back, and the
/// [`Order`] entity the in-process order desk stores.
///
/// # Actor Framework
/// [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait;
/// creating one reserves stock through the menu actor (see
/// [`order_actor`](crate::order_actor)).
use crate::model::CartLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    DineIn,
    TakeOut,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "Dine In",
            ServiceType::TakeOut => "Take Out",
        }
    }
}

/// What the checkout submits to the order service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub service_type: ServiceType,
    pub payment_method: String,
    pub reference_number: String,
    pub notes: String,
    pub total: Decimal,
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

/// The order service's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: String,
    #[serde(default)]
    pub order_number: Option<u32>,
}

impl PlacedOrder {
    /// Number shown to the customer: the server number padded to three
    /// digits, or the last six characters of the id in upper case.
    pub fn display_number(&self) -> String {
        match self.order_number {
            Some(n) => format!("{:03}", n),
            None => {
                let chars: Vec<char> = self.id.chars().collect();
                let start = chars.len().saturating_sub(6);
                chars[start..].iter().collect::<String>().to_uppercase()
            }
        }
    }
}

/// Type-safe identifier for orders held by the order desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// An order accepted by the in-process order desk.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Sequential, starting at 1.
    pub order_number: u32,
    pub request: OrderRequest,
}

impl Order {
    pub fn new(id: OrderId, request: OrderRequest) -> Self {
        Self {
            id,
            order_number: id.0,
            request,
        }
    }

    pub fn placed(&self) -> PlacedOrder {
        PlacedOrder {
            id: self.id.to_string(),
            order_number: Some(self.order_number),
        }
    }
}
