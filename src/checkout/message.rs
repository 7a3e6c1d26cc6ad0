//! The order summary sent to the café's Messenger page, and the deep link
//! that pre-fills it.

use crate::model::{CartLine, ServiceType};
use crate::pricing::format_amount;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct OrderSummary<'a> {
    pub cafe_name: &'a str,
    pub order_number: &'a str,
    pub customer_name: &'a str,
    pub service_type: ServiceType,
    pub lines: &'a [CartLine],
    pub total: Decimal,
    /// Payment method name, or its id when the name is unknown.
    pub payment: &'a str,
    pub receipt_url: Option<&'a str>,
    pub notes: &'a str,
}

/// "• Latte (Large) + Extra Shot x2, Oat Milk - ₱480"
fn item_line(line: &CartLine) -> String {
    let mut text = format!("• {}", line.name);
    if let Some(variation) = &line.selected_variation {
        text.push_str(&format!(" ({})", variation.name));
    }
    if let Some(add_ons) = line.add_on_summary() {
        text.push_str(&format!(" + {}", add_ons));
    }
    text.push_str(&format!(
        " x{} - {}",
        line.quantity,
        format_amount(line.line_total())
    ));
    text
}

pub fn compose_message(summary: &OrderSummary<'_>) -> String {
    let items = summary
        .lines
        .iter()
        .map(item_line)
        .collect::<Vec<_>>()
        .join("\n");

    let receipt = match summary.receipt_url {
        Some(url) => format!("📸 Payment Receipt: {}", url),
        None => "📸 Payment Screenshot: Please attach your payment receipt screenshot".to_string(),
    };

    let notes = if summary.notes.is_empty() {
        String::new()
    } else {
        format!("📝 Notes: {}", summary.notes)
    };

    let message = format!(
        "🛒 {cafe_upper} ORDER\n\
         📋 Order Number: #{number}\n\
         \n\
         👤 Customer: {customer}\n\
         📍 Service: {service}\n\
         \n\
         📋 ORDER DETAILS:\n\
         {items}\n\
         \n\
         💰 TOTAL: {total}\n\
         \n\
         \n\
         💳 Payment: {payment}\n\
         {receipt}\n\
         \n\
         {notes}\n\
         \n\
         Please confirm this order to proceed. Thank you for choosing {cafe}! ☕\n\
         \n\
         📋 Order Number: #{number}",
        cafe_upper = summary.cafe_name.to_uppercase(),
        cafe = summary.cafe_name,
        number = summary.order_number,
        customer = summary.customer_name,
        service = summary.service_type.label(),
        items = items,
        total = format_amount(summary.total),
        payment = summary.payment,
        receipt = receipt,
        notes = notes,
    );
    message.trim().to_string()
}

/// `https://m.me/{page}?text={message}`, encoded like `encodeURIComponent`.
pub fn messenger_link(page_id: &str, message: &str) -> String {
    format!(
        "https://m.me/{}?text={}",
        page_id,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddOn, MenuItemId, SelectedAddOn, Variation};
    use rust_decimal_macros::dec;

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine {
                line_id: 1,
                menu_item_id: MenuItemId(1),
                name: "Spanish Latte".into(),
                selected_variation: Some(Variation::new("lg", "Large", dec!(30))),
                selected_add_ons: vec![
                    SelectedAddOn {
                        add_on: AddOn::new("shot", "Extra Shot", dec!(25), "extras"),
                        quantity: 2,
                    },
                    SelectedAddOn {
                        add_on: AddOn::new("oat", "Oat Milk", dec!(35), "milk"),
                        quantity: 1,
                    },
                ],
                unit_price: dec!(265),
                quantity: 2,
            },
            CartLine {
                line_id: 2,
                menu_item_id: MenuItemId(2),
                name: "Ensaymada".into(),
                selected_variation: None,
                selected_add_ons: vec![],
                unit_price: dec!(62.50),
                quantity: 1,
            },
        ]
    }

    #[test]
    fn test_message_without_receipt_or_notes() {
        let lines = lines();
        let message = compose_message(&OrderSummary {
            cafe_name: "Acir Cafe",
            order_number: "007",
            customer_name: "Maria",
            service_type: ServiceType::TakeOut,
            lines: &lines,
            total: dec!(592.50),
            payment: "GCash",
            receipt_url: None,
            notes: "",
        });

        let expected = "🛒 ACIR CAFE ORDER\n\
📋 Order Number: #007\n\
\n\
👤 Customer: Maria\n\
📍 Service: Take Out\n\
\n\
📋 ORDER DETAILS:\n\
• Spanish Latte (Large) + Extra Shot x2, Oat Milk - ₱530\n\
• Ensaymada x1 - ₱62.5\n\
\n\
💰 TOTAL: ₱592.5\n\
\n\
\n\
💳 Payment: GCash\n\
📸 Payment Screenshot: Please attach your payment receipt screenshot\n\
\n\
\n\
\n\
Please confirm this order to proceed. Thank you for choosing Acir Cafe! ☕\n\
\n\
📋 Order Number: #007";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_message_with_receipt_and_notes() {
        let lines = lines();
        let message = compose_message(&OrderSummary {
            cafe_name: "Acir Cafe",
            order_number: "012",
            customer_name: "Jun",
            service_type: ServiceType::DineIn,
            lines: &lines[1..],
            total: dec!(62.5),
            payment: "maya",
            receipt_url: Some("https://res.cloudinary.com/demo/receipts/r.jpg"),
            notes: "Less sugar",
        });

        assert!(message.contains("📍 Service: Dine In\n"));
        assert!(message.contains(
            "📸 Payment Receipt: https://res.cloudinary.com/demo/receipts/r.jpg\n\n📝 Notes: Less sugar\n\nPlease confirm"
        ));
        assert!(message.ends_with("📋 Order Number: #012"));
    }

    #[test]
    fn test_link_encodes_like_encode_uri_component() {
        let link = messenger_link("61579693577478", "Hi! (x2) ₱5 & 'more'*~\n");
        assert_eq!(
            link,
            "https://m.me/61579693577478?text=Hi!%20(x2)%20%E2%82%B15%20%26%20'more'*~%0A"
        );
    }
}
