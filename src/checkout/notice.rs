//! Customer-facing notices shown during checkout.

pub const UPLOADING_RECEIPT: &str = "Uploading receipt...";
pub const RECEIPT_UPLOADED: &str = "Receipt uploaded! Creating order...";
pub const TOO_MANY_ORDERS: &str =
    "Too many orders: Please wait 1 minute before placing another order.";
pub const ORDER_FAILED: &str = "Unable to place order. Please try again.";

pub fn upload_failed(message: &str) -> String {
    format!(
        "Upload failed: {}. Please try again or continue without receipt.",
        message
    )
}

fn stock_error(raw: &str) -> bool {
    raw.to_lowercase().contains("insufficient stock")
}

/// Pay-at-counter failures. Stock problems are shown as-is, rate limiting
/// gets a wait message and anything else is generic.
pub fn counter_order_failed(raw: &str) -> String {
    if stock_error(raw) {
        raw.to_string()
    } else if raw.to_lowercase().contains("rate limit") {
        TOO_MANY_ORDERS.to_string()
    } else {
        ORDER_FAILED.to_string()
    }
}

/// Online-payment failures. Stock problems are shown as-is; every other
/// failure asks the customer to wait before retrying.
pub fn payment_order_failed(raw: &str) -> String {
    if stock_error(raw) {
        raw.to_string()
    } else {
        TOO_MANY_ORDERS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_errors_shown_verbatim() {
        let raw = "Insufficient stock for Ube Latte: requested 3, available 1";
        assert_eq!(counter_order_failed(raw), raw);
        assert_eq!(payment_order_failed(raw), raw);
        assert_eq!(payment_order_failed("INSUFFICIENT STOCK"), "INSUFFICIENT STOCK");
    }

    #[test]
    fn test_counter_failures() {
        assert_eq!(counter_order_failed("Rate limit exceeded"), TOO_MANY_ORDERS);
        assert_eq!(counter_order_failed("missing identifiers"), ORDER_FAILED);
        assert_eq!(counter_order_failed("connection reset"), ORDER_FAILED);
        assert_eq!(counter_order_failed(""), ORDER_FAILED);
    }

    #[test]
    fn test_payment_failures_ask_to_wait() {
        assert_eq!(payment_order_failed("Rate limit exceeded"), TOO_MANY_ORDERS);
        assert_eq!(payment_order_failed("missing identifiers"), TOO_MANY_ORDERS);
        assert_eq!(payment_order_failed("connection reset"), TOO_MANY_ORDERS);
    }

    #[test]
    fn test_upload_failed() {
        assert_eq!(
            upload_failed("File too large"),
            "Upload failed: File too large. Please try again or continue without receipt."
        );
    }
}
