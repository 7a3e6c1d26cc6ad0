use serde::{Deserialize, Serialize};

/// Shown when a payment method's QR code cannot be loaded.
pub const FALLBACK_QR_CODE_URL: &str = "https://images.pexels.com/photos/8867482/pexels-photo-8867482.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop";

/// A way to pay (e.g. GCash, Maya, bank transfer), as configured by the café.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub qr_code_url: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_active() -> bool {
    true
}

impl PaymentMethodInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        account_number: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_number: account_number.into(),
            account_name: account_name.into(),
            qr_code_url: String::new(),
            active: true,
            sort_order: 0,
        }
    }

    pub fn qr_code(&self) -> &str {
        if self.qr_code_url.is_empty() {
            FALLBACK_QR_CODE_URL
        } else {
            &self.qr_code_url
        }
    }
}
