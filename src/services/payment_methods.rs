use super::{active_sorted, PaymentMethodSource, ServiceError};
use crate::model::PaymentMethodInfo;
use async_trait::async_trait;

/// A fixed list of payment methods, for offline use and the demo.
#[derive(Debug, Clone, Default)]
pub struct StaticPaymentMethods {
    methods: Vec<PaymentMethodInfo>,
}

impl StaticPaymentMethods {
    pub fn new(methods: Vec<PaymentMethodInfo>) -> Self {
        Self { methods }
    }

    /// GCash and Maya, the café's usual e-wallets.
    pub fn e_wallets(account_name: &str) -> Self {
        let mut gcash = PaymentMethodInfo::new("gcash", "GCash", "0917 123 4567", account_name);
        gcash.sort_order = 1;
        let mut maya = PaymentMethodInfo::new("maya", "Maya", "0918 765 4321", account_name);
        maya.sort_order = 2;
        Self::new(vec![gcash, maya])
    }
}

#[async_trait]
impl PaymentMethodSource for StaticPaymentMethods {
    async fn payment_methods(&self) -> Result<Vec<PaymentMethodInfo>, ServiceError> {
        Ok(active_sorted(self.methods.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inactive_methods_hidden_and_sorted() {
        let mut bank = PaymentMethodInfo::new("bank", "Bank Transfer", "001234", "Acir Cafe");
        bank.sort_order = 0;
        let mut old = PaymentMethodInfo::new("paypal", "PayPal", "-", "Acir Cafe");
        old.active = false;
        let mut methods = StaticPaymentMethods::e_wallets("Acir Cafe").methods;
        methods.push(bank);
        methods.push(old);

        let listed = StaticPaymentMethods::new(methods)
            .payment_methods()
            .await
            .unwrap();
        let ids: Vec<_> = listed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["bank", "gcash", "maya"]);
    }
}
