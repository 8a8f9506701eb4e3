//! Column naming for transaction frames

/// Names of the four transaction columns read from a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionColumns {
    pub customer_id: String,
    pub order_id: String,
    pub purchase_date: String,
    pub amount: String,
}

impl Default for TransactionColumns {
    fn default() -> Self {
        Self {
            customer_id: "CustomerID".to_string(),
            order_id: "OrderID".to_string(),
            purchase_date: "PurchaseDate".to_string(),
            amount: "TransactionAmount".to_string(),
        }
    }
}
