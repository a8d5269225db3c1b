use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Persisted Entities
// ============================================================================
//
// These structs are both the stored row shape and the external JSON
// representation. Order carries only the owning customer's id, never the
// nested customer, so serialization stays shallow and cycle-free.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub order_date: NaiveDate,
    pub customer_id: i64,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_serialization() {
        let customer = Customer {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            address: "1 Main St".to_string(),
        };

        let json = serde_json::to_string(&customer).unwrap();
        let deserialized: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(customer, deserialized);
    }

    #[test]
    fn test_order_serializes_shallow() {
        let order = Order {
            id: 7,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            customer_id: 3,
        };

        let value = serde_json::to_value(&order).unwrap();

        // The owning customer appears as a foreign key only
        assert_eq!(value["customer_id"], 3);
        assert_eq!(value["order_date"], "2024-01-01");
        assert!(value.get("customer").is_none());
    }

    #[test]
    fn test_order_date_round_trip() {
        let order = Order {
            id: 1,
            order_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            customer_id: 1,
        };

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.order_date, deserialized.order_date);
    }
}
