use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::errors::{DomainError, ValidationErrors};

// ============================================================================
// Order Validation
// ============================================================================

/// Raw order input. The date arrives as a string so a malformed value
/// yields a field-level error instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderDraft {
    pub order_date: Option<String>,
    pub customer_id: Option<i64>,
}

/// Fully validated order fields. Whether customer_id resolves to a real
/// customer is the relationship manager's check, not validation's.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub order_date: NaiveDate,
    pub customer_id: i64,
}

impl OrderDraft {
    pub fn validate(self) -> Result<OrderFields, DomainError> {
        let mut errors = ValidationErrors::new();

        let order_date = match &self.order_date {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("order_date", format!("not a valid date: {}", raw));
                    None
                }
            },
            None => {
                errors.push("order_date", "missing required field");
                None
            }
        };

        let customer_id = match self.customer_id {
            Some(id) => Some(id),
            None => {
                errors.push("customer_id", "missing required field");
                None
            }
        };

        match (order_date, customer_id) {
            (Some(order_date), Some(customer_id)) => Ok(OrderFields {
                order_date,
                customer_id,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_parses_the_date() {
        let fields = OrderDraft {
            order_date: Some("2024-01-01".to_string()),
            customer_id: Some(1),
        }
        .validate()
        .unwrap();

        assert_eq!(
            fields.order_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(fields.customer_id, 1);
    }

    #[test]
    fn test_both_fields_are_required() {
        match OrderDraft::default().validate() {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(errors.get("order_date"), Some("missing required field"));
                assert_eq!(errors.get("customer_id"), Some("missing required field"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date_is_a_field_error() {
        let result = OrderDraft {
            order_date: Some("01/01/2024".to_string()),
            customer_id: Some(1),
        }
        .validate();

        match result {
            Err(DomainError::Validation(errors)) => {
                assert_eq!(
                    errors.get("order_date"),
                    Some("not a valid date: 01/01/2024")
                );
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        let result = OrderDraft {
            order_date: Some("2024-02-30".to_string()),
            customer_id: Some(1),
        }
        .validate();

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
