// ============================================================================
// Order Domain - Relationship Management
// ============================================================================
//
// The core of the service. An order belongs to exactly one customer (the
// reference must resolve at creation time) and relates to products as a
// set of (order_id, product_id) association rows:
//
// - adding a product that is already in the order is a Conflict, never a
//   silent no-op
// - removing a product that is not in the order is NotFound
// - remove truly clears membership, so add/remove/add succeeds
//
// ============================================================================

pub mod service;
pub mod validation;

pub use service::OrderService;
pub use validation::{OrderDraft, OrderFields};
