// ============================================================================
// Customer Domain
// ============================================================================
//
// Customers own their orders by reference; an order stores the owning
// customer's id. Customer update is a full replace: all three fields are
// required every time.
//
// ============================================================================

pub mod service;
pub mod validation;

pub use service::CustomerService;
pub use validation::{CustomerDraft, CustomerFields};
