// ============================================================================
// Domain Layer
// ============================================================================
//
// One module per entity, each with:
// - Validation (untyped draft input -> typed field set, or field-level errors)
// - Service (business rules on top of the entity store)
//
// Plus the shared error taxonomy every layer speaks.
//
// ============================================================================

pub mod customer;
pub mod errors;
pub mod order;
pub mod product;

pub use errors::{DomainError, ValidationErrors};
