//! Core logic for the food-order resource API.
//!
//! This crate composes the validation pipeline, the status-transition guard,
//! and the id-generator seam into the five order operations (list, read,
//! create, update, delete) over an injected [`order_storage::OrderStore`].
//! Transport concerns (routing, request decoding, response encoding) live
//! outside this crate; callers hand in a decoded [`order_types::OrderPayload`]
//! and receive a typed result or an [`order_types::OrderApiError`].

/// Id generation seam for the create operation.
pub mod id;
/// The five order operations composing pipeline, guard, and store.
pub mod operations;
/// The order-status state machine and its guards.
pub mod state;
/// The request-validation pipeline.
pub mod validation;

pub use id::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use operations::OrderOperations;
pub use state::StatusGuard;
pub use validation::{OrderFields, OrderValidator};
