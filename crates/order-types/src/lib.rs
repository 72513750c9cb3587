//! Common types for the food-order API core.
//!
//! This crate defines the domain model shared by the storage and operations
//! layers: the `Order` entity, the incoming request payload schema, and the
//! error taxonomy surfaced to the (external) transport layer.

/// Request payload schema for create and update operations.
pub mod api;
/// Error taxonomy for validation and operation failures.
pub mod error;
/// The order entity and its status lifecycle.
pub mod order;

pub use api::{DishPayload, OrderPayload};
pub use error::OrderApiError;
pub use order::{Dish, Order, OrderStatus};
