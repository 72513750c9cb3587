//! Storage module for the food-order API core.
//!
//! This crate defines the seam between the order operations and the backing
//! collection. The store is an ordered collection of orders keyed by unique
//! identifier; the in-memory implementation is the only backend the core
//! ships, but the trait keeps the operations layer backend-agnostic.

use async_trait::async_trait;
use order_types::Order;

/// Re-export implementations
pub mod implementations {
	pub mod memory;
}

pub use implementations::memory::MemoryOrderStore;

/// Trait defining the interface for order storage backends.
///
/// The contract is deliberately infallible: lookups signal absence with
/// `Option`, and the mutating calls that need a target report whether one
/// existed. Id uniqueness is not checked here; the create operation owns it
/// by construction through the id generator.
///
/// The store is not a mutual-exclusion domain. Callers running
/// read-modify-write sequences (lookup-then-mutate, lookup-then-delete) must
/// serialize them externally.
#[async_trait]
pub trait OrderStore: Send + Sync {
	/// Appends an order to the end of the collection.
	async fn append(&self, order: Order);

	/// Looks up an order by its identifier.
	async fn find_by_id(&self, id: &str) -> Option<Order>;

	/// Replaces the stored order carrying the same id, preserving its
	/// insertion position. Returns false when no such order exists.
	async fn replace(&self, order: Order) -> bool;

	/// Removes the order with the given identifier. Returns false when no
	/// such order exists.
	async fn remove_by_id(&self, id: &str) -> bool;

	/// Returns all orders in insertion order.
	async fn list_all(&self) -> Vec<Order>;
}
