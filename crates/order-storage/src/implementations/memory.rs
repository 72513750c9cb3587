//! In-memory storage backend for orders.
//!
//! Keeps orders in a `Vec` behind a read-write lock, preserving insertion
//! order for listing. Lookups scan linearly; the collection is small and
//! memory-resident by contract, with no persistence across restarts.

use crate::OrderStore;
use async_trait::async_trait;
use order_types::Order;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory order store.
pub struct MemoryOrderStore {
	orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			orders: RwLock::new(Vec::new()),
		}
	}

	/// Creates a store pre-populated with the given orders, in order.
	pub fn with_orders(orders: Vec<Order>) -> Self {
		Self {
			orders: RwLock::new(orders),
		}
	}
}

impl Default for MemoryOrderStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
	async fn append(&self, order: Order) {
		debug!(order_id = %order.id, "Appending order");
		let mut orders = self.orders.write().await;
		orders.push(order);
	}

	async fn find_by_id(&self, id: &str) -> Option<Order> {
		let orders = self.orders.read().await;
		orders.iter().find(|order| order.id == id).cloned()
	}

	async fn replace(&self, order: Order) -> bool {
		let mut orders = self.orders.write().await;
		match orders.iter_mut().find(|existing| existing.id == order.id) {
			Some(existing) => {
				debug!(order_id = %order.id, "Replacing order");
				*existing = order;
				true
			}
			None => false,
		}
	}

	async fn remove_by_id(&self, id: &str) -> bool {
		let mut orders = self.orders.write().await;
		match orders.iter().position(|order| order.id == id) {
			Some(index) => {
				debug!(order_id = %id, "Removing order");
				orders.remove(index);
				true
			}
			None => false,
		}
	}

	async fn list_all(&self) -> Vec<Order> {
		let orders = self.orders.read().await;
		orders.clone()
	}
}
