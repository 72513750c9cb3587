//! The five order operations.
//!
//! `OrderOperations` owns the composition: each call runs its operation's
//! validation pipeline and, only when every check passes, applies the
//! mutation to the injected store. Validation failures leave the store
//! untouched, so a rejected create or update never produces a partial write.

use crate::id::IdGenerator;
use crate::state::StatusGuard;
use crate::validation::OrderValidator;
use order_storage::OrderStore;
use order_types::{Order, OrderApiError, OrderPayload};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Executes order operations against an injected store.
///
/// The internal mutex is the single mutual-exclusion domain around the
/// read-modify-write sequences (lookup-then-mutate, lookup-then-delete), so
/// concurrent callers cannot lose updates or delete an order out from under
/// an in-flight update. `list` and `read` take snapshots and skip it.
pub struct OrderOperations {
	store: Arc<dyn OrderStore>,
	ids: Arc<dyn IdGenerator>,
	write_lock: Mutex<()>,
}

impl OrderOperations {
	pub fn new(store: Arc<dyn OrderStore>, ids: Arc<dyn IdGenerator>) -> Self {
		Self {
			store,
			ids,
			write_lock: Mutex::new(()),
		}
	}

	/// Returns every order in insertion order. No validation.
	pub async fn list(&self) -> Vec<Order> {
		self.store.list_all().await
	}

	/// Returns the order with the given id.
	pub async fn read(&self, id: &str) -> Result<Order, OrderApiError> {
		self.require_order(id).await
	}

	/// Validates the payload, assigns a fresh id, and appends the new order.
	pub async fn create(&self, payload: &OrderPayload) -> Result<Order, OrderApiError> {
		let fields = OrderValidator::validate_create(payload)?;

		let order = Order {
			id: self.ids.next_id(),
			deliver_to: fields.deliver_to,
			mobile_number: fields.mobile_number,
			status: fields.status,
			dishes: fields.dishes,
		};
		self.store.append(order.clone()).await;

		info!(order_id = %order.id, status = %order.status, "Order created");
		Ok(order)
	}

	/// Runs the full update pipeline, then replaces the order's mutable
	/// fields and writes the result through to the store. The id is never
	/// altered.
	pub async fn update(
		&self,
		route_id: &str,
		payload: &OrderPayload,
	) -> Result<Order, OrderApiError> {
		let _guard = self.write_lock.lock().await;

		let existing = self.require_order(route_id).await?;
		let fields = OrderValidator::validate_update(route_id, payload, &existing)?;

		let updated = Order {
			id: existing.id,
			deliver_to: fields.deliver_to,
			mobile_number: fields.mobile_number,
			status: fields.status,
			dishes: fields.dishes,
		};
		if !self.store.replace(updated.clone()).await {
			return Err(OrderApiError::NotFound(route_id.to_string()));
		}

		info!(order_id = %updated.id, status = %updated.status, "Order updated");
		Ok(updated)
	}

	/// Removes the order with the given id. Only pending orders may go.
	pub async fn delete(&self, route_id: &str) -> Result<(), OrderApiError> {
		let _guard = self.write_lock.lock().await;

		let existing = self.require_order(route_id).await?;
		StatusGuard::ensure_deletable(&existing)?;
		self.store.remove_by_id(route_id).await;

		info!(order_id = %route_id, "Order deleted");
		Ok(())
	}

	/// Order-exists check: resolves the order or fails with `NotFound`.
	async fn require_order(&self, id: &str) -> Result<Order, OrderApiError> {
		self.store
			.find_by_id(id)
			.await
			.ok_or_else(|| OrderApiError::NotFound(id.to_string()))
	}
}
