//! Order-status state machine.
//!
//! Orders move freely between `pending`, `preparing`, and `out-for-delivery`;
//! `delivered` is absorbing, so any mutation attempt on a delivered order is
//! rejected regardless of the requested target. Deletion is tighter still:
//! only a pending order may be removed.

use once_cell::sync::Lazy;
use order_types::{Order, OrderApiError, OrderStatus};
use std::collections::{HashMap, HashSet};

// Each state maps to its allowed next states. Self-transitions are allowed,
// so an update that keeps the current status is legal.
static TRANSITIONS: Lazy<HashMap<OrderStatus, HashSet<OrderStatus>>> = Lazy::new(|| {
	let mut m = HashMap::new();
	m.insert(OrderStatus::Pending, HashSet::from(OrderStatus::ALL));
	m.insert(OrderStatus::Preparing, HashSet::from(OrderStatus::ALL));
	m.insert(OrderStatus::OutForDelivery, HashSet::from(OrderStatus::ALL));
	m.insert(OrderStatus::Delivered, HashSet::new()); // terminal
	m
});

/// Enforces the order-status state machine.
pub struct StatusGuard;

impl StatusGuard {
	/// Checks the transition table.
	pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
		TRANSITIONS
			.get(&from)
			.is_some_and(|allowed| allowed.contains(&to))
	}

	/// Fails with `Conflict` when the stored order cannot move to `target`.
	///
	/// With the current table that happens exactly when the stored status is
	/// `delivered`, whatever the target.
	pub fn ensure_transition(order: &Order, target: OrderStatus) -> Result<(), OrderApiError> {
		if Self::is_valid_transition(order.status, target) {
			Ok(())
		} else {
			Err(OrderApiError::Conflict(
				"A delivered order cannot be changed".to_string(),
			))
		}
	}

	/// Fails with `Conflict` unless the order is still pending.
	pub fn ensure_deletable(order: &Order) -> Result<(), OrderApiError> {
		if order.status == OrderStatus::Pending {
			Ok(())
		} else {
			Err(OrderApiError::Conflict(
				"An order cannot be deleted unless it is pending".to_string(),
			))
		}
	}
}
