//! The order entity and its status lifecycle.
//!
//! An order carries delivery metadata, a status drawn from a fixed four-state
//! lifecycle, and at least one dish. Dishes are value types with no identity
//! of their own; descriptive fields beyond the quantity are opaque payload
//! carried through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer's food order.
///
/// The `id` is assigned once at creation by the id generator and is never
/// altered afterwards; updates replace every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
	/// Unique opaque identifier for this order.
	pub id: String,
	/// Delivery address.
	#[serde(rename = "deliverTo")]
	pub deliver_to: String,
	/// Contact number for the delivery.
	#[serde(rename = "mobileNumber")]
	pub mobile_number: String,
	/// Current lifecycle status.
	pub status: OrderStatus,
	/// Line items; always non-empty for a stored order.
	pub dishes: Vec<Dish>,
}

/// A line item within an order.
///
/// Only the quantity is validated by the core. Everything else the caller
/// sent (name, price, description, ...) is kept in `details` and round-trips
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
	/// How many of this dish were ordered; always >= 1 for a stored order.
	pub quantity: u64,
	/// Opaque descriptive fields, flattened on the wire.
	#[serde(flatten)]
	pub details: serde_json::Map<String, serde_json::Value>,
}

/// Status of an order in its delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
	/// Order has been placed but preparation has not started.
	Pending,
	/// Order is being prepared.
	Preparing,
	/// Order has left the kitchen.
	OutForDelivery,
	/// Order reached the customer. Terminal: no further transitions.
	Delivered,
}

impl OrderStatus {
	/// Every status, in lifecycle order. Used for error messages listing the
	/// accepted values.
	pub const ALL: [OrderStatus; 4] = [
		OrderStatus::Pending,
		OrderStatus::Preparing,
		OrderStatus::OutForDelivery,
		OrderStatus::Delivered,
	];

	/// Parses the wire representation of a status.
	///
	/// Returns `None` for anything outside the four enumerated values,
	/// including the empty string.
	pub fn parse(value: &str) -> Option<OrderStatus> {
		match value {
			"pending" => Some(OrderStatus::Pending),
			"preparing" => Some(OrderStatus::Preparing),
			"out-for-delivery" => Some(OrderStatus::OutForDelivery),
			"delivered" => Some(OrderStatus::Delivered),
			_ => None,
		}
	}

	/// Returns the wire representation of this status.
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Pending => "pending",
			OrderStatus::Preparing => "preparing",
			OrderStatus::OutForDelivery => "out-for-delivery",
			OrderStatus::Delivered => "delivered",
		}
	}

	/// Whether this status is terminal.
	pub fn is_terminal(&self) -> bool {
		matches!(self, OrderStatus::Delivered)
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
