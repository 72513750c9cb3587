//! Request payload schema for create and update operations.
//!
//! The transport layer decodes an incoming request body into these types
//! before handing it to the validation pipeline. Every field is optional at
//! the schema level; the pipeline decides which absences are errors, so a
//! missing `deliverTo` produces a precise `MissingField` rather than a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Candidate order data supplied by a create or update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
	/// Optional payload id; on update it must match the route id when given.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deliver_to: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mobile_number: Option<String>,
	/// Raw status string; parsed against the lifecycle by the pipeline.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dishes: Option<Vec<DishPayload>>,
}

/// Candidate dish data within a request payload.
///
/// The quantity is kept as a plain signed integer so that a zero or negative
/// value survives decoding and is rejected by the pipeline with the dish
/// index in the message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishPayload {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity: Option<i64>,
	/// Opaque descriptive fields carried through to the stored dish.
	#[serde(flatten)]
	pub details: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn payload_decodes_wire_field_names() {
		let payload: OrderPayload = serde_json::from_value(json!({
			"deliverTo": "221B Baker St",
			"mobileNumber": "555-0100",
			"dishes": [{ "name": "Ragu", "quantity": 2 }]
		}))
		.unwrap();

		assert_eq!(payload.deliver_to.as_deref(), Some("221B Baker St"));
		assert_eq!(payload.mobile_number.as_deref(), Some("555-0100"));
		assert!(payload.id.is_none());
		assert!(payload.status.is_none());

		let dishes = payload.dishes.unwrap();
		assert_eq!(dishes[0].quantity, Some(2));
		assert_eq!(dishes[0].details["name"], json!("Ragu"));
	}

	#[test]
	fn payload_tolerates_missing_and_negative_values() {
		let payload: OrderPayload = serde_json::from_value(json!({
			"dishes": [{ "quantity": -3 }, {}]
		}))
		.unwrap();

		let dishes = payload.dishes.unwrap();
		assert_eq!(dishes[0].quantity, Some(-3));
		assert_eq!(dishes[1].quantity, None);
	}
}
