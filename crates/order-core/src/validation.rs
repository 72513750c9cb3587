//! Request-validation pipeline.
//!
//! Validation is decomposed into single-responsibility checks so the create
//! and update pipelines can assemble different subsets without duplicating
//! logic, and so each failure mode maps to one precise rule. Pipelines run
//! their checks in a fixed order and stop at the first failure; a check
//! never mutates state. Checks that accept a value also return its typed
//! form, so a payload that passes the pipeline comes out as ready-to-store
//! [`OrderFields`].

use crate::state::StatusGuard;
use order_types::{Dish, DishPayload, Order, OrderApiError, OrderPayload, OrderStatus};

/// The validated, typed material an operation builds an [`Order`] from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
	pub deliver_to: String,
	pub mobile_number: String,
	pub status: OrderStatus,
	pub dishes: Vec<Dish>,
}

/// Runs the per-operation validation pipelines.
pub struct OrderValidator;

impl OrderValidator {
	/// Create pipeline: the three field-present checks, the non-empty dish
	/// list check, and the per-dish quantity check, in that order.
	///
	/// A create payload may omit the status, in which case the order starts
	/// out pending; a supplied status must still be one of the four
	/// lifecycle values.
	pub fn validate_create(payload: &OrderPayload) -> Result<OrderFields, OrderApiError> {
		let deliver_to = Self::require_field(payload.deliver_to.as_deref(), "deliverTo")?;
		let mobile_number = Self::require_field(payload.mobile_number.as_deref(), "mobileNumber")?;
		let dishes = Self::require_dishes(payload.dishes.as_deref())?;
		let dishes = Self::validate_dishes(dishes)?;
		let status = match payload.status.as_deref() {
			None => OrderStatus::Pending,
			Some(raw) => Self::parse_status(raw)?,
		};

		Ok(OrderFields {
			deliver_to,
			mobile_number,
			status,
			dishes,
		})
	}

	/// Update pipeline: the five create-time checks, then the status-valid
	/// check, the delivered guard against the stored order, and the
	/// payload-id/route-id match, in that order.
	///
	/// The caller resolves `existing` first (the order-exists check); this
	/// pipeline never touches the store.
	pub fn validate_update(
		route_id: &str,
		payload: &OrderPayload,
		existing: &Order,
	) -> Result<OrderFields, OrderApiError> {
		let deliver_to = Self::require_field(payload.deliver_to.as_deref(), "deliverTo")?;
		let mobile_number = Self::require_field(payload.mobile_number.as_deref(), "mobileNumber")?;
		let dishes = Self::require_dishes(payload.dishes.as_deref())?;
		let dishes = Self::validate_dishes(dishes)?;
		let status = Self::require_status(payload.status.as_deref())?;
		StatusGuard::ensure_transition(existing, status)?;
		Self::check_id_matches_route(route_id, payload.id.as_deref())?;

		Ok(OrderFields {
			deliver_to,
			mobile_number,
			status,
			dishes,
		})
	}

	/// Field-present check: the value must be supplied and non-empty.
	fn require_field(value: Option<&str>, field: &'static str) -> Result<String, OrderApiError> {
		match value {
			Some(v) if !v.is_empty() => Ok(v.to_string()),
			_ => Err(OrderApiError::MissingField { field }),
		}
	}

	/// Field-present check for the dish list.
	fn require_dishes(dishes: Option<&[DishPayload]>) -> Result<&[DishPayload], OrderApiError> {
		dishes.ok_or(OrderApiError::MissingField { field: "dishes" })
	}

	/// Dishes-non-empty and dish-quantity checks, yielding typed dishes.
	///
	/// Each dish must carry a quantity that is an integer >= 1; the failure
	/// names the first offending dish index.
	fn validate_dishes(dishes: &[DishPayload]) -> Result<Vec<Dish>, OrderApiError> {
		if dishes.is_empty() {
			return Err(OrderApiError::InvalidField {
				field: "dishes",
				detail: "Order must include at least one dish".to_string(),
			});
		}

		dishes
			.iter()
			.enumerate()
			.map(|(index, dish)| match dish.quantity {
				Some(quantity) if quantity >= 1 => Ok(Dish {
					quantity: quantity as u64,
					details: dish.details.clone(),
				}),
				_ => Err(OrderApiError::InvalidField {
					field: "dishes",
					detail: format!(
						"Dish {index} must have a quantity that is an integer greater than 0"
					),
				}),
			})
			.collect()
	}

	/// Status-valid check: the status must be supplied, non-empty, and one
	/// of the four lifecycle values.
	fn require_status(value: Option<&str>) -> Result<OrderStatus, OrderApiError> {
		match value {
			Some(raw) if !raw.is_empty() => Self::parse_status(raw),
			_ => Err(Self::invalid_status()),
		}
	}

	fn parse_status(raw: &str) -> Result<OrderStatus, OrderApiError> {
		OrderStatus::parse(raw).ok_or_else(Self::invalid_status)
	}

	fn invalid_status() -> OrderApiError {
		let allowed = OrderStatus::ALL.map(|status| status.as_str()).join(", ");
		OrderApiError::InvalidField {
			field: "status",
			detail: format!("Order must have a status of {allowed}"),
		}
	}

	/// Id-matches-route check: a payload id, when present and non-empty,
	/// must equal the route id.
	fn check_id_matches_route(
		route_id: &str,
		payload_id: Option<&str>,
	) -> Result<(), OrderApiError> {
		match payload_id {
			Some(id) if !id.is_empty() && id != route_id => {
				Err(OrderApiError::Conflict(format!(
					"Order id does not match route id. Order: {id}, Route: {route_id}."
				)))
			}
			_ => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn payload(value: serde_json::Value) -> OrderPayload {
		serde_json::from_value(value).unwrap()
	}

	fn existing(status: OrderStatus) -> Order {
		Order {
			id: "5".to_string(),
			deliver_to: "221B Baker St".to_string(),
			mobile_number: "555-0100".to_string(),
			status,
			dishes: vec![Dish {
				quantity: 1,
				details: serde_json::Map::new(),
			}],
		}
	}

	fn valid_body() -> serde_json::Value {
		json!({
			"deliverTo": "221B Baker St",
			"mobileNumber": "555-0100",
			"dishes": [{ "name": "Ragu", "quantity": 2 }]
		})
	}

	#[test]
	fn create_accepts_a_well_formed_payload() {
		let fields = OrderValidator::validate_create(&payload(valid_body())).unwrap();

		assert_eq!(fields.deliver_to, "221B Baker St");
		assert_eq!(fields.mobile_number, "555-0100");
		assert_eq!(fields.status, OrderStatus::Pending);
		assert_eq!(fields.dishes.len(), 1);
		assert_eq!(fields.dishes[0].quantity, 2);
		assert_eq!(fields.dishes[0].details["name"], json!("Ragu"));
	}

	#[test]
	fn create_rejects_missing_or_empty_fields() {
		let mut body = valid_body();
		body["deliverTo"] = json!("");
		let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
		assert_eq!(err, OrderApiError::MissingField { field: "deliverTo" });

		let mut body = valid_body();
		body.as_object_mut().unwrap().remove("mobileNumber");
		let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
		assert_eq!(err, OrderApiError::MissingField { field: "mobileNumber" });

		let mut body = valid_body();
		body.as_object_mut().unwrap().remove("dishes");
		let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
		assert_eq!(err, OrderApiError::MissingField { field: "dishes" });
	}

	#[test]
	fn create_rejects_an_empty_dish_list() {
		let mut body = valid_body();
		body["dishes"] = json!([]);
		let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
		assert_eq!(err.to_string(), "Order must include at least one dish");
	}

	#[test]
	fn create_rejects_bad_quantities_with_the_dish_index() {
		for quantity in [json!(0), json!(-2), serde_json::Value::Null] {
			let mut body = valid_body();
			body["dishes"] = json!([{ "quantity": 3 }, { "quantity": quantity }]);
			let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
			assert_eq!(
				err.to_string(),
				"Dish 1 must have a quantity that is an integer greater than 0"
			);
		}
	}

	#[test]
	fn create_defaults_status_to_pending_but_rejects_garbage() {
		let fields = OrderValidator::validate_create(&payload(valid_body())).unwrap();
		assert_eq!(fields.status, OrderStatus::Pending);

		let mut body = valid_body();
		body["status"] = json!("preparing");
		let fields = OrderValidator::validate_create(&payload(body)).unwrap();
		assert_eq!(fields.status, OrderStatus::Preparing);

		let mut body = valid_body();
		body["status"] = json!("burnt");
		let err = OrderValidator::validate_create(&payload(body)).unwrap_err();
		assert!(matches!(
			err,
			OrderApiError::InvalidField { field: "status", .. }
		));
	}

	#[test]
	fn update_requires_a_valid_status() {
		for status in [json!(""), json!("invalid"), serde_json::Value::Null] {
			let mut body = valid_body();
			body["status"] = status;
			let err = OrderValidator::validate_update(
				"5",
				&payload(body),
				&existing(OrderStatus::Pending),
			)
			.unwrap_err();
			assert_eq!(
				err.to_string(),
				"Order must have a status of pending, preparing, out-for-delivery, delivered"
			);
		}
	}

	#[test]
	fn update_rejects_a_delivered_order_whatever_the_payload() {
		let mut body = valid_body();
		body["status"] = json!("pending");
		let err = OrderValidator::validate_update(
			"5",
			&payload(body),
			&existing(OrderStatus::Delivered),
		)
		.unwrap_err();
		assert_eq!(err.to_string(), "A delivered order cannot be changed");
	}

	#[test]
	fn update_checks_payload_id_against_route_id() {
		let mut body = valid_body();
		body["status"] = json!("preparing");
		body["id"] = json!("9");
		let err =
			OrderValidator::validate_update("5", &payload(body), &existing(OrderStatus::Pending))
				.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Order id does not match route id. Order: 9, Route: 5."
		);

		// Matching, null, and empty payload ids all pass.
		for id in [json!("5"), serde_json::Value::Null, json!("")] {
			let mut body = valid_body();
			body["status"] = json!("preparing");
			body["id"] = id;
			let fields = OrderValidator::validate_update(
				"5",
				&payload(body),
				&existing(OrderStatus::Pending),
			)
			.unwrap();
			assert_eq!(fields.status, OrderStatus::Preparing);
		}
	}

	#[test]
	fn update_surfaces_only_the_first_failure() {
		// Both deliverTo and the dish quantity are bad; the field check runs
		// first and wins.
		let err = OrderValidator::validate_update(
			"5",
			&payload(json!({
				"mobileNumber": "555-0100",
				"dishes": [{ "quantity": 0 }],
				"status": "invalid"
			})),
			&existing(OrderStatus::Delivered),
		)
		.unwrap_err();
		assert_eq!(err, OrderApiError::MissingField { field: "deliverTo" });
	}
}
