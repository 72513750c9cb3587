//! Error taxonomy for validation and operation failures.
//!
//! Every failure in the core resolves to one of these kinds. The pipeline
//! surfaces only the first failing check, and nothing here is fatal or
//! retryable; the transport layer renders the kind into a protocol response
//! using `status_code`.

use thiserror::Error;

/// Errors produced by the validation pipeline and the order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderApiError {
	/// A required field is absent or empty.
	#[error("Order must include a {field}")]
	MissingField { field: &'static str },
	/// A field is present but semantically invalid; the detail carries
	/// context such as the offending dish index.
	#[error("{detail}")]
	InvalidField { field: &'static str, detail: String },
	/// No order with the given identifier exists.
	#[error("No matching order found: {0}")]
	NotFound(String),
	/// The request is well-formed but violates a state invariant.
	#[error("{0}")]
	Conflict(String),
}

impl OrderApiError {
	/// Status-like code for the transport layer to render.
	pub fn status_code(&self) -> u16 {
		match self {
			OrderApiError::NotFound(_) => 404,
			OrderApiError::MissingField { .. }
			| OrderApiError::InvalidField { .. }
			| OrderApiError::Conflict(_) => 400,
		}
	}
}
