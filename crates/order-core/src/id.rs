//! Id generation seam for the create operation.
//!
//! The store performs no uniqueness checks, so the generator carries the
//! uniqueness guarantee: every call must yield an identifier no other call
//! has produced. Production uses random UUIDs; tests usually inject the
//! sequential generator for stable ids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a unique opaque identifier per call.
pub trait IdGenerator: Send + Sync {
	fn next_id(&self) -> String;
}

/// UUID-v4 backed generator.
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
	fn next_id(&self) -> String {
		Uuid::new_v4().to_string()
	}
}

/// Counter-backed generator yielding "1", "2", ... in call order.
///
/// Unique only within a single instance; meant for tests and demos that
/// want predictable ids.
pub struct SequenceGenerator {
	next: AtomicU64,
}

impl SequenceGenerator {
	pub fn new() -> Self {
		Self {
			next: AtomicU64::new(1),
		}
	}
}

impl Default for SequenceGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl IdGenerator for SequenceGenerator {
	fn next_id(&self) -> String {
		self.next.fetch_add(1, Ordering::Relaxed).to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sequence_generator_counts_up() {
		let ids = SequenceGenerator::new();
		assert_eq!(ids.next_id(), "1");
		assert_eq!(ids.next_id(), "2");
		assert_eq!(ids.next_id(), "3");
	}

	#[test]
	fn uuid_generator_yields_distinct_ids() {
		let ids = UuidGenerator;
		assert_ne!(ids.next_id(), ids.next_id());
	}
}
