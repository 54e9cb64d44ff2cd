//! Identity-keyed side store for attributes attached after construction.
//!
//! Once a node is erased or buried inside a container its attribute bag can no
//! longer be reached through the value itself. Callers instead record extra
//! attributes here under the node's [`NodeId`]; the renderer merges them into
//! the leaf's own bag when it serializes that leaf.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::attributes::AttributeBag;

/// Global counter for leaf identities.
static NODE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stable identity token of a leaf.
///
/// Every leaf draws a fresh id from a process-wide counter when it is
/// constructed. Clones share the id of the value they were cloned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
	/// Allocates the next identity.
	pub fn next() -> Self {
		Self(NODE_COUNTER.fetch_add(1, Ordering::Relaxed))
	}

	/// Raw counter value
	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "kn-{}", self.0)
	}
}

/// Mapping from leaf identity to extra attributes, scoped to one render pass.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
	entries: HashMap<NodeId, AttributeBag>,
}

impl AttributeStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Unions `bag` into the entry for `id`, creating the entry if needed.
	pub fn merge(&mut self, bag: &AttributeBag, id: NodeId) {
		tracing::trace!(node = %id, "merging attributes into side store");
		self.entries.entry(id).or_default().merge_in(bag);
	}

	/// Merges `bag` into the entry for `id`, then removes `classes` from it.
	pub fn merge_removing_classes<'a>(
		&mut self,
		bag: &AttributeBag,
		id: NodeId,
		classes: impl IntoIterator<Item = &'a str>,
	) {
		self.merge(bag, id);
		if let Some(entry) = self.entries.get_mut(&id) {
			for class in classes {
				entry.remove_class(class);
			}
		}
	}

	/// Merges `bag` into the entry for `id`, then removes every declaration for
	/// each of `properties`.
	pub fn merge_removing_styles<'a>(
		&mut self,
		bag: &AttributeBag,
		id: NodeId,
		properties: impl IntoIterator<Item = &'a str>,
	) {
		self.merge(bag, id);
		if let Some(entry) = self.entries.get_mut(&id) {
			for property in properties {
				entry.remove_style(property);
			}
		}
	}

	/// Returns the stored bag for `id`, or an empty bag.
	pub fn get(&self, id: NodeId) -> AttributeBag {
		self.entries.get(&id).cloned().unwrap_or_default()
	}

	/// Borrowing lookup.
	pub fn get_ref(&self, id: NodeId) -> Option<&AttributeBag> {
		self.entries.get(&id)
	}

	/// Returns `true` if an entry exists for `id`.
	pub fn contains(&self, id: NodeId) -> bool {
		self.entries.contains_key(&id)
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the store has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Drops every entry.
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}
