//! Modifier application and type erasure.
//!
//! [`apply`] runs a modifier over a node and hoists the resulting attributes
//! onto a [`Node::Composite`] wrapper. [`erase`] hides a node behind a
//! [`Node::Erased`] wrapper. Neither loses attributes: whatever a wrapper
//! carries is pushed back onto the wrapped content when the tree is flattened.
//!
//! The [`NodeExt`] trait exposes both as fluent methods on anything that
//! converts into a node:
//!
//! ```
//! use kindling_core::{Leaf, NodeExt, render};
//!
//! let badge = Leaf::element("span")
//!     .class("badge")
//!     .erased()
//!     .class("badge-primary")
//!     .id("status");
//!
//! assert_eq!(
//!     render(badge).unwrap(),
//!     r#"<span id="status" class="badge badge-primary"></span>"#
//! );
//! ```

use crate::attributes::{Attribute, AttributeBag};
use crate::event::{Action, Event, EventType};
use crate::node::{Erased, IntoNode, Node};

/// A transformation of a node, typically adding attributes.
pub trait Modifier {
	/// Applies the modification.
	fn modify(self, node: Node) -> Node;
}

impl<F> Modifier for F
where
	F: FnOnce(Node) -> Node,
{
	fn modify(self, node: Node) -> Node {
		self(node)
	}
}

/// Merging a bag is the simplest modifier.
impl Modifier for AttributeBag {
	fn modify(self, node: Node) -> Node {
		node.modify_attributes(|bag| bag.merge_in(&self))
	}
}

/// Applies `modifier` to `node` and hoists the resulting attributes.
///
/// The modifier runs exactly once. If it returns nested composites they are
/// peeled until the first non-composite node, and the collected bags are merged
/// innermost first, so scalar values set by outer (later) modifiers win. The
/// result is a single composite whose content carries no top-level attributes.
pub fn apply(node: impl IntoNode, modifier: impl Modifier) -> Node {
	let mut content = modifier.modify(node.into_node());

	let mut wrappers = Vec::new();
	while let Node::Composite { inner, attributes } = content {
		wrappers.push(attributes);
		content = *inner;
	}

	let mut attributes = content.take_bag();
	for bag in wrappers.iter().rev() {
		attributes.merge_in(bag);
	}

	Node::Composite {
		inner: Box::new(content),
		attributes,
	}
}

/// Hides `node` behind a type-erasing wrapper.
///
/// The node's top-level attributes move onto the wrapper. Erasing an already
/// erased node removes the old wrapper first, so erasure never nests.
pub fn erase(node: impl IntoNode) -> Node {
	let mut inner = match node.into_node() {
		Node::Erased(erased) => erased.into_inner(),
		other => other,
	};
	let attributes = inner.take_bag();
	Node::Erased(Erased {
		inner: Box::new(inner),
		attributes,
	})
}

/// Fluent modifiers for anything convertible into a [`Node`].
///
/// Every method is an [`apply`] call, so the attributes it records survive
/// later erasure and are merged onto the underlying leaf when rendered.
pub trait NodeExt: IntoNode + Sized {
	/// Applies an arbitrary modifier.
	fn modifier(self, modifier: impl Modifier) -> Node {
		apply(self, modifier)
	}

	/// Edits the top-level attribute bag through [`apply`].
	fn modify_bag(self, f: impl FnOnce(&mut AttributeBag)) -> Node {
		apply(self, move |node: Node| node.modify_attributes(f))
	}

	/// Hides the concrete shape behind an erased wrapper.
	fn erased(self) -> Node {
		erase(self)
	}

	/// Adds a class.
	fn class(self, class: impl Into<String>) -> Node {
		self.modify_bag(|bag| bag.add_class(class))
	}

	/// Adds several classes.
	fn classes<I, S>(self, classes: I) -> Node
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.modify_bag(|bag| {
			for class in classes {
				bag.add_class(class);
			}
		})
	}

	/// Sets the element id. The last id applied wins.
	fn id(self, id: impl Into<String>) -> Node {
		self.modify_bag(|bag| bag.set_id(id))
	}

	/// Adds an inline style declaration.
	fn style(self, property: impl Into<String>, value: impl Into<String>) -> Node {
		self.modify_bag(|bag| bag.add_style(property, value))
	}

	/// Adds an `aria-*` attribute.
	///
	/// # Panics
	///
	/// Panics if `key` is not a valid attribute name.
	fn aria(self, key: impl Into<String>, value: impl Into<String>) -> Node {
		self.modify_bag(|bag| bag.add_aria(key, value))
	}

	/// Adds a `data-*` attribute.
	///
	/// # Panics
	///
	/// Panics if `key` is not a valid attribute name.
	fn data(self, key: impl Into<String>, value: impl Into<String>) -> Node {
		self.modify_bag(|bag| bag.add_data(key, value))
	}

	/// Adds a custom `name="value"` attribute.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid attribute name.
	fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Node {
		let attribute = Attribute::new(name, Some(value));
		self.modify_bag(|bag| bag.add_attribute(attribute))
	}

	/// Adds a bare boolean attribute such as `disabled` when `enabled` is true.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid attribute name.
	fn bool_attr(self, name: impl Into<String>, enabled: bool) -> Node {
		let attribute = Attribute::new(name, None::<String>);
		self.modify_bag(|bag| {
			if enabled {
				bag.add_attribute(attribute);
			}
		})
	}

	/// Sets the ARIA `role` attribute.
	fn role(self, role: impl Into<String>) -> Node {
		self.attr("role", role)
	}

	/// Binds actions to an event.
	fn on(self, kind: EventType, actions: impl IntoIterator<Item = Action>) -> Node {
		let event = Event::new(kind, actions);
		self.modify_bag(|bag| bag.add_event(event))
	}

	/// Replaces the element's tag.
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	fn tag(self, tag: impl Into<String>) -> Node {
		let tag = tag.into();
		self.modify_bag(|bag| bag.try_set_tag(tag).unwrap_or_else(|e| panic!("{e}")))
	}

	/// Replaces the closing tag only.
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	fn closing_tag(self, tag: impl Into<String>) -> Node {
		let tag = tag.into();
		self.modify_bag(|bag| {
			bag.try_set_closing_tag(tag)
				.unwrap_or_else(|e| panic!("{e}"))
		})
	}

	/// Renders the element as a single self-closing tag. Rendering fails if the
	/// element has content.
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	fn self_closing_tag(self, tag: impl Into<String>) -> Node {
		let tag = tag.into();
		self.modify_bag(|bag| {
			bag.try_set_self_closing_tag(tag)
				.unwrap_or_else(|e| panic!("{e}"))
		})
	}
}

impl<T: IntoNode> NodeExt for T {}
