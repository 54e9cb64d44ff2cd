//! Document tree nodes.
//!
//! A document is a tree of [`Node`] values. Only [`Leaf`] nodes correspond to
//! HTML elements; every other variant describes how leaves are grouped, wrapped
//! or selected and disappears during [flattening](crate::flatten).
//!
//! ## Example
//!
//! ```
//! use kindling_core::{Leaf, Node, render};
//!
//! let page = Leaf::element("main").child((
//!     Leaf::element("h1").child("Welcome"),
//!     Node::when(true, || "Signed in"),
//! ));
//!
//! assert_eq!(
//!     render(page).unwrap(),
//!     "<main><h1>Welcome</h1>Signed in</main>"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::attributes::AttributeBag;
use crate::error::MarkupError;
use crate::store::{AttributeStore, NodeId};
use crate::util::{is_void_element, validate_tag_name};

/// Children-producing logic run by the renderer with access to the side store.
pub type DeferredBody = Arc<dyn Fn(&mut AttributeStore) -> Node + Send + Sync>;

/// Content of a [`Leaf`].
#[derive(Clone)]
pub enum LeafBody {
	/// Escaped text
	Text(Cow<'static, str>),
	/// Child nodes
	Children(Vec<Node>),
	/// No content and no closing tag
	Void,
	/// Children computed at render time
	Deferred(DeferredBody),
}

impl fmt::Debug for LeafBody {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Children(children) => f.debug_tuple("Children").field(children).finish(),
			Self::Void => f.write_str("Void"),
			Self::Deferred(_) => f.write_str("Deferred(..)"),
		}
	}
}

impl PartialEq for LeafBody {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) => a == b,
			(Self::Children(a), Self::Children(b)) => a == b,
			(Self::Void, Self::Void) => true,
			(Self::Deferred(a), Self::Deferred(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

/// A concrete renderable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
	id: NodeId,
	kind: &'static str,
	tag: Cow<'static, str>,
	attributes: AttributeBag,
	body: LeafBody,
	list_item: bool,
}

impl Leaf {
	fn with_body(kind: &'static str, tag: Cow<'static, str>, body: LeafBody) -> Self {
		Self {
			id: NodeId::next(),
			kind,
			tag,
			attributes: AttributeBag::new(),
			body,
			list_item: false,
		}
	}

	/// Creates an element leaf. Void tags (`img`, `br`, ...) get a void body.
	pub fn try_element(tag: impl Into<Cow<'static, str>>) -> Result<Self, MarkupError> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		let body = if is_void_element(&tag) {
			LeafBody::Void
		} else {
			LeafBody::Children(Vec::new())
		};
		Ok(Self::with_body("element", tag, body))
	}

	/// Creates an element leaf.
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name. Use [`Leaf::try_element`] for
	/// fallible construction.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> Self {
		Self::try_element(tag).unwrap_or_else(|e| panic!("{e}"))
	}

	/// Creates a text leaf. It renders as bare escaped text until it carries
	/// attributes, then inside a `<span>`.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::with_body("text", Cow::Borrowed("span"), LeafBody::Text(text.into()))
	}

	/// Creates a leaf whose children are produced while rendering.
	///
	/// The closure receives the pass's side store, so it can attach attributes
	/// to the children it returns by identity.
	pub fn try_deferred<F>(tag: impl Into<Cow<'static, str>>, body: F) -> Result<Self, MarkupError>
	where
		F: Fn(&mut AttributeStore) -> Node + Send + Sync + 'static,
	{
		let tag = tag.into();
		validate_tag_name(&tag)?;
		Ok(Self::with_body("element", tag, LeafBody::Deferred(Arc::new(body))))
	}

	/// Creates a leaf whose children are produced while rendering.
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name. Use [`Leaf::try_deferred`] for
	/// fallible construction.
	pub fn deferred<F>(tag: impl Into<Cow<'static, str>>, body: F) -> Self
	where
		F: Fn(&mut AttributeStore) -> Node + Send + Sync + 'static,
	{
		Self::try_deferred(tag, body).unwrap_or_else(|e| panic!("{e}"))
	}

	/// Sets the kind name reported by [`Node::leaf_kind`].
	pub fn kind(mut self, kind: &'static str) -> Self {
		self.kind = kind;
		self
	}

	/// Marks the leaf as usable directly inside a list, so list contexts do not
	/// wrap it in another item element.
	pub fn list_item(mut self, capable: bool) -> Self {
		self.list_item = capable;
		self
	}

	/// Merges `attributes` into the leaf's own bag.
	pub fn attributes(mut self, attributes: AttributeBag) -> Self {
		self.attributes.merge_in(&attributes);
		self
	}

	/// Adds a child node.
	pub fn try_child(mut self, child: impl IntoNode) -> Result<Self, MarkupError> {
		match &mut self.body {
			LeafBody::Children(children) => {
				children.push(child.into_node());
				Ok(self)
			}
			_ => Err(MarkupError::ChildOfLeaf {
				tag: self.tag.to_string(),
			}),
		}
	}

	/// Adds a child node.
	///
	/// # Panics
	///
	/// Panics if the leaf is void, text or deferred.
	pub fn child(self, child: impl IntoNode) -> Self {
		self.try_child(child).unwrap_or_else(|e| panic!("{e}"))
	}

	/// Adds several child nodes.
	pub fn try_children(
		self,
		children: impl IntoIterator<Item = impl IntoNode>,
	) -> Result<Self, MarkupError> {
		children
			.into_iter()
			.try_fold(self, |leaf, child| leaf.try_child(child))
	}

	/// Adds several child nodes.
	///
	/// # Panics
	///
	/// Panics if the leaf is void, text or deferred.
	pub fn children(self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.try_children(children)
			.unwrap_or_else(|e| panic!("{e}"))
	}

	/// Identity token
	pub fn identity(&self) -> NodeId {
		self.id
	}

	/// Kind name, `"element"` or `"text"` unless overridden
	pub fn kind_name(&self) -> &'static str {
		self.kind
	}

	/// Tag used when no override is set
	pub fn default_tag(&self) -> &str {
		&self.tag
	}

	/// Own attribute bag
	pub fn bag(&self) -> &AttributeBag {
		&self.attributes
	}

	/// Mutable access to the own attribute bag
	pub fn bag_mut(&mut self) -> &mut AttributeBag {
		&mut self.attributes
	}

	/// Content
	pub fn body(&self) -> &LeafBody {
		&self.body
	}

	/// Returns `true` for void elements.
	pub fn is_void(&self) -> bool {
		matches!(self.body, LeafBody::Void)
	}

	/// Returns `true` for text leaves.
	pub fn is_text(&self) -> bool {
		matches!(self.body, LeafBody::Text(_))
	}

	/// Returns `true` if list contexts use the leaf as an item directly.
	pub fn is_list_item(&self) -> bool {
		self.list_item
	}

	pub(crate) fn into_parts(self) -> (Cow<'static, str>, AttributeBag, LeafBody) {
		(self.tag, self.attributes, self.body)
	}
}

/// Which alternative of a conditional was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
	/// The condition held
	Then,
	/// The condition did not hold
	Else,
}

/// A node whose concrete shape is hidden behind a uniform wrapper.
///
/// The wrapper carries its own bag; it is merged into the inner node's bag
/// when the wrapper is removed, never discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Erased {
	pub(crate) inner: Box<Node>,
	pub(crate) attributes: AttributeBag,
}

impl Erased {
	/// The wrapped node, without the wrapper's attributes.
	pub fn inner(&self) -> &Node {
		&self.inner
	}

	/// Attributes recorded on the wrapper
	pub fn bag(&self) -> &AttributeBag {
		&self.attributes
	}

	/// Removes the wrapper, merging its attributes into the inner node.
	pub fn into_inner(self) -> Node {
		(*self.inner).merge_attributes(self.attributes)
	}
}

/// A document tree node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
	/// A concrete element or text
	Leaf(Leaf),
	/// A node plus attributes hoisted by a modifier
	Composite {
		/// Attribute-cleared content
		inner: Box<Node>,
		/// Hoisted attributes
		attributes: AttributeBag,
	},
	/// A node behind a type-erasing wrapper
	Erased(Erased),
	/// Nodes rendered one after another
	Sequence(Vec<Node>),
	/// The selected alternative of a condition
	Conditional {
		/// Which alternative was taken
		branch: Branch,
		/// Content of that alternative
		content: Box<Node>,
	},
	/// Children that each receive the container's attributes; renders no tag
	Transparent {
		/// Grouped children
		children: Vec<Node>,
		/// Attributes pushed onto every resolved child
		attributes: AttributeBag,
	},
	/// No content
	#[default]
	Empty,
}

impl Node {
	/// Groups nodes into a sequence.
	pub fn sequence(nodes: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Sequence(nodes.into_iter().map(IntoNode::into_node).collect())
	}

	/// Groups nodes into a transparent container.
	pub fn transparent(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Node::Transparent {
			children: children.into_iter().map(IntoNode::into_node).collect(),
			attributes: AttributeBag::new(),
		}
	}

	/// Selects between two alternatives. Only the selected closure runs.
	pub fn either<A, B>(condition: bool, then: impl FnOnce() -> A, otherwise: impl FnOnce() -> B) -> Self
	where
		A: IntoNode,
		B: IntoNode,
	{
		let (branch, content) = if condition {
			(Branch::Then, then().into_node())
		} else {
			(Branch::Else, otherwise().into_node())
		};
		Node::Conditional {
			branch,
			content: Box::new(content),
		}
	}

	/// Includes content only when `condition` holds.
	pub fn when<A: IntoNode>(condition: bool, then: impl FnOnce() -> A) -> Self {
		Node::either(condition, then, || Node::Empty)
	}

	/// The bag attached at the top of this node, if the variant carries one.
	pub fn bag(&self) -> Option<&AttributeBag> {
		match self {
			Node::Leaf(leaf) => Some(&leaf.attributes),
			Node::Composite { attributes, .. } | Node::Transparent { attributes, .. } => {
				Some(attributes)
			}
			Node::Erased(erased) => Some(&erased.attributes),
			Node::Sequence(_) | Node::Conditional { .. } | Node::Empty => None,
		}
	}

	/// Moves the top-level bag out, leaving an empty one in place.
	///
	/// Variants without a bag yield an empty bag.
	pub fn take_bag(&mut self) -> AttributeBag {
		match self {
			Node::Leaf(leaf) => leaf.attributes.take(),
			Node::Composite { attributes, .. } | Node::Transparent { attributes, .. } => {
				attributes.take()
			}
			Node::Erased(erased) => erased.attributes.take(),
			Node::Sequence(_) | Node::Conditional { .. } | Node::Empty => AttributeBag::new(),
		}
	}

	/// Pushes `bag` down onto the node. `bag` is treated as applied later, so
	/// its scalar values win.
	///
	/// Sequences pass the bag to every element and conditionals to their
	/// content. Merging into [`Node::Empty`] drops the bag.
	pub fn merge_attributes(self, bag: AttributeBag) -> Node {
		if bag.is_empty() {
			return self;
		}
		match self {
			Node::Leaf(mut leaf) => {
				leaf.attributes.merge_in(&bag);
				Node::Leaf(leaf)
			}
			Node::Composite {
				inner,
				mut attributes,
			} => {
				attributes.merge_in(&bag);
				Node::Composite { inner, attributes }
			}
			Node::Erased(mut erased) => {
				erased.attributes.merge_in(&bag);
				Node::Erased(erased)
			}
			Node::Transparent {
				children,
				mut attributes,
			} => {
				attributes.merge_in(&bag);
				Node::Transparent {
					children,
					attributes,
				}
			}
			Node::Sequence(nodes) => Node::Sequence(
				nodes
					.into_iter()
					.map(|node| node.merge_attributes(bag.clone()))
					.collect(),
			),
			Node::Conditional { branch, content } => Node::Conditional {
				branch,
				content: Box::new((*content).merge_attributes(bag)),
			},
			Node::Empty => Node::Empty,
		}
	}

	/// Edits the top-level bag. Variants without one are wrapped in a
	/// [`Node::Composite`] holding the edited bag.
	pub fn modify_attributes(self, f: impl FnOnce(&mut AttributeBag)) -> Node {
		match self {
			Node::Leaf(mut leaf) => {
				f(&mut leaf.attributes);
				Node::Leaf(leaf)
			}
			Node::Composite {
				inner,
				mut attributes,
			} => {
				f(&mut attributes);
				Node::Composite { inner, attributes }
			}
			Node::Erased(mut erased) => {
				f(&mut erased.attributes);
				Node::Erased(erased)
			}
			Node::Transparent {
				children,
				mut attributes,
			} => {
				f(&mut attributes);
				Node::Transparent {
					children,
					attributes,
				}
			}
			other @ (Node::Sequence(_) | Node::Conditional { .. } | Node::Empty) => {
				let mut attributes = AttributeBag::new();
				f(&mut attributes);
				Node::Composite {
					inner: Box::new(other),
					attributes,
				}
			}
		}
	}

	/// Identity of the single leaf beneath any wrappers.
	///
	/// Returns `None` for empty content and for containers holding more than one
	/// node.
	pub fn identity(&self) -> Option<NodeId> {
		self.single_leaf().map(Leaf::identity)
	}

	/// Kind name of the single leaf beneath any wrappers.
	pub fn leaf_kind(&self) -> Option<&'static str> {
		self.single_leaf().map(Leaf::kind_name)
	}

	fn single_leaf(&self) -> Option<&Leaf> {
		match self {
			Node::Leaf(leaf) => Some(leaf),
			Node::Composite { inner, .. } => inner.single_leaf(),
			Node::Erased(erased) => erased.inner.single_leaf(),
			Node::Conditional { content, .. } => content.single_leaf(),
			Node::Sequence(nodes) | Node::Transparent { children: nodes, .. } => match nodes.as_slice() {
				[only] => only.single_leaf(),
				_ => None,
			},
			Node::Empty => None,
		}
	}

	/// Returns `true` if the node flattens to no leaves at all.
	pub fn is_empty_content(&self) -> bool {
		match self {
			Node::Leaf(_) => false,
			Node::Composite { inner, .. } => inner.is_empty_content(),
			Node::Erased(erased) => erased.inner.is_empty_content(),
			Node::Conditional { content, .. } => content.is_empty_content(),
			Node::Sequence(nodes) | Node::Transparent { children: nodes, .. } => {
				nodes.iter().all(Node::is_empty_content)
			}
			Node::Empty => true,
		}
	}
}

impl From<Leaf> for Node {
	fn from(leaf: Leaf) -> Self {
		Node::Leaf(leaf)
	}
}

/// Trait for types that can be converted into a [`Node`].
///
/// Anything implementing it can be used as child content: strings, options,
/// vectors, arrays and tuples of other content, or the unit value for nothing.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Leaf {
	fn into_node(self) -> Node {
		Node::Leaf(self)
	}
}

impl IntoNode for Erased {
	fn into_node(self) -> Node {
		Node::Erased(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Leaf(Leaf::text(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Leaf(Leaf::text(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Leaf(Leaf::text(self))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Leaf(Leaf::text(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::sequence(self)
	}
}

impl<T: IntoNode, const N: usize> IntoNode for [T; N] {
	fn into_node(self) -> Node {
		Node::sequence(self)
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

macro_rules! impl_into_node_for_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoNode),+> IntoNode for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_node(self) -> Node {
				let ($($name,)+) = self;
				Node::Sequence(vec![$($name.into_node()),+])
			}
		}
	};
}

impl_into_node_for_tuple!(A);
impl_into_node_for_tuple!(A, B);
impl_into_node_for_tuple!(A, B, C);
impl_into_node_for_tuple!(A, B, C, D);
impl_into_node_for_tuple!(A, B, C, D, E);
impl_into_node_for_tuple!(A, B, C, D, E, F);
impl_into_node_for_tuple!(A, B, C, D, E, F, G);
impl_into_node_for_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	fn test_element_creation() {
		let leaf = Leaf::element("div");
		assert_eq!(leaf.default_tag(), "div");
		assert_eq!(leaf.kind_name(), "element");
		assert!(!leaf.is_void());
		assert!(!leaf.is_list_item());
		assert!(leaf.bag().is_empty());
	}

	#[rstest]
	#[case("img")]
	#[case("br")]
	#[case("hr")]
	fn test_void_elements_detected(#[case] tag: &'static str) {
		assert!(Leaf::element(tag).is_void());
	}

	#[rstest]
	fn test_try_element_rejects_invalid_tag() {
		assert_eq!(
			Leaf::try_element("my tag"),
			Err(MarkupError::InvalidTagName("my tag".into()))
		);
	}

	#[rstest]
	fn test_child_of_void_is_rejected() {
		assert_eq!(
			Leaf::element("img").try_child("x"),
			Err(MarkupError::ChildOfLeaf { tag: "img".into() })
		);
		assert!(Leaf::text("a").try_child("b").is_err());
	}

	#[rstest]
	fn test_try_children_and_try_deferred() {
		assert_eq!(
			Leaf::element("hr").try_children(["a", "b"]),
			Err(MarkupError::ChildOfLeaf { tag: "hr".into() })
		);
		assert!(Leaf::element("ul").try_children(["a", "b"]).is_ok());
		assert_eq!(
			Leaf::try_deferred("bad tag", |_| Node::Empty).map(|leaf| leaf.kind_name()),
			Err(MarkupError::InvalidTagName("bad tag".into()))
		);
	}

	#[rstest]
	#[should_panic(expected = "<br> cannot contain children")]
	fn test_child_panics_on_void() {
		let _ = Leaf::element("br").child("x");
	}

	#[rstest]
	fn test_clone_keeps_identity() {
		let leaf = Leaf::element("p");
		let copy = leaf.clone();
		assert_eq!(leaf.identity(), copy.identity());
		assert_ne!(leaf.identity(), Leaf::element("p").identity());
	}

	#[rstest]
	fn test_either_evaluates_only_selected_branch() {
		let calls = Cell::new(0);
		let node = Node::either(
			false,
			|| {
				calls.set(calls.get() + 1);
				"then"
			},
			|| "else",
		);
		assert_eq!(calls.get(), 0);
		match node {
			Node::Conditional { branch, content } => {
				assert_eq!(branch, Branch::Else);
				assert_eq!(content.leaf_kind(), Some("text"));
			}
			other => panic!("expected conditional, got {other:?}"),
		}
	}

	#[rstest]
	fn test_when_false_is_empty_content() {
		assert!(Node::when(false, || "hidden").is_empty_content());
		assert!(!Node::when(true, || "shown").is_empty_content());
	}

	#[rstest]
	fn test_into_node_conversions() {
		assert_eq!(().into_node(), Node::Empty);
		assert_eq!(None::<&'static str>.into_node(), Node::Empty);
		assert!(matches!("hi".into_node(), Node::Leaf(ref leaf) if leaf.is_text()));
		match ("a", String::from("b"), Leaf::element("hr")).into_node() {
			Node::Sequence(nodes) => assert_eq!(nodes.len(), 3),
			other => panic!("expected sequence, got {other:?}"),
		}
		match vec!["x", "y"].into_node() {
			Node::Sequence(nodes) => assert_eq!(nodes.len(), 2),
			other => panic!("expected sequence, got {other:?}"),
		}
	}

	#[rstest]
	fn test_merge_attributes_into_sequence_reaches_every_element() {
		let node = Node::sequence([Leaf::element("a"), Leaf::element("b")])
			.merge_attributes(AttributeBag::new().with_class("x"));
		let Node::Sequence(nodes) = node else {
			panic!("expected sequence");
		};
		for node in nodes {
			assert!(node.bag().is_some_and(|bag| bag.has_class("x")));
		}
	}

	#[rstest]
	fn test_merge_attributes_into_empty_stays_empty() {
		assert_eq!(
			Node::Empty.merge_attributes(AttributeBag::new().with_class("x")),
			Node::Empty
		);
	}

	#[rstest]
	fn test_modify_attributes_wraps_bagless_nodes() {
		let node = Node::sequence(["a"]).modify_attributes(|bag| bag.add_class("c"));
		match node {
			Node::Composite { inner, attributes } => {
				assert!(attributes.has_class("c"));
				assert!(matches!(*inner, Node::Sequence(_)));
			}
			other => panic!("expected composite, got {other:?}"),
		}
	}

	#[rstest]
	fn test_identity_sees_through_wrappers() {
		let leaf = Leaf::element("p");
		let id = leaf.identity();
		let node = Node::Composite {
			inner: Box::new(Node::Erased(Erased {
				inner: Box::new(Node::when(true, || leaf)),
				attributes: AttributeBag::new(),
			})),
			attributes: AttributeBag::new(),
		};
		assert_eq!(node.identity(), Some(id));
		assert_eq!(node.leaf_kind(), Some("element"));
	}

	#[rstest]
	fn test_identity_of_multi_node_container_is_none() {
		assert_eq!(Node::sequence(["a", "b"]).identity(), None);
		assert_eq!(Node::Empty.identity(), None);
	}

	#[rstest]
	fn test_take_bag() {
		let mut node = Node::Leaf(Leaf::element("p").attributes(AttributeBag::new().with_id("x")));
		let bag = node.take_bag();
		assert_eq!(bag.id(), Some("x"));
		assert!(node.bag().is_some_and(AttributeBag::is_empty));
		assert!(Node::Empty.take_bag().is_empty());
	}
}
