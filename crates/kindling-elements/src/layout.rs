//! Layout and structural elements
//!
//! [`Section`] and [`Stack`] render real elements. [`group`], [`for_each`],
//! [`when`], [`either`] and [`empty`] only shape content and never produce a
//! tag of their own.

use kindling_core::{AttributeBag, IntoNode, Leaf, Node, flatten, merge_into_all};

use crate::component::{Alignment, Spacing};

/// A `<section>` element.
#[derive(Debug, Clone)]
pub struct Section {
	content: Node,
}

impl Section {
	/// Creates a section around `content`.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
		}
	}
}

impl IntoNode for Section {
	fn into_node(self) -> Node {
		Leaf::element("section")
			.kind("section")
			.child(self.content)
			.into_node()
	}
}

/// Vertically stacked items.
///
/// Every item receives `mb-0` and an `align-self` style so spacing comes only
/// from the stack's gap. Items are flattened when the stack renders, so the
/// attributes reach items that were erased or wrapped before being handed to
/// the stack. Copies of an item rendered outside the stack are left alone.
#[derive(Debug, Clone)]
pub struct Stack {
	items: Node,
	alignment: Alignment,
	spacing: Option<Spacing>,
}

impl Stack {
	/// Creates a stack of `items`.
	pub fn new(items: impl IntoNode) -> Self {
		Self {
			items: items.into_node(),
			alignment: Alignment::default(),
			spacing: None,
		}
	}

	/// Sets the horizontal alignment of items.
	pub fn alignment(mut self, alignment: Alignment) -> Self {
		self.alignment = alignment;
		self
	}

	/// Sets the spacing between items.
	pub fn spacing(mut self, spacing: Spacing) -> Self {
		self.spacing = Some(spacing);
		self
	}

	fn container_attributes(&self) -> AttributeBag {
		let mut bag = AttributeBag::new().with_class("vstack");
		if let Some(align) = self.alignment.text_align() {
			bag.add_style("text-align", align);
		}
		match self.spacing {
			Some(Spacing::Scale(gap)) => bag.add_class(gap.class()),
			Some(Spacing::Pixels(px)) => bag.add_style("gap", format!("{px}px")),
			None => {}
		}
		bag
	}
}

impl IntoNode for Stack {
	fn into_node(self) -> Node {
		let container = self.container_attributes();
		let item_attributes = AttributeBag::new()
			.with_class("mb-0")
			.with_style("align-self", self.alignment.align_self());
		let items = self.items;

		Leaf::deferred("div", move |_| {
			let mut leaves = flatten(items.clone());
			tracing::trace!(items = leaves.len(), "applying stack item attributes");
			merge_into_all(&mut leaves, &item_attributes);
			Node::sequence(leaves)
		})
		.kind("stack")
		.attributes(container)
		.into_node()
	}
}

/// Groups content without adding an element. Attributes applied to the
/// group land on every item inside it.
pub fn group(content: impl IntoNode) -> Node {
	Node::transparent([content.into_node()])
}

/// Builds one node per item of `items`.
pub fn for_each<I, F, N>(items: I, mut build: F) -> Node
where
	I: IntoIterator,
	F: FnMut(I::Item) -> N,
	N: IntoNode,
{
	Node::Sequence(
		items
			.into_iter()
			.map(|item| build(item).into_node())
			.collect(),
	)
}

/// Content shown only when `condition` holds.
pub fn when<A: IntoNode>(condition: bool, content: impl FnOnce() -> A) -> Node {
	Node::when(condition, content)
}

/// One of two alternatives. Only the selected closure runs.
pub fn either<A, B>(condition: bool, then: impl FnOnce() -> A, otherwise: impl FnOnce() -> B) -> Node
where
	A: IntoNode,
	B: IntoNode,
{
	Node::either(condition, then, otherwise)
}

/// No content.
pub fn empty() -> Node {
	Node::Empty
}
