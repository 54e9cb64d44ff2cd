//! Reduction of composed content to a flat list of leaves.
//!
//! Flattening removes every structural variant from a tree level: sequences
//! are concatenated, conditionals replaced by their selected content, and
//! wrapper and container attributes pushed down onto the leaves they apply to.
//! Leaf children are not touched; the renderer flattens them when it descends.

use crate::attributes::AttributeBag;
use crate::node::{IntoNode, Leaf, Node};

/// Flattens `node` into its leaves, in document order.
///
/// | Variant | Result |
/// |---------|--------|
/// | `Leaf` | itself |
/// | `Sequence` | each element flattened, concatenated |
/// | `Conditional` | the selected content flattened |
/// | `Erased` | the unwrapped node flattened |
/// | `Transparent` | children flattened, each leaf merged with the container's bag |
/// | `Composite` | the inner node with the wrapper's bag merged in, flattened |
/// | `Empty` | nothing |
pub fn flatten(node: impl IntoNode) -> Vec<Leaf> {
	let mut leaves = Vec::new();
	flatten_into(node.into_node(), &mut leaves);
	tracing::trace!(leaves = leaves.len(), "flattened node");
	leaves
}

fn flatten_into(node: Node, out: &mut Vec<Leaf>) {
	match node {
		Node::Leaf(leaf) => out.push(leaf),
		Node::Sequence(nodes) => {
			for node in nodes {
				flatten_into(node, out);
			}
		}
		Node::Conditional { content, .. } => flatten_into(*content, out),
		Node::Erased(erased) => flatten_into(erased.into_inner(), out),
		Node::Transparent {
			children,
			attributes,
		} => {
			let start = out.len();
			for child in children {
				flatten_into(child, out);
			}
			if !attributes.is_empty() {
				merge_into_all(&mut out[start..], &attributes);
			}
		}
		Node::Composite { inner, attributes } => {
			flatten_into((*inner).merge_attributes(attributes), out)
		}
		Node::Empty => {}
	}
}

/// Flattens `node` for a list context.
///
/// Leaves marked as list items are kept as they are. Every other leaf is
/// wrapped in exactly one `item_tag` element, which is itself a list item.
pub fn flatten_list_items(node: impl IntoNode, item_tag: &'static str) -> Vec<Leaf> {
	flatten(node)
		.into_iter()
		.map(|leaf| {
			if leaf.is_list_item() {
				leaf
			} else {
				Leaf::element(item_tag)
					.kind("list-item")
					.list_item(true)
					.child(leaf)
			}
		})
		.collect()
}

/// Merges `bag` into every leaf of `leaves`.
pub fn merge_into_all(leaves: &mut [Leaf], bag: &AttributeBag) {
	for leaf in leaves {
		leaf.bag_mut().merge_in(bag);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::modifier::NodeExt;
	use rstest::rstest;

	fn classes(leaf: &Leaf) -> Vec<&str> {
		leaf.bag().classes().collect()
	}

	#[rstest]
	fn test_flatten_leaf() {
		let leaves = flatten(Leaf::element("p"));
		assert_eq!(leaves.len(), 1);
		assert_eq!(leaves[0].default_tag(), "p");
	}

	#[rstest]
	fn test_flatten_preserves_order_across_nesting() {
		let node = (
			Leaf::element("a"),
			vec![Leaf::element("b"), Leaf::element("c")],
			Node::when(true, || (Leaf::element("d"), Node::Empty)),
			Leaf::element("e"),
		);
		let tags = flatten(node)
			.iter()
			.map(|leaf| leaf.default_tag().to_string())
			.collect::<Vec<_>>();
		assert_eq!(tags, vec!["a", "b", "c", "d", "e"]);
	}

	#[rstest]
	fn test_flatten_empty() {
		assert!(flatten(Node::Empty).is_empty());
		assert!(flatten(()).is_empty());
		assert!(flatten(Node::when(false, || "x")).is_empty());
	}

	#[rstest]
	fn test_flatten_transparent_pushes_bag_to_each_leaf() {
		let group = Node::transparent([Leaf::element("a"), Leaf::element("b")]).class("shared");
		let leaves = flatten(group);
		assert_eq!(leaves.len(), 2);
		for leaf in &leaves {
			assert_eq!(classes(leaf), vec!["shared"]);
		}
	}

	#[rstest]
	fn test_flatten_composite_wrapper_wins_scalars() {
		let leaf = Leaf::element("p").attributes(AttributeBag::new().with_id("inner"));
		let leaves = flatten(leaf.id("outer"));
		assert_eq!(leaves[0].bag().id(), Some("outer"));
	}

	#[rstest]
	fn test_flatten_is_idempotent_on_flat_list() {
		let once = flatten(Node::transparent(["x", "y"]).class("c"));
		let twice = flatten(once.clone());
		assert_eq!(once, twice);
	}

	#[rstest]
	fn test_flatten_list_items_wraps_plain_content() {
		let leaves = flatten_list_items(
			(
				"plain",
				Leaf::element("li").list_item(true).child("item"),
			),
			"li",
		);
		assert_eq!(leaves.len(), 2);
		assert!(leaves.iter().all(Leaf::is_list_item));
		assert_eq!(leaves[0].default_tag(), "li");
		assert_eq!(leaves[0].kind_name(), "list-item");
		match leaves[0].body() {
			crate::node::LeafBody::Children(children) => {
				assert_eq!(children.len(), 1);
				assert_eq!(children[0].leaf_kind(), Some("text"));
			}
			other => panic!("expected children, got {other:?}"),
		}
	}

	#[rstest]
	fn test_merge_into_all() {
		let mut leaves = flatten(("a", "b"));
		merge_into_all(&mut leaves, &AttributeBag::new().with_class("x"));
		assert!(leaves.iter().all(|leaf| leaf.bag().has_class("x")));
	}
}
