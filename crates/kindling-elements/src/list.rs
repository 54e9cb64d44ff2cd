//! Ordered and unordered lists
//!
//! Content given to a [`List`] is flattened first. Leaves that are already
//! list items ([`ListItem`], or anything built with `Leaf::list_item(true)`)
//! are used as they are; everything else is wrapped in exactly one `<li>`.

use std::fmt::Write as _;

use kindling_core::{IntoNode, Leaf, Node, flatten_list_items};

/// Presentation of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
	/// Browser default list (default)
	#[default]
	Plain,
	/// Bordered list group
	Group,
	/// List group without outer borders, for use inside cards
	FlushGroup,
}

/// Marker drawn before each item
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListMarker {
	/// Browser default for the list type (default)
	#[default]
	Automatic,
	/// No marker
	Hidden,
	/// Filled circle
	Disc,
	/// Hollow circle
	Circle,
	/// Filled square
	Square,
	/// 1. 2. 3.
	Decimal,
	/// a. b. c.
	LowerAlpha,
	/// A. B. C.
	UpperAlpha,
	/// i. ii. iii.
	LowerRoman,
	/// I. II. III.
	UpperRoman,
	/// Arbitrary symbol, e.g. an emoji
	Symbol(String),
}

impl ListMarker {
	/// Value for the CSS `list-style-type` property, `None` for the default
	pub fn css_value(&self) -> Option<String> {
		let value = match self {
			Self::Automatic => return None,
			Self::Hidden => "none",
			Self::Disc => "disc",
			Self::Circle => "circle",
			Self::Square => "square",
			Self::Decimal => "decimal",
			Self::LowerAlpha => "lower-alpha",
			Self::UpperAlpha => "upper-alpha",
			Self::LowerRoman => "lower-roman",
			Self::UpperRoman => "upper-roman",
			Self::Symbol(symbol) => {
				// Each character becomes a CSS hex escape.
				let mut escaped = String::from("'");
				for c in symbol.chars() {
					let _ = write!(escaped, "\\{:X}", c as u32);
				}
				escaped.push('\'');
				return Some(escaped);
			}
		};
		Some(value.to_string())
	}
}

/// A `<ul>` or `<ol>` list.
#[derive(Debug, Clone)]
pub struct List {
	content: Node,
	ordered: bool,
	list_style: ListStyle,
	marker: ListMarker,
}

impl List {
	/// Creates an unordered list.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
			ordered: false,
			list_style: ListStyle::default(),
			marker: ListMarker::default(),
		}
	}

	/// Numbers the items.
	pub fn ordered(mut self) -> Self {
		self.ordered = true;
		self
	}

	/// Sets the presentation.
	pub fn list_style(mut self, style: ListStyle) -> Self {
		self.list_style = style;
		self
	}

	/// Sets the item marker.
	pub fn marker(mut self, marker: ListMarker) -> Self {
		self.marker = marker;
		self
	}
}

impl IntoNode for List {
	fn into_node(self) -> Node {
		let grouped = self.list_style != ListStyle::Plain;
		let mut items = flatten_list_items(self.content, "li");
		tracing::trace!(items = items.len(), grouped, "building list");

		if grouped {
			for item in &mut items {
				item.bag_mut().add_class("list-group-item");
			}
		}

		let mut list = Leaf::element(if self.ordered { "ol" } else { "ul" })
			.kind("list")
			.children(items);
		let bag = list.bag_mut();
		if grouped {
			bag.add_class("list-group");
		}
		if self.list_style == ListStyle::FlushGroup {
			bag.add_class("list-group-flush");
		}
		if self.ordered && self.list_style == ListStyle::Group {
			bag.add_class("list-group-numbered");
		}
		if let Some(marker) = self.marker.css_value() {
			bag.add_style("list-style-type", marker);
		}
		list.into_node()
	}
}

/// An `<li>` that list contexts use directly instead of wrapping.
#[derive(Debug, Clone)]
pub struct ListItem {
	content: Node,
}

impl ListItem {
	/// Creates an item around `content`.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
		}
	}
}

impl IntoNode for ListItem {
	fn into_node(self) -> Node {
		Leaf::element("li")
			.kind("list-item")
			.list_item(true)
			.child(self.content)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kindling_core::{NodeExt, render};
	use rstest::rstest;

	#[rstest]
	fn test_plain_content_is_wrapped_once() {
		let list = List::new(("One", ListItem::new("Two")));
		assert_eq!(
			render(list).unwrap(),
			"<ul><li>One</li><li>Two</li></ul>"
		);
	}

	#[rstest]
	fn test_erased_list_item_is_not_rewrapped() {
		let list = List::new(ListItem::new("x").class("active").erased());
		assert_eq!(
			render(list).unwrap(),
			"<ul><li class=\"active\">x</li></ul>"
		);
	}

	#[rstest]
	fn test_group_style() {
		let list = List::new(["a", "b"]).list_style(ListStyle::Group);
		assert_eq!(
			render(list).unwrap(),
			"<ul class=\"list-group\"><li class=\"list-group-item\">a</li><li class=\"list-group-item\">b</li></ul>"
		);
	}

	#[rstest]
	fn test_ordered_group_is_numbered() {
		let list = List::new(["a"]).ordered().list_style(ListStyle::Group);
		assert_eq!(
			render(list).unwrap(),
			"<ol class=\"list-group list-group-numbered\"><li class=\"list-group-item\">a</li></ol>"
		);
	}

	#[rstest]
	fn test_flush_group() {
		let list = List::new(["a"]).list_style(ListStyle::FlushGroup);
		assert_eq!(
			render(list).unwrap(),
			"<ul class=\"list-group list-group-flush\"><li class=\"list-group-item\">a</li></ul>"
		);
	}

	#[rstest]
	#[case(ListMarker::Automatic, None)]
	#[case(ListMarker::Square, Some("square"))]
	#[case(ListMarker::UpperRoman, Some("upper-roman"))]
	#[case(ListMarker::Symbol("→".into()), Some("'\\2192'"))]
	fn test_marker_css_value(#[case] marker: ListMarker, #[case] expected: Option<&str>) {
		assert_eq!(marker.css_value().as_deref(), expected);
	}

	#[rstest]
	fn test_marker_style() {
		let list = List::new(["a"]).ordered().marker(ListMarker::LowerAlpha);
		assert_eq!(
			render(list).unwrap(),
			"<ol style=\"list-style-type: lower-alpha\"><li>a</li></ol>"
		);
	}
}
