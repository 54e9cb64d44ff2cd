//! Text content: bare text, paragraphs and headings

use std::borrow::Cow;

use kindling_core::{IntoNode, Leaf, Node};

use crate::error::{ElementError, Result};

/// Bare text. Renders as escaped text until attributes are attached.
pub fn text(content: impl Into<Cow<'static, str>>) -> Node {
	Leaf::text(content).into_node()
}

/// A `<p>` paragraph.
#[derive(Debug, Clone)]
pub struct Paragraph {
	content: Node,
	lead: bool,
}

impl Paragraph {
	/// Creates a paragraph around `content`.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
			lead: false,
		}
	}

	/// Renders the paragraph in the larger lead style.
	pub fn lead(mut self) -> Self {
		self.lead = true;
		self
	}
}

impl IntoNode for Paragraph {
	fn into_node(self) -> Node {
		let mut leaf = Leaf::element("p").kind("paragraph").child(self.content);
		if self.lead {
			leaf.bag_mut().add_class("lead");
		}
		leaf.into_node()
	}
}

/// Heading level, `<h1>` through `<h6>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
	/// `<h1>`
	H1,
	/// `<h2>`
	H2,
	/// `<h3>`
	H3,
	/// `<h4>`
	H4,
	/// `<h5>`
	H5,
	/// `<h6>`
	H6,
}

impl HeadingLevel {
	/// Tag name
	pub fn tag(&self) -> &'static str {
		match self {
			Self::H1 => "h1",
			Self::H2 => "h2",
			Self::H3 => "h3",
			Self::H4 => "h4",
			Self::H5 => "h5",
			Self::H6 => "h6",
		}
	}
}

impl TryFrom<u8> for HeadingLevel {
	type Error = ElementError;

	fn try_from(level: u8) -> Result<Self> {
		match level {
			1 => Ok(Self::H1),
			2 => Ok(Self::H2),
			3 => Ok(Self::H3),
			4 => Ok(Self::H4),
			5 => Ok(Self::H5),
			6 => Ok(Self::H6),
			other => Err(ElementError::InvalidHeadingLevel(other)),
		}
	}
}

/// A heading.
#[derive(Debug, Clone)]
pub struct Heading {
	level: HeadingLevel,
	content: Node,
}

impl Heading {
	/// Creates a heading at `level`.
	pub fn new(level: HeadingLevel, content: impl IntoNode) -> Self {
		Self {
			level,
			content: content.into_node(),
		}
	}

	/// Creates a heading from a numeric level.
	pub fn try_with_level(level: u8, content: impl IntoNode) -> Result<Self> {
		Ok(Self::new(HeadingLevel::try_from(level)?, content))
	}

	/// Heading level
	pub fn level(&self) -> HeadingLevel {
		self.level
	}
}

impl IntoNode for Heading {
	fn into_node(self) -> Node {
		Leaf::element(self.level.tag())
			.kind("heading")
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
	fn test_text_renders_bare() {
		assert_eq!(render(text("a < b")).unwrap(), "a &lt; b");
		assert_eq!(
			render(text("hi").class("x")).unwrap(),
			"<span class=\"x\">hi</span>"
		);
	}

	#[rstest]
	fn test_paragraph() {
		assert_eq!(render(Paragraph::new("Body")).unwrap(), "<p>Body</p>");
		assert_eq!(
			render(Paragraph::new("Intro").lead()).unwrap(),
			"<p class=\"lead\">Intro</p>"
		);
	}

	#[rstest]
	#[case(1, "<h1>Title</h1>")]
	#[case(3, "<h3>Title</h3>")]
	#[case(6, "<h6>Title</h6>")]
	fn test_heading_levels(#[case] level: u8, #[case] expected: &str) {
		let heading = Heading::try_with_level(level, "Title").unwrap();
		assert_eq!(render(heading).unwrap(), expected);
	}

	#[rstest]
	#[case(0)]
	#[case(7)]
	fn test_heading_level_out_of_range(#[case] level: u8) {
		assert_eq!(
			HeadingLevel::try_from(level),
			Err(ElementError::InvalidHeadingLevel(level))
		);
	}

	#[rstest]
	fn test_heading_kind_survives_erasure() {
		let node = Heading::new(HeadingLevel::H2, "x").erased();
		assert_eq!(node.leaf_kind(), Some("heading"));
	}
}
