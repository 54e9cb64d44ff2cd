//! Images and dividers

use kindling_core::{AttributeBag, IntoNode, Leaf, Node};

use crate::error::{ElementError, Result};

/// An `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
	src: String,
	alt: String,
	lazy: bool,
	fluid: bool,
}

impl Image {
	/// Creates an image with a text description.
	pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			alt: alt.into(),
			lazy: false,
			fluid: false,
		}
	}

	/// Creates an image, rejecting an empty source.
	pub fn try_new(src: impl Into<String>, alt: impl Into<String>) -> Result<Self> {
		let image = Self::new(src, alt);
		if image.src.is_empty() {
			return Err(ElementError::MissingProperty("src"));
		}
		Ok(image)
	}

	/// Creates an image that assistive technology should skip.
	pub fn decorative(src: impl Into<String>) -> Self {
		Self::new(src, "")
	}

	/// Defers loading until the image nears the viewport.
	pub fn lazy(mut self) -> Self {
		self.lazy = true;
		self
	}

	/// Scales the image with its container.
	pub fn resizable(mut self) -> Self {
		self.fluid = true;
		self
	}
}

impl IntoNode for Image {
	fn into_node(self) -> Node {
		let mut bag = AttributeBag::new()
			.with_attribute("src", self.src)
			.with_attribute("alt", self.alt);
		if self.lazy {
			bag = bag.with_attribute("loading", "lazy");
		}
		if self.fluid {
			bag.add_class("img-fluid");
		}
		Leaf::element("img")
			.kind("image")
			.attributes(bag)
			.into_node()
	}
}

/// A horizontal rule.
pub fn divider() -> Node {
	Leaf::element("hr").kind("divider").into_node()
}

#[cfg(test)]
mod tests {
	use super::*;
	use kindling_core::render;
	use rstest::rstest;

	#[rstest]
	fn test_image() {
		assert_eq!(
			render(Image::new("/a.png", "A cat").lazy().resizable()).unwrap(),
			"<img src=\"/a.png\" alt=\"A cat\" loading=\"lazy\" class=\"img-fluid\" />"
		);
	}

	#[rstest]
	fn test_decorative_image_has_empty_alt() {
		assert_eq!(
			render(Image::decorative("/bg.png")).unwrap(),
			"<img src=\"/bg.png\" alt=\"\" />"
		);
	}

	#[rstest]
	fn test_image_requires_src() {
		assert_eq!(
			Image::try_new("", "x"),
			Err(ElementError::MissingProperty("src"))
		);
	}

	#[rstest]
	fn test_divider() {
		assert_eq!(render(divider()).unwrap(), "<hr />");
		assert_eq!(divider().leaf_kind(), Some("divider"));
	}
}
