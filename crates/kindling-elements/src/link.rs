//! Hyperlinks

use kindling_core::{AttributeBag, IntoNode, Leaf, Node};

use crate::component::Variant;
use crate::error::{ElementError, Result};

/// An `<a href>` link.
#[derive(Debug, Clone)]
pub struct Link {
	href: String,
	content: Node,
	new_tab: bool,
	button: Option<Variant>,
}

impl Link {
	/// Creates a link to `href` around `content`.
	pub fn new(content: impl IntoNode, href: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			content: content.into_node(),
			new_tab: false,
			button: None,
		}
	}

	/// Creates a link, rejecting an empty target.
	pub fn try_new(content: impl IntoNode, href: impl Into<String>) -> Result<Self> {
		let link = Self::new(content, href);
		if link.href.is_empty() {
			return Err(ElementError::MissingProperty("href"));
		}
		Ok(link)
	}

	/// Opens the target in a new tab.
	pub fn target_blank(mut self) -> Self {
		self.new_tab = true;
		self
	}

	/// Styles the link as a button.
	pub fn button_style(mut self, variant: Variant) -> Self {
		self.button = Some(variant);
		self
	}

	/// Link target
	pub fn href(&self) -> &str {
		&self.href
	}
}

impl IntoNode for Link {
	fn into_node(self) -> Node {
		let mut bag = AttributeBag::new().with_attribute("href", self.href);
		if self.new_tab {
			bag = bag
				.with_attribute("target", "_blank")
				.with_attribute("rel", "noopener noreferrer");
		}
		if let Some(variant) = self.button {
			bag = bag.with_classes(["btn".to_string(), format!("btn-{variant}")]);
		}
		Leaf::element("a")
			.kind("link")
			.attributes(bag)
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
	fn test_link() {
		assert_eq!(
			render(Link::new("Docs", "/docs")).unwrap(),
			"<a href=\"/docs\">Docs</a>"
		);
	}

	#[rstest]
	fn test_link_target_blank() {
		assert_eq!(
			render(Link::new("Out", "https://example.com").target_blank()).unwrap(),
			"<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">Out</a>"
		);
	}

	#[rstest]
	fn test_link_button_style_with_modifier() {
		let link = Link::new("Go", "/go")
			.button_style(Variant::Success)
			.class("w-100");
		assert_eq!(
			render(link).unwrap(),
			"<a href=\"/go\" class=\"btn btn-success w-100\">Go</a>"
		);
	}

	#[rstest]
	fn test_link_requires_href() {
		assert_eq!(
			Link::try_new("x", "").unwrap_err(),
			ElementError::MissingProperty("href")
		);
		assert_eq!(Link::try_new("x", "/").unwrap().href(), "/");
	}
}
