//! Badges: small inline labels

use kindling_core::{IntoNode, Leaf, Node, apply};

use crate::component::Variant;

/// Visual weight of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
	/// Solid background (default)
	#[default]
	Default,
	/// Tinted background
	Subtle,
	/// Tinted background with a border
	SubtleBordered,
}

/// A `<span>` badge.
#[derive(Debug, Clone)]
pub struct Badge {
	content: Node,
	variant: Option<Variant>,
	style: BadgeStyle,
}

impl Badge {
	/// Creates a badge around `content`.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
			variant: None,
			style: BadgeStyle::Default,
		}
	}

	/// Sets the color variant.
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	/// Sets the visual weight.
	pub fn badge_style(mut self, style: BadgeStyle) -> Self {
		self.style = style;
		self
	}

	fn class_names(&self) -> Vec<String> {
		let mut classes = vec!["badge".to_string()];
		let Some(variant) = self.variant else {
			return classes;
		};
		match self.style {
			BadgeStyle::Default => classes.push(format!("text-bg-{variant}")),
			BadgeStyle::Subtle => {
				classes.push(format!("bg-{variant}-subtle"));
				classes.push(format!("text-{variant}-emphasis"));
			}
			BadgeStyle::SubtleBordered => {
				classes.push(format!("bg-{variant}-subtle"));
				classes.push("border".to_string());
				classes.push(format!("border-{variant}-subtle"));
				classes.push(format!("text-{variant}-emphasis"));
			}
		}
		classes
	}
}

impl IntoNode for Badge {
	fn into_node(self) -> Node {
		let classes = self.class_names();
		let span = Leaf::element("span").kind("badge").child(self.content);
		apply(span, move |node: Node| {
			node.modify_attributes(|bag| {
				for class in classes {
					bag.add_class(class);
				}
			})
		})
	}
}
