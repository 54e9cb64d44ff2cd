//! Buttons

use kindling_core::{Action, AttributeBag, EventType, IntoNode, Leaf, Node};

use crate::component::{Size, Variant};

/// The `type` attribute of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
	/// Plain button (default)
	#[default]
	Button,
	/// Submits its form
	Submit,
	/// Resets its form
	Reset,
}

impl ButtonType {
	/// Attribute value
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

/// A `<button>` element.
#[derive(Debug, Clone)]
pub struct Button {
	content: Node,
	button_type: ButtonType,
	variant: Option<Variant>,
	size: Size,
	disabled: bool,
	on_click: Vec<Action>,
}

impl Button {
	/// Creates a button around `content`.
	pub fn new(content: impl IntoNode) -> Self {
		Self {
			content: content.into_node(),
			button_type: ButtonType::default(),
			variant: None,
			size: Size::default(),
			disabled: false,
			on_click: Vec::new(),
		}
	}

	/// Sets the button type.
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	/// Sets the color variant.
	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: Size) -> Self {
		self.size = size;
		self
	}

	/// Disables the button.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Runs `actions` when the button is clicked.
	pub fn on_click(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
		self.on_click.extend(actions);
		self
	}
}

impl IntoNode for Button {
	fn into_node(self) -> Node {
		let mut bag = AttributeBag::new()
			.with_attribute("type", self.button_type.as_str())
			.with_class("btn");
		if let Some(variant) = self.variant {
			bag.add_class(format!("btn-{variant}"));
		}
		if let Some(size) = self.size.suffix() {
			bag.add_class(format!("btn-{size}"));
		}
		if self.disabled {
			bag = bag.with_bool_attribute("disabled");
		}
		if !self.on_click.is_empty() {
			bag = bag.with_event(EventType::Click, self.on_click);
		}
		Leaf::element("button")
			.kind("button")
			.attributes(bag)
			.child(self.content)
			.into_node()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kindling_core::render;
	use rstest::rstest;

	#[rstest]
	fn test_default_button() {
		assert_eq!(
			render(Button::new("OK")).unwrap(),
			"<button type=\"button\" class=\"btn\">OK</button>"
		);
	}

	#[rstest]
	fn test_styled_button() {
		let button = Button::new("Save")
			.button_type(ButtonType::Submit)
			.variant(Variant::Primary)
			.size(Size::Lg)
			.disabled(true);
		assert_eq!(
			render(button).unwrap(),
			"<button type=\"submit\" disabled class=\"btn btn-primary btn-lg\">Save</button>"
		);
	}

	#[rstest]
	fn test_button_on_click() {
		let button = Button::new("Menu").on_click([
			Action::ToggleClass {
				target: "nav".into(),
				class: "open".into(),
			},
			Action::script("track('menu')"),
		]);
		assert_eq!(
			render(button).unwrap(),
			"<button type=\"button\" class=\"btn\" onclick=\"document.getElementById(&#x27;nav&#x27;).classList.toggle(&#x27;open&#x27;); track(&#x27;menu&#x27;)\">Menu</button>"
		);
	}
}
