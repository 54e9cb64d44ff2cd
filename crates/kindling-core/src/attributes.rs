//! The attribute bag: everything presentational that can be attached to a node.
//!
//! A bag holds an optional id, ordered sets of classes, inline styles, `data-*`
//! and `aria-*` pairs, event bindings and custom attributes, plus optional tag
//! overrides. Bags are combined with [`AttributeBag::merge`]:
//!
//! - set-valued fields are unioned, keeping first-insertion order;
//! - scalar fields (`id` and the tag overrides) take the right-hand value when
//!   it is present, otherwise the left-hand one.
//!
//! Serialization through [`fmt::Display`] always emits attributes in the order
//! id, custom, class, style, data, aria, events, with every value HTML-escaped.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::error::MarkupError;
use crate::event::{Action, Event, EventType};
use crate::util::{html_escape, validate_attribute_name, validate_tag_name};

/// A custom HTML attribute. A `None` value renders as a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
	name: String,
	value: Option<String>,
}

impl Attribute {
	/// Creates an attribute after validating its name.
	pub fn try_new(
		name: impl Into<String>,
		value: Option<impl Into<String>>,
	) -> Result<Self, MarkupError> {
		let name = name.into();
		validate_attribute_name(&name)?;
		Ok(Self {
			name,
			value: value.map(Into::into),
		})
	}

	/// Creates an attribute.
	///
	/// # Panics
	///
	/// Panics if the name is empty or contains whitespace, quotes, `<`, `>`,
	/// `/` or `=`. Use [`Attribute::try_new`] for fallible construction.
	pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
		Self::try_new(name, value).unwrap_or_else(|e| panic!("{e}"))
	}

	/// Attribute name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Attribute value, `None` for boolean attributes
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => write!(f, "{}=\"{}\"", self.name, html_escape(value)),
			None => f.write_str(&self.name),
		}
	}
}

/// One CSS declaration, rendered as `property: value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineStyle {
	property: String,
	value: String,
}

impl InlineStyle {
	/// Creates a declaration.
	pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			property: property.into(),
			value: value.into(),
		}
	}

	/// CSS property name
	pub fn property(&self) -> &str {
		&self.property
	}

	/// CSS value
	pub fn value(&self) -> &str {
		&self.value
	}
}

impl fmt::Display for InlineStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.property, self.value)
	}
}

/// Presentation data for a single node.
///
/// Equality compares set-valued fields as sets, so two bags built in a
/// different order compare equal even though they serialize differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
	id: Option<String>,
	custom: IndexSet<Attribute>,
	classes: IndexSet<String>,
	styles: IndexSet<InlineStyle>,
	data: IndexSet<(String, String)>,
	aria: IndexSet<(String, String)>,
	events: IndexSet<Event>,
	tag: Option<String>,
	closing_tag: Option<String>,
	self_closing_tag: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() { None } else { Some(value) }
}

impl AttributeBag {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if the bag carries nothing at all.
	pub fn is_empty(&self) -> bool {
		self.id.is_none()
			&& self.custom.is_empty()
			&& self.classes.is_empty()
			&& self.styles.is_empty()
			&& self.data.is_empty()
			&& self.aria.is_empty()
			&& self.events.is_empty()
			&& self.tag.is_none()
			&& self.closing_tag.is_none()
			&& self.self_closing_tag.is_none()
	}

	/// Returns `true` if serializing the bag produces no attribute text.
	///
	/// Unlike [`is_empty`](Self::is_empty) this ignores tag overrides and event
	/// bindings without actions.
	pub fn has_no_output(&self) -> bool {
		self.id.is_none()
			&& self.custom.is_empty()
			&& self.classes.is_empty()
			&& self.styles.is_empty()
			&& self.data.is_empty()
			&& self.aria.is_empty()
			&& self.events.iter().all(Event::is_empty)
	}

	// Identity -----------------------------------------------------------------

	/// Element id
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Sets the element id. An empty string leaves the current id untouched.
	pub fn set_id(&mut self, id: impl Into<String>) {
		if let Some(id) = non_empty(id.into()) {
			self.id = Some(id);
		}
	}

	/// Builder form of [`set_id`](Self::set_id).
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.set_id(id);
		self
	}

	// Classes ------------------------------------------------------------------

	/// Classes in first-insertion order
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.classes.iter().map(String::as_str)
	}

	/// Returns `true` if the class is present.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.contains(class)
	}

	/// Adds a class. Empty strings are ignored.
	pub fn add_class(&mut self, class: impl Into<String>) {
		if let Some(class) = non_empty(class.into()) {
			self.classes.insert(class);
		}
	}

	/// Removes a class, keeping the order of the rest.
	pub fn remove_class(&mut self, class: &str) -> bool {
		self.classes.shift_remove(class)
	}

	/// Builder form of [`add_class`](Self::add_class).
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.add_class(class);
		self
	}

	/// Adds several classes at once.
	pub fn with_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for class in classes {
			self.add_class(class);
		}
		self
	}

	// Styles -------------------------------------------------------------------

	/// Inline style declarations in first-insertion order
	pub fn styles(&self) -> impl Iterator<Item = &InlineStyle> {
		self.styles.iter()
	}

	/// Value of the first declaration for `property`, if any.
	pub fn style(&self, property: &str) -> Option<&str> {
		self.styles
			.iter()
			.find(|style| style.property == property)
			.map(InlineStyle::value)
	}

	/// Adds an inline style declaration.
	pub fn add_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
		self.styles.insert(InlineStyle::new(property, value));
	}

	/// Removes every declaration for `property`.
	pub fn remove_style(&mut self, property: &str) {
		self.styles.retain(|style| style.property != property);
	}

	/// Builder form of [`add_style`](Self::add_style).
	pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_style(property, value);
		self
	}

	// Data & ARIA --------------------------------------------------------------

	/// `data-*` pairs, keys without the prefix
	pub fn data(&self) -> impl Iterator<Item = (&str, &str)> {
		self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Adds a `data-{key}` attribute.
	pub fn try_add_data(
		&mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Result<(), MarkupError> {
		let key = key.into();
		validate_attribute_name(&key)?;
		self.data.insert((key, value.into()));
		Ok(())
	}

	/// Adds a `data-{key}` attribute.
	///
	/// # Panics
	///
	/// Panics if the key is not a valid attribute name.
	pub fn add_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.try_add_data(key, value)
			.unwrap_or_else(|e| panic!("{e}"));
	}

	/// Builder form of [`add_data`](Self::add_data).
	pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_data(key, value);
		self
	}

	/// `aria-*` pairs, keys without the prefix
	pub fn aria(&self) -> impl Iterator<Item = (&str, &str)> {
		self.aria.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Adds an `aria-{key}` attribute.
	pub fn try_add_aria(
		&mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Result<(), MarkupError> {
		let key = key.into();
		validate_attribute_name(&key)?;
		self.aria.insert((key, value.into()));
		Ok(())
	}

	/// Adds an `aria-{key}` attribute.
	///
	/// # Panics
	///
	/// Panics if the key is not a valid attribute name.
	pub fn add_aria(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.try_add_aria(key, value)
			.unwrap_or_else(|e| panic!("{e}"));
	}

	/// Builder form of [`add_aria`](Self::add_aria).
	pub fn with_aria(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_aria(key, value);
		self
	}

	// Custom attributes --------------------------------------------------------

	/// Custom attributes in first-insertion order
	pub fn custom_attributes(&self) -> impl Iterator<Item = &Attribute> {
		self.custom.iter()
	}

	/// Value of the first custom attribute called `name`.
	///
	/// Returns `Some(None)` for a boolean attribute.
	pub fn custom_attribute(&self, name: &str) -> Option<Option<&str>> {
		self.custom
			.iter()
			.find(|attr| attr.name == name)
			.map(Attribute::value)
	}

	/// Adds a custom attribute.
	pub fn add_attribute(&mut self, attribute: Attribute) {
		self.custom.insert(attribute);
	}

	/// Builder form adding `name="value"`.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid attribute name.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_attribute(Attribute::new(name, Some(value)));
		self
	}

	/// Builder form adding a bare boolean attribute.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid attribute name.
	pub fn with_bool_attribute(mut self, name: impl Into<String>) -> Self {
		self.add_attribute(Attribute::new(name, None::<String>));
		self
	}

	// Events -------------------------------------------------------------------

	/// Event bindings in first-insertion order
	pub fn events(&self) -> impl Iterator<Item = &Event> {
		self.events.iter()
	}

	/// Adds an event binding.
	pub fn add_event(&mut self, event: Event) {
		self.events.insert(event);
	}

	/// Builder form binding `actions` to `kind`.
	pub fn with_event(mut self, kind: EventType, actions: impl IntoIterator<Item = Action>) -> Self {
		self.add_event(Event::new(kind, actions));
		self
	}

	// Tag overrides ------------------------------------------------------------

	/// Tag that replaces the element's default tag
	pub fn tag(&self) -> Option<&str> {
		self.tag.as_deref()
	}

	/// Tag used for the closing tag instead of the opening one
	pub fn closing_tag(&self) -> Option<&str> {
		self.closing_tag.as_deref()
	}

	/// Tag emitted as a single self-closing tag instead of an element pair
	pub fn self_closing_tag(&self) -> Option<&str> {
		self.self_closing_tag.as_deref()
	}

	/// Sets the tag override.
	pub fn try_set_tag(&mut self, tag: impl Into<String>) -> Result<(), MarkupError> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		self.tag = Some(tag);
		Ok(())
	}

	/// Sets the closing tag override.
	pub fn try_set_closing_tag(&mut self, tag: impl Into<String>) -> Result<(), MarkupError> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		self.closing_tag = Some(tag);
		Ok(())
	}

	/// Sets the self-closing tag override.
	pub fn try_set_self_closing_tag(&mut self, tag: impl Into<String>) -> Result<(), MarkupError> {
		let tag = tag.into();
		validate_tag_name(&tag)?;
		self.self_closing_tag = Some(tag);
		Ok(())
	}

	/// Builder form of [`try_set_tag`](Self::try_set_tag).
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.try_set_tag(tag).unwrap_or_else(|e| panic!("{e}"));
		self
	}

	/// Builder form of [`try_set_closing_tag`](Self::try_set_closing_tag).
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	pub fn with_closing_tag(mut self, tag: impl Into<String>) -> Self {
		self.try_set_closing_tag(tag)
			.unwrap_or_else(|e| panic!("{e}"));
		self
	}

	/// Builder form of [`try_set_self_closing_tag`](Self::try_set_self_closing_tag).
	///
	/// # Panics
	///
	/// Panics if `tag` is not a valid tag name.
	pub fn with_self_closing_tag(mut self, tag: impl Into<String>) -> Self {
		self.try_set_self_closing_tag(tag)
			.unwrap_or_else(|e| panic!("{e}"));
		self
	}

	// Merge --------------------------------------------------------------------

	/// Merges `other` into `self` in place. See [`merge`](Self::merge).
	pub fn merge_in(&mut self, other: &AttributeBag) {
		if other.id.is_some() {
			self.id.clone_from(&other.id);
		}
		if other.tag.is_some() {
			self.tag.clone_from(&other.tag);
		}
		if other.closing_tag.is_some() {
			self.closing_tag.clone_from(&other.closing_tag);
		}
		if other.self_closing_tag.is_some() {
			self.self_closing_tag.clone_from(&other.self_closing_tag);
		}
		self.custom.extend(other.custom.iter().cloned());
		self.classes.extend(other.classes.iter().cloned());
		self.styles.extend(other.styles.iter().cloned());
		self.data.extend(other.data.iter().cloned());
		self.aria.extend(other.aria.iter().cloned());
		self.events.extend(other.events.iter().cloned());
	}

	/// Combines two bags.
	///
	/// Set-valued fields become the union of both sides in first-insertion
	/// order. Scalar fields take `other`'s value when present. The operation is
	/// total and associative, and an empty bag is its identity on both sides.
	pub fn merge(&self, other: &AttributeBag) -> AttributeBag {
		let mut merged = self.clone();
		merged.merge_in(other);
		merged
	}

	/// Moves the contents out, leaving an empty bag behind.
	pub fn take(&mut self) -> AttributeBag {
		std::mem::take(self)
	}

	/// Removes everything.
	pub fn clear(&mut self) {
		*self = AttributeBag::default();
	}

	fn write_pairs(
		f: &mut fmt::Formatter<'_>,
		prefix: &str,
		pairs: &IndexSet<(String, String)>,
	) -> fmt::Result {
		for (key, value) in pairs {
			write!(f, " {prefix}-{key}=\"{}\"", html_escape(value))?;
		}
		Ok(())
	}
}

impl fmt::Display for AttributeBag {
	/// Writes the attribute text, each attribute preceded by a space, so it can
	/// be appended directly after a tag name.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(id) = &self.id {
			write!(f, " id=\"{}\"", html_escape(id))?;
		}

		for attribute in &self.custom {
			write!(f, " {attribute}")?;
		}

		if !self.classes.is_empty() {
			let classes = self
				.classes
				.iter()
				.map(String::as_str)
				.collect::<Vec<_>>()
				.join(" ");
			write!(f, " class=\"{}\"", html_escape(&classes))?;
		}

		if !self.styles.is_empty() {
			let styles = self
				.styles
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join("; ");
			write!(f, " style=\"{}\"", html_escape(&styles))?;
		}

		Self::write_pairs(f, "data", &self.data)?;
		Self::write_pairs(f, "aria", &self.aria)?;

		// Bindings for the same event share one handler attribute.
		let mut handlers: IndexMap<EventType, IndexSet<String>> = IndexMap::new();
		for event in &self.events {
			handlers
				.entry(event.kind)
				.or_default()
				.extend(event.actions.iter().map(Action::compile));
		}
		for (kind, actions) in handlers {
			if actions.is_empty() {
				continue;
			}
			let script = actions.into_iter().collect::<Vec<_>>().join("; ");
			write!(f, " {}=\"{}\"", kind.attribute_name(), html_escape(&script))?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_bag_serializes_to_nothing() {
		let bag = AttributeBag::new();
		assert!(bag.is_empty());
		assert!(bag.has_no_output());
		assert_eq!(bag.to_string(), "");
	}

	#[rstest]
	fn test_serialization_order() {
		let bag = AttributeBag::new()
			.with_event(EventType::Click, [Action::script("go()")])
			.with_aria("label", "Close")
			.with_data("toggle", "modal")
			.with_style("color", "red")
			.with_class("btn")
			.with_attribute("type", "button")
			.with_id("close");

		assert_eq!(
			bag.to_string(),
			" id=\"close\" type=\"button\" class=\"btn\" style=\"color: red\" data-toggle=\"modal\" aria-label=\"Close\" onclick=\"go()\""
		);
	}

	#[rstest]
	fn test_styles_are_joined_with_semicolons() {
		let bag = AttributeBag::new()
			.with_style("color", "red")
			.with_style("margin", "0");
		assert_eq!(bag.to_string(), " style=\"color: red; margin: 0\"");
		assert_eq!(bag.style("margin"), Some("0"));
	}

	#[rstest]
	fn test_values_are_escaped() {
		let bag = AttributeBag::new()
			.with_attribute("title", "Tom & \"Jerry\"")
			.with_data("x", "<y>");
		assert_eq!(
			bag.to_string(),
			" title=\"Tom &amp; &quot;Jerry&quot;\" data-x=\"&lt;y&gt;\""
		);
	}

	#[rstest]
	fn test_boolean_attribute_has_no_value() {
		let bag = AttributeBag::new().with_bool_attribute("disabled");
		assert_eq!(bag.to_string(), " disabled");
		assert_eq!(bag.custom_attribute("disabled"), Some(None));
	}

	#[rstest]
	fn test_event_without_actions_is_skipped() {
		let bag = AttributeBag::new().with_event(EventType::Click, []);
		assert!(!bag.is_empty());
		assert!(bag.has_no_output());
		assert_eq!(bag.to_string(), "");
	}

	#[rstest]
	fn test_events_of_same_type_are_coalesced() {
		let bag = AttributeBag::new()
			.with_event(EventType::Click, [Action::script("a()")])
			.with_event(EventType::MouseOver, [Action::script("hover()")])
			.with_event(
				EventType::Click,
				[Action::script("b()"), Action::script("a()")],
			);
		assert_eq!(
			bag.to_string(),
			" onclick=\"a(); b()\" onmouseover=\"hover()\""
		);
	}

	#[rstest]
	fn test_duplicate_classes_collapse() {
		let bag = AttributeBag::new()
			.with_classes(["x", "y", "x"])
			.with_class("y");
		assert_eq!(bag.classes().collect::<Vec<_>>(), vec!["x", "y"]);
	}

	#[rstest]
	fn test_empty_class_and_id_are_ignored() {
		let bag = AttributeBag::new().with_class("").with_id("");
		assert!(bag.is_empty());

		let bag = AttributeBag::new().with_id("a").with_id("");
		assert_eq!(bag.id(), Some("a"));
	}

	#[rstest]
	fn test_remove_class_keeps_order() {
		let mut bag = AttributeBag::new().with_classes(["a", "b", "c"]);
		assert!(bag.remove_class("b"));
		assert!(!bag.remove_class("missing"));
		assert_eq!(bag.classes().collect::<Vec<_>>(), vec!["a", "c"]);
	}

	#[rstest]
	fn test_remove_style() {
		let mut bag = AttributeBag::new()
			.with_style("color", "red")
			.with_style("color", "blue")
			.with_style("margin", "0");
		bag.remove_style("color");
		assert_eq!(bag.to_string(), " style=\"margin: 0\"");
	}

	#[rstest]
	fn test_merge_scalars_take_right_hand_side() {
		let left = AttributeBag::new().with_id("a").with_tag("div");
		let right = AttributeBag::new().with_id("b");
		let merged = left.merge(&right);
		assert_eq!(merged.id(), Some("b"));
		assert_eq!(merged.tag(), Some("div"));
	}

	#[rstest]
	fn test_merge_unions_sets_in_first_insertion_order() {
		let left = AttributeBag::new().with_classes(["a", "b"]);
		let right = AttributeBag::new().with_classes(["b", "c"]);
		let merged = left.merge(&right);
		assert_eq!(merged.classes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
	}

	#[rstest]
	fn test_merge_with_empty_is_identity() {
		let bag = AttributeBag::new()
			.with_id("x")
			.with_class("c")
			.with_style("color", "red");
		assert_eq!(bag.merge(&AttributeBag::new()), bag);
		assert_eq!(AttributeBag::new().merge(&bag), bag);
	}

	#[rstest]
	fn test_take_leaves_empty_bag() {
		let mut bag = AttributeBag::new().with_class("c");
		let taken = bag.take();
		assert!(bag.is_empty());
		assert!(taken.has_class("c"));
	}

	#[rstest]
	fn test_tag_overrides() {
		let bag = AttributeBag::new()
			.with_tag("section")
			.with_closing_tag("section")
			.with_self_closing_tag("br");
		assert_eq!(bag.tag(), Some("section"));
		assert_eq!(bag.closing_tag(), Some("section"));
		assert_eq!(bag.self_closing_tag(), Some("br"));
		// Overrides never serialize as attributes.
		assert_eq!(bag.to_string(), "");
	}

	#[rstest]
	fn test_try_methods_reject_invalid_names() {
		let mut bag = AttributeBag::new();
		assert_eq!(
			bag.try_add_data("bad key", "v"),
			Err(MarkupError::InvalidAttributeName("bad key".into()))
		);
		assert_eq!(
			bag.try_set_tag("<div>"),
			Err(MarkupError::InvalidTagName("<div>".into()))
		);
		assert!(Attribute::try_new("a=b", Some("c")).is_err());
		assert!(bag.is_empty());
	}

	#[rstest]
	#[should_panic(expected = "Invalid attribute name")]
	fn test_with_attribute_panics_on_invalid_name() {
		let _ = AttributeBag::new().with_attribute("", "x");
	}
}
