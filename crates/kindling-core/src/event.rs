//! Event bindings and the actions they compile to.
//!
//! An [`Event`] pairs an [`EventType`] with an ordered list of [`Action`]s.
//! When serialized, the actions are compiled to JavaScript statements and
//! joined into a single inline handler attribute such as
//! `onclick="showElement('menu'); hideElement('intro')"`.

use std::fmt;
use std::str::FromStr;

use crate::util::js_string_escape;

macro_rules! define_event_types {
	($( $(#[$meta:meta])* $variant:ident => $attr:literal ),* $(,)?) => {
		/// DOM event an element can bind actions to.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum EventType {
			$( $(#[$meta])* $variant, )*
		}

		impl EventType {
			/// All known event types, in declaration order.
			pub const ALL: &'static [EventType] = &[$(EventType::$variant),*];

			/// Inline handler attribute name, e.g. `"onclick"`.
			pub fn attribute_name(&self) -> &'static str {
				match self {
					$( Self::$variant => $attr, )*
				}
			}
		}
	};
}

define_event_types! {
	// Window
	/// Document finished loading
	Load => "onload",
	/// Window resized
	Resize => "onresize",
	/// Page about to unload
	BeforeUnload => "onbeforeunload",
	/// URL fragment changed
	HashChange => "onhashchange",
	/// Session history entry changed
	PopState => "onpopstate",
	/// Resource failed to load
	Error => "onerror",

	// Form
	/// Element lost focus
	Blur => "onblur",
	/// Value committed
	Change => "onchange",
	/// Context menu requested
	ContextMenu => "oncontextmenu",
	/// Element gained focus
	Focus => "onfocus",
	/// Value changed while editing
	Input => "oninput",
	/// Constraint validation failed
	Invalid => "oninvalid",
	/// Form reset
	Reset => "onreset",
	/// Text selected
	Select => "onselect",
	/// Form submitted
	Submit => "onsubmit",

	// Keyboard
	/// Key pressed down
	KeyDown => "onkeydown",
	/// Key released
	KeyUp => "onkeyup",

	// Mouse
	/// Primary button clicked
	Click => "onclick",
	/// Double click
	DoubleClick => "ondblclick",
	/// Button pressed
	MouseDown => "onmousedown",
	/// Pointer moved over the element
	MouseMove => "onmousemove",
	/// Pointer left the element
	MouseOut => "onmouseout",
	/// Pointer entered the element
	MouseOver => "onmouseover",
	/// Button released
	MouseUp => "onmouseup",
	/// Wheel rotated
	Wheel => "onwheel",
	/// Element scrolled
	Scroll => "onscroll",

	// Drag
	/// Element dragged
	Drag => "ondrag",
	/// Drag finished
	DragEnd => "ondragend",
	/// Drag entered a drop target
	DragEnter => "ondragenter",
	/// Drag left a drop target
	DragLeave => "ondragleave",
	/// Drag over a drop target
	DragOver => "ondragover",
	/// Drag started
	DragStart => "ondragstart",
	/// Dropped on a target
	Drop => "ondrop",

	// Clipboard
	/// Content copied
	Copy => "oncopy",
	/// Content cut
	Cut => "oncut",
	/// Content pasted
	Paste => "onpaste",

	// Media
	/// Playback can start
	CanPlay => "oncanplay",
	/// Playback reached the end
	Ended => "onended",
	/// Playback paused
	Pause => "onpause",
	/// Playback started
	Play => "onplay",
	/// Current time updated
	TimeUpdate => "ontimeupdate",
	/// Volume changed
	VolumeChange => "onvolumechange",

	// Touch & pointer
	/// Touch started
	TouchStart => "ontouchstart",
	/// Touch ended
	TouchEnd => "ontouchend",
	/// Pointer pressed
	PointerDown => "onpointerdown",
	/// Pointer released
	PointerUp => "onpointerup",
	/// Pointer entered the element
	PointerEnter => "onpointerenter",
	/// Pointer left the element
	PointerLeave => "onpointerleave",

	// Animation & transition
	/// Animation started
	AnimationStart => "onanimationstart",
	/// Animation ended
	AnimationEnd => "onanimationend",
	/// Transition ended
	TransitionEnd => "ontransitionend",
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.attribute_name())
	}
}

/// Error returned when parsing an unknown event name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
	type Err = UnknownEventType;

	/// Accepts either the bare event name (`"click"`) or the attribute name
	/// (`"onclick"`), case-insensitively.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.trim().to_ascii_lowercase();
		let name = lower.strip_prefix("on").unwrap_or(&lower);
		Self::ALL
			.iter()
			.copied()
			.find(|event| &event.attribute_name()[2..] == name)
			.ok_or_else(|| UnknownEventType(s.to_string()))
	}
}

/// A client-side behavior triggered by an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
	/// Raw JavaScript statement, emitted as-is
	Script(String),
	/// Make the element with the given id visible
	ShowElement(String),
	/// Hide the element with the given id
	HideElement(String),
	/// Toggle a class on the element with the given id
	ToggleClass {
		/// Target element id
		target: String,
		/// Class to toggle
		class: String,
	},
	/// Open the modal dialog with the given id
	ShowModal(String),
	/// Navigate the window to a URL
	Navigate(String),
}

impl Action {
	/// Raw JavaScript action.
	pub fn script(code: impl Into<String>) -> Self {
		Self::Script(code.into())
	}

	/// Compiles the action to a JavaScript statement.
	pub fn compile(&self) -> String {
		match self {
			Self::Script(code) => code.trim().trim_end_matches(';').to_string(),
			Self::ShowElement(id) => format!(
				"document.getElementById('{}').classList.remove('d-none')",
				js_string_escape(id)
			),
			Self::HideElement(id) => format!(
				"document.getElementById('{}').classList.add('d-none')",
				js_string_escape(id)
			),
			Self::ToggleClass { target, class } => format!(
				"document.getElementById('{}').classList.toggle('{}')",
				js_string_escape(target),
				js_string_escape(class)
			),
			Self::ShowModal(id) => format!(
				"bootstrap.Modal.getOrCreateInstance(document.getElementById('{}')).show()",
				js_string_escape(id)
			),
			Self::Navigate(url) => format!("window.location.href = '{}'", js_string_escape(url)),
		}
	}
}

/// An event binding: an event type and the actions it runs, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
	/// Event the actions are bound to
	pub kind: EventType,
	/// Actions executed when the event fires
	pub actions: Vec<Action>,
}

impl Event {
	/// Creates a binding of `actions` to `kind`.
	pub fn new(kind: EventType, actions: impl IntoIterator<Item = Action>) -> Self {
		Self {
			kind,
			actions: actions.into_iter().collect(),
		}
	}

	/// Returns `true` if the binding has no actions and will not be rendered.
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(EventType::Click, "onclick")]
	#[case(EventType::DoubleClick, "ondblclick")]
	#[case(EventType::Submit, "onsubmit")]
	#[case(EventType::PointerLeave, "onpointerleave")]
	fn test_attribute_name(#[case] event: EventType, #[case] expected: &str) {
		assert_eq!(event.attribute_name(), expected);
		assert_eq!(event.to_string(), expected);
	}

	#[rstest]
	#[case("click", EventType::Click)]
	#[case("onclick", EventType::Click)]
	#[case("ONKEYDOWN", EventType::KeyDown)]
	#[case("dblclick", EventType::DoubleClick)]
	fn test_from_str(#[case] input: &str, #[case] expected: EventType) {
		assert_eq!(input.parse::<EventType>(), Ok(expected));
	}

	#[rstest]
	fn test_from_str_unknown() {
		assert_eq!(
			"teleport".parse::<EventType>(),
			Err(UnknownEventType("teleport".to_string()))
		);
	}

	#[rstest]
	fn test_every_attribute_name_round_trips() {
		for event in EventType::ALL {
			assert_eq!(event.attribute_name().parse::<EventType>(), Ok(*event));
		}
	}

	#[rstest]
	fn test_compile_actions() {
		assert_eq!(Action::script("alert(1);").compile(), "alert(1)");
		assert_eq!(
			Action::ShowElement("menu".into()).compile(),
			"document.getElementById('menu').classList.remove('d-none')"
		);
		assert_eq!(
			Action::ToggleClass {
				target: "nav".into(),
				class: "open".into()
			}
			.compile(),
			"document.getElementById('nav').classList.toggle('open')"
		);
		assert_eq!(
			Action::Navigate("/it's".into()).compile(),
			"window.location.href = '/it\\'s'"
		);
	}

	#[rstest]
	fn test_event_is_empty() {
		assert!(Event::new(EventType::Click, []).is_empty());
		assert!(!Event::new(EventType::Click, [Action::script("go()")]).is_empty());
	}
}
