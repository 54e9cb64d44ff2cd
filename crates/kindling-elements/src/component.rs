//! Shared style vocabulary for elements

use std::fmt;

/// Color variant for elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	/// Primary color (default blue)
	Primary,
	/// Secondary color (default gray)
	Secondary,
	/// Success color (default green)
	Success,
	/// Danger color (default red)
	Danger,
	/// Warning color (default yellow)
	Warning,
	/// Info color (default cyan)
	Info,
	/// Light color (default light gray)
	Light,
	/// Dark color (default dark gray)
	Dark,
}

impl Variant {
	/// Convert variant to CSS class fragment
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Success => "success",
			Self::Danger => "danger",
			Self::Warning => "warning",
			Self::Info => "info",
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Size variant for elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
	/// Small
	Sm,
	/// Medium (default)
	#[default]
	Md,
	/// Large
	Lg,
}

impl Size {
	/// Class suffix, `None` for the default size
	pub fn suffix(&self) -> Option<&'static str> {
		match self {
			Self::Sm => Some("sm"),
			Self::Md => None,
			Self::Lg => Some("lg"),
		}
	}
}

/// Horizontal alignment of stacked items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
	/// Start edge (default)
	#[default]
	Leading,
	/// Centered
	Center,
	/// End edge
	Trailing,
}

impl Alignment {
	/// Value for the CSS `align-self` property
	pub fn align_self(&self) -> &'static str {
		match self {
			Self::Leading => "start",
			Self::Center => "center",
			Self::Trailing => "end",
		}
	}

	/// Value for the CSS `text-align` property, `None` for the default
	pub fn text_align(&self) -> Option<&'static str> {
		match self {
			Self::Leading => None,
			Self::Center => Some("center"),
			Self::Trailing => Some("end"),
		}
	}
}

/// Spacing between stacked items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
	/// A step of the spacing scale, rendered as a `gap-{n}` class
	Scale(Gap),
	/// Exact pixels, rendered as an inline `gap` style
	Pixels(u32),
}

/// Steps of the spacing scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gap {
	/// No gap
	None = 0,
	/// Extra small
	XSmall = 1,
	/// Small
	Small = 2,
	/// Medium
	Medium = 3,
	/// Large
	Large = 4,
	/// Extra large
	XLarge = 5,
}

impl Gap {
	/// `gap-{n}` class
	pub fn class(&self) -> String {
		format!("gap-{}", *self as u8)
	}
}
