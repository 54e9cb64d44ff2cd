//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How void elements and self-closing overrides are terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoidStyle {
	/// `<br />`
	#[default]
	SelfClosing,
	/// `<br>`
	Html,
}

impl VoidStyle {
	/// Text written after the attributes of a void tag.
	pub fn terminator(&self) -> &'static str {
		match self {
			Self::SelfClosing => " />",
			Self::Html => ">",
		}
	}
}

/// Options for a render pass.
///
/// # Example
///
/// ```
/// use kindling_core::{RenderOptions, VoidStyle};
///
/// let options = RenderOptions::from_toml_str(
///     r#"
///     max_depth = 64
///     void_style = "html"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(options, RenderOptions::new().max_depth(64).void_style(VoidStyle::Html));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Maximum element nesting depth before the pass fails. Bare text inside
	/// an element does not add a level.
	pub max_depth: usize,
	/// Void element terminator.
	pub void_style: VoidStyle,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			void_style: VoidStyle::default(),
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the maximum nesting depth.
	pub fn max_depth(mut self, depth: usize) -> Self {
		self.max_depth = depth;
		self
	}

	/// Sets the void element terminator.
	pub fn void_style(mut self, style: VoidStyle) -> Self {
		self.void_style = style;
		self
	}

	/// Parses options from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let options = toml::from_str(source)?;
		tracing::debug!(?options, "loaded render options");
		Ok(options)
	}
}
