//! Error types for document construction, rendering and configuration

use thiserror::Error;

/// Structural misuse detected while building a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
	/// Tag name is empty or contains characters not allowed in a tag
	#[error("Invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// Attribute name is empty or contains characters not allowed in an attribute
	#[error("Invalid attribute name: {0:?}")]
	InvalidAttributeName(String),

	/// Children were added to an element that cannot have any
	#[error("<{tag}> cannot contain children")]
	ChildOfLeaf {
		/// Tag of the element that rejected the child
		tag: String,
	},
}

/// Error returned by a render pass. Nothing is emitted when a pass fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	/// Element nesting went deeper than the configured limit
	#[error("Maximum nesting depth of {limit} exceeded")]
	DepthLimitExceeded {
		/// Configured limit
		limit: usize,
	},

	/// A self-closing tag override was set on an element that has content
	#[error("<{tag} /> was marked self-closing but has content")]
	SelfClosingWithContent {
		/// Tag the element would have been rendered with
		tag: String,
	},

	/// Structural error surfaced during rendering
	#[error(transparent)]
	Markup(#[from] MarkupError),
}

/// Error loading [`RenderOptions`](crate::RenderOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed into options
	#[error("Invalid render options: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for render passes
pub type Result<T> = std::result::Result<T, RenderError>;
