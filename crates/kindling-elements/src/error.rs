//! Error types for kindling-elements

use kindling_core::MarkupError;
use thiserror::Error;

/// Error type for element construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
	/// Heading level outside 1..=6
	#[error("Invalid heading level: {0} (expected 1-6)")]
	InvalidHeadingLevel(u8),

	/// Missing required property
	#[error("Missing required property: {0}")]
	MissingProperty(&'static str),

	/// Structural error from the underlying markup
	#[error(transparent)]
	Markup(#[from] MarkupError),
}

/// Result type for element construction
pub type Result<T> = std::result::Result<T, ElementError>;
