//! # Kindling
//!
//! Declarative HTML document composition for Rust.
//!
//! Documents are trees of nodes. Attributes applied anywhere in the tree are
//! pushed down onto the elements that actually render, so wrappers such as
//! groups, conditionals and type-erased nodes never show up in the output.
//!
//! ## Feature Flags
//!
//! - `elements` (default) - Element builders (badges, lists, stacks, ...)
//!
//! ## Quick Example
//!
//! ```rust
//! use kindling::prelude::*;
//!
//! let page = group((
//!     Badge::new("beta").variant(Variant::Primary),
//!     Link::new("Docs", "/docs"),
//! ))
//! .class("me-2");
//!
//! assert_eq!(
//!     render(page).unwrap(),
//!     concat!(
//!         r#"<span class="badge text-bg-primary me-2">beta</span>"#,
//!         r#"<a href="/docs" class="me-2">Docs</a>"#,
//!     )
//! );
//! ```

#![warn(missing_docs)]

pub use kindling_core as core;

#[cfg(feature = "elements")]
pub use kindling_elements as elements;

pub use kindling_core::{
	Action, AttributeBag, AttributeStore, ConfigError, Event, EventType, IntoNode, Leaf,
	MarkupError, Node, NodeExt, NodeId, RenderContext, RenderError, RenderOptions, VoidStyle,
	apply, erase, flatten, render,
};

/// Prelude module for convenient imports
///
/// Import everything needed to build and render a document:
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {
	pub use kindling_core::{
		Action, AttributeBag, EventType, IntoNode, Leaf, Modifier, Node, NodeExt, RenderContext,
		RenderOptions, apply, erase, render,
	};

	#[cfg(feature = "elements")]
	pub use kindling_elements::{
		Alignment, Badge, BadgeStyle, Button, ButtonType, Gap, Heading, HeadingLevel, Image, Link,
		List, ListItem, ListMarker, ListStyle, Paragraph, Section, Size, Spacing, Stack, Variant,
		divider, either, empty, for_each, group, text, when,
	};
}
