//! Element builders for Kindling documents
//!
//! Each element is a small builder that converts into a
//! [`Node`](kindling_core::Node), so it can be nested anywhere content is
//! accepted and decorated with the fluent modifiers from
//! [`NodeExt`](kindling_core::NodeExt).
//!
//! # Example
//!
//! ```rust
//! use kindling_core::{NodeExt, render};
//! use kindling_elements::{Badge, Heading, HeadingLevel, List, ListStyle, Variant};
//!
//! let page = (
//!     Heading::new(HeadingLevel::H1, "Inbox"),
//!     List::new(("Welcome", Badge::new("new").variant(Variant::Primary)))
//!         .list_style(ListStyle::Group),
//! );
//!
//! assert_eq!(
//!     render(page).unwrap(),
//!     concat!(
//!         "<h1>Inbox</h1>",
//!         r#"<ul class="list-group">"#,
//!         r#"<li class="list-group-item">Welcome</li>"#,
//!         r#"<li class="list-group-item"><span class="badge text-bg-primary">new</span></li>"#,
//!         "</ul>",
//!     )
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod badge;
pub mod button;
pub mod component;
pub mod error;
pub mod layout;
pub mod link;
pub mod list;
pub mod media;
pub mod text;

// Re-exports for convenience
pub use badge::{Badge, BadgeStyle};
pub use button::{Button, ButtonType};
pub use component::{Alignment, Gap, Size, Spacing, Variant};
pub use error::{ElementError, Result};
pub use layout::{Section, Stack, either, empty, for_each, group, when};
pub use link::Link;
pub use list::{List, ListItem, ListMarker, ListStyle};
pub use media::{Image, divider};
pub use text::{Heading, HeadingLevel, Paragraph, text};
