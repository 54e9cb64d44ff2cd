//! Document composition engine for Kindling
//!
//! This crate turns declaratively composed content into HTML. Callers build a
//! tree of [`Node`] values, attach presentation attributes to arbitrary
//! sub-trees (even after their concrete type has been erased), and render the
//! tree to a single string.
//!
//! # Features
//!
//! - **Attribute Bag**: ordered, de-duplicated attribute sets with an
//!   associative merge and deterministic serialization
//! - **Side Store**: attributes attached by leaf identity for the duration of a
//!   render pass
//! - **Modifiers**: attribute hoisting that never nests wrappers
//! - **Erasure**: uniform wrappers that keep every attribute
//! - **Flattening**: sequences, conditionals and transparent groups reduced to
//!   a flat list of leaves
//! - **Renderer**: per-context passes with configurable depth limit and void
//!   element style
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Compose Node tree] --> B[Modifiers / erase]
//!     B --> C[flatten]
//!     S[AttributeStore] --> D
//!     C --> D[Resolve attributes per leaf]
//!     D --> E[Serialize HTML]
//! ```
//!
//! # Example
//!
//! ```rust
//! use kindling_core::{Leaf, Node, NodeExt, render};
//!
//! let badge = Leaf::element("span").classes(["badge", "badge-primary"]);
//! let html = render(Node::transparent([badge]).class("mb-0")).unwrap();
//!
//! assert_eq!(html, r#"<span class="badge badge-primary mb-0"></span>"#);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod error;
pub mod event;
pub mod flatten;
pub mod modifier;
pub mod node;
pub mod options;
pub mod render;
pub mod store;
pub mod util;

// Re-exports for convenience
pub use attributes::{Attribute, AttributeBag, InlineStyle};
pub use error::{ConfigError, MarkupError, RenderError, Result};
pub use event::{Action, Event, EventType, UnknownEventType};
pub use flatten::{flatten, flatten_list_items, merge_into_all};
pub use modifier::{Modifier, NodeExt, apply, erase};
pub use node::{Branch, DeferredBody, Erased, IntoNode, Leaf, LeafBody, Node};
pub use options::{RenderOptions, VoidStyle};
pub use render::{RenderContext, render};
pub use store::{AttributeStore, NodeId};
