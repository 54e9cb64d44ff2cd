//! The renderer.
//!
//! A [`RenderContext`] owns the options and the side store for its passes.
//! Each call to [`RenderContext::render`] flattens the root, resolves every
//! leaf's attributes against the store and serializes the result. The store is
//! emptied when the pass ends, whether it succeeded or not, so nothing attached
//! during one pass is visible in the next.

use std::borrow::Cow;

use crate::attributes::AttributeBag;
use crate::error::{RenderError, Result};
use crate::flatten::flatten;
use crate::node::{IntoNode, Leaf, LeafBody, Node};
use crate::options::RenderOptions;
use crate::store::{AttributeStore, NodeId};
use crate::util::html_escape;

/// Resolved content of a leaf once deferred bodies have run.
enum Content {
	Text(Cow<'static, str>),
	Nodes(Vec<Node>),
	Void,
}

impl Content {
	fn is_present(&self) -> bool {
		match self {
			Content::Text(text) => !text.is_empty(),
			Content::Nodes(nodes) => nodes.iter().any(|node| !node.is_empty_content()),
			Content::Void => false,
		}
	}
}

/// Per-page render state: options plus the identity-keyed side store.
///
/// Contexts are independent of each other. Rendering several pages in
/// parallel only requires one context per worker.
#[derive(Debug, Default)]
pub struct RenderContext {
	options: RenderOptions,
	store: AttributeStore,
	passes: u64,
	rendered: usize,
}

impl RenderContext {
	/// Creates a context with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a context with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	/// Returns the render options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Returns a reference to the side store.
	pub fn store(&self) -> &AttributeStore {
		&self.store
	}

	/// Returns a mutable reference to the side store.
	pub fn store_mut(&mut self) -> &mut AttributeStore {
		&mut self.store
	}

	/// Attaches `bag` to the leaf identified by `id` for the next pass.
	pub fn attach(&mut self, id: NodeId, bag: &AttributeBag) {
		self.store.merge(bag, id);
	}

	/// Number of passes started so far.
	pub fn passes(&self) -> u64 {
		self.passes
	}

	/// Renders `root` to HTML.
	///
	/// # Errors
	///
	/// Returns [`RenderError::DepthLimitExceeded`] when elements nest deeper
	/// than [`RenderOptions::max_depth`] and
	/// [`RenderError::SelfClosingWithContent`] when a self-closing override is
	/// set on an element with content. No partial output is returned.
	pub fn render(&mut self, root: impl IntoNode) -> Result<String> {
		self.passes += 1;
		self.rendered = 0;
		let span = tracing::debug_span!("render", pass = self.passes);
		let _enter = span.enter();

		let mut out = String::new();
		let result = self.render_node(root.into_node(), 0, &mut out);

		if !self.store.is_empty() {
			tracing::debug!(entries = self.store.len(), "discarding side store entries");
			self.store.clear();
		}

		match result {
			Ok(()) => {
				tracing::debug!(leaves = self.rendered, bytes = out.len(), "render pass finished");
				Ok(out)
			}
			Err(err) => {
				tracing::warn!(error = %err, "render pass failed");
				Err(err)
			}
		}
	}

	fn check_depth(&self, depth: usize) -> Result<()> {
		if depth > self.options.max_depth {
			return Err(RenderError::DepthLimitExceeded {
				limit: self.options.max_depth,
			});
		}
		Ok(())
	}

	fn render_node(&mut self, node: Node, depth: usize, out: &mut String) -> Result<()> {
		for leaf in flatten(node) {
			self.render_leaf(leaf, depth, out)?;
		}
		Ok(())
	}

	fn render_leaf(&mut self, leaf: Leaf, depth: usize, out: &mut String) -> Result<()> {
		// Only elements count toward the nesting limit; bare text is checked
		// once its attributes are known.
		let is_text = leaf.is_text();
		if !is_text {
			self.check_depth(depth)?;
		}
		self.rendered += 1;
		let id = leaf.identity();
		let kind = leaf.kind_name();
		let (default_tag, mut attributes, body) = leaf.into_parts();

		// Deferred bodies may attach attributes to this leaf, so they run first.
		let content = match body {
			LeafBody::Text(text) => Content::Text(text),
			LeafBody::Children(children) => Content::Nodes(children),
			LeafBody::Void => Content::Void,
			LeafBody::Deferred(produce) => Content::Nodes(vec![produce(&mut self.store)]),
		};

		if let Some(extra) = self.store.get_ref(id) {
			attributes.merge_in(extra);
		}
		tracing::trace!(node = %id, kind, "rendering leaf");

		if let Content::Text(text) = &content
			&& attributes.has_no_output()
			&& attributes.tag().is_none()
			&& attributes.self_closing_tag().is_none()
		{
			out.push_str(&html_escape(text));
			return Ok(());
		}
		if is_text {
			self.check_depth(depth)?;
		}

		let terminator = self.options.void_style.terminator();

		if let Some(tag) = attributes.self_closing_tag() {
			if content.is_present() {
				return Err(RenderError::SelfClosingWithContent {
					tag: tag.to_string(),
				});
			}
			out.push('<');
			out.push_str(tag);
			out.push_str(&attributes.to_string());
			out.push_str(terminator);
			return Ok(());
		}

		let tag = attributes.tag().unwrap_or(&*default_tag);
		out.push('<');
		out.push_str(tag);
		out.push_str(&attributes.to_string());

		match content {
			Content::Void => {
				out.push_str(terminator);
				return Ok(());
			}
			Content::Text(text) => {
				out.push('>');
				out.push_str(&html_escape(&text));
			}
			Content::Nodes(children) => {
				out.push('>');
				for child in children {
					self.render_node(child, depth + 1, out)?;
				}
			}
		}

		out.push_str("</");
		out.push_str(attributes.closing_tag().unwrap_or(tag));
		out.push('>');
		Ok(())
	}
}

/// Renders `root` with a fresh [`RenderContext`] and default options.
///
/// # Example
///
/// ```
/// use kindling_core::{Leaf, NodeExt, render};
///
/// let html = render(Leaf::element("p").child("Hello").class("lead")).unwrap();
/// assert_eq!(html, r#"<p class="lead">Hello</p>"#);
/// ```
pub fn render(root: impl IntoNode) -> Result<String> {
	RenderContext::new().render(root)
}
