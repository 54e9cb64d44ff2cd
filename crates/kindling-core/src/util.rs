//! Escaping and name validation helpers shared by the bag and the renderer.

use std::borrow::Cow;

use crate::error::MarkupError;

fn html_entity(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}

/// Replaces `& < > " '` with their entities so the value is safe both as
/// element text and inside a double-quoted attribute.
///
/// Input without any of those characters is returned as is, without
/// allocating.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(|c| html_entity(c).is_some()) else {
		return Cow::Borrowed(s);
	};
	let mut escaped = String::with_capacity(s.len() + 8);
	escaped.push_str(&s[..first]);
	for c in s[first..].chars() {
		match html_entity(c) {
			Some(entity) => escaped.push_str(entity),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes a value for use inside a single-quoted JavaScript string literal.
pub(crate) fn js_string_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['\\', '\'', '\n', '\r']) {
		let mut escaped = String::with_capacity(s.len() + 4);
		for c in s.chars() {
			match c {
				'\\' => escaped.push_str("\\\\"),
				'\'' => escaped.push_str("\\'"),
				'\n' => escaped.push_str("\\n"),
				'\r' => escaped.push_str("\\r"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// HTML void elements: rendered without children and without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns `true` if `tag` names an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& !name
			.chars()
			.any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

/// Validates a tag name.
pub fn validate_tag_name(tag: &str) -> Result<(), MarkupError> {
	if is_valid_name(tag) {
		Ok(())
	} else {
		Err(MarkupError::InvalidTagName(tag.to_string()))
	}
}

/// Validates an attribute name (custom attributes and `data-`/`aria-` keys).
pub fn validate_attribute_name(name: &str) -> Result<(), MarkupError> {
	if is_valid_name(name) {
		Ok(())
	} else {
		Err(MarkupError::InvalidAttributeName(name.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_html_escape_no_special_chars() {
		assert_eq!(html_escape("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	fn test_html_escape_all_special_chars() {
		assert_eq!(
			html_escape("<a href=\"x\">Tom & 'Jerry'</a>"),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
		);
	}

	#[rstest]
	#[case("plain text", "plain text")]
	#[case("café <b>", "café &lt;b&gt;")]
	#[case("a&b", "a&amp;b")]
	fn test_html_escape_keeps_text_around_entities(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	fn test_html_escape_borrows_clean_input() {
		assert!(matches!(html_escape("nothing to do"), Cow::Borrowed(_)));
		assert!(matches!(html_escape("one > two"), Cow::Owned(_)));
	}

	#[rstest]
	fn test_js_string_escape() {
		assert_eq!(js_string_escape("plain"), Cow::Borrowed("plain"));
		assert_eq!(js_string_escape("it's"), "it\\'s");
		assert_eq!(js_string_escape("a\\b\nc"), "a\\\\b\\nc");
	}

	#[rstest]
	#[case("img", true)]
	#[case("br", true)]
	#[case("wbr", true)]
	#[case("div", false)]
	#[case("span", false)]
	fn test_is_void_element(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_void_element(tag), expected);
	}

	#[rstest]
	#[case("div")]
	#[case("my-widget")]
	#[case("h1")]
	fn test_validate_tag_name_accepts(#[case] tag: &str) {
		assert!(validate_tag_name(tag).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("di v")]
	#[case("div>")]
	#[case("a=b")]
	#[case("x/y")]
	fn test_validate_tag_name_rejects(#[case] tag: &str) {
		assert_eq!(
			validate_tag_name(tag),
			Err(MarkupError::InvalidTagName(tag.to_string()))
		);
	}

	#[rstest]
	fn test_validate_attribute_name() {
		assert!(validate_attribute_name("data-toggle").is_ok());
		assert!(validate_attribute_name("hx-get").is_ok());
		assert!(validate_attribute_name("on\"click").is_err());
	}
}
