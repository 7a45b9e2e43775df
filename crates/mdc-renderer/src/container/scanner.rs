//! Bound-delimited value scanner.
//!
//! Pulls a single `key<open>value<close>` value out of free-form text. This is
//! intentionally not an attribute-syntax parser: it looks for the first
//! occurrence of the key and the first delimiters after it, and degrades to
//! "rest of the text" when the closing delimiter is missing.

/// Extract the value following `key` and bounded by `open` / `close`.
///
/// - The value starts right after the first `open` found after `key`.
/// - It ends at the first `close` after that, or at the end of `text` when
///   `close` is empty or never appears.
/// - `\n` and `\r` are removed from the value.
/// - With `include_delims`, `open` is prepended and `close` appended; `close`
///   is only appended when it actually terminated the value.
///
/// Returns `None` when `key` is not in `text` or no `open` follows it.
///
/// # Example
///
/// ```
/// use mdc_renderer::extract_value;
///
/// let args = r#"alt-text="A cat" source="cat.png""#;
/// assert_eq!(extract_value(args, "source=", "\"", "\"", true).as_deref(), Some(r#""cat.png""#));
/// assert_eq!(extract_value(args, "alt-text=", "\"", "\"", false).as_deref(), Some("A cat"));
/// assert_eq!(extract_value(args, "border=", "\"", "\"", true), None);
/// ```
#[must_use]
pub fn extract_value(
    text: &str,
    key: &str,
    open: &str,
    close: &str,
    include_delims: bool,
) -> Option<String> {
    let after_key = &text[text.find(key)? + key.len()..];

    let Some(open_at) = after_key.find(open) else {
        tracing::trace!(key, "no opening delimiter after key");
        return None;
    };
    let rest = &after_key[open_at + open.len()..];

    let (value, terminated) = match rest.find(close) {
        Some(end) if !close.is_empty() => (&rest[..end], true),
        _ => (rest, false),
    };

    let mut out = String::with_capacity(open.len() + value.len() + close.len());
    if include_delims {
        out.push_str(open);
    }
    out.extend(value.chars().filter(|&c| c != '\n' && c != '\r'));
    if include_delims && terminated {
        out.push_str(close);
    }

    Some(out)
}
