//! Generic HTML attributes attached to a container.
//!
//! Attributes come from the `{#id .class key="value"}` shorthand an upstream
//! parser finds on the fence line, or are built programmatically.

/// Ordered set of generic HTML attributes.
///
/// Serialized by [`HtmlWriter::write_attributes`](crate::HtmlWriter::write_attributes)
/// as `id`, then `class`, then the remaining properties in declared order.
///
/// # Example
///
/// ```
/// use mdc_renderer::HtmlAttributes;
///
/// let attrs = HtmlAttributes::parse(r#"#tip .note .wide lang="en""#);
/// assert_eq!(attrs.id.as_deref(), Some("tip"));
/// assert_eq!(attrs.classes, vec!["note", "wide"]);
/// assert_eq!(attrs.get("lang"), Some("en"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlAttributes {
    /// Element ID: `#id`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,
    /// CSS classes: `.class`, in declared order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub classes: Vec<String>,
    /// Other attributes: `key="value"`, in declared order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub properties: Vec<(String, String)>,
}

impl HtmlAttributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a CSS class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a property, keeping the position of an existing key.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name.into(), value.into());
        self
    }

    fn set_property(&mut self, name: String, value: String) {
        if let Some(slot) = self.properties.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
    }

    /// Get a property value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no attribute would be serialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.properties.is_empty()
    }

    /// Parse the attribute shorthand (without surrounding braces).
    ///
    /// Supports `#id`, `.class`, `key="value"`, `key='value'` and `key=value`.
    /// Anything else is skipped one character at a time; parsing never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut attrs = Self::default();
        let mut remaining = input.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();

            if let Some(rest) = remaining.strip_prefix('#') {
                let end = name_end(rest);
                if end > 0 {
                    attrs.id = Some(rest[..end].to_owned());
                }
                remaining = &rest[end..];
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let end = name_end(rest);
                if end > 0 {
                    attrs.classes.push(rest[..end].to_owned());
                }
                remaining = &rest[end..];
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                attrs.set_property(key.to_owned(), value.to_owned());
                remaining = rest;
            } else {
                let skip = remaining.chars().next().map_or(0, char::len_utf8);
                remaining = &remaining[skip..];
            }
        }

        attrs
    }
}

/// Length of an id/class name: up to whitespace or the next `.`/`#`.
fn name_end(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len())
}

/// Parse `key="value"`, `key='value'` or `key=value` at the start of `s`.
///
/// Returns `(key, value, rest)`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let key_end = s.find(|c: char| c == '=' || c.is_whitespace())?;
    if !s[key_end..].starts_with('=') {
        return None;
    }

    let key = &s[..key_end];
    if key.is_empty() || key.starts_with('#') || key.starts_with('.') {
        return None;
    }

    let after_eq = &s[key_end + 1..];

    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end_quote = stripped.find(quote)?;
            return Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}
