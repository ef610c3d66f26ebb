use serde::Serialize;

/// A run of inline content within a title or bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TextSegment {
    /// Regular text content, markup left as written.
    Text(String),
    /// A hyperlink in either dialect.
    Link { label: String, href: String },
}
