//! Extension to content-type lookup for served files.

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("json", "application/json"),
    ("gif", "image/gif"),
    ("html", "text/html"),
];

pub const HTML: &str = "text/html";

/// Looks up the content type for a file extension (without the dot).
///
/// Matching is exact, so `JS` is not `js`. Unmapped extensions give `None`.
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_extensions() {
        assert_eq!(content_type_for("js"), Some("application/javascript"));
        assert_eq!(content_type_for("gif"), Some("image/gif"));
        assert_eq!(content_type_for("xyz"), None);
        assert_eq!(content_type_for("JS"), None);
    }
}
