//! Outgoing message validation and sanitation.

/// Longest message the widget will send, in characters.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Trim surrounding whitespace, drop control characters, and cap the
/// length. Returns an empty string for input that reduces to nothing
/// (callers treat that as a silent no-op).
pub fn sanitize_outgoing(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_MESSAGE_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_outgoing("  hello  "), "hello");
    }

    #[test]
    fn test_whitespace_only_reduces_to_empty() {
        assert_eq!(sanitize_outgoing("   "), "");
        assert_eq!(sanitize_outgoing("\t\n"), "");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize_outgoing("a\rb\x00c"), "abc");
    }

    #[test]
    fn test_caps_length() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 50);
        assert_eq!(sanitize_outgoing(&long).len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_interior_spacing_is_preserved() {
        assert_eq!(sanitize_outgoing("hello   world"), "hello   world");
    }
}
