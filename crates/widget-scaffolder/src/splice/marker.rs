//! Insertion markers inside aggregator files

use std::fmt;

/// Token every marker comment carries
pub const MARKER_TOKEN: &str = "[generator]";

/// A `[generator]` comment written in one comment syntax.
///
/// A line is a marker when, trimmed, it is `{open}`, optional spaces,
/// `[generator]`, optional spaces, `{close}`. Nothing else may share the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    open: &'static str,
    close: &'static str,
}

impl Marker {
    /// `// [generator]` in JavaScript modules
    pub const LINE_COMMENT: Marker = Marker {
        open: "//",
        close: "",
    };

    /// `/* [generator] */` in stylesheets
    pub const BLOCK_COMMENT: Marker = Marker {
        open: "/*",
        close: "*/",
    };

    /// `<!-- [generator] -->` in HTML
    pub const HTML_COMMENT: Marker = Marker {
        open: "<!--",
        close: "-->",
    };

    /// Whether `line` (without its line ending) is this marker
    pub fn matches(&self, line: &str) -> bool {
        line.trim()
            .strip_prefix(self.open)
            .and_then(|rest| rest.strip_suffix(self.close))
            .is_some_and(|inner| inner.trim() == MARKER_TOKEN)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.close.is_empty() {
            write!(f, "{} {}", self.open, MARKER_TOKEN)
        } else {
            write!(f, "{} {} {}", self.open, MARKER_TOKEN, self.close)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_spacing_variants() {
        let marker = Marker::LINE_COMMENT;
        assert!(marker.matches("// [generator]"));
        assert!(marker.matches("//[generator]"));
        assert!(marker.matches("    //   [generator]   "));
        assert!(!marker.matches("// [generator] extra"));
        assert!(!marker.matches("foo(); // [generator]"));
        assert!(!marker.matches("/* [generator] */"));
    }

    #[test]
    fn test_block_and_html_comments() {
        assert!(Marker::BLOCK_COMMENT.matches("/* [generator] */"));
        assert!(Marker::BLOCK_COMMENT.matches("/*[generator]*/"));
        assert!(!Marker::BLOCK_COMMENT.matches("/* [generator]"));
        assert!(Marker::HTML_COMMENT.matches("        <!-- [generator] -->"));
        assert!(!Marker::HTML_COMMENT.matches("<!-- generator -->"));
    }

    #[test]
    fn test_display_is_canonical_form() {
        assert_eq!(Marker::LINE_COMMENT.to_string(), "// [generator]");
        assert_eq!(Marker::BLOCK_COMMENT.to_string(), "/* [generator] */");
        assert_eq!(Marker::HTML_COMMENT.to_string(), "<!-- [generator] -->");
    }
}
