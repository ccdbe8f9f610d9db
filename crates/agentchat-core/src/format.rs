use regex::Regex;
use std::sync::OnceLock;

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| {
        Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]+?)\*\*").expect("bold pattern is valid")
    })
}

/// Turn assistant text into display markup.
///
/// Each `**span**` becomes `<strong>span</strong>` (shortest match, scanned
/// left to right, spans do not cross `\n`, `\r`, U+2028 or U+2029), then
/// every `\n` becomes `<br>`.
/// Nothing is escaped here; see [`escape_html`].
pub fn format_message(text: &str) -> String {
    bold_pattern()
        .replace_all(text, "<strong>${1}</strong>")
        .replace('\n', "<br>")
}

/// Escape HTML to prevent markup injection
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bold_and_line_break() {
        assert_eq!(
            format_message("**bold** text\nline2"),
            "<strong>bold</strong> text<br>line2"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_message("no markup"), "no markup");
    }

    #[test]
    fn test_multiple_spans_are_non_greedy() {
        assert_eq!(
            format_message("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_span_line_terminators() {
        assert_eq!(format_message("**a\rb**"), "**a\rb**");
        assert_eq!(format_message("**a\u{2028}b**"), "**a\u{2028}b**");
        assert_eq!(format_message("**a\nb**"), "**a<br>b**");
        assert_eq!(format_message("**a\tb**"), "<strong>a\tb</strong>");
    }

    #[test]
    fn test_unpaired_marker_left_alone() {
        assert_eq!(format_message("**open only"), "**open only");
        assert_eq!(format_message("****"), "****");
    }

    #[test]
    fn test_nested_markers_pair_first_closing() {
        assert_eq!(
            format_message("**a **b** c**"),
            "<strong>a </strong>b<strong> c</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(format_message("**a\nb**"), "**a<br>b**");
    }

    #[test]
    fn test_markup_passes_through() {
        assert_eq!(format_message("<em>x</em>"), "<em>x</em>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
