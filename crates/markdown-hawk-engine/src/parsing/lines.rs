/// Tab stops are every four columns.
pub const TAB_WIDTH: usize = 4;

/// Characters trimmed from line ends, table cells and list item markup.
pub const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// A single input line after tab expansion.
///
/// `text` is `body` without its leading spaces; `indent` counts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub body: String,
    pub indent: usize,
    pub text: String,
}

impl Line {
    /// Expands tabs in `raw` and measures its indent.
    pub fn new(raw: &str) -> Self {
        let body = expand_tabs(raw);
        let indent = body.bytes().take_while(|&b| b == b' ').count();
        let text = body[indent..].to_string();
        Self { body, indent, text }
    }

    /// First character of the unindented text.
    pub fn marker(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// The body with up to `max` leading spaces removed.
    pub fn dedent(&self, max: usize) -> &str {
        &self.body[self.indent.min(max)..]
    }
}

/// Pads each tab to the next four-column stop, counting code points.
pub fn expand_tabs(raw: &str) -> String {
    if !raw.contains('\t') {
        return raw.to_string();
    }

    let mut parts = raw.split('\t');
    let mut line = parts.next().unwrap_or_default().to_string();
    let mut columns = line.chars().count();

    for part in parts {
        let shortage = TAB_WIDTH - columns % TAB_WIDTH;
        line.extend(std::iter::repeat_n(' ', shortage));
        line.push_str(part);
        columns += shortage + part.chars().count();
    }

    line
}

/// A line with nothing but trailing whitespace is blank.
pub fn is_blank(raw: &str) -> bool {
    raw.trim_end_matches(WHITESPACE).is_empty()
}

/// Normalizes line endings, drops surrounding line breaks and splits.
pub fn split_document(document: &str) -> Vec<String> {
    let normalized = document.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .trim_matches('\n')
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\tcode", "    code")]
    #[case("a\tb", "a   b")]
    #[case("abcd\te", "abcd    e")]
    #[case("ab\t\tc", "ab      c")]
    #[case("no tabs", "no tabs")]
    fn expands_tabs_to_four_column_stops(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(expand_tabs(raw), expected);
    }

    #[test]
    fn tab_stops_count_code_points_not_bytes() {
        // "é" is two bytes but one column.
        assert_eq!(expand_tabs("é\tx"), "é   x");
    }

    #[test]
    fn measures_indent() {
        let line = Line::new("   - item");
        assert_eq!(line.indent, 3);
        assert_eq!(line.text, "- item");
        assert_eq!(line.body, "   - item");
        assert_eq!(line.marker(), Some('-'));
    }

    #[test]
    fn tab_indent_becomes_spaces() {
        let line = Line::new("\tcode");
        assert_eq!(line.indent, 4);
        assert_eq!(line.text, "code");
    }

    #[test]
    fn dedent_stops_at_indent() {
        let line = Line::new("      deep");
        assert_eq!(line.dedent(4), "  deep");
        let line = Line::new("  shallow");
        assert_eq!(line.dedent(4), "shallow");
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case(" \t \r", true)]
    #[case(" x ", false)]
    fn blank_lines(#[case] raw: &str, #[case] blank: bool) {
        assert_eq!(is_blank(raw), blank);
    }

    #[test]
    fn split_normalizes_line_endings() {
        assert_eq!(split_document("a\r\nb\rc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_trims_surrounding_breaks_only() {
        assert_eq!(split_document("\n\n  a\n\nb\n\n"), vec!["  a", "", "b"]);
    }

    #[test]
    fn split_empty_document() {
        assert_eq!(split_document(""), vec![""]);
    }
}
