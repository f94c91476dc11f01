//! Splits the raw document into the global preamble and the ordered slide
//! bodies. A delimiter is a line holding nothing but three or more equals
//! signs, with optional surrounding whitespace.

use std::sync::LazyLock;

use regex::Regex;

static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*={3,}\s*$").expect("delimiter pattern"));

/// The raw document cut at its delimiter lines, nothing parsed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDocument {
    /// Text before the first delimiter; empty when the document starts with
    /// one.
    pub global_content: String,
    /// One entry per span between delimiters (and after the last), in
    /// order. Empty spans stay as empty strings; later stages normalize
    /// them to slides with no content.
    pub slides: Vec<String>,
}

pub fn split(raw: &str) -> SplitDocument {
    let mut segments: Vec<Vec<&str>> = vec![vec![]];

    for line in raw.lines() {
        if DELIMITER_RE.is_match(line) {
            segments.push(vec![]);
        } else {
            segments
                .last_mut()
                .expect("segments list is never empty")
                .push(line);
        }
    }

    let mut segments = segments.into_iter().map(|lines| lines.join("\n"));
    let global_content = segments.next().unwrap_or_default();

    SplitDocument {
        global_content,
        slides: segments.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn one_delimiter_yields_global_and_one_slide() {
        let doc = split("Global\n===\n# Slide Content\n");
        assert_eq!(doc.global_content, "Global");
        assert_eq!(doc.slides, vec!["# Slide Content".to_string()]);
    }

    #[test]
    fn no_delimiter_yields_zero_slides() {
        let doc = split("just some text\nover two lines");
        assert_eq!(doc.global_content, "just some text\nover two lines");
        assert!(doc.slides.is_empty());
    }

    #[test]
    fn leading_delimiter_leaves_global_empty() {
        let doc = split("===\nfirst slide");
        assert_eq!(doc.global_content, "");
        assert_eq!(doc.slides, vec!["first slide".to_string()]);
    }

    #[test]
    fn consecutive_delimiters_produce_an_empty_slide() {
        let doc = split("g\n===\n===\nlast");
        assert_eq!(doc.global_content, "g");
        assert_eq!(doc.slides, vec!["".to_string(), "last".to_string()]);
    }

    #[rstest]
    #[case("===")]
    #[case("====")]
    #[case("  ===  ")]
    #[case("\t=====")]
    fn delimiter_line_shapes(#[case] line: &str) {
        let doc = split(&format!("a\n{line}\nb"));
        assert_eq!(doc.slides.len(), 1);
    }

    #[rstest]
    #[case("==")]
    #[case("=== x")]
    #[case("x ===")]
    #[case("= = =")]
    fn non_delimiter_lines_are_content(#[case] line: &str) {
        let doc = split(&format!("a\n{line}\nb"));
        assert!(doc.slides.is_empty());
    }

    #[test]
    fn slides_keep_interior_lines_untrimmed() {
        let doc = split("===\n  indented\n\nsecond para");
        assert_eq!(doc.slides[0], "  indented\n\nsecond para");
    }
}
