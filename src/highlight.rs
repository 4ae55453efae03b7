//! Match highlighting.
//!
//! The highlighter splits an entry into plain and highlighted segments. All
//! query terms go into a single case-insensitive alternation; each term is
//! escaped first, so user input never changes the pattern's structure.
//! Renderers compose the segments into styled spans; `markup` exists for
//! plain-text consumers (the CLI) and only ever adds `<mark>` wrappers.

use crate::search::Query;
use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// A slice of the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Highlight(s) => s,
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Segment::Highlight(_))
    }
}

/// Highlighter compiled for one query
#[derive(Debug, Clone)]
pub struct Highlighter {
    query: Query,
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(raw_query: &str) -> crate::Result<Self> {
        Self::from_query(Query::parse(raw_query))
    }

    pub fn from_query(query: Query) -> crate::Result<Self> {
        if query.is_empty() {
            return Ok(Self {
                query,
                pattern: None,
            });
        }

        // Longest first: at any position the alternation takes the first
        // alternative that matches, so "hello" must be tried before "hell".
        let mut terms: Vec<&str> = query.terms().iter().map(String::as_str).collect();
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        terms.dedup();

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            query,
            pattern: Some(pattern),
        })
    }

    /// Split `text` into segments. Text that does not contain every term
    /// comes back as a single plain segment.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let pattern = match &self.pattern {
            Some(p) if self.query.matches(text) => p,
            _ => return vec![Segment::Plain(text)],
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::Plain(&text[last..m.start()]));
            }
            segments.push(Segment::Highlight(m.as_str()));
            last = m.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(Segment::Plain(&text[last..]));
        }
        segments
    }

    /// Render `text` with every highlighted segment wrapped in `<mark>`.
    pub fn markup(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in self.segments(text) {
            match segment {
                Segment::Plain(s) => out.push_str(s),
                Segment::Highlight(s) => {
                    out.push_str(MARK_OPEN);
                    out.push_str(s);
                    out.push_str(MARK_CLOSE);
                }
            }
        }
        out
    }
}

/// Highlight `text` for `query` as markup.
///
/// Never fails: if the pattern cannot be built the text is returned as is.
pub fn highlight(text: &str, query: &str) -> String {
    match Highlighter::new(query) {
        Ok(h) => h.markup(text),
        Err(e) => {
            log::warn!(target: "highlight", "falling back to plain text: {}", e);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text()).collect()
    }

    #[test]
    fn empty_query_returns_text_unchanged() {
        assert_eq!(highlight("Hello World", ""), "Hello World");
        assert_eq!(highlight("Hello World", "   "), "Hello World");
    }

    #[test]
    fn preserves_original_case() {
        assert_eq!(
            highlight("Hello World", "hello"),
            "<mark>Hello</mark> World"
        );
    }

    #[test]
    fn wraps_every_occurrence_of_every_term() {
        assert_eq!(
            highlight("abc ABC xbc", "b c"),
            "a<mark>b</mark><mark>c</mark> A<mark>B</mark><mark>C</mark> x<mark>b</mark><mark>c</mark>"
        );
    }

    #[test]
    fn longest_term_wins_at_same_position() {
        assert_eq!(highlight("hello", "hell hello"), "<mark>hello</mark>");
    }

    #[test]
    fn non_matching_text_is_unchanged() {
        assert_eq!(highlight("hello", "hello world"), "hello");
    }

    #[test]
    fn metacharacters_do_not_break_the_pattern() {
        assert_eq!(highlight("f(x) + 1", "("), "f<mark>(</mark>x) + 1");
        assert_eq!(highlight("a.b", "."), "a<mark>.</mark>b");
        assert_eq!(highlight("axb", "."), "axb");
        assert!(Highlighter::new("[unclosed \\ ) *").is_ok());
    }

    #[test]
    fn segments_reassemble_to_original() {
        let h = Highlighter::new("o W").unwrap();
        let text = "Hello World, wow";
        let segments = h.segments(text);
        assert_eq!(concat(&segments), text);
        assert!(segments.iter().any(|s| s.is_highlight()));
    }

    #[test]
    fn segments_at_boundaries() {
        let h = Highlighter::new("ab").unwrap();
        assert_eq!(
            h.segments("abxab"),
            vec![
                Segment::Highlight("ab"),
                Segment::Plain("x"),
                Segment::Highlight("ab"),
            ]
        );
    }

    #[test]
    fn whole_text_match_is_one_segment() {
        let h = Highlighter::new("abc").unwrap();
        assert_eq!(h.segments("ABC"), vec![Segment::Highlight("ABC")]);
    }

    #[test]
    fn existing_angle_brackets_pass_through() {
        assert_eq!(highlight("<b>x</b>", "x"), "<b><mark>x</mark></b>");
    }
}
