use regex::RegexBuilder;

use crate::Article;

/// A run of text, flagged when it matches the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }
}

/// Case-insensitive substring match against the id and all descriptive fields.
///
/// The term is used as typed, surrounding whitespace included.
pub fn matches_search(article: &Article, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    article
        .field_values()
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

pub fn filter_articles<'a>(articles: &'a [Article], term: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| matches_search(article, term))
        .collect()
}

/// Splits `text` into alternating unmatched/matched segments.
///
/// The term is matched literally and case-insensitively.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if term.is_empty() {
        return vec![Segment::plain(text)];
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        segments.push(Segment {
            text: found.as_str().to_string(),
            matched: true,
        });
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            id: "1".into(),
            title: "Test-Driven Development in Practice".into(),
            author: "Beck".into(),
            doi: Some("10.1000/TDD".into()),
            ..Article::default()
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert!(matches_search(&article(), "driven"));
        assert!(matches_search(&article(), "BECK"));
        assert!(matches_search(&article(), "10.1000/tdd"));
        assert!(!matches_search(&article(), "pair programming"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches_search(&article(), ""));
    }

    #[test]
    fn search_covers_the_article_id() {
        let mut article = article();
        article.id = "653f1c9e".into();
        assert!(matches_search(&article, "653F1C"));
    }

    #[test]
    fn term_whitespace_is_kept() {
        assert!(matches_search(&article(), "in practice"));
        assert!(!matches_search(&article(), " tdd"));
    }

    #[test]
    fn term_does_not_span_two_fields() {
        assert!(!matches_search(&article(), "practice beck"));
    }

    #[test]
    fn highlight_marks_every_occurrence() {
        let segments = highlight("Agile and agility", "AGIL");
        let flags: Vec<_> = segments.iter().map(|s| (s.text.as_str(), s.matched)).collect();
        assert_eq!(
            flags,
            vec![("Agil", true), ("e and ", false), ("agil", true), ("ity", false)]
        );
    }

    #[test]
    fn highlight_treats_term_literally() {
        let segments = highlight("C++ (and C)", "(and");
        assert_eq!(segments.len(), 3);
        assert!(segments[1].matched);
        assert_eq!(segments[1].text, "(and");
    }

    #[test]
    fn highlight_without_term_returns_whole_text() {
        assert_eq!(highlight("abc", ""), vec![Segment::plain("abc")]);
        assert!(highlight("", "abc").is_empty());
    }
}
