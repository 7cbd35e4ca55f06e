//! Pattern Extractor
//!
//! Stateless vocabulary matching over free text. Returns which terms occur and
//! where, so callers can pull out the sentence around a hit.
//!
//! ## Matching rules
//! - ASCII case-insensitive
//! - A hit must sit on word boundaries; a trailing plural `s` is tolerated
//!   ("backup" matches "backups")
//! - Multi-word terms match literally, including inner spaces

/// One vocabulary hit in the scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    /// Term as stored in the extractor (lowercase)
    pub term: String,
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
}

/// Compiled vocabulary matcher
#[derive(Debug, Clone, Default)]
pub struct PatternExtractor {
    terms: Vec<String>,
}

impl PatternExtractor {
    /// Terms are lowercased and deduplicated; blanks are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_ascii_lowercase();
            if !term.is_empty() && !seen.contains(&term) {
                seen.push(term);
            }
        }
        Self { terms: seen }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every hit of every term, ordered by position
    pub fn find_all(&self, text: &str) -> Vec<TermMatch> {
        let haystack = text.to_ascii_lowercase();
        let mut matches: Vec<TermMatch> = self
            .terms
            .iter()
            .flat_map(|term| {
                haystack
                    .match_indices(term.as_str())
                    .filter_map(|(start, _)| {
                        bounded_end(&haystack, start, term.len()).map(|end| TermMatch {
                            term: term.clone(),
                            start,
                            end,
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        matches
    }

    /// Earliest hit of any term
    pub fn first_match(&self, text: &str) -> Option<TermMatch> {
        self.find_all(text).into_iter().next()
    }

    /// Distinct terms present, in vocabulary order
    pub fn found_terms(&self, text: &str) -> Vec<&str> {
        let haystack = text.to_ascii_lowercase();
        self.terms
            .iter()
            .filter(|term| occurs(&haystack, term))
            .map(String::as_str)
            .collect()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        let haystack = text.to_ascii_lowercase();
        self.terms.iter().any(|term| occurs(&haystack, term))
    }

    /// Total hits across all terms
    pub fn count(&self, text: &str) -> usize {
        self.find_all(text).len()
    }
}

fn occurs(haystack: &str, term: &str) -> bool {
    haystack
        .match_indices(term)
        .any(|(start, _)| bounded_end(haystack, start, term.len()).is_some())
}

/// End offset of a hit when it sits on word boundaries
fn bounded_end(haystack: &str, start: usize, len: usize) -> Option<usize> {
    let bytes = haystack.as_bytes();
    if start > 0 && is_word_byte(bytes[start - 1]) {
        return None;
    }
    let mut end = start + len;
    if end < bytes.len() && is_word_byte(bytes[end]) {
        // plural tolerance: "backup" -> "backups"
        if bytes[end] == b's' && (end + 1 == bytes.len() || !is_word_byte(bytes[end + 1])) {
            end += 1;
        } else {
            return None;
        }
    }
    Some(end)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// =============================================================================
// Sentence Helpers
// =============================================================================

/// A sentence span within a larger text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split on `.`, `!` or `?` followed by whitespace or end of text, and on
/// line breaks. Returned sentences are trimmed and never empty.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut seg_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let boundary = match c {
            '\n' | '\r' => Some(idx),
            '.' | '!' | '?' => match chars.peek() {
                None => Some(idx + 1),
                Some((_, next)) if next.is_whitespace() => Some(idx + 1),
                _ => None,
            },
            _ => None,
        };

        if let Some(cut) = boundary {
            push_trimmed(text, seg_start, cut, &mut sentences);
            seg_start = if matches!(c, '\n' | '\r') { idx + 1 } else { cut };
        }
    }
    push_trimmed(text, seg_start, text.len(), &mut sentences);
    sentences
}

fn push_trimmed<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Sentence<'a>>) {
    if start >= end {
        return;
    }
    let raw = &text[start..end];
    let trimmed_start = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let s = start + trimmed_start;
    out.push(Sentence {
        text: trimmed,
        start: s,
        end: s + trimmed.len(),
    });
}

/// Sentence whose span covers `offset`
pub fn sentence_containing<'a>(sentences: &[Sentence<'a>], offset: usize) -> Option<Sentence<'a>> {
    sentences
        .iter()
        .find(|s| s.start <= offset && offset < s.end)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_normalized() {
        let extractor = PatternExtractor::new(["Backup", "backup", " ", "Key Vault"]);
        assert_eq!(extractor.terms(), ["backup", "key vault"]);
    }

    #[test]
    fn test_word_boundaries_and_plural() {
        let extractor = PatternExtractor::new(["backup", "sql"]);
        assert!(extractor.contains_any("Nightly backups are kept"));
        assert!(!extractor.contains_any("the backupservice runs"));
        assert!(!extractor.contains_any("nosql store"));
        assert!(extractor.contains_any("Azure SQL Database"));
    }

    #[test]
    fn test_find_all_is_positional() {
        let extractor = PatternExtractor::new(["monitor", "cdn"]);
        let text = "CDN in front, monitor everything, another CDN";
        let hits = extractor.find_all(text);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].term, "cdn");
        assert_eq!(hits[0].start, 0);
        assert_eq!(hits[1].term, "monitor");
        assert_eq!(&text[hits[1].start..hits[1].end], "monitor");
    }

    #[test]
    fn test_found_terms_in_vocabulary_order() {
        let extractor = PatternExtractor::new(["retry", "circuit breaker", "timeout"]);
        let found = extractor.found_terms("Timeouts and a circuit breaker protect calls");
        assert_eq!(found, vec!["circuit breaker", "timeout"]);
        assert_eq!(extractor.count("retry retry"), 2);
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let extractor = PatternExtractor::new(["cache"]);
        let hits = extractor.find_all("Données en cache — très rapide");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_split_sentences() {
        let text = "First one. Second v1.2 here!\n- bullet line\nLast?";
        let sentences: Vec<&str> = split_sentences(text).iter().map(|s| s.text).collect();
        assert_eq!(
            sentences,
            vec!["First one.", "Second v1.2 here!", "- bullet line", "Last?"]
        );
    }

    #[test]
    fn test_sentence_containing_offset() {
        let text = "Alpha beta. Gamma delta.";
        let sentences = split_sentences(text);
        let offset = text.find("delta").unwrap();
        assert_eq!(
            sentence_containing(&sentences, offset).unwrap().text,
            "Gamma delta."
        );
        assert!(sentence_containing(&sentences, text.len() + 5).is_none());
    }
}
