//! Marking recognized terms inside free text.

use medterm_core::dictionary::mappings;
use medterm_core::{EntityKey, Locale};
use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::patterns::{CompiledPatternEntry, PatternCache};

/// One accepted occurrence of a dictionary term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationMatch {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    pub matched_text: String,
    pub standard_term: &'static str,
    pub entity_key: Option<EntityKey>,
    /// Markup that replaces `matched_text`.
    pub replacement: String,
}

impl AnnotationMatch {
    fn new(entry: &CompiledPatternEntry, text: &str, start: usize, end: usize) -> Self {
        let matched_text = text[start..end].to_string();
        let replacement = wrap(entry.standard_term, entry.entity_key, &matched_text);
        Self {
            start,
            end,
            matched_text,
            standard_term: entry.standard_term,
            entity_key: entry.entity_key,
            replacement,
        }
    }
}

fn wrap(standard_term: &str, entity_key: Option<EntityKey>, original: &str) -> String {
    format!(
        r#"<span data-medical-term="{}" data-entity-key="{}">{}</span>"#,
        escape_attribute(standard_term),
        escape_attribute(key_attribute(entity_key)),
        original
    )
}

fn key_attribute(entity_key: Option<EntityKey>) -> &'static str {
    entity_key.map_or("", |key| key.as_str())
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Accepted matches for `text`, ordered by start offset.
///
/// Entries are tried in table order and every occurrence is checked against
/// the intervals accepted so far; an occurrence overlapping one of them is
/// dropped. With a longest-first table this keeps the most specific term.
#[must_use]
pub fn find_matches(text: &str, entries: &[CompiledPatternEntry]) -> Vec<AnnotationMatch> {
    let mut accepted: BTreeMap<usize, AnnotationMatch> = BTreeMap::new();

    for entry in entries {
        for (start, end) in entry.occurrences(text) {
            if overlaps_accepted(&accepted, start, end) {
                continue;
            }
            accepted.insert(start, AnnotationMatch::new(entry, text, start, end));
        }
    }

    accepted.into_values().collect()
}

/// Accepted intervals are disjoint, so the one with the greatest start below
/// `end` is the only candidate for overlapping `[start, end)`.
fn overlaps_accepted(accepted: &BTreeMap<usize, AnnotationMatch>, start: usize, end: usize) -> bool {
    accepted
        .range(..end)
        .next_back()
        .is_some_and(|(_, previous)| previous.end > start)
}

/// Rewrite `text` with every accepted match wrapped in metadata markup.
#[must_use]
pub fn annotate(text: &str, entries: &[CompiledPatternEntry]) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let matches = find_matches(text, entries);
    debug!("Annotating {} term occurrences", matches.len());

    // Highest offset first so earlier offsets stay valid
    let mut annotated = text.to_string();
    for m in matches.iter().rev() {
        annotated.replace_range(m.start..m.end, &m.replacement);
    }
    annotated
}

/// Undo [`annotate`] using the matches it applied.
///
/// `matches` must be what [`find_matches`] returned for the original text
/// with the same table; the result is then that text, byte for byte, even
/// when it already contained markup.
#[must_use]
pub fn restore(annotated: &str, matches: &[AnnotationMatch]) -> String {
    let mut original = String::with_capacity(annotated.len());
    let mut cursor = 0;
    let mut growth = 0;
    for m in matches {
        let at = m.start + growth;
        original.push_str(&annotated[cursor..at]);
        original.push_str(&m.matched_text);
        cursor = at + m.replacement.len();
        growth += m.replacement.len() - m.matched_text.len();
    }
    original.push_str(&annotated[cursor..]);
    original
}

static ANNOTATION_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Markup pattern is a literal covered by the strip tests"
)]
fn annotation_pattern() -> &'static Regex {
    ANNOTATION_PATTERN.get_or_init(|| {
        Regex::new(r#"<span data-medical-term="([^"]*)" data-entity-key="([^"]*)">([^<]*)</span>"#)
            .expect("Annotation markup pattern is a valid regex")
    })
}

/// Whether a span with these attribute values and contents is one
/// [`annotate`] could have written: the contents are a term of a concept
/// whose standard term and entity key fill the attributes.
fn is_term_wrapper(term_attr: &str, key_attr: &str, contents: &str) -> bool {
    let contents = contents.to_lowercase();
    mappings().iter().any(|mapping| {
        key_attribute(mapping.entity_key) == key_attr
            && Locale::ALL.into_iter().any(|locale| {
                escape_attribute(mapping.standard_term.get(locale)) == term_attr
                    && mapping
                        .terms(locale)
                        .any(|term| term.to_lowercase() == contents)
            })
    })
}

/// Remove the markup added by [`annotate`], leaving the original text.
///
/// Spans that do not wrap a dictionary term under its own standard term and
/// entity key are left alone, so unrelated markup in the input survives.
#[must_use]
pub fn strip_annotations(text: &str) -> String {
    annotation_pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            if is_term_wrapper(&caps[1], &caps[2], &caps[3]) {
                caps[3].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Annotator bound to its own pattern tables.
#[derive(Debug, Default)]
pub struct Annotator {
    patterns: PatternCache,
}

impl Annotator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn annotate(&self, text: &str, locale: Locale) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        annotate(text, self.patterns.entries_for(locale))
    }

    #[must_use]
    pub fn find_matches(&self, text: &str, locale: Locale) -> Vec<AnnotationMatch> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        find_matches(text, self.patterns.entries_for(locale))
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternCache {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &'static str, standard: &'static str) -> CompiledPatternEntry {
        CompiledPatternEntry::new(term, standard, None).unwrap()
    }

    #[test]
    fn empty_and_blank_input_unchanged() {
        let annotator = Annotator::new();
        assert_eq!(annotator.annotate("", Locale::En), "");
        assert_eq!(annotator.annotate(" \n\t", Locale::En), " \n\t");
        assert!(!annotator.patterns().is_compiled(Locale::En));
    }

    #[test]
    fn wraps_each_term_with_metadata() {
        let annotator = Annotator::new();
        let annotated = annotator.annotate("She has severe dysmenorrhea and PMS.", Locale::En);
        assert_eq!(
            annotated,
            "She has severe \
             <span data-medical-term=\"Dysmenorrhea\" data-entity-key=\"DYSMENORRHEA\">dysmenorrhea</span> \
             and \
             <span data-medical-term=\"Premenstrual Syndrome\" data-entity-key=\"PREMENSTRUAL_SYNDROME\">PMS</span>."
        );
    }

    #[test]
    fn missing_entity_key_renders_empty_attribute() {
        let annotator = Annotator::new();
        let annotated = annotator.annotate("Try a heating pad.", Locale::En);
        assert!(annotated.contains(
            r#"<span data-medical-term="Heat Therapy" data-entity-key="">heating pad</span>"#
        ));
    }

    #[test]
    fn longest_term_wins() {
        let annotator = Annotator::new();
        let matches = annotator.find_matches("Primary dysmenorrhea is common.", Locale::En);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].standard_term, "Primary Dysmenorrhea");
        assert_eq!(matches[0].matched_text, "Primary dysmenorrhea");
    }

    #[test]
    fn longest_term_wins_in_chinese() {
        let annotator = Annotator::new();
        let matches = annotator.find_matches("她的月经痛很严重", Locale::Zh);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_text, "月经痛");
        assert_eq!(matches[0].standard_term, "痛经");
    }

    #[test]
    fn equal_length_tie_goes_to_first_entry() {
        // Both terms claim the "y" in "x y z"
        let competing = [entry("x y", "First"), entry("y z", "Second")];
        let matches = find_matches("x y z", &competing);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].standard_term, "First");
        assert_eq!((matches[0].start, matches[0].end), (0, 3));

        let swapped = [entry("y z", "Second"), entry("x y", "First")];
        let matches = find_matches("x y z", &swapped);
        assert_eq!(matches[0].standard_term, "Second");
    }

    #[test]
    fn partial_words_are_not_matched() {
        let annotator = Annotator::new();
        let text = "The periodic review mentioned crampsx.";
        assert_eq!(annotator.annotate(text, Locale::En), text);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let entries = [entry("rx", "A \"quoted\" <term> & more")];
        let annotated = annotate("take rx now", &entries);
        assert_eq!(
            annotated,
            "take <span data-medical-term=\"A &quot;quoted&quot; &lt;term&gt; &amp; more\" data-entity-key=\"\">rx</span> now"
        );
    }

    #[test]
    fn strip_restores_original() {
        let annotator = Annotator::new();
        let text = "PMS, PMDD and endometriosis; 她有痛经和经前期综合征。";
        for locale in Locale::ALL {
            let annotated = annotator.annotate(text, locale);
            assert_eq!(strip_annotations(&annotated), text);
        }
    }

    #[test]
    fn strip_keeps_foreign_spans() {
        let annotator = Annotator::new();
        let text = r#"See <span data-medical-term="x" data-entity-key="">note</span> on PMS."#;
        let annotated = annotator.annotate(text, Locale::En);
        assert_ne!(annotated, text);
        assert_eq!(strip_annotations(&annotated), text);
    }

    #[test]
    fn strip_undoes_reannotation() {
        let annotator = Annotator::new();
        let once = annotator.annotate("She has PMS.", Locale::En);
        let twice = annotator.annotate(&once, Locale::En);
        assert_ne!(twice, once);
        assert_eq!(strip_annotations(&twice), once);
    }

    #[test]
    fn restore_inverts_annotate_with_markup_input() {
        let annotator = Annotator::new();
        let text = r#"<span data-medical-term="Premenstrual Syndrome" data-entity-key="PREMENSTRUAL_SYNDROME">PMS</span> and 痛经"#;
        for locale in Locale::ALL {
            let annotated = annotator.annotate(text, locale);
            let matches = annotator.find_matches(text, locale);
            assert_eq!(restore(&annotated, &matches), text);
        }
    }

    #[test]
    fn matches_are_ordered_by_offset() {
        let annotator = Annotator::new();
        let matches = annotator.find_matches("PMS first, then dysmenorrhea, then PMDD", Locale::En);
        let starts: Vec<usize> = matches.iter().map(|m| m.start).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(matches.len(), 3);
    }
}
