//! Per-locale compiled pattern tables.

use medterm_core::dictionary::mappings;
use medterm_core::{EntityKey, Locale, TermMapping};
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;
use tracing::{info, warn};

/// One dictionary term compiled for scanning.
#[derive(Debug, Clone)]
pub struct CompiledPatternEntry {
    /// Case-insensitive matcher for the escaped literal term.
    pub pattern: Regex,
    /// The raw term the pattern was built from.
    pub term: &'static str,
    pub standard_term: &'static str,
    pub entity_key: Option<EntityKey>,
}

impl CompiledPatternEntry {
    pub fn new(
        term: &'static str,
        standard_term: &'static str,
        entity_key: Option<EntityKey>,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern,
            term,
            standard_term,
            entity_key,
        })
    }

    /// Length used for ordering, in characters.
    #[must_use]
    pub fn term_len(&self) -> usize {
        self.term.chars().count()
    }

    /// Whole-word occurrences of the term in `text`, as byte ranges.
    ///
    /// A candidate is rejected when an edge of the match and the character
    /// beside it in the text are both ASCII word characters, so "period"
    /// never matches inside "periodic" while "痛经" matches inside unspaced
    /// Chinese prose.
    pub fn occurrences<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        let mut pos = 0;
        std::iter::from_fn(move || {
            while let Some(found) = self.pattern.find_at(text, pos) {
                let (start, end) = (found.start(), found.end());
                if has_word_boundaries(text, start, end) {
                    pos = end;
                    return Some((start, end));
                }
                // Retry one character past the rejected start
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
            None
        })
    }
}

const fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let opens_word = matched.chars().next().is_some_and(is_ascii_word);
    let closes_word = matched.chars().next_back().is_some_and(is_ascii_word);
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !(opens_word && before.is_some_and(is_ascii_word))
        && !(closes_word && after.is_some_and(is_ascii_word))
}

/// Compile every term of every mapping for `locale`, longest first.
///
/// The sort is stable: terms of equal length keep dictionary order, so the
/// first-registered concept wins a tie.
fn build_table(locale: Locale) -> Vec<CompiledPatternEntry> {
    let mut entries: Vec<CompiledPatternEntry> = mappings()
        .iter()
        .flat_map(|mapping| compile_mapping(mapping, locale))
        .collect();

    entries.sort_by_key(|entry| Reverse(entry.term_len()));

    info!(
        "Compiled {} term patterns for locale {}",
        entries.len(),
        locale
    );
    entries
}

fn compile_mapping(mapping: &'static TermMapping, locale: Locale) -> Vec<CompiledPatternEntry> {
    let standard_term = mapping.standard_term.get(locale);
    mapping
        .terms(locale)
        .filter(|term| !term.trim().is_empty())
        .filter_map(|term| {
            CompiledPatternEntry::new(term, standard_term, mapping.entity_key)
                .inspect_err(|e| warn!("Skipping term '{}' ({}): {}", term, locale, e))
                .ok()
        })
        .collect()
}

/// Lazily built pattern tables, one per locale.
///
/// Each table is built on first request and then reused for the lifetime of
/// the cache; concurrent first requests still build only once.
#[derive(Debug, Default)]
pub struct PatternCache {
    tables: [OnceCell<Vec<CompiledPatternEntry>>; 2],
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted compiled entries for `locale`, building them on first use.
    #[must_use]
    pub fn entries_for(&self, locale: Locale) -> &[CompiledPatternEntry] {
        self.tables[locale.index()].get_or_init(|| build_table(locale))
    }

    #[must_use]
    pub fn is_compiled(&self, locale: Locale) -> bool {
        self.tables[locale.index()].get().is_some()
    }

    #[must_use]
    pub fn compiled_locales(&self) -> usize {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.is_compiled(*locale))
            .count()
    }

    #[cfg(test)]
    pub(crate) fn reset(&mut self) {
        for table in &mut self.tables {
            table.take();
        }
    }
}
