use medterm_core::dictionary::TermSummary;
use medterm_core::{Locale, get_related_terms, resolve};

use super::Context;

/// A single term and the locale to answer in.
pub struct TermInput {
    pub term: String,
    pub locale: Locale,
    pub ctx: Context,
}

pub struct StandardizeInput {
    pub term: String,
    pub locale: Locale,
    /// Print the resolved concept as JSON instead of plain text.
    pub json: bool,
    pub ctx: Context,
}

/// Prints the canonical term, followed by its entity key when it has one.
#[derive(Debug, Clone, Copy)]
pub struct StandardizeStrategy;

impl super::CommandStrategy for StandardizeStrategy {
    type Input = StandardizeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.json {
            let summary = resolve(&input.term, input.locale)
                .map(|mapping| TermSummary::new(mapping, input.locale));
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        let engine = &input.ctx.engine;
        let standard = engine.standardize_medical_term(&input.term, input.locale);
        let entity = engine
            .get_term_entity_key(&standard)
            .map(|key| format!(" ({key})"))
            .unwrap_or_default();
        println!("{standard}{entity}");

        let related = get_related_terms(&input.term, input.locale);
        if !related.is_empty() {
            println!("Related: {}", related.join(", "));
        }
        Ok(())
    }
}

/// Prints the standard term and every synonym, one per line.
#[derive(Debug, Clone, Copy)]
pub struct SynonymsStrategy;

impl super::CommandStrategy for SynonymsStrategy {
    type Input = TermInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let synonyms = input
            .ctx
            .engine
            .get_medical_term_synonyms(&input.term, input.locale);
        for synonym in synonyms {
            println!("{synonym}");
        }
        Ok(())
    }
}

pub struct EquivalentInput {
    pub term_a: String,
    pub term_b: String,
    pub ctx: Context,
}

/// Prints `true` when both terms name the same concept.
#[derive(Debug, Clone, Copy)]
pub struct EquivalentStrategy;

impl super::CommandStrategy for EquivalentStrategy {
    type Input = EquivalentInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let equivalent = input.ctx.engine.terms_equivalent(&input.term_a, &input.term_b);
        println!("{equivalent}");
        Ok(())
    }
}
