use chrono::NaiveDate;
use medterm_core::dictionary::mappings;
use medterm_core::{Citation, CitationKey, EntityKey, Locale, Result, TermMapping};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::page::{
    CreativeWork, MedicalAudience, MedicalCodeBlock, MedicalEntityBlock, MedicalWebPage,
    Organization, SCHEMA_CONTEXT,
};

/// Reviewer named when the caller does not supply one.
pub const DEFAULT_REVIEWER: &str = "Medical Review Board";

/// Inputs for one page description.
///
/// `condition` is an entity key such as `"DYSMENORRHEA"` and `citations`
/// holds citation keys such as `"nhs-period-pain"`; both are parsed leniently
/// with respect to case and `-`/`_`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
    pub title: String,
    pub description: String,
    pub condition: String,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
}

impl SchemaOptions {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            condition: condition.into(),
            citations: Vec::new(),
            locale: Locale::default(),
            url: None,
            last_reviewed: None,
            reviewed_by: None,
        }
    }

    #[must_use]
    pub fn with_citations<I, S>(mut self, citations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.citations = citations.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn with_last_reviewed(mut self, date: NaiveDate) -> Self {
        self.last_reviewed = Some(date);
        self
    }

    #[must_use]
    pub fn with_reviewed_by(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewed_by = Some(reviewer.into());
        self
    }

    /// Copy used as cache key material: citation order does not change the
    /// key, every other field does. A page generated from it lists its
    /// citations in sorted order.
    #[must_use]
    pub fn key_material(&self) -> Self {
        let mut material = self.clone();
        material.citations.sort();
        material
    }
}

/// Build the page description for `options`.
///
/// Fails on an unknown condition or citation key; nothing is defaulted.
pub fn generate(options: &SchemaOptions) -> Result<MedicalWebPage> {
    let key: EntityKey = options.condition.parse()?;
    let citation = options
        .citations
        .iter()
        .map(|raw| raw.parse::<CitationKey>().map(|key| creative_work(key.record())))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Generating page schema for {} with {} citations ({})",
        key,
        citation.len(),
        options.locale
    );

    let about = entity_block(key, options.locale);
    Ok(MedicalWebPage {
        context: SCHEMA_CONTEXT.to_string(),
        schema_type: "MedicalWebPage".to_string(),
        name: options.title.clone(),
        description: options.description.clone(),
        url: options.url.clone(),
        in_language: options.locale.language_tag().to_string(),
        audience: MedicalAudience::patient(),
        main_entity: about.clone(),
        about,
        citation,
        reviewed_by: Organization::named(
            options.reviewed_by.as_deref().unwrap_or(DEFAULT_REVIEWER),
        ),
        last_reviewed: options.last_reviewed,
    })
}

/// First dictionary concept linked to `key`; it owns the entity's names.
fn primary_mapping(key: EntityKey) -> Option<&'static TermMapping> {
    mappings()
        .iter()
        .find(|mapping| mapping.entity_key == Some(key))
}

fn entity_block(key: EntityKey, locale: Locale) -> MedicalEntityBlock {
    let entity = key.record();
    let mapping = primary_mapping(key);

    let name = mapping.map_or_else(
        || entity.name.get(locale),
        |mapping| mapping.standard_term.get(locale),
    );
    let alternate_name = mapping
        .map(|mapping| {
            mapping
                .synonyms
                .get(locale)
                .iter()
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();

    MedicalEntityBlock {
        schema_type: entity.category.schema_type().to_string(),
        name: name.to_string(),
        alternate_name,
        description: entity.description.get(locale).to_string(),
        code: entity
            .codes
            .iter()
            .map(|code| MedicalCodeBlock {
                schema_type: "MedicalCode".to_string(),
                code: code.code.to_string(),
                coding_system: code.coding_system.to_string(),
            })
            .collect(),
        relevant_specialty: entity.specialty.to_string(),
    }
}

fn creative_work(citation: &Citation) -> CreativeWork {
    CreativeWork {
        schema_type: "CreativeWork".to_string(),
        name: citation.name.to_string(),
        publisher: Organization::named(citation.publisher),
        url: citation.url.map(ToString::to_string),
        date_published: citation.year.map(|year| year.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medterm_core::EngineError;

    fn options() -> SchemaOptions {
        SchemaOptions::new("Period pain", "What helps with period pain", "DYSMENORRHEA")
            .with_citations(["nhs-period-pain", "acog-dysmenorrhea"])
    }

    #[test]
    fn about_block_comes_from_dictionary() {
        let page = generate(&options()).unwrap();
        assert_eq!(page.about.schema_type, "MedicalCondition");
        assert_eq!(page.about.name, "Dysmenorrhea");
        assert!(page.about.alternate_name.contains(&"period pain".to_string()));
        assert!(page
            .about
            .code
            .iter()
            .any(|c| c.code == "N94.6" && c.coding_system == "ICD-10"));
        assert_eq!(page.main_entity, page.about);
    }

    #[test]
    fn chinese_locale_localizes_names() {
        let page = generate(&options().with_locale(Locale::Zh)).unwrap();
        assert_eq!(page.in_language, "zh-CN");
        assert_eq!(page.about.name, "痛经");
        assert!(page.about.alternate_name.contains(&"月经痛".to_string()));
    }

    #[test]
    fn citations_keep_caller_order() {
        let page = generate(&options()).unwrap();
        let names: Vec<&str> = page.citation.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Period pain", "Dysmenorrhea: Painful Periods"]);
        assert_eq!(page.citation[0].date_published, None);
        assert_eq!(page.citation[1].date_published.as_deref(), Some("2022"));
    }

    #[test]
    fn reviewer_defaults() {
        let page = generate(&options()).unwrap();
        assert_eq!(page.reviewed_by.name, DEFAULT_REVIEWER);

        let page = generate(&options().with_reviewed_by("Dr. Li")).unwrap();
        assert_eq!(page.reviewed_by.name, "Dr. Li");
    }

    #[test]
    fn drug_entities_use_drug_type() {
        let page = generate(&SchemaOptions::new("NSAIDs", "Pain relief", "nsaids")).unwrap();
        assert_eq!(page.about.schema_type, "Drug");
    }

    #[test]
    fn unknown_keys_are_errors() {
        let bad_condition = SchemaOptions::new("t", "d", "NOT_A_CONDITION");
        assert_eq!(
            generate(&bad_condition),
            Err(EngineError::UnknownEntity("NOT_A_CONDITION".to_string()))
        );

        let bad_citation = options().with_citations(["nhs-period-pain", "made-up"]);
        assert_eq!(
            generate(&bad_citation),
            Err(EngineError::UnknownCitation("made-up".to_string()))
        );
    }

    #[test]
    fn key_material_ignores_citation_order() {
        let a = options();
        let b = options().with_citations(["acog-dysmenorrhea", "nhs-period-pain"]);
        assert_ne!(a, b);
        assert_eq!(a.key_material(), b.key_material());
    }

    #[test]
    fn options_parse_with_defaults() {
        let parsed: SchemaOptions = serde_json::from_str(
            r#"{"title": "t", "description": "d", "condition": "ENDOMETRIOSIS", "last_reviewed": "2024-01-31"}"#,
        )
        .unwrap();
        assert_eq!(parsed.locale, Locale::En);
        assert!(parsed.citations.is_empty());
        assert_eq!(parsed.last_reviewed, NaiveDate::from_ymd_opt(2024, 1, 31));
    }
}
