//! Integration tests for the engine's public operations.
//!
//! These tests walk through the documented usage scenarios against the
//! process-wide engine, and check caching behaviour on private engines so
//! counters are not shared between tests.

use chrono::NaiveDate;
use medterm_engine::{
    CacheConfig, EngineError, EntityKey, Locale, MedicalTermEngine, SchemaOptions,
    clear_terminology_cache, generate_medical_webpage_schema, get_cache_stats,
    get_medical_term_synonyms, get_term_entity_key,
    mark_medical_terms_batch, mark_medical_terms_in_text, standardize_medical_term,
    terms_equivalent,
};
use serde_json::json;
use std::time::Duration;

fn pms_page() -> SchemaOptions {
    SchemaOptions::new(
        "Premenstrual syndrome",
        "Symptoms and treatment of PMS",
        "PREMENSTRUAL_SYNDROME",
    )
    .with_citations(["rcog-pms", "nhs-period-pain"])
    .with_url("https://example.org/pms")
    .with_last_reviewed(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
}

/// Scenario: synonyms standardize in both languages.
#[test]
fn test_standardize_synonyms() {
    assert_eq!(standardize_medical_term("period pain", Locale::En), "Dysmenorrhea");
    assert_eq!(standardize_medical_term("月经痛", Locale::Zh), "痛经");
}

/// Scenario: synonym list starts with the standard term.
#[test]
fn test_synonym_list() {
    let synonyms = get_medical_term_synonyms("PMS", Locale::En);
    assert_eq!(synonyms.first().map(String::as_str), Some("Premenstrual Syndrome"));
    assert!(synonyms.iter().any(|s| s == "PMS"));
}

/// Scenario: both terms of a sentence are wrapped, the rest is untouched.
#[test]
fn test_mark_sentence() {
    let annotated = mark_medical_terms_in_text("She has severe dysmenorrhea and PMS.", Locale::En);
    assert_eq!(
        annotated,
        concat!(
            "She has severe ",
            r#"<span data-medical-term="Dysmenorrhea" data-entity-key="DYSMENORRHEA">dysmenorrhea</span>"#,
            " and ",
            r#"<span data-medical-term="Premenstrual Syndrome" data-entity-key="PREMENSTRUAL_SYNDROME">PMS</span>"#,
            "."
        )
    );
}

/// Scenario: empty text stays empty.
#[test]
fn test_mark_empty() {
    assert_eq!(mark_medical_terms_in_text("", Locale::En), "");
}

/// Scenario: repeated schema calls give equal but independent values.
#[test]
fn test_schema_copies_are_independent() {
    let options = pms_page();
    let mut first = generate_medical_webpage_schema(&options).unwrap();
    let second = generate_medical_webpage_schema(&options).unwrap();
    assert_eq!(first, second);

    first.name.push_str(" (edited)");
    first.about.alternate_name.clear();

    let third = generate_medical_webpage_schema(&options).unwrap();
    assert_eq!(third, second);
    assert_ne!(third, first);
}

/// Scenario: unknown input comes back unchanged.
#[test]
fn test_unknown_term_unchanged() {
    assert_eq!(
        standardize_medical_term("totally-unknown-term", Locale::En),
        "totally-unknown-term"
    );
}

/// Test equivalence and entity keys through the shared engine.
#[test]
fn test_equivalence_and_entity_keys() {
    assert!(terms_equivalent("menstrual cramps", "痛经"));
    assert!(!terms_equivalent("menstrual cramps", "PMS"));
    assert_eq!(get_term_entity_key("PCOS"), Some(EntityKey::PolycysticOvarySyndrome));
    assert_eq!(get_term_entity_key("hot water bottle"), None);
}

/// Test the rendered JSON-LD document.
#[test]
fn test_schema_json_ld() {
    let page = generate_medical_webpage_schema(&pms_page()).unwrap();
    let value = page.to_json_ld();

    assert_eq!(value["@type"], json!("MedicalWebPage"));
    assert_eq!(value["url"], json!("https://example.org/pms"));
    assert_eq!(value["inLanguage"], json!("en-US"));
    assert_eq!(value["about"]["name"], json!("Premenstrual Syndrome"));
    assert_eq!(value["lastReviewed"], json!("2024-05-01"));
    assert_eq!(value["citation"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        value["citation"][0]["publisher"]["name"],
        json!("Royal College of Obstetricians and Gynaecologists")
    );
}

/// Test that bad keys surface as errors.
#[test]
fn test_schema_unknown_keys() {
    let bad = pms_page().with_citations(["rcog-pms", "nope"]);
    assert_eq!(
        generate_medical_webpage_schema(&bad),
        Err(EngineError::UnknownCitation("nope".to_string()))
    );
}

/// Test that the batch helper keeps input order.
#[test]
fn test_batch_order() {
    let texts = vec!["PMS".to_string(), "nothing here".to_string(), "她有痛经".to_string()];
    let annotated = mark_medical_terms_batch(&texts, Locale::Zh);
    assert_eq!(annotated[0], "PMS");
    assert_eq!(annotated[1], "nothing here");
    assert!(annotated[2].starts_with("她有<span"));
}

/// Test that an entry is recomputed once a sub-second TTL has passed.
#[test]
fn test_annotation_ttl_expiry() {
    let short = CacheConfig::new(Duration::from_millis(300), 10);
    let engine = MedicalTermEngine::new(short, CacheConfig::schema_defaults());

    let _ = engine.mark_medical_terms_in_text("PMS", Locale::En);
    let _ = engine.mark_medical_terms_in_text("PMS", Locale::En);
    assert_eq!(engine.get_cache_stats().annotation.hits, 1);

    std::thread::sleep(Duration::from_millis(400));
    let _ = engine.mark_medical_terms_in_text("PMS", Locale::En);
    let stats = engine.get_cache_stats().annotation;
    assert_eq!((stats.hits, stats.misses), (1, 2));
}

/// Test that the annotation cache never grows past its bound.
#[test]
fn test_annotation_cache_bound() {
    let small = CacheConfig::new(Duration::from_secs(60), 3);
    let engine = MedicalTermEngine::new(small, CacheConfig::schema_defaults());

    for i in 0..10 {
        let _ = engine.mark_medical_terms_in_text(&format!("PMS case {i}"), Locale::En);
        assert!(engine.get_cache_stats().annotation.entries <= 3);
    }
    let stats = engine.get_cache_stats().annotation;
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.evictions, 7);
}

/// Test that a cached page still lists citations in each caller's order.
#[test]
fn test_cached_schema_follows_caller_citation_order() {
    let engine = MedicalTermEngine::with_defaults();
    let forward = pms_page();
    let reversed = pms_page().with_citations(["nhs-period-pain", "rcog-pms"]);

    let first = engine.generate_medical_webpage_schema(&forward).unwrap();
    let second = engine.generate_medical_webpage_schema(&reversed).unwrap();
    assert_eq!(engine.get_cache_stats().schema.hits, 1);

    assert_eq!(first, medterm_schema::generate(&forward).unwrap());
    assert_eq!(second, medterm_schema::generate(&reversed).unwrap());
    assert_eq!(first.citation[0], second.citation[1]);
    assert_eq!(first.citation[1], second.citation[0]);
}

/// Test the cache helpers of the process-wide engine.
#[test]
fn test_default_engine_cache_helpers() {
    let stats = get_cache_stats();
    assert_eq!(stats.annotation.max_entries, 1000);
    assert_eq!(stats.schema.ttl, Duration::from_secs(600));

    let before = mark_medical_terms_in_text("Heat therapy helps cramps.", Locale::En);
    assert!(get_cache_stats().compiled_locales >= 1);

    clear_terminology_cache();
    assert!(get_cache_stats().compiled_locales >= 1);
    assert_eq!(mark_medical_terms_in_text("Heat therapy helps cramps.", Locale::En), before);
}
