use serde::{Deserialize, Serialize};

use super::{EntityKey, LocalizedList, LocalizedText, TermMapping};

/// Identifier of every concept in the dictionary.
///
/// The discriminant is the concept's position in [`TERM_MAPPINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ConceptId {
    Dysmenorrhea = 0,
    PrimaryDysmenorrhea = 1,
    SecondaryDysmenorrhea = 2,
    PremenstrualSyndrome = 3,
    PremenstrualDysphoricDisorder = 4,
    Endometriosis = 5,
    Adenomyosis = 6,
    PolycysticOvarySyndrome = 7,
    UterineFibroids = 8,
    Menorrhagia = 9,
    Amenorrhea = 10,
    IrregularMenstruation = 11,
    PelvicPain = 12,
    Menstruation = 13,
    Prostaglandins = 14,
    Nsaids = 15,
    HeatTherapy = 16,
}

impl ConceptId {
    pub const COUNT: usize = 17;

    #[must_use]
    pub fn mapping(self) -> &'static TermMapping {
        &TERM_MAPPINGS[self as usize]
    }
}

pub static TERM_MAPPINGS: [TermMapping; ConceptId::COUNT] = [
    TermMapping {
        id: ConceptId::Dysmenorrhea,
        standard_term: LocalizedText {
            en: "Dysmenorrhea",
            zh: "痛经",
        },
        synonyms: LocalizedList {
            en: &[
                "period pain",
                "menstrual pain",
                "menstrual cramps",
                "painful periods",
                "cramps",
            ],
            zh: &["月经痛", "经期疼痛", "经痛", "生理痛"],
        },
        related_terms: &[
            "Pelvic Pain",
            "Prostaglandins",
            "Primary Dysmenorrhea",
            "Secondary Dysmenorrhea",
        ],
        entity_key: Some(EntityKey::Dysmenorrhea),
    },
    TermMapping {
        id: ConceptId::PrimaryDysmenorrhea,
        standard_term: LocalizedText {
            en: "Primary Dysmenorrhea",
            zh: "原发性痛经",
        },
        synonyms: LocalizedList {
            en: &["functional dysmenorrhea"],
            zh: &["功能性痛经"],
        },
        related_terms: &["Prostaglandins", "Dysmenorrhea"],
        entity_key: Some(EntityKey::Dysmenorrhea),
    },
    TermMapping {
        id: ConceptId::SecondaryDysmenorrhea,
        standard_term: LocalizedText {
            en: "Secondary Dysmenorrhea",
            zh: "继发性痛经",
        },
        synonyms: LocalizedList {
            en: &["acquired dysmenorrhea"],
            zh: &["器质性痛经"],
        },
        related_terms: &["Endometriosis", "Adenomyosis", "Uterine Fibroids"],
        entity_key: Some(EntityKey::Dysmenorrhea),
    },
    TermMapping {
        id: ConceptId::PremenstrualSyndrome,
        standard_term: LocalizedText {
            en: "Premenstrual Syndrome",
            zh: "经前期综合征",
        },
        synonyms: LocalizedList {
            en: &["PMS", "premenstrual tension"],
            zh: &["经前综合征", "经前综合症", "经前期紧张"],
        },
        related_terms: &["Premenstrual Dysphoric Disorder", "Menstruation"],
        entity_key: Some(EntityKey::PremenstrualSyndrome),
    },
    TermMapping {
        id: ConceptId::PremenstrualDysphoricDisorder,
        standard_term: LocalizedText {
            en: "Premenstrual Dysphoric Disorder",
            zh: "经前焦虑障碍",
        },
        synonyms: LocalizedList {
            en: &["PMDD"],
            zh: &["经前烦躁障碍", "经前不悦障碍"],
        },
        related_terms: &["Premenstrual Syndrome"],
        entity_key: Some(EntityKey::PremenstrualDysphoricDisorder),
    },
    TermMapping {
        id: ConceptId::Endometriosis,
        standard_term: LocalizedText {
            en: "Endometriosis",
            zh: "子宫内膜异位症",
        },
        synonyms: LocalizedList {
            en: &["endometrial implants"],
            zh: &["内异症"],
        },
        related_terms: &["Secondary Dysmenorrhea", "Adenomyosis", "Infertility"],
        entity_key: Some(EntityKey::Endometriosis),
    },
    TermMapping {
        id: ConceptId::Adenomyosis,
        standard_term: LocalizedText {
            en: "Adenomyosis",
            zh: "子宫腺肌症",
        },
        synonyms: LocalizedList {
            en: &["uterine adenomyosis"],
            zh: &["子宫腺肌病"],
        },
        related_terms: &["Endometriosis", "Menorrhagia"],
        entity_key: Some(EntityKey::Adenomyosis),
    },
    TermMapping {
        id: ConceptId::PolycysticOvarySyndrome,
        standard_term: LocalizedText {
            en: "Polycystic Ovary Syndrome",
            zh: "多囊卵巢综合征",
        },
        synonyms: LocalizedList {
            en: &["PCOS", "polycystic ovarian syndrome"],
            zh: &["多囊卵巢综合症"],
        },
        related_terms: &["Irregular Menstruation", "Amenorrhea", "Insulin Resistance"],
        entity_key: Some(EntityKey::PolycysticOvarySyndrome),
    },
    TermMapping {
        id: ConceptId::UterineFibroids,
        standard_term: LocalizedText {
            en: "Uterine Fibroids",
            zh: "子宫肌瘤",
        },
        synonyms: LocalizedList {
            en: &["fibroids", "uterine leiomyoma"],
            zh: &["子宫平滑肌瘤"],
        },
        related_terms: &["Menorrhagia", "Secondary Dysmenorrhea"],
        entity_key: Some(EntityKey::UterineFibroids),
    },
    TermMapping {
        id: ConceptId::Menorrhagia,
        standard_term: LocalizedText {
            en: "Menorrhagia",
            zh: "月经过多",
        },
        synonyms: LocalizedList {
            en: &["heavy menstrual bleeding", "heavy periods"],
            zh: &["经量过多"],
        },
        related_terms: &["Anemia", "Uterine Fibroids"],
        entity_key: Some(EntityKey::Menorrhagia),
    },
    TermMapping {
        id: ConceptId::Amenorrhea,
        standard_term: LocalizedText {
            en: "Amenorrhea",
            zh: "闭经",
        },
        synonyms: LocalizedList {
            en: &["absent periods", "missed periods"],
            zh: &["停经"],
        },
        related_terms: &["Polycystic Ovary Syndrome"],
        entity_key: Some(EntityKey::Amenorrhea),
    },
    TermMapping {
        id: ConceptId::IrregularMenstruation,
        standard_term: LocalizedText {
            en: "Irregular Menstruation",
            zh: "月经不调",
        },
        synonyms: LocalizedList {
            en: &["irregular periods", "menstrual irregularity"],
            zh: &["月经紊乱"],
        },
        related_terms: &["Polycystic Ovary Syndrome", "Amenorrhea"],
        entity_key: Some(EntityKey::IrregularMenstruation),
    },
    TermMapping {
        id: ConceptId::PelvicPain,
        standard_term: LocalizedText {
            en: "Pelvic Pain",
            zh: "盆腔疼痛",
        },
        synonyms: LocalizedList {
            en: &["lower abdominal pain"],
            zh: &["下腹痛", "小腹痛"],
        },
        related_terms: &["Dysmenorrhea", "Endometriosis"],
        entity_key: Some(EntityKey::PelvicPain),
    },
    TermMapping {
        id: ConceptId::Menstruation,
        standard_term: LocalizedText {
            en: "Menstruation",
            zh: "月经",
        },
        synonyms: LocalizedList {
            en: &["period", "menses", "menstrual period"],
            zh: &["例假", "大姨妈", "经期"],
        },
        related_terms: &["Menstrual Cycle", "Ovulation"],
        entity_key: None,
    },
    TermMapping {
        id: ConceptId::Prostaglandins,
        standard_term: LocalizedText {
            en: "Prostaglandins",
            zh: "前列腺素",
        },
        synonyms: LocalizedList {
            en: &["prostaglandin"],
            zh: &[],
        },
        related_terms: &["Primary Dysmenorrhea", "Nonsteroidal Anti-Inflammatory Drugs"],
        entity_key: None,
    },
    TermMapping {
        id: ConceptId::Nsaids,
        standard_term: LocalizedText {
            en: "Nonsteroidal Anti-Inflammatory Drugs",
            zh: "非甾体抗炎药",
        },
        synonyms: LocalizedList {
            en: &["NSAIDs", "NSAID", "anti-inflammatory painkillers"],
            zh: &["非甾体类抗炎药"],
        },
        related_terms: &["Ibuprofen", "Naproxen", "Prostaglandins"],
        entity_key: Some(EntityKey::Nsaids),
    },
    TermMapping {
        id: ConceptId::HeatTherapy,
        standard_term: LocalizedText {
            en: "Heat Therapy",
            zh: "热敷",
        },
        synonyms: LocalizedList {
            en: &["heating pad", "hot water bottle", "thermotherapy"],
            zh: &["热疗"],
        },
        related_terms: &["Dysmenorrhea"],
        entity_key: None,
    },
];
