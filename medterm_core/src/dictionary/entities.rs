use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LocalizedText;
use crate::EngineError;

/// Key of a medical entity record carrying codes and a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EntityKey {
    Dysmenorrhea = 0,
    PremenstrualSyndrome = 1,
    PremenstrualDysphoricDisorder = 2,
    Endometriosis = 3,
    Adenomyosis = 4,
    PolycysticOvarySyndrome = 5,
    UterineFibroids = 6,
    Menorrhagia = 7,
    Amenorrhea = 8,
    IrregularMenstruation = 9,
    PelvicPain = 10,
    Nsaids = 11,
}

impl EntityKey {
    pub const COUNT: usize = 12;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Dysmenorrhea,
        Self::PremenstrualSyndrome,
        Self::PremenstrualDysphoricDisorder,
        Self::Endometriosis,
        Self::Adenomyosis,
        Self::PolycysticOvarySyndrome,
        Self::UterineFibroids,
        Self::Menorrhagia,
        Self::Amenorrhea,
        Self::IrregularMenstruation,
        Self::PelvicPain,
        Self::Nsaids,
    ];

    /// Returns the string representation used in markup attributes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dysmenorrhea => "DYSMENORRHEA",
            Self::PremenstrualSyndrome => "PREMENSTRUAL_SYNDROME",
            Self::PremenstrualDysphoricDisorder => "PREMENSTRUAL_DYSPHORIC_DISORDER",
            Self::Endometriosis => "ENDOMETRIOSIS",
            Self::Adenomyosis => "ADENOMYOSIS",
            Self::PolycysticOvarySyndrome => "POLYCYSTIC_OVARY_SYNDROME",
            Self::UterineFibroids => "UTERINE_FIBROIDS",
            Self::Menorrhagia => "MENORRHAGIA",
            Self::Amenorrhea => "AMENORRHEA",
            Self::IrregularMenstruation => "IRREGULAR_MENSTRUATION",
            Self::PelvicPain => "PELVIC_PAIN",
            Self::Nsaids => "NSAIDS",
        }
    }

    #[must_use]
    pub fn record(self) -> &'static MedicalEntity {
        &MEDICAL_ENTITIES[self as usize]
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKey {
    type Err = EngineError;

    /// Case-insensitive; hyphens and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownEntity(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Condition,
    Symptom,
    Treatment,
}

impl EntityCategory {
    /// schema.org type for this category.
    #[must_use]
    pub const fn schema_type(&self) -> &'static str {
        match self {
            Self::Condition => "MedicalCondition",
            Self::Symptom => "MedicalSignOrSymptom",
            Self::Treatment => "Drug",
        }
    }
}

/// A code in an external coding system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedicalCode {
    pub code: &'static str,
    pub coding_system: &'static str,
}

const fn icd10(code: &'static str) -> MedicalCode {
    MedicalCode {
        code,
        coding_system: "ICD-10",
    }
}

const fn snomed(code: &'static str) -> MedicalCode {
    MedicalCode {
        code,
        coding_system: "SNOMED-CT",
    }
}

/// Richer record behind an [`EntityKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicalEntity {
    pub key: EntityKey,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub category: EntityCategory,
    pub codes: &'static [MedicalCode],
    /// schema.org `MedicalSpecialty` value.
    pub specialty: &'static str,
}

static MEDICAL_ENTITIES: [MedicalEntity; EntityKey::COUNT] = [
    MedicalEntity {
        key: EntityKey::Dysmenorrhea,
        name: LocalizedText {
            en: "Dysmenorrhea",
            zh: "痛经",
        },
        description: LocalizedText {
            en: "Painful cramping in the lower abdomen before or during menstruation.",
            zh: "月经前后或经期出现的下腹部痉挛性疼痛。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N94.6"), snomed("266599000")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::PremenstrualSyndrome,
        name: LocalizedText {
            en: "Premenstrual Syndrome",
            zh: "经前期综合征",
        },
        description: LocalizedText {
            en: "Physical and emotional symptoms that recur in the luteal phase of the menstrual cycle.",
            zh: "在月经周期黄体期反复出现的躯体和情绪症状。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N94.3")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::PremenstrualDysphoricDisorder,
        name: LocalizedText {
            en: "Premenstrual Dysphoric Disorder",
            zh: "经前焦虑障碍",
        },
        description: LocalizedText {
            en: "A severe form of premenstrual syndrome dominated by mood symptoms.",
            zh: "以情绪症状为主的重度经前期综合征。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N94.3")],
        specialty: "Psychiatric",
    },
    MedicalEntity {
        key: EntityKey::Endometriosis,
        name: LocalizedText {
            en: "Endometriosis",
            zh: "子宫内膜异位症",
        },
        description: LocalizedText {
            en: "Growth of endometrial-like tissue outside the uterus.",
            zh: "子宫内膜样组织在子宫以外部位生长。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N80.9"), snomed("129103003")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::Adenomyosis,
        name: LocalizedText {
            en: "Adenomyosis",
            zh: "子宫腺肌症",
        },
        description: LocalizedText {
            en: "Endometrial tissue growing into the muscular wall of the uterus.",
            zh: "子宫内膜组织侵入子宫肌层。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N80.0"), snomed("76376003")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::PolycysticOvarySyndrome,
        name: LocalizedText {
            en: "Polycystic Ovary Syndrome",
            zh: "多囊卵巢综合征",
        },
        description: LocalizedText {
            en: "A hormonal disorder with irregular ovulation and raised androgen levels.",
            zh: "以排卵异常和雄激素升高为特征的内分泌疾病。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("E28.2"), snomed("69878008")],
        specialty: "Endocrine",
    },
    MedicalEntity {
        key: EntityKey::UterineFibroids,
        name: LocalizedText {
            en: "Uterine Fibroids",
            zh: "子宫肌瘤",
        },
        description: LocalizedText {
            en: "Benign smooth-muscle tumours of the uterus.",
            zh: "子宫平滑肌的良性肿瘤。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("D25.9"), snomed("95315005")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::Menorrhagia,
        name: LocalizedText {
            en: "Menorrhagia",
            zh: "月经过多",
        },
        description: LocalizedText {
            en: "Menstrual bleeding that is abnormally heavy or prolonged.",
            zh: "经量异常增多或经期延长。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N92.0"), snomed("386692008")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::Amenorrhea,
        name: LocalizedText {
            en: "Amenorrhea",
            zh: "闭经",
        },
        description: LocalizedText {
            en: "Absence of menstrual periods.",
            zh: "月经停止或从未来潮。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N91.2"), snomed("14302001")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::IrregularMenstruation,
        name: LocalizedText {
            en: "Irregular Menstruation",
            zh: "月经不调",
        },
        description: LocalizedText {
            en: "Menstrual cycles that vary markedly in length or timing.",
            zh: "月经周期长度或时间明显不规律。",
        },
        category: EntityCategory::Condition,
        codes: &[icd10("N92.6")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::PelvicPain,
        name: LocalizedText {
            en: "Pelvic Pain",
            zh: "盆腔疼痛",
        },
        description: LocalizedText {
            en: "Pain felt in the lower abdomen and pelvis.",
            zh: "下腹部及盆腔区域的疼痛。",
        },
        category: EntityCategory::Symptom,
        codes: &[icd10("R10.2"), snomed("30473006")],
        specialty: "Gynecologic",
    },
    MedicalEntity {
        key: EntityKey::Nsaids,
        name: LocalizedText {
            en: "Nonsteroidal Anti-Inflammatory Drugs",
            zh: "非甾体抗炎药",
        },
        description: LocalizedText {
            en: "Prostaglandin-inhibiting analgesics used as first-line treatment for period pain.",
            zh: "通过抑制前列腺素缓解疼痛的药物，是痛经的一线治疗。",
        },
        category: EntityCategory::Treatment,
        codes: &[MedicalCode {
            code: "M01A",
            coding_system: "ATC",
        }],
        specialty: "PrimaryCare",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_keys() {
        for key in EntityKey::ALL {
            assert_eq!(key.record().key, key);
        }
    }

    #[test]
    fn parses_loosely_formatted_keys() {
        assert_eq!(
            "premenstrual-syndrome".parse::<EntityKey>(),
            Ok(EntityKey::PremenstrualSyndrome)
        );
        assert_eq!("NSAIDS".parse::<EntityKey>(), Ok(EntityKey::Nsaids));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert_eq!(
            "MIGRAINE".parse::<EntityKey>(),
            Err(EngineError::UnknownEntity("MIGRAINE".to_string()))
        );
    }

    #[test]
    fn serde_form_matches_as_str() {
        for key in EntityKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            let back: EntityKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn every_entity_has_a_code() {
        for key in EntityKey::ALL {
            assert!(!key.record().codes.is_empty(), "{key} has no codes");
        }
    }
}
