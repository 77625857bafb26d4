use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EngineError;

/// Reference works that medical pages may cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum CitationKey {
    AcogDysmenorrhea = 0,
    NhsPeriodPain = 1,
    CochraneNsaids = 2,
    NiceEndometriosis = 3,
    RcogPms = 4,
}

impl CitationKey {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::AcogDysmenorrhea,
        Self::NhsPeriodPain,
        Self::CochraneNsaids,
        Self::NiceEndometriosis,
        Self::RcogPms,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AcogDysmenorrhea => "acog-dysmenorrhea",
            Self::NhsPeriodPain => "nhs-period-pain",
            Self::CochraneNsaids => "cochrane-nsaids",
            Self::NiceEndometriosis => "nice-endometriosis",
            Self::RcogPms => "rcog-pms",
        }
    }

    #[must_use]
    pub fn record(self) -> &'static Citation {
        &CITATIONS[self as usize]
    }
}

impl fmt::Display for CitationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownCitation(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    pub key: CitationKey,
    pub name: &'static str,
    pub publisher: &'static str,
    pub url: Option<&'static str>,
    pub year: Option<u16>,
}

static CITATIONS: [Citation; CitationKey::COUNT] = [
    Citation {
        key: CitationKey::AcogDysmenorrhea,
        name: "Dysmenorrhea: Painful Periods",
        publisher: "American College of Obstetricians and Gynecologists",
        url: Some("https://www.acog.org/womens-health/faqs/dysmenorrhea-painful-periods"),
        year: Some(2022),
    },
    Citation {
        key: CitationKey::NhsPeriodPain,
        name: "Period pain",
        publisher: "National Health Service",
        url: Some("https://www.nhs.uk/conditions/period-pain/"),
        year: None,
    },
    Citation {
        key: CitationKey::CochraneNsaids,
        name: "Nonsteroidal anti-inflammatory drugs for dysmenorrhoea",
        publisher: "Cochrane Database of Systematic Reviews",
        url: Some("https://doi.org/10.1002/14651858.CD001751.pub3"),
        year: Some(2015),
    },
    Citation {
        key: CitationKey::NiceEndometriosis,
        name: "Endometriosis: diagnosis and management (NG73)",
        publisher: "National Institute for Health and Care Excellence",
        url: Some("https://www.nice.org.uk/guidance/ng73"),
        year: Some(2017),
    },
    Citation {
        key: CitationKey::RcogPms,
        name: "Management of Premenstrual Syndrome (Green-top Guideline No. 48)",
        publisher: "Royal College of Obstetricians and Gynaecologists",
        url: None,
        year: Some(2016),
    },
];
