use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EngineError;

/// Content locale supported by the dictionary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Locale {
    #[default]
    En = 0,
    Zh = 1,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// BCP 47 tag used for `inLanguage` in structured data.
    #[must_use]
    pub const fn language_tag(&self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Zh => "zh-CN",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    /// Accepts bare languages and region-suffixed tags (`zh-CN`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(EngineError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_tags() {
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("EN_us".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" en ".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn rejects_unknown_language() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(EngineError::UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn language_tag_round_trips_to_locale() {
        for locale in Locale::ALL {
            assert_eq!(locale.language_tag().parse::<Locale>(), Ok(locale));
        }
    }
}
