use medterm_core::content_hash;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to encode cache key: {0}")]
    KeyEncoding(#[from] serde_json::Error),
}

/// Stable key for a cached computation.
///
/// The key is the SHA-256 digest of a namespace and the JSON encoding of the
/// computation's semantic inputs, so two calls with equal inputs always
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn derive<T: Serialize + ?Sized>(namespace: &str, material: &T) -> Result<Self, CacheError> {
        let payload = serde_json::to_string(material)?;
        Ok(Self(content_hash(namespace, &payload)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn equal_inputs_equal_keys() {
        let a = CacheKey::derive("annotate", &("en", "She has PMS.")).unwrap();
        let b = CacheKey::derive("annotate", &("en", "She has PMS.")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn every_input_participates() {
        let base = CacheKey::derive("annotate", &("en", "She has PMS.")).unwrap();
        let other_locale = CacheKey::derive("annotate", &("zh", "She has PMS.")).unwrap();
        let other_text = CacheKey::derive("annotate", &("en", "She has PMS")).unwrap();
        let other_namespace = CacheKey::derive("schema", &("en", "She has PMS.")).unwrap();
        assert_ne!(base, other_locale);
        assert_ne!(base, other_text);
        assert_ne!(base, other_namespace);
    }

    #[test]
    fn unencodable_material_is_an_error() {
        // JSON object keys must be strings
        let mut material = BTreeMap::new();
        material.insert(vec![1_u8], "value");
        assert!(matches!(
            CacheKey::derive("schema", &material),
            Err(CacheError::KeyEncoding(_))
        ));
    }
}
