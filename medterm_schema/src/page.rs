//! JSON-LD shapes for a medical web page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalWebPage {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// BCP 47 tag, e.g. `zh-CN`.
    pub in_language: String,
    pub audience: MedicalAudience,
    pub about: MedicalEntityBlock,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citation: Vec<CreativeWork>,
    pub reviewed_by: Organization,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<NaiveDate>,
    pub main_entity: MedicalEntityBlock,
}

impl MedicalWebPage {
    /// Render as a JSON value ready for a `<script type="application/ld+json">`.
    #[must_use]
    pub fn to_json_ld(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalAudience {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub audience_type: String,
}

impl MedicalAudience {
    #[must_use]
    pub fn patient() -> Self {
        Self {
            schema_type: "MedicalAudience".to_string(),
            audience_type: "Patient".to_string(),
        }
    }
}

/// The condition, symptom or drug a page is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalEntityBlock {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_name: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<MedicalCodeBlock>,
    pub relevant_specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCodeBlock {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub code: String,
    pub coding_system: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeWork {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub publisher: Organization,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
}

impl Organization {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            schema_type: "Organization".to_string(),
            name: name.into(),
        }
    }
}
