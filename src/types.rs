//! Wire types for the guild.xyz v2 API and the local guild directory.
//!
//! The API's response schemas are inferred from usage rather than a
//! published contract, so response-side structs default missing fields
//! instead of failing deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A guild profile as returned by `GET /guilds/guild-page/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub member_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub background_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "type")]
    pub kind: String,
    pub contact: String,
}

/// A membership tier within a guild, gated by requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Assigned by the service; absent in creation payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// A typed condition gating access to a role.
///
/// The `type` tag stays a raw string: unrecognised requirement kinds must
/// survive round-trips and still display (see [`crate::requirements`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_negated: bool,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub data: RequirementData,
}

impl Requirement {
    /// The always-satisfied requirement attached to a new guild's Member role.
    pub fn free() -> Self {
        Requirement {
            kind: "FREE".to_string(),
            is_negated: false,
            visibility: "PUBLIC".to_string(),
            data: RequirementData::default(),
        }
    }
}

/// Requirement payload whose meaning depends on the requirement kind.
/// Unknown keys are preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A signup form attached to a guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_editable: bool,
    /// The service can omit or null this for half-created forms.
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Form {
    /// A form without fields is considered incomplete and non-functional.
    pub fn is_complete(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// A single answerable question inside a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Client-generated token, unique within the form.
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(rename = "type")]
    pub kind: FieldType,
}

impl FormField {
    pub fn new(question: impl Into<String>, kind: FieldType, is_required: bool) -> Self {
        FormField {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            is_required,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    ShortText,
    LongText,
    Number,
}

/// One answer in a form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAnswer {
    pub field_id: String,
    pub value: String,
}

/// Reduced guild projection kept in the local directory cache.
///
/// Written once at creation time and never refreshed, so it may drift from
/// the authoritative guild record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub id: u64,
    pub name: String,
    pub url_name: String,
    pub image_url: String,
}

/// A guild profile merged with its usable forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildView {
    #[serde(flatten)]
    pub guild: Guild,
    pub form: Vec<Form>,
}

/// Derive a URL slug from a guild name: lowercase, whitespace runs
/// collapsed to a single hyphen.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Cool Guild"), "my-cool-guild");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("  Raffle   Night\tParty "), "raffle-night-party");
    }

    #[test]
    fn form_without_fields_is_incomplete() {
        let form: Form = serde_json::from_str(r#"{"id": 1, "name": "empty"}"#).unwrap();
        assert!(form.fields.is_empty());
        assert!(!form.is_complete());
    }

    #[test]
    fn form_field_serializes_camel_case() {
        let field = FormField {
            id: "f-1".to_string(),
            question: "Twitter handle".to_string(),
            is_required: true,
            kind: FieldType::ShortText,
        };
        let v = serde_json::to_value(&field).unwrap();
        assert_eq!(v["question"], "Twitter handle");
        assert_eq!(v["isRequired"], true);
        assert_eq!(v["type"], "SHORT_TEXT");
    }

    #[test]
    fn new_form_fields_get_unique_ids() {
        let a = FormField::new("q1", FieldType::ShortText, false);
        let b = FormField::new("q2", FieldType::Number, false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn requirement_with_unknown_kind_round_trips() {
        let json = r#"{
            "type": "GALAXY_BRAIN",
            "isNegated": false,
            "visibility": "PUBLIC",
            "data": { "brainSize": 9000 }
        }"#;
        let req: Requirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, "GALAXY_BRAIN");
        let back = serde_json::to_value(&req).unwrap();
        assert_eq!(back["data"]["brainSize"], 9000);
    }

    #[test]
    fn guild_profile_tolerates_missing_fields() {
        let guild: Guild = serde_json::from_str(r#"{"id": 76300, "name": "Raffle"}"#).unwrap();
        assert_eq!(guild.member_count, 0);
        assert!(guild.roles.is_empty());
        assert!(guild.social_links.is_none());
    }
}
