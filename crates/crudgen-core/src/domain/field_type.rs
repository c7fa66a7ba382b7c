//! Semantic field types and the name-based classifier.
//!
//! # Design
//!
//! The classifier is an ordered table of `(predicate, tag)` rules scanned top
//! to bottom; the first rule that matches wins. A field name can match several
//! rules textually (`status_message` contains `age`, `message` and `status`),
//! so the table order is part of the contract.
//!
//! # Adding a rule
//!
//! 1. Add the variant here (with its `as_str` arm) if it is a new tag
//! 2. Insert the rule in `RULES` at the position that gives it priority
//! 3. Teach `fragments::form_field` how to render it

use std::fmt;

use serde::Serialize;

// ── SemanticFieldType ────────────────────────────────────────────────────────

/// UI-control category inferred from a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticFieldType {
    ForeignKey,
    Email,
    Password,
    Telephone,
    Url,
    Date,
    Time,
    Number,
    Textarea,
    Select,
    Checkbox,
    Text,
}

impl SemanticFieldType {
    /// Stable string form. For single-line inputs this doubles as the HTML
    /// `type` attribute, which is why `Telephone` is `tel`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ForeignKey => "foreign_key",
            Self::Email => "email",
            Self::Password => "password",
            Self::Telephone => "tel",
            Self::Url => "url",
            Self::Date => "date",
            Self::Time => "time",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for SemanticFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rule table ───────────────────────────────────────────────────────────────

/// How a rule tests the lower-cased field name.
#[derive(Debug, Clone, Copy)]
enum Predicate {
    EndsWith(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Predicate {
    fn matches(self, name: &str) -> bool {
        match self {
            Self::EndsWith(suffix) => name.ends_with(suffix),
            Self::ContainsAny(needles) => needles.iter().any(|n| name.contains(n)),
        }
    }
}

/// Classification rules in priority order.
const RULES: &[(Predicate, SemanticFieldType)] = &[
    (Predicate::EndsWith("_id"), SemanticFieldType::ForeignKey),
    (Predicate::ContainsAny(&["email"]), SemanticFieldType::Email),
    (
        Predicate::ContainsAny(&["password", "pass"]),
        SemanticFieldType::Password,
    ),
    (
        Predicate::ContainsAny(&["phone", "tel"]),
        SemanticFieldType::Telephone,
    ),
    (
        Predicate::ContainsAny(&["url", "link", "website"]),
        SemanticFieldType::Url,
    ),
    (
        Predicate::ContainsAny(&["date", "born", "birth"]),
        SemanticFieldType::Date,
    ),
    (Predicate::ContainsAny(&["time"]), SemanticFieldType::Time),
    (
        Predicate::ContainsAny(&["number", "amount", "price", "cost", "age", "quantity"]),
        SemanticFieldType::Number,
    ),
    (
        Predicate::ContainsAny(&[
            "description",
            "content",
            "body",
            "text",
            "message",
            "notes",
            "comment",
        ]),
        SemanticFieldType::Textarea,
    ),
    (
        Predicate::ContainsAny(&["status", "type", "category", "role"]),
        SemanticFieldType::Select,
    ),
    (
        Predicate::ContainsAny(&["active", "enabled", "published", "visible", "featured"]),
        SemanticFieldType::Checkbox,
    ),
];

/// Infer the semantic type of a field from its name. Never fails.
pub fn classify(field_name: &str) -> SemanticFieldType {
    let name = field_name.to_lowercase();
    RULES
        .iter()
        .find(|(predicate, _)| predicate.matches(&name))
        .map_or(SemanticFieldType::Text, |&(_, tag)| tag)
}
