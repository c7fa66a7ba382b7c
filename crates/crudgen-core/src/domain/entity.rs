//! The entity descriptor: a named record type and its classified fields.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    field_type::{SemanticFieldType, classify},
    naming,
    relation::{RelationDescriptor, derive_relation},
};

/// Fields used when the entity source yields no writable fields.
pub const DEFAULT_FIELDS: &[&str] = &["name", "description"];

/// One field of an entity, already classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: SemanticFieldType,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = classify(&name);
        Self { name, kind }
    }

    /// Human label: `created_at` → `Created At`, `user_ID` → `User Id`.
    pub fn label(&self) -> String {
        naming::title_case(&naming::lower(&self.name))
    }

    /// Relation names, when this field is a foreign key.
    pub fn relation(&self) -> Option<RelationDescriptor> {
        (self.kind == SemanticFieldType::ForeignKey).then(|| derive_relation(&self.name))
    }
}

/// A named entity with its ordered, de-duplicated field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    name: String,
    fields: Vec<Field>,
}

impl EntityDescriptor {
    /// Build a descriptor from field names, classifying each.
    ///
    /// Order is preserved; a repeated name keeps its first position.
    pub fn new<I, S>(name: impl Into<String>, field_names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        validate_entity_name(&name)?;

        let mut seen = HashSet::new();
        let fields = field_names
            .into_iter()
            .filter_map(|f| {
                let f = f.as_ref().trim();
                (!f.is_empty() && seen.insert(f.to_string())).then(|| Field::new(f))
            })
            .collect();

        Ok(Self { name, fields })
    }

    /// Build a descriptor from an entity source listing, keeping only the
    /// writable fields. Falls back to [`DEFAULT_FIELDS`] when none are
    /// writable; the second element reports whether that happened.
    pub fn from_fillable<I, S>(name: impl Into<String>, listing: I) -> Result<(Self, bool), DomainError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let name = name.into();
        let writable: Vec<String> = listing
            .into_iter()
            .filter(|(_, fillable)| *fillable)
            .map(|(f, _)| f.as_ref().to_string())
            .collect();

        let entity = Self::new(name.clone(), &writable)?;
        if entity.fields.is_empty() {
            return Ok((Self::new(name, DEFAULT_FIELDS)?, true));
        }
        Ok((entity, false))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Record variable used in bindings: `UserProfile` → `userProfile`.
    pub fn variable(&self) -> String {
        naming::camel_case(&self.name)
    }

    /// Relations of every foreign-key field, in field order.
    pub fn relations(&self) -> Vec<RelationDescriptor> {
        self.fields.iter().filter_map(Field::relation).collect()
    }
}

/// Check that `name` can be used as an entity (class) name.
pub fn validate_entity_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidEntityName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(invalid("only letters, digits and underscores are allowed"));
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(invalid("name cannot start with a digit"));
    }
    Ok(())
}
