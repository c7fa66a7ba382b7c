//! In-memory entity source.

use std::collections::HashMap;

use crudgen_core::{
    application::{ApplicationError, ports::EntitySource},
    error::CrudgenResult,
};

/// Entities held in memory, keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct StaticEntitySource {
    entities: HashMap<String, Vec<(String, bool)>>,
}

impl StaticEntitySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source knowing one entity whose fields are all writable.
    pub fn single<I, S>(entity: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_entity(entity, fields.into_iter().map(|f| (f.into(), true)))
    }

    /// Add (or replace) an entity with explicit writable flags.
    pub fn with_entity<I, S>(mut self, entity: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        self.entities.insert(
            entity.into(),
            fields.into_iter().map(|(f, w)| (f.into(), w)).collect(),
        );
        self
    }
}

impl EntitySource for StaticEntitySource {
    fn fields(&self, entity: &str) -> CrudgenResult<Vec<(String, bool)>> {
        self.entities.get(entity).cloned().ok_or_else(|| {
            ApplicationError::EntityNotFound {
                name: entity.to_string(),
            }
            .into()
        })
    }
}
