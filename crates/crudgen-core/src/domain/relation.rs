//! Related-entity names for foreign-key fields.

use serde::Serialize;

use crate::domain::naming;

/// Names derived from a foreign-key field such as `blog_post_id`.
///
/// Purely a function of the field name; recomputed wherever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationDescriptor {
    /// Field name without the `_id` suffix (`blog_post`). Used as the loop
    /// variable when iterating the collection.
    pub relation_singular: String,
    /// Studly-cased singular (`BlogPost`).
    pub relation_model_name: String,
    /// Camel-cased plural the view expects from the controller (`blogPosts`).
    pub relation_collection_variable: String,
}

impl RelationDescriptor {
    /// The controller line a view needs for this relation to render,
    /// e.g. `$categories = Category::all();`.
    pub fn controller_binding(&self) -> String {
        format!(
            "${} = {}::all();",
            self.relation_collection_variable, self.relation_model_name
        )
    }
}

/// Derive relation names from a field name.
///
/// Only meaningful when the field classifies as `ForeignKey`; for any other
/// name it still returns a best-effort descriptor.
pub fn derive_relation(field_name: &str) -> RelationDescriptor {
    let base = naming::strip_suffix(&naming::lower(field_name), "_id");

    RelationDescriptor {
        relation_model_name: naming::studly_case(&naming::singularize(&base)),
        relation_collection_variable: naming::camel_case(&naming::pluralize(&base)),
        relation_singular: base,
    }
}
