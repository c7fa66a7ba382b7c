//! Placeholder substitution.
//!
//! Templates carry `{UPPER_SNAKE}` tokens. Each view target gets a map of
//! token → value; substitution is a single left-to-right pass over the
//! template, so values are never re-scanned and map order cannot matter.
//! Tokens missing from the map are copied through untouched.

use std::collections::HashMap;

use crate::domain::{entity::EntityDescriptor, fragments, naming, view::ViewTarget};

pub const MODEL_PLURAL: &str = "MODEL_PLURAL";
pub const MODEL_SINGULAR: &str = "MODEL_SINGULAR";
pub const MODEL_TITLE: &str = "MODEL_TITLE";
pub const MODEL_TITLE_PLURAL: &str = "MODEL_TITLE_PLURAL";
pub const MODEL_VARIABLE: &str = "MODEL_VARIABLE";
pub const PATH: &str = "PATH";
pub const TABLE_HEADERS: &str = "TABLE_HEADERS";
pub const TABLE_COLUMNS: &str = "TABLE_COLUMNS";
pub const SHOW_FIELDS: &str = "SHOW_FIELDS";
pub const FORM_FIELDS: &str = "FORM_FIELDS";

/// Token (without braces) → replacement text.
pub type Placeholders = HashMap<&'static str, String>;

/// Build the placeholder map for one view target.
pub fn placeholders(target: ViewTarget, entity: &EntityDescriptor, base_path: &str) -> Placeholders {
    let name = entity.name();
    let lower = naming::lower(name);
    let title = naming::title_case(name);
    let variable = entity.variable();

    let mut map = Placeholders::from([
        (MODEL_PLURAL, naming::pluralize(&lower)),
        (MODEL_SINGULAR, naming::singularize(&lower)),
        (MODEL_TITLE_PLURAL, naming::pluralize(&title)),
        (MODEL_TITLE, title),
        (PATH, base_path.to_string()),
    ]);

    match target {
        ViewTarget::Index => {
            map.insert(TABLE_HEADERS, fragments::table_headers(entity.fields()));
            map.insert(TABLE_COLUMNS, fragments::table_columns(entity.fields(), &variable));
        }
        ViewTarget::Show => {
            map.insert(SHOW_FIELDS, fragments::show_fields(entity.fields(), &variable));
        }
        ViewTarget::Form => {
            map.insert(FORM_FIELDS, fragments::form_fields(entity.fields(), &variable));
        }
        ViewTarget::Create | ViewTarget::Edit => {}
    }

    map.insert(MODEL_VARIABLE, variable);
    map
}

/// Render `template` for `target`. Deterministic; never fails.
pub fn render(
    target: ViewTarget,
    entity: &EntityDescriptor,
    base_path: &str,
    template: &str,
) -> String {
    substitute(template, &placeholders(target, entity, base_path))
}

/// Replace every `{TOKEN}` whose name is in `values`, in one pass.
pub fn substitute(template: &str, values: &Placeholders) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let token_len = after
            .find(|c: char| !(c.is_ascii_uppercase() || c == '_'))
            .unwrap_or(after.len());

        let replaced = (token_len > 0 && after[token_len..].starts_with('}'))
            .then(|| values.get(&after[..token_len]))
            .flatten();

        match replaced {
            Some(value) => {
                out.push_str(value);
                rest = &after[token_len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
