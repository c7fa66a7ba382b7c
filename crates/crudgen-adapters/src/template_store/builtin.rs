//! Embedded template store.

use crudgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::ViewTarget,
    error::CrudgenResult,
};

use crate::assets;

/// Serves the templates compiled into the binary. Never fails for a known view.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn get(&self, view: ViewTarget) -> CrudgenResult<String> {
        assets::builtin_template(view)
            .map(str::to_string)
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    view: view.to_string(),
                }
                .into()
            })
    }
}
