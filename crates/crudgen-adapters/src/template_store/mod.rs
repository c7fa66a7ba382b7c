//! Template store adapters.
//!
//! - [`BuiltinTemplateStore`]: the templates embedded in the binary
//! - [`DirectoryTemplateStore`]: `<view>.blade.php` files in a directory
//! - [`LayeredTemplateStore`]: asks each layer in turn, first hit wins

mod builtin;
mod directory;
mod layered;

pub use builtin::BuiltinTemplateStore;
pub use directory::DirectoryTemplateStore;
pub use layered::LayeredTemplateStore;
