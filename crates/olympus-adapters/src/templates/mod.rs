//! Built-in project templates.

mod builtin;
mod render;

pub use builtin::{BuiltinTemplates, INIT_FILE_NAME};
pub use render::RenderContext;
