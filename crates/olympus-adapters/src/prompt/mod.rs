//! Prompt adapters.

#[cfg(feature = "interactive")]
mod terminal;
mod scripted;

pub use scripted::ScriptedPrompter;
#[cfg(feature = "interactive")]
pub use terminal::DialoguerPrompter;
