//! Configuration loading and resolution utilities.
//!
//! Values are layered from config files, `MQX__SECTION__KEY` environment
//! variables and CLI flags into a [`RawConfig`](raw::RawConfig), then
//! resolved and validated into the [`ResolvedConfig`] used by the workflow.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
