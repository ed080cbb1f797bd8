//! Widget templates
//!
//! This module provides:
//! - The catalog of built-in templates (`TemplateId`)
//! - Template sources (embedded or a local override directory)
//! - Rendering with minijinja and create-only writing into the project

pub mod catalog;
pub mod renderer;
pub mod source;

pub use catalog::{TemplateId, PARTIALS};
pub use renderer::{AuthorContext, RenderContext, TemplateRenderer};
pub use source::TemplateSource;
