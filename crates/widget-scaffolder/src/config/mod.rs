//! Project configuration
//!
//! The product supplies a default [`ProjectLayout`]; a project may override
//! parts of it with a `.widget-scaffolder.yaml` file in its root.

pub mod layout;

pub use layout::{LayoutOverrides, ProjectLayout, PROJECT_CONFIG_FILE};
