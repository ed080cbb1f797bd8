//! Widget Scaffolder - Shared library for widget scaffolding CLIs
//!
//! This library generates the source, style and spec files for a new widget
//! inside an existing widget-library project, and registers the widget in the
//! project's shared aggregator files (module index, stylesheet import
//! manifests, HTML test runner). It is designed to be used by CLI binaries
//! that share the generation logic but target different libraries through
//! their `ProductConfig`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure path derivation, the category policy
//!   table, template rendering and marker-based splicing
//! - **Layer 2: Workflow Orchestration** - `ProductConfig`, `ProjectLayout`,
//!   identity lookup and the `WidgetGenerator` executor
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use widget_scaffolder::{GenerationRequest, WidgetGenerator, ProjectLayout, TemplateRenderer};
//! use widget_scaffolder::identity::{github::lookup_author, IdentityConfig};
//!
//! let request = GenerationRequest { widget_name: "ProgressBar".into(), ..Default::default() };
//! let author = lookup_author(IdentityConfig::new("my-tool"), &request.author_handle).await;
//! let generator = WidgetGenerator::new(".", ProjectLayout::default(), TemplateRenderer::embedded().await?);
//! let report = generator.generate(&request, &author).await?;
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod identity;
pub mod paths;
pub mod policy;
pub mod product;
pub mod request;
pub mod splice;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ProjectLayout;
pub use error::ScaffoldError;
pub use generator::{
    plan_generation, GenerationFailure, GenerationPlan, GenerationReport, WidgetGenerator,
};
pub use identity::{AuthorLookup, AuthorProfile, IdentityConfig};
pub use paths::{derive_paths, superclass_reference, DestinationPathSet};
pub use policy::{plan_for, CategoryPlan, SpliceTarget};
pub use product::ProductConfig;
pub use request::{GenerationRequest, WidgetCategory};
pub use splice::{splice_file, splice_text, Marker, SpliceOutcome};
pub use templates::{TemplateId, TemplateRenderer, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;
