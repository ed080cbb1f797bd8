//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each widget library's CLI must
//! implement to configure the scaffolding behavior for its project layout.

use crate::config::ProjectLayout;
use crate::generator::GenerationReport;
use crate::identity::DEFAULT_API_URL;
use std::path::Path;

/// Configuration trait for different widget-library CLIs
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Default project layout (namespace, aggregator files)
/// - Identity lookup endpoint
/// - Documentation links
/// - Post-generation instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Directory conventions of projects built on this library
    fn layout(&self) -> ProjectLayout;

    /// Default API root for author lookups
    fn identity_api_url(&self) -> &'static str {
        DEFAULT_API_URL
    }

    /// Environment variable name for overriding the identity API root
    fn identity_api_env(&self) -> &'static str;

    /// URL for library documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after a widget is created
    fn next_steps(&self, dir: &Path, report: &GenerationReport) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
