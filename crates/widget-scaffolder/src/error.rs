//! Error types for widget generation

use crate::request::WidgetCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while planning or writing a widget
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The category string is not one of the known widget categories
    #[error("'{0}' is not a valid widget type")]
    InvalidCategory(String),

    /// The widget name cannot be used as a file name and identifier
    #[error("'{0}' is not a valid widget name")]
    InvalidWidgetName(String),

    /// The category is known but generation for it is not supported yet
    #[error("{0} widgets are not implemented yet")]
    NotImplemented(WidgetCategory),

    /// The aggregator file has no insertion marker
    #[error("Marker '{marker}' not found in {}", path.display())]
    MarkerNotFound { path: PathBuf, marker: String },

    /// The aggregator file has more than one insertion marker
    #[error("Marker '{marker}' appears {count} times in {} (expected exactly one)", path.display())]
    MarkerAmbiguous {
        path: PathBuf,
        marker: String,
        count: usize,
    },

    /// A generated file would overwrite an existing one
    #[error("Destination already exists: {}", .0.display())]
    DestinationConflict(PathBuf),

    #[error("Failed to render template '{name}'")]
    Template {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was raised before anything touched the project tree
    pub fn is_pre_write(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategory(_)
                | Self::InvalidWidgetName(_)
                | Self::NotImplemented(_)
                | Self::DestinationConflict(_)
        )
    }
}
