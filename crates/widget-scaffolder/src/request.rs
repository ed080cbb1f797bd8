//! Widget generation request model

use crate::error::ScaffoldError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_AUTHOR_HANDLE: &str = "someuser";
pub const DEFAULT_WIDGET_NAME: &str = "FooWidget";
pub const DEFAULT_SUPER_CLASS: &str = "Widget";

/// Widget classification controlling which files and references are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetCategory {
    Composite,
    Container,
    DataView,
    Interactive,
    Layout,
    NonVisual,
    #[default]
    Visual,
}

impl WidgetCategory {
    /// All categories, in the order they are offered to the user
    pub const ALL: [WidgetCategory; 7] = [
        WidgetCategory::Composite,
        WidgetCategory::Container,
        WidgetCategory::DataView,
        WidgetCategory::Interactive,
        WidgetCategory::Layout,
        WidgetCategory::NonVisual,
        WidgetCategory::Visual,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetCategory::Composite => "Composite",
            WidgetCategory::Container => "Container",
            WidgetCategory::DataView => "DataView",
            WidgetCategory::Interactive => "Interactive",
            WidgetCategory::Layout => "Layout",
            WidgetCategory::NonVisual => "NonVisual",
            WidgetCategory::Visual => "Visual",
        }
    }

    /// Directory segment used for every path of this category
    pub fn dir_name(&self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WidgetCategory {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScaffoldError::InvalidCategory(s.to_string()))
    }
}

/// Everything the generator needs to know about the widget being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub author_handle: String,
    pub widget_name: String,
    pub widget_super_class: String,
    pub widget_category: WidgetCategory,
    pub widget_description: String,
}

impl GenerationRequest {
    /// Lowercased file stem shared by every generated file
    pub fn file_stem(&self) -> String {
        self.widget_name.to_lowercase()
    }

    /// Reject widget names that would escape the category directory or
    /// produce an empty file stem
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        let name = self.widget_name.trim();
        if name.is_empty() || name.contains(['/', '\\', '.']) {
            return Err(ScaffoldError::InvalidWidgetName(self.widget_name.clone()));
        }
        Ok(())
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            author_handle: DEFAULT_AUTHOR_HANDLE.to_string(),
            widget_name: DEFAULT_WIDGET_NAME.to_string(),
            widget_super_class: DEFAULT_SUPER_CLASS.to_string(),
            widget_category: WidgetCategory::default(),
            widget_description: String::new(),
        }
    }
}
