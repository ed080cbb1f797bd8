//! Built-in widget templates
//!
//! Templates are embedded at compile time from the crate's `templates/`
//! directory, so the binary works without any template files on disk.

/// Identifier of a renderable template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    WidgetVisualInteractive,
    WidgetComposite,
    WidgetContainer,
    WidgetLayout,
    WidgetNonVisual,
    Style,
    SpecWidget,
    SpecContainer,
    SpecLayout,
    Spec,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        TemplateId::WidgetVisualInteractive,
        TemplateId::WidgetComposite,
        TemplateId::WidgetContainer,
        TemplateId::WidgetLayout,
        TemplateId::WidgetNonVisual,
        TemplateId::Style,
        TemplateId::SpecWidget,
        TemplateId::SpecContainer,
        TemplateId::SpecLayout,
        TemplateId::Spec,
    ];

    /// Template file name, also its name inside the render environment
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::WidgetVisualInteractive => "widget-visual-interactive.js",
            TemplateId::WidgetComposite => "widget-composite.js",
            TemplateId::WidgetContainer => "widget-container.js",
            TemplateId::WidgetLayout => "widget-layout.js",
            TemplateId::WidgetNonVisual => "widget-nonvisual.js",
            TemplateId::Style => "style.less",
            TemplateId::SpecWidget => "spec-widget.js",
            TemplateId::SpecContainer => "spec-container.js",
            TemplateId::SpecLayout => "spec-layout.js",
            TemplateId::Spec => "spec.js",
        }
    }

    pub fn embedded(&self) -> &'static str {
        match self {
            TemplateId::WidgetVisualInteractive => {
                include_str!("../../templates/photonui/widget-visual-interactive.js")
            }
            TemplateId::WidgetComposite => {
                include_str!("../../templates/photonui/widget-composite.js")
            }
            TemplateId::WidgetContainer => {
                include_str!("../../templates/photonui/widget-container.js")
            }
            TemplateId::WidgetLayout => include_str!("../../templates/photonui/widget-layout.js"),
            TemplateId::WidgetNonVisual => {
                include_str!("../../templates/photonui/widget-nonvisual.js")
            }
            TemplateId::Style => include_str!("../../templates/photonui/style.less"),
            TemplateId::SpecWidget => include_str!("../../templates/photonui/spec-widget.js"),
            TemplateId::SpecContainer => {
                include_str!("../../templates/photonui/spec-container.js")
            }
            TemplateId::SpecLayout => include_str!("../../templates/photonui/spec-layout.js"),
            TemplateId::Spec => include_str!("../../templates/photonui/spec.js"),
        }
    }
}

/// Shared fragments included by the templates above
pub const PARTIALS: &[(&str, &str)] = &[(
    "header.js",
    include_str!("../../templates/photonui/header.js"),
)];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = TemplateId::ALL.iter().map(|t| t.file_name()).collect();
        assert_eq!(names.len(), TemplateId::ALL.len());
        for (partial, _) in PARTIALS {
            assert!(!names.contains(partial));
        }
    }

    #[test]
    fn test_embedded_templates_not_empty() {
        for id in TemplateId::ALL {
            assert!(!id.embedded().trim().is_empty(), "{} is empty", id.file_name());
        }
    }

    #[test]
    fn test_module_templates_export_widget() {
        for id in [
            TemplateId::WidgetVisualInteractive,
            TemplateId::WidgetComposite,
            TemplateId::WidgetContainer,
            TemplateId::WidgetLayout,
            TemplateId::WidgetNonVisual,
        ] {
            let source = id.embedded();
            assert!(source.contains("require(\"{{ super_class_path }}\")"));
            assert!(source.contains("module.exports = {{ widget_name }};"));
        }
    }
}
