//! Reference lines written into each aggregator file

use super::marker::Marker;
use crate::config::ProjectLayout;
use crate::paths::SpecVariant;
use crate::policy::SpliceTarget;
use crate::request::GenerationRequest;
use std::path::Path;

fn join_ref(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{}/{}", prefix, rest)
    }
}

impl SpliceTarget {
    /// Aggregator file this target patches
    pub fn aggregator<'a>(&self, layout: &'a ProjectLayout) -> &'a Path {
        match self {
            SpliceTarget::ModuleIndex => &layout.module_index,
            SpliceTarget::BaseStyleIndex => &layout.base_style_index,
            SpliceTarget::ThemeStyleIndex => &layout.theme_style_index,
            SpliceTarget::SpecIndex(_) => &layout.test_manifest,
        }
    }

    pub fn marker(&self) -> Marker {
        match self {
            SpliceTarget::ModuleIndex => Marker::LINE_COMMENT,
            SpliceTarget::BaseStyleIndex | SpliceTarget::ThemeStyleIndex => Marker::BLOCK_COMMENT,
            SpliceTarget::SpecIndex(_) => Marker::HTML_COMMENT,
        }
    }

    /// Line referencing the widget's generated file from the aggregator
    pub fn reference_line(&self, request: &GenerationRequest, layout: &ProjectLayout) -> String {
        let category = request.widget_category.dir_name();
        let stem = request.file_stem();

        match self {
            SpliceTarget::ModuleIndex => module_reference(request, layout, &category, &stem),
            SpliceTarget::BaseStyleIndex => {
                style_reference(&layout.base_style_ref_prefix(), &category, &stem)
            }
            SpliceTarget::ThemeStyleIndex => {
                style_reference(&layout.theme_style_ref_prefix(), &category, &stem)
            }
            SpliceTarget::SpecIndex(variant) => {
                spec_reference(&layout.spec_ref_prefix(), &category, &stem, *variant)
            }
        }
    }
}

/// `photonui.ProgressBar = require("./visual/progressbar.js");`
fn module_reference(
    request: &GenerationRequest,
    layout: &ProjectLayout,
    category: &str,
    stem: &str,
) -> String {
    format!(
        "{}.{} = require(\"{}\");",
        layout.namespace,
        request.widget_name,
        join_ref(
            &layout.module_ref_prefix(),
            &format!("{}/{}.js", category, stem)
        )
    )
}

/// `@import "visual/progressbar.less";`
fn style_reference(prefix: &str, category: &str, stem: &str) -> String {
    format!(
        "@import \"{}\";",
        join_ref(prefix, &format!("{}/{}.less", category, stem))
    )
}

/// `<script src="spec/visual/progressbar-widget.js"></script>`
fn spec_reference(prefix: &str, category: &str, stem: &str, variant: SpecVariant) -> String {
    format!(
        "<script src=\"{}\"></script>",
        join_ref(
            prefix,
            &format!("{}/{}.js", category, variant.file_stem(stem))
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::WidgetCategory;
    use std::path::PathBuf;

    fn request() -> GenerationRequest {
        GenerationRequest {
            widget_name: "ProgressBar".to_string(),
            widget_category: WidgetCategory::Visual,
            ..GenerationRequest::default()
        }
    }

    #[test]
    fn test_module_reference() {
        let line = SpliceTarget::ModuleIndex.reference_line(&request(), &ProjectLayout::default());
        assert_eq!(
            line,
            "photonui.ProgressBar = require(\"./visual/progressbar.js\");"
        );
    }

    #[test]
    fn test_style_references_identical_for_both_themes() {
        let layout = ProjectLayout::default();
        let base = SpliceTarget::BaseStyleIndex.reference_line(&request(), &layout);
        let theme = SpliceTarget::ThemeStyleIndex.reference_line(&request(), &layout);
        assert_eq!(base, "@import \"visual/progressbar.less\";");
        assert_eq!(base, theme);
        assert_ne!(
            SpliceTarget::BaseStyleIndex.aggregator(&layout),
            SpliceTarget::ThemeStyleIndex.aggregator(&layout)
        );
    }

    #[test]
    fn test_spec_references_by_variant() {
        let layout = ProjectLayout::default();
        let line = |variant| SpliceTarget::SpecIndex(variant).reference_line(&request(), &layout);
        assert_eq!(
            line(SpecVariant::Widget),
            "<script src=\"spec/visual/progressbar-widget.js\"></script>"
        );
        assert_eq!(
            line(SpecVariant::Container),
            "<script src=\"spec/visual/progressbar-container.js\"></script>"
        );
        assert_eq!(
            line(SpecVariant::Plain),
            "<script src=\"spec/visual/progressbar.js\"></script>"
        );
    }

    #[test]
    fn test_custom_layout_prefixes() {
        let layout = ProjectLayout {
            namespace: "acme".to_string(),
            source_dir: PathBuf::from("src/widgets"),
            ..ProjectLayout::default()
        };
        let line = SpliceTarget::ModuleIndex.reference_line(&request(), &layout);
        assert_eq!(
            line,
            "acme.ProgressBar = require(\"./widgets/visual/progressbar.js\");"
        );
    }

    #[test]
    fn test_sibling_dir_overrides_reach_out_of_index_dir() {
        let yaml = "spec_dir: specs\nsource_dir: lib\n";
        let layout = ProjectLayout::from_yaml(yaml, ProjectLayout::default()).unwrap();
        assert_eq!(
            SpliceTarget::ModuleIndex.reference_line(&request(), &layout),
            "photonui.ProgressBar = require(\"../lib/visual/progressbar.js\");"
        );
        assert_eq!(
            SpliceTarget::SpecIndex(SpecVariant::Plain).reference_line(&request(), &layout),
            "<script src=\"../specs/visual/progressbar.js\"></script>"
        );
    }

    #[test]
    fn test_markers_per_target() {
        assert_eq!(SpliceTarget::ModuleIndex.marker(), Marker::LINE_COMMENT);
        assert_eq!(SpliceTarget::ThemeStyleIndex.marker(), Marker::BLOCK_COMMENT);
        assert_eq!(
            SpliceTarget::SpecIndex(SpecVariant::Layout).marker(),
            Marker::HTML_COMMENT
        );
    }
}
