//! Resolving a request into the concrete files and splices to perform

use crate::config::ProjectLayout;
use crate::error::ScaffoldError;
use crate::paths::derive_paths;
use crate::policy::{plan_for, SpliceTarget};
use crate::request::GenerationRequest;
use crate::splice::Marker;
use crate::templates::TemplateId;
use std::path::{Path, PathBuf};

/// A file to render, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: TemplateId,
    pub path: PathBuf,
}

/// A reference line to splice into an aggregator file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSplice {
    pub target: SpliceTarget,
    pub path: PathBuf,
    pub marker: Marker,
    pub line: String,
}

/// Everything a request will do to the project, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub files: Vec<PlannedFile>,
    pub splices: Vec<PlannedSplice>,
}

impl GenerationPlan {
    /// Aggregator files touched by this plan, without duplicates, in first-use order
    pub fn aggregators(&self) -> Vec<&Path> {
        let mut seen: Vec<&Path> = Vec::new();
        for splice in &self.splices {
            if !seen.contains(&splice.path.as_path()) {
                seen.push(&splice.path);
            }
        }
        seen
    }
}

/// Resolve `request` against `layout`. Pure; fails for invalid widget names
/// and for categories that cannot be generated.
pub fn plan_generation(
    request: &GenerationRequest,
    layout: &ProjectLayout,
) -> Result<GenerationPlan, ScaffoldError> {
    request.validate()?;
    let policy = plan_for(request.widget_category)?;
    let paths = derive_paths(request, layout);

    let files = policy
        .files
        .iter()
        .map(|(template, destination)| PlannedFile {
            template: *template,
            path: paths.get(*destination).to_path_buf(),
        })
        .collect();

    let splices = policy
        .splices
        .iter()
        .map(|target| PlannedSplice {
            target: *target,
            path: target.aggregator(layout).to_path_buf(),
            marker: target.marker(),
            line: target.reference_line(request, layout),
        })
        .collect();

    Ok(GenerationPlan { files, splices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::WidgetCategory;

    fn request(category: WidgetCategory) -> GenerationRequest {
        GenerationRequest {
            author_handle: "octocat".to_string(),
            widget_name: "ProgressBar".to_string(),
            widget_super_class: "Widget".to_string(),
            widget_category: category,
            widget_description: "shows progress".to_string(),
        }
    }

    fn file_paths(plan: &GenerationPlan) -> Vec<String> {
        plan.files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect()
    }

    fn splice_pairs(plan: &GenerationPlan) -> Vec<(String, String)> {
        plan.splices
            .iter()
            .map(|s| (s.path.to_string_lossy().into_owned(), s.line.clone()))
            .collect()
    }

    #[test]
    fn test_progressbar_visual_plan() {
        let plan =
            plan_generation(&request(WidgetCategory::Visual), &ProjectLayout::default()).unwrap();

        assert_eq!(
            file_paths(&plan),
            vec![
                "src/visual/progressbar.js",
                "less/base/visual/progressbar.less",
                "less/theme-particle/visual/progressbar.less",
                "test/spec/visual/progressbar-widget.js",
                "test/spec/visual/progressbar.js",
            ]
        );
        assert_eq!(
            splice_pairs(&plan),
            vec![
                (
                    "src/photonui.js".to_string(),
                    "photonui.ProgressBar = require(\"./visual/progressbar.js\");".to_string()
                ),
                (
                    "less/base/imports.less".to_string(),
                    "@import \"visual/progressbar.less\";".to_string()
                ),
                (
                    "less/theme-particle/imports.less".to_string(),
                    "@import \"visual/progressbar.less\";".to_string()
                ),
                (
                    "test/index.html".to_string(),
                    "<script src=\"spec/visual/progressbar-widget.js\"></script>".to_string()
                ),
                (
                    "test/index.html".to_string(),
                    "<script src=\"spec/visual/progressbar.js\"></script>".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_container_plan_files() {
        let plan = plan_generation(&request(WidgetCategory::Container), &ProjectLayout::default())
            .unwrap();
        assert_eq!(
            file_paths(&plan),
            vec![
                "src/container/progressbar.js",
                "less/base/container/progressbar.less",
                "less/theme-particle/container/progressbar.less",
                "test/spec/container/progressbar-widget.js",
                "test/spec/container/progressbar-container.js",
                "test/spec/container/progressbar.js",
            ]
        );
        assert_eq!(plan.splices.len(), 6);
        assert_eq!(
            plan.splices[4].line,
            "<script src=\"spec/container/progressbar-container.js\"></script>"
        );
    }

    #[test]
    fn test_layout_plan_files() {
        let plan =
            plan_generation(&request(WidgetCategory::Layout), &ProjectLayout::default()).unwrap();
        assert!(file_paths(&plan).contains(&"test/spec/layout/progressbar-layout.js".to_string()));
        assert_eq!(plan.files[0].template, TemplateId::WidgetLayout);
        assert_eq!(
            plan.splices[4].line,
            "<script src=\"spec/layout/progressbar-layout.js\"></script>"
        );
    }

    #[test]
    fn test_non_visual_plan_files() {
        let plan = plan_generation(&request(WidgetCategory::NonVisual), &ProjectLayout::default())
            .unwrap();
        assert_eq!(
            file_paths(&plan),
            vec![
                "src/nonvisual/progressbar.js",
                "test/spec/nonvisual/progressbar.js"
            ]
        );
        assert_eq!(
            plan.aggregators(),
            vec![Path::new("src/photonui.js"), Path::new("test/index.html")]
        );
    }

    #[test]
    fn test_every_category_file_set() {
        let expected: [(WidgetCategory, usize, usize); 6] = [
            (WidgetCategory::Visual, 5, 5),
            (WidgetCategory::Interactive, 5, 5),
            (WidgetCategory::Composite, 5, 5),
            (WidgetCategory::Container, 6, 6),
            (WidgetCategory::Layout, 6, 6),
            (WidgetCategory::NonVisual, 2, 2),
        ];
        for (category, files, splices) in expected {
            let plan = plan_generation(&request(category), &ProjectLayout::default()).unwrap();
            assert_eq!(plan.files.len(), files, "{}", category);
            assert_eq!(plan.splices.len(), splices, "{}", category);
        }
    }

    #[test]
    fn test_data_view_plan_fails() {
        let err = plan_generation(&request(WidgetCategory::DataView), &ProjectLayout::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::NotImplemented(WidgetCategory::DataView)
        ));
    }
}
