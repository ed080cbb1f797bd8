//! Directory conventions of the target widget-library project

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Per-project override file, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".widget-scaffolder.yaml";

/// Where sources, styles and specs live inside the project, and which shared
/// files aggregate them. All paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Namespace object the module index attaches widgets to
    pub namespace: String,
    pub source_dir: PathBuf,
    /// Master module index (`src/photonui.js`)
    pub module_index: PathBuf,
    pub base_style_dir: PathBuf,
    pub base_style_index: PathBuf,
    pub theme_style_dir: PathBuf,
    pub theme_style_index: PathBuf,
    pub spec_dir: PathBuf,
    /// HTML test runner listing every spec file
    pub test_manifest: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            namespace: "photonui".to_string(),
            source_dir: PathBuf::from("src"),
            module_index: PathBuf::from("src/photonui.js"),
            base_style_dir: PathBuf::from("less/base"),
            base_style_index: PathBuf::from("less/base/imports.less"),
            theme_style_dir: PathBuf::from("less/theme-particle"),
            theme_style_index: PathBuf::from("less/theme-particle/imports.less"),
            spec_dir: PathBuf::from("test/spec"),
            test_manifest: PathBuf::from("test/index.html"),
        }
    }
}

/// Partial layout read from the project config file; unset fields keep the
/// product defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub source_dir: Option<PathBuf>,
    #[serde(default)]
    pub module_index: Option<PathBuf>,
    #[serde(default)]
    pub base_style_dir: Option<PathBuf>,
    #[serde(default)]
    pub base_style_index: Option<PathBuf>,
    #[serde(default)]
    pub theme_style_dir: Option<PathBuf>,
    #[serde(default)]
    pub theme_style_index: Option<PathBuf>,
    #[serde(default)]
    pub spec_dir: Option<PathBuf>,
    #[serde(default)]
    pub test_manifest: Option<PathBuf>,
}

impl LayoutOverrides {
    /// Apply these overrides on top of a base layout
    pub fn apply(self, base: ProjectLayout) -> ProjectLayout {
        ProjectLayout {
            namespace: self.namespace.unwrap_or(base.namespace),
            source_dir: self.source_dir.unwrap_or(base.source_dir),
            module_index: self.module_index.unwrap_or(base.module_index),
            base_style_dir: self.base_style_dir.unwrap_or(base.base_style_dir),
            base_style_index: self.base_style_index.unwrap_or(base.base_style_index),
            theme_style_dir: self.theme_style_dir.unwrap_or(base.theme_style_dir),
            theme_style_index: self.theme_style_index.unwrap_or(base.theme_style_index),
            spec_dir: self.spec_dir.unwrap_or(base.spec_dir),
            test_manifest: self.test_manifest.unwrap_or(base.test_manifest),
        }
    }
}

impl ProjectLayout {
    /// Load the layout for a project, merging its config file (if any) over `base`
    pub async fn load(project_root: &Path, base: ProjectLayout) -> Result<Self, ScaffoldError> {
        let config_path = project_root.join(PROJECT_CONFIG_FILE);
        if !config_path.exists() {
            return Ok(base);
        }

        let content = fs::read_to_string(&config_path)
            .await
            .map_err(|e| ScaffoldError::io(&config_path, e))?;
        Self::from_yaml(&content, base).map_err(|source| ScaffoldError::Config {
            path: config_path,
            source,
        })
    }

    /// Parse overrides from YAML text; an empty document keeps `base` as is
    pub fn from_yaml(content: &str, base: ProjectLayout) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(base);
        }
        let overrides: LayoutOverrides = serde_yaml::from_str(content)?;
        Ok(overrides.apply(base))
    }

    /// Prefix used by the module index to reach the source directory
    pub fn module_ref_prefix(&self) -> String {
        relative_ref(&self.source_dir, parent_of(&self.module_index), ".")
    }

    pub fn base_style_ref_prefix(&self) -> String {
        relative_ref(&self.base_style_dir, parent_of(&self.base_style_index), "")
    }

    pub fn theme_style_ref_prefix(&self) -> String {
        relative_ref(&self.theme_style_dir, parent_of(&self.theme_style_index), "")
    }

    /// Prefix used by the test manifest to reach the spec directory
    pub fn spec_ref_prefix(&self) -> String {
        relative_ref(&self.spec_dir, parent_of(&self.test_manifest), "")
    }
}

fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Express `target` relative to `base` as a forward-slash prefix.
///
/// `same_dir` is what to return when both are the same directory (`.` for
/// module requires, empty for stylesheet imports). It also prefixes targets
/// below `base`; targets elsewhere climb out of `base` with `..` segments.
fn relative_ref(target: &Path, base: &Path, same_dir: &str) -> String {
    let target = segments(target);
    let base = segments(base);
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(t, b)| t == b)
        .count();

    let climbs = base.len() - common;
    let parts: Vec<&str> = std::iter::repeat("..")
        .take(climbs)
        .chain(target[common..].iter().map(String::as_str))
        .collect();

    match (parts.is_empty(), climbs > 0 || same_dir.is_empty()) {
        (true, _) => same_dir.to_string(),
        (false, true) => parts.join("/"),
        (false, false) => format!("{}/{}", same_dir, parts.join("/")),
    }
}

/// Normal components of a relative path, as strings
fn segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_prefixes() {
        let layout = ProjectLayout::default();
        assert_eq!(layout.module_ref_prefix(), ".");
        assert_eq!(layout.base_style_ref_prefix(), "");
        assert_eq!(layout.theme_style_ref_prefix(), "");
        assert_eq!(layout.spec_ref_prefix(), "spec");
    }

    #[test]
    fn test_overrides_merge_over_base() {
        let yaml = "namespace: acme\nspec_dir: test/specs\n";
        let layout = ProjectLayout::from_yaml(yaml, ProjectLayout::default()).unwrap();
        assert_eq!(layout.namespace, "acme");
        assert_eq!(layout.spec_dir, PathBuf::from("test/specs"));
        assert_eq!(layout.module_index, PathBuf::from("src/photonui.js"));
        assert_eq!(layout.spec_ref_prefix(), "specs");
    }

    #[test]
    fn test_empty_config_keeps_base() {
        let layout = ProjectLayout::from_yaml("  \n", ProjectLayout::default()).unwrap();
        assert_eq!(layout, ProjectLayout::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ProjectLayout::from_yaml("namespcae: typo\n", ProjectLayout::default()).is_err());
    }

    #[test]
    fn test_nested_source_dir_prefix() {
        let layout = ProjectLayout {
            source_dir: PathBuf::from("src/widgets"),
            ..ProjectLayout::default()
        };
        assert_eq!(layout.module_ref_prefix(), "./widgets");
    }

    #[test]
    fn test_sibling_dirs_climb_out_of_index_dir() {
        let yaml = "spec_dir: specs\nsource_dir: lib\n";
        let layout = ProjectLayout::from_yaml(yaml, ProjectLayout::default()).unwrap();
        assert_eq!(layout.module_ref_prefix(), "../lib");
        assert_eq!(layout.spec_ref_prefix(), "../specs");
    }

    #[test]
    fn test_style_dir_outside_manifest_dir() {
        let layout = ProjectLayout {
            base_style_dir: PathBuf::from("styles/base"),
            base_style_index: PathBuf::from("less/imports.less"),
            ..ProjectLayout::default()
        };
        assert_eq!(layout.base_style_ref_prefix(), "../styles/base");
    }

    #[test]
    fn test_index_below_source_dir() {
        let layout = ProjectLayout {
            module_index: PathBuf::from("src/index/photonui.js"),
            ..ProjectLayout::default()
        };
        assert_eq!(layout.module_ref_prefix(), "..");
    }

    #[tokio::test]
    async fn test_load_reads_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "namespace: acme\n").unwrap();

        let layout = ProjectLayout::load(dir.path(), ProjectLayout::default())
            .await
            .unwrap();
        assert_eq!(layout.namespace, "acme");
    }

    #[tokio::test]
    async fn test_load_without_file_returns_base() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::load(dir.path(), ProjectLayout::default())
            .await
            .unwrap();
        assert_eq!(layout, ProjectLayout::default());
    }
}
