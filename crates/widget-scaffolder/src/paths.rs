//! Destination path derivation
//!
//! Every generated file lives under `{root}/{category}/{name}` with both
//! segments lowercased, so widgets of different categories never collide.

use crate::config::ProjectLayout;
use crate::request::GenerationRequest;
use std::path::{Path, PathBuf};

/// Superclasses that live at the library root rather than next to the widget
const ROOT_SUPER_CLASSES: &[&str] = &["Widget", "Base"];

/// Spec file variants a widget may get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVariant {
    Widget,
    Container,
    Layout,
    Plain,
}

impl SpecVariant {
    /// File name suffix, e.g. `progressbar-widget.js`
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            SpecVariant::Widget => Some("widget"),
            SpecVariant::Container => Some("container"),
            SpecVariant::Layout => Some("layout"),
            SpecVariant::Plain => None,
        }
    }

    /// `{stem}` or `{stem}-{suffix}`
    pub fn file_stem(&self, stem: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("{}-{}", stem, suffix),
            None => stem.to_string(),
        }
    }
}

/// Slot in the destination set a template renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Module,
    BaseStyle,
    ThemeStyle,
    Spec(SpecVariant),
}

/// Every path a widget could be generated into, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPathSet {
    pub module: PathBuf,
    pub base_style: PathBuf,
    pub theme_style: PathBuf,
    pub spec_widget: PathBuf,
    pub spec_container: PathBuf,
    pub spec_layout: PathBuf,
    pub spec: PathBuf,
}

impl DestinationPathSet {
    pub fn get(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Module => &self.module,
            Destination::BaseStyle => &self.base_style,
            Destination::ThemeStyle => &self.theme_style,
            Destination::Spec(SpecVariant::Widget) => &self.spec_widget,
            Destination::Spec(SpecVariant::Container) => &self.spec_container,
            Destination::Spec(SpecVariant::Layout) => &self.spec_layout,
            Destination::Spec(SpecVariant::Plain) => &self.spec,
        }
    }
}

/// Derive the destination paths for a request. Pure; performs no I/O.
pub fn derive_paths(request: &GenerationRequest, layout: &ProjectLayout) -> DestinationPathSet {
    let category = request.widget_category.dir_name();
    let stem = request.file_stem();

    let in_dir = |root: &Path, file_name: String| root.join(&category).join(file_name);
    let spec = |variant: SpecVariant| {
        in_dir(&layout.spec_dir, format!("{}.js", variant.file_stem(&stem)))
    };

    DestinationPathSet {
        module: in_dir(&layout.source_dir, format!("{}.js", stem)),
        base_style: in_dir(&layout.base_style_dir, format!("{}.less", stem)),
        theme_style: in_dir(&layout.theme_style_dir, format!("{}.less", stem)),
        spec_widget: spec(SpecVariant::Widget),
        spec_container: spec(SpecVariant::Container),
        spec_layout: spec(SpecVariant::Layout),
        spec: spec(SpecVariant::Plain),
    }
}

/// Import path of the widget's superclass, relative to the generated module.
///
/// `Widget` and `Base` (exact match) resolve to the library root; any other
/// class is expected to sit next to the widget in its category directory.
pub fn superclass_reference(super_class: &str) -> String {
    let file = format!("{}.js", super_class.to_lowercase());
    if ROOT_SUPER_CLASSES.contains(&super_class) {
        format!("../{}", file)
    } else {
        format!("./{}", file)
    }
}
