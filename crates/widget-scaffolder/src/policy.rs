//! Category policy: which templates and which shared-file references each
//! widget category gets
//!
//! This table is the only place a new category needs to be wired in.

use crate::error::ScaffoldError;
use crate::paths::{Destination, SpecVariant};
use crate::request::WidgetCategory;
use crate::templates::TemplateId;

/// Shared aggregator file a reference line is spliced into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpliceTarget {
    ModuleIndex,
    BaseStyleIndex,
    ThemeStyleIndex,
    SpecIndex(SpecVariant),
}

/// Fixed list of renders and splices for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPlan {
    pub files: &'static [(TemplateId, Destination)],
    pub splices: &'static [SpliceTarget],
}

const VISUAL_SPLICES: &[SpliceTarget] = &[
    SpliceTarget::ModuleIndex,
    SpliceTarget::BaseStyleIndex,
    SpliceTarget::ThemeStyleIndex,
    SpliceTarget::SpecIndex(SpecVariant::Widget),
    SpliceTarget::SpecIndex(SpecVariant::Plain),
];

const VISUAL_INTERACTIVE: CategoryPlan = CategoryPlan {
    files: &[
        (TemplateId::WidgetVisualInteractive, Destination::Module),
        (TemplateId::Style, Destination::BaseStyle),
        (TemplateId::Style, Destination::ThemeStyle),
        (TemplateId::SpecWidget, Destination::Spec(SpecVariant::Widget)),
        (TemplateId::Spec, Destination::Spec(SpecVariant::Plain)),
    ],
    splices: VISUAL_SPLICES,
};

const COMPOSITE: CategoryPlan = CategoryPlan {
    files: &[
        (TemplateId::WidgetComposite, Destination::Module),
        (TemplateId::Style, Destination::BaseStyle),
        (TemplateId::Style, Destination::ThemeStyle),
        (TemplateId::SpecWidget, Destination::Spec(SpecVariant::Widget)),
        (TemplateId::Spec, Destination::Spec(SpecVariant::Plain)),
    ],
    splices: VISUAL_SPLICES,
};

const CONTAINER: CategoryPlan = CategoryPlan {
    files: &[
        (TemplateId::WidgetContainer, Destination::Module),
        (TemplateId::Style, Destination::BaseStyle),
        (TemplateId::Style, Destination::ThemeStyle),
        (TemplateId::SpecWidget, Destination::Spec(SpecVariant::Widget)),
        (
            TemplateId::SpecContainer,
            Destination::Spec(SpecVariant::Container),
        ),
        (TemplateId::Spec, Destination::Spec(SpecVariant::Plain)),
    ],
    splices: &[
        SpliceTarget::ModuleIndex,
        SpliceTarget::BaseStyleIndex,
        SpliceTarget::ThemeStyleIndex,
        SpliceTarget::SpecIndex(SpecVariant::Widget),
        SpliceTarget::SpecIndex(SpecVariant::Container),
        SpliceTarget::SpecIndex(SpecVariant::Plain),
    ],
};

const LAYOUT: CategoryPlan = CategoryPlan {
    files: &[
        (TemplateId::WidgetLayout, Destination::Module),
        (TemplateId::Style, Destination::BaseStyle),
        (TemplateId::Style, Destination::ThemeStyle),
        (TemplateId::SpecWidget, Destination::Spec(SpecVariant::Widget)),
        (TemplateId::SpecLayout, Destination::Spec(SpecVariant::Layout)),
        (TemplateId::Spec, Destination::Spec(SpecVariant::Plain)),
    ],
    splices: &[
        SpliceTarget::ModuleIndex,
        SpliceTarget::BaseStyleIndex,
        SpliceTarget::ThemeStyleIndex,
        SpliceTarget::SpecIndex(SpecVariant::Widget),
        SpliceTarget::SpecIndex(SpecVariant::Layout),
        SpliceTarget::SpecIndex(SpecVariant::Plain),
    ],
};

const NON_VISUAL: CategoryPlan = CategoryPlan {
    files: &[
        (TemplateId::WidgetNonVisual, Destination::Module),
        (TemplateId::Spec, Destination::Spec(SpecVariant::Plain)),
    ],
    splices: &[
        SpliceTarget::ModuleIndex,
        SpliceTarget::SpecIndex(SpecVariant::Plain),
    ],
};

/// Look up the plan for a category.
///
/// `DataView` is a recognized category that has no templates yet and fails
/// with [`ScaffoldError::NotImplemented`].
pub fn plan_for(category: WidgetCategory) -> Result<&'static CategoryPlan, ScaffoldError> {
    match category {
        WidgetCategory::Visual | WidgetCategory::Interactive => Ok(&VISUAL_INTERACTIVE),
        WidgetCategory::Composite => Ok(&COMPOSITE),
        WidgetCategory::Container => Ok(&CONTAINER),
        WidgetCategory::Layout => Ok(&LAYOUT),
        WidgetCategory::NonVisual => Ok(&NON_VISUAL),
        WidgetCategory::DataView => Err(ScaffoldError::NotImplemented(category)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destinations(plan: &CategoryPlan) -> Vec<Destination> {
        plan.files.iter().map(|(_, d)| *d).collect()
    }

    #[test]
    fn test_visual_and_interactive_share_plan() {
        let visual = plan_for(WidgetCategory::Visual).unwrap();
        let interactive = plan_for(WidgetCategory::Interactive).unwrap();
        assert_eq!(visual, interactive);
        assert_eq!(visual.files[0].0, TemplateId::WidgetVisualInteractive);
        assert_eq!(
            destinations(visual),
            vec![
                Destination::Module,
                Destination::BaseStyle,
                Destination::ThemeStyle,
                Destination::Spec(SpecVariant::Widget),
                Destination::Spec(SpecVariant::Plain),
            ]
        );
        assert_eq!(visual.splices.len(), 5);
    }

    #[test]
    fn test_composite_uses_own_module_template() {
        let composite = plan_for(WidgetCategory::Composite).unwrap();
        let visual = plan_for(WidgetCategory::Visual).unwrap();
        assert_eq!(composite.files[0].0, TemplateId::WidgetComposite);
        assert_eq!(destinations(composite), destinations(visual));
        assert_eq!(composite.splices, visual.splices);
    }

    #[test]
    fn test_container_adds_container_spec() {
        let plan = plan_for(WidgetCategory::Container).unwrap();
        assert_eq!(plan.files.len(), 6);
        assert!(plan
            .files
            .contains(&(TemplateId::SpecContainer, Destination::Spec(SpecVariant::Container))));
        assert_eq!(
            plan.splices[3..],
            [
                SpliceTarget::SpecIndex(SpecVariant::Widget),
                SpliceTarget::SpecIndex(SpecVariant::Container),
                SpliceTarget::SpecIndex(SpecVariant::Plain),
            ]
        );
    }

    #[test]
    fn test_layout_adds_layout_spec() {
        let plan = plan_for(WidgetCategory::Layout).unwrap();
        assert_eq!(plan.files[0].0, TemplateId::WidgetLayout);
        assert!(plan
            .files
            .contains(&(TemplateId::SpecLayout, Destination::Spec(SpecVariant::Layout))));
        assert!(plan
            .splices
            .contains(&SpliceTarget::SpecIndex(SpecVariant::Layout)));
        assert_eq!(plan.splices.len(), 6);
    }

    #[test]
    fn test_non_visual_has_no_styles() {
        let plan = plan_for(WidgetCategory::NonVisual).unwrap();
        assert_eq!(
            destinations(plan),
            vec![Destination::Module, Destination::Spec(SpecVariant::Plain)]
        );
        assert_eq!(
            plan.splices,
            [
                SpliceTarget::ModuleIndex,
                SpliceTarget::SpecIndex(SpecVariant::Plain)
            ]
        );
    }

    #[test]
    fn test_data_view_not_implemented() {
        match plan_for(WidgetCategory::DataView) {
            Err(ScaffoldError::NotImplemented(WidgetCategory::DataView)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_module_always_first() {
        for category in WidgetCategory::ALL {
            if let Ok(plan) = plan_for(category) {
                assert_eq!(plan.files[0].1, Destination::Module);
                assert_eq!(plan.splices[0], SpliceTarget::ModuleIndex);
            }
        }
    }
}
