//! Widget generation: plan, write files, splice aggregators
//!
//! Generation runs in a fixed order: every destination is checked first, then
//! files are rendered, then aggregator files are patched. Nothing is rolled
//! back when a later step fails; the partial [`GenerationReport`] says what
//! already happened.

pub mod check;
pub mod plan;

use crate::config::ProjectLayout;
use crate::error::ScaffoldError;
use crate::identity::AuthorLookup;
use crate::request::GenerationRequest;
use crate::splice::{splice_file, SpliceOutcome};
use crate::templates::{RenderContext, TemplateRenderer};
use std::path::PathBuf;
use thiserror::Error;

pub use check::{check_aggregators, AggregatorStatus, MarkerStatus};
pub use plan::{plan_generation, GenerationPlan, PlannedFile, PlannedSplice};

/// A splice that was performed (or found already in place)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedEntry {
    pub path: PathBuf,
    pub line: String,
    pub outcome: SpliceOutcome,
}

/// What a generation run did, in execution order. Paths are relative to the
/// project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub created: Vec<PathBuf>,
    pub spliced: Vec<SplicedEntry>,
}

impl GenerationReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.spliced.is_empty()
    }

    /// Splices that actually changed a file
    pub fn inserted(&self) -> impl Iterator<Item = &SplicedEntry> {
        self.spliced
            .iter()
            .filter(|s| s.outcome == SpliceOutcome::Inserted)
    }
}

/// A run that stopped part-way; `completed` lists what is already on disk
#[derive(Error, Debug)]
#[error("Widget generation halted")]
pub struct GenerationFailure {
    #[source]
    pub error: ScaffoldError,
    pub completed: GenerationReport,
}

impl From<ScaffoldError> for GenerationFailure {
    fn from(error: ScaffoldError) -> Self {
        Self {
            error,
            completed: GenerationReport::default(),
        }
    }
}

/// Generates widgets into one project tree
pub struct WidgetGenerator {
    root: PathBuf,
    layout: ProjectLayout,
    renderer: TemplateRenderer,
}

impl WidgetGenerator {
    pub fn new(
        root: impl Into<PathBuf>,
        layout: ProjectLayout,
        renderer: TemplateRenderer,
    ) -> Self {
        Self {
            root: root.into(),
            layout,
            renderer,
        }
    }

    pub fn plan(&self, request: &GenerationRequest) -> Result<GenerationPlan, ScaffoldError> {
        plan_generation(request, &self.layout)
    }

    /// Status of every aggregator file in the project
    pub async fn check_project(&self) -> Vec<AggregatorStatus> {
        check_aggregators(&self.root, &self.layout).await
    }

    /// Plan and execute `request`
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        author: &AuthorLookup,
    ) -> Result<GenerationReport, GenerationFailure> {
        let plan = self.plan(request)?;
        self.execute(&plan, request, author).await
    }

    /// Execute a plan previously computed for `request`
    pub async fn execute(
        &self,
        plan: &GenerationPlan,
        request: &GenerationRequest,
        author: &AuthorLookup,
    ) -> Result<GenerationReport, GenerationFailure> {
        self.ensure_destinations_free(plan)?;

        let context = RenderContext::new(request, &self.layout, author);
        let mut report = GenerationReport::default();

        for file in &plan.files {
            let destination = self.root.join(&file.path);
            if let Err(error) = self
                .renderer
                .render_to(file.template, &destination, &context)
                .await
            {
                return Err(GenerationFailure {
                    error,
                    completed: report,
                });
            }
            report.created.push(file.path.clone());
        }

        for splice in &plan.splices {
            let aggregator = self.root.join(&splice.path);
            match splice_file(&aggregator, splice.marker, &splice.line).await {
                Ok(outcome) => report.spliced.push(SplicedEntry {
                    path: splice.path.clone(),
                    line: splice.line.clone(),
                    outcome,
                }),
                Err(error) => {
                    return Err(GenerationFailure {
                        error,
                        completed: report,
                    })
                }
            }
        }

        Ok(report)
    }

    fn ensure_destinations_free(&self, plan: &GenerationPlan) -> Result<(), ScaffoldError> {
        match plan
            .files
            .iter()
            .map(|f| self.root.join(&f.path))
            .find(|p| p.exists())
        {
            Some(existing) => Err(ScaffoldError::DestinationConflict(existing)),
            None => Ok(()),
        }
    }
}
