//! Project readiness check: are the aggregator files there and marked?

use crate::config::ProjectLayout;
use crate::paths::SpecVariant;
use crate::policy::SpliceTarget;
use crate::splice::{count_markers, Marker};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// One representative target per aggregator file
const AGGREGATOR_TARGETS: [SpliceTarget; 4] = [
    SpliceTarget::ModuleIndex,
    SpliceTarget::BaseStyleIndex,
    SpliceTarget::ThemeStyleIndex,
    SpliceTarget::SpecIndex(SpecVariant::Plain),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerStatus {
    Ready,
    MissingFile,
    MissingMarker,
    DuplicateMarker(usize),
    Unreadable(String),
}

impl MarkerStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, MarkerStatus::Ready)
    }
}

impl fmt::Display for MarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerStatus::Ready => write!(f, "ready"),
            MarkerStatus::MissingFile => write!(f, "file not found"),
            MarkerStatus::MissingMarker => write!(f, "marker not found"),
            MarkerStatus::DuplicateMarker(count) => write!(f, "marker appears {} times", count),
            MarkerStatus::Unreadable(reason) => write!(f, "unreadable ({})", reason),
        }
    }
}

/// Status of one aggregator file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorStatus {
    /// Path relative to the project root
    pub path: PathBuf,
    pub marker: Marker,
    pub status: MarkerStatus,
}

/// Inspect every aggregator file of `layout` under `root`
pub async fn check_aggregators(root: &Path, layout: &ProjectLayout) -> Vec<AggregatorStatus> {
    let mut statuses = Vec::with_capacity(AGGREGATOR_TARGETS.len());

    for target in AGGREGATOR_TARGETS {
        let path = target.aggregator(layout);
        let marker = target.marker();
        let full_path = root.join(path);

        let status = if !full_path.is_file() {
            MarkerStatus::MissingFile
        } else {
            match fs::read_to_string(&full_path).await {
                Ok(content) => match count_markers(&content, marker) {
                    0 => MarkerStatus::MissingMarker,
                    1 => MarkerStatus::Ready,
                    n => MarkerStatus::DuplicateMarker(n),
                },
                Err(e) => MarkerStatus::Unreadable(e.to_string()),
            }
        };

        statuses.push(AggregatorStatus {
            path: path.to_path_buf(),
            marker,
            status,
        });
    }

    statuses
}
