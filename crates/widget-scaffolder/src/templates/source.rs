//! Template sources: built-in or a local override directory

use super::catalog::{TemplateId, PARTIALS};
use crate::error::ScaffoldError;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;

/// Where template text comes from
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    #[default]
    Embedded,
    /// A directory whose files override built-in templates by file name
    Local(PathBuf),
}

impl TemplateSource {
    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Load every template and partial, keyed by file name
    pub async fn load(&self) -> Result<HashMap<&'static str, String>, ScaffoldError> {
        let names = TemplateId::ALL
            .iter()
            .map(|id| (id.file_name(), id.embedded()))
            .chain(PARTIALS.iter().copied());

        let mut sources = HashMap::new();
        for (name, embedded) in names {
            let text = match self {
                TemplateSource::Embedded => embedded.to_string(),
                TemplateSource::Local(dir) => {
                    let path = dir.join(name);
                    if path.is_file() {
                        fs::read_to_string(&path)
                            .await
                            .map_err(|e| ScaffoldError::io(&path, e))?
                    } else {
                        embedded.to_string()
                    }
                }
            };
            sources.insert(name, text);
        }

        Ok(sources)
    }

    /// Template files in a local directory that replace built-ins
    pub fn overridden(&self) -> Vec<&'static str> {
        match self {
            TemplateSource::Embedded => Vec::new(),
            TemplateSource::Local(dir) => TemplateId::ALL
                .iter()
                .map(|id| id.file_name())
                .chain(PARTIALS.iter().map(|(name, _)| *name))
                .filter(|name| dir.join(name).is_file())
                .collect(),
        }
    }
}
