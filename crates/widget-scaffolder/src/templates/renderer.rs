//! Template rendering and create-only file writing

use super::catalog::TemplateId;
use super::source::TemplateSource;
use crate::config::ProjectLayout;
use crate::error::ScaffoldError;
use crate::identity::AuthorLookup;
use crate::paths::superclass_reference;
use crate::request::GenerationRequest;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Author attribution as seen by templates
#[derive(Debug, Clone, Serialize)]
pub struct AuthorContext {
    /// False when the identity lookup failed; the other fields are then empty
    pub available: bool,
    pub handle: String,
    pub name: String,
    pub email: String,
    pub url: String,
}

/// Values exposed to every template
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub namespace: String,
    pub widget_name: String,
    pub widget_description: String,
    pub widget_category: String,
    pub widget_super_class: String,
    pub super_class_path: String,
    /// Lowercased widget name, used for CSS class names
    pub css_name: String,
    pub author: AuthorContext,
}

impl RenderContext {
    pub fn new(request: &GenerationRequest, layout: &ProjectLayout, author: &AuthorLookup) -> Self {
        let profile = author.profile();
        Self {
            namespace: layout.namespace.clone(),
            widget_name: request.widget_name.clone(),
            widget_description: request.widget_description.clone(),
            widget_category: request.widget_category.to_string(),
            widget_super_class: request.widget_super_class.clone(),
            super_class_path: superclass_reference(&request.widget_super_class),
            css_name: request.file_stem(),
            author: AuthorContext {
                available: author.is_found(),
                handle: request.author_handle.clone(),
                name: profile.display_name,
                email: profile.email,
                url: profile.profile_url,
            },
        }
    }
}

/// Renders widget templates and writes them into the project
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Renderer over the built-in templates
    pub async fn embedded() -> Result<Self, ScaffoldError> {
        Self::from_source(&TemplateSource::Embedded).await
    }

    pub async fn from_source(source: &TemplateSource) -> Result<Self, ScaffoldError> {
        let sources = source.load().await?;

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, text) in sources {
            env.add_template_owned(name, text)
                .map_err(|source| ScaffoldError::Template { name, source })?;
        }

        Ok(Self { env })
    }

    /// Render a template to a string
    pub fn render(&self, id: TemplateId, context: &RenderContext) -> Result<String, ScaffoldError> {
        let name = id.file_name();
        let to_error = |source| ScaffoldError::Template { name, source };
        self.env
            .get_template(name)
            .map_err(to_error)?
            .render(context)
            .map_err(to_error)
    }

    /// Render a template into a new file at `destination`.
    ///
    /// The file must not exist yet; an existing file is reported as
    /// [`ScaffoldError::DestinationConflict`] and left untouched.
    pub async fn render_to(
        &self,
        id: TemplateId,
        destination: &Path,
        context: &RenderContext,
    ) -> Result<(), ScaffoldError> {
        let content = self.render(id, context)?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    ScaffoldError::DestinationConflict(destination.to_path_buf())
                }
                _ => ScaffoldError::io(destination, e),
            })?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| ScaffoldError::io(destination, e))?;
        file.flush()
            .await
            .map_err(|e| ScaffoldError::io(destination, e))?;

        Ok(())
    }
}
