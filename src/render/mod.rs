use crate::config::TemplateSource;
use crate::domain::RenderContext;
use anyhow::{Context, Result, anyhow};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::io::Write;
use std::path::Path;

pub mod adoc;

use self::adoc::{ADOC_TEMPLATE, ADOC_TEMPLATE_NAME};

// a parsed template, ready to be executed against a RenderContext
pub struct Renderer {
    env: Environment<'static>,
    name: String,
}

impl Renderer {
    pub fn for_template(source: &TemplateSource) -> Result<Self> {
        match source {
            TemplateSource::BuiltIn => Self::built_in(),
            TemplateSource::File(path) => Self::from_file(path),
        }
    }

    pub fn built_in() -> Result<Self> {
        Self::from_source(ADOC_TEMPLATE_NAME.to_string(), ADOC_TEMPLATE.to_string())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self::from_source(name, source)
    }

    pub fn from_source(name: String, source: String) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        // plain text output whatever the file is called, "index.html" included
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(name.clone(), source)
            .map_err(|e| anyhow!("Failed to parse template {}: {}", name, e))?;

        Ok(Self { env, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // streams straight into `out`; on error, anything rendered so far has already been written
    pub fn render<W: Write>(&self, context: &RenderContext, out: W) -> Result<()> {
        let template = self
            .env
            .get_template(&self.name)
            .map_err(|e| anyhow!("Template {} is not loaded: {}", self.name, e))?;

        template
            .render_to_write(context, out)
            .map_err(|e| anyhow!("Failed to render template {}: {}", self.name, e))?;

        Ok(())
    }
}
