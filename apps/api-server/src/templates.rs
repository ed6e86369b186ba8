//! HTML template registry.

use std::path::Path;

use chrono::Datelike;
use handlebars::Handlebars;
use serde::Serialize;

use crate::middleware::error::AppError;

/// Homepage with the post list.
pub const INDEX: &str = "index";
/// Single post page.
pub const POST: &str = "post";
/// Application-wide not-found page.
pub const NOT_FOUND: &str = "404";

/// Handlebars templates loaded from the template directory at startup.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Register `index.html`, `post.html` and `404.html` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for name in [INDEX, POST, NOT_FOUND] {
            registry.register_template_file(name, dir.join(format!("{name}.html")))?;
        }

        tracing::info!(dir = %dir.display(), "Templates loaded");
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, AppError> {
        self.registry.render(name, context).map_err(|e| {
            AppError::Internal(format!("template '{name}' could not be rendered: {e}"))
        })
    }
}

/// Year shown in page footers.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
