//! Template engine port for rendering script templates.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while rendering a script template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template references a binding that was not supplied.
    #[error("unresolved binding `{name}` in template")]
    UnresolvedBinding {
        /// Name of the missing binding.
        name: String,
    },
    /// A `{{` placeholder opener has no matching `}}`.
    #[error("unterminated placeholder at byte {offset}")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening braces within the template.
        offset: usize,
    },
}

/// Renders script templates by substituting named bindings.
///
/// Abstracting rendering keeps the executor ignorant of the template
/// syntax. Values are substituted verbatim; any quoting needed to make
/// a value safe inside the rendered script is the template author's
/// concern.
pub trait TemplateEngine: Send + Sync {
    /// Renders `template`, replacing each placeholder with the
    /// matching value from `bindings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed or references a
    /// binding absent from `bindings`.
    fn render(
        &self,
        template: &str,
        bindings: &HashMap<String, String>,
    ) -> Result<String, TemplateError>;
}
