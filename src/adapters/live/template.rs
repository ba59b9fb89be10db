//! Live template engine using `{{name}}` placeholder substitution.

use std::collections::HashMap;

use crate::ports::template::{TemplateEngine, TemplateError};

/// Live template engine that substitutes `{{name}}` placeholders.
///
/// Placeholder names may carry surrounding whitespace inside the
/// braces (`{{ query }}`). Text outside placeholders is copied through
/// unchanged.
pub struct LiveTemplateEngine;

impl TemplateEngine for LiveTemplateEngine {
    fn render(
        &self,
        template: &str,
        bindings: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;
        let mut consumed = 0;

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let body = &rest[start + 2..];
            let Some(end) = body.find("}}") else {
                return Err(TemplateError::UnterminatedPlaceholder { offset: consumed + start });
            };
            let name = body[..end].trim();
            match bindings.get(name) {
                Some(value) => rendered.push_str(value),
                None => {
                    return Err(TemplateError::UnresolvedBinding { name: name.to_string() });
                }
            }
            rest = &body[end + 2..];
            consumed += start + 2 + end + 2;
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn substitutes_a_binding() {
        let engine = LiveTemplateEngine;
        let result = engine.render("grep '{{query}}' notes.txt", &bindings(&[("query", "cat")]));
        assert_eq!(result.unwrap(), "grep 'cat' notes.txt");
    }

    #[test]
    fn substitutes_repeated_placeholders() {
        let engine = LiveTemplateEngine;
        let result = engine.render("{{query}} and {{query}}", &bindings(&[("query", "dog")]));
        assert_eq!(result.unwrap(), "dog and dog");
    }

    #[test]
    fn tolerates_whitespace_inside_braces() {
        let engine = LiveTemplateEngine;
        let result = engine.render("echo {{ query }}", &bindings(&[("query", "fish")]));
        assert_eq!(result.unwrap(), "echo fish");
    }

    #[test]
    fn copies_templates_without_placeholders_unchanged() {
        let engine = LiveTemplateEngine;
        let result = engine.render("ls -la", &bindings(&[("query", "unused")]));
        assert_eq!(result.unwrap(), "ls -la");
    }

    #[test]
    fn unresolved_binding_is_an_error() {
        let engine = LiveTemplateEngine;
        let err = engine.render("echo {{missing}}", &bindings(&[("query", "cat")])).unwrap_err();
        assert!(matches!(err, TemplateError::UnresolvedBinding { name } if name == "missing"));
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let engine = LiveTemplateEngine;
        let err = engine.render("echo {{query", &bindings(&[("query", "cat")])).unwrap_err();
        assert!(matches!(err, TemplateError::UnterminatedPlaceholder { offset: 5 }));
    }

    #[test]
    fn substitutes_values_verbatim() {
        let engine = LiveTemplateEngine;
        let result = engine.render("echo '{{query}}'", &bindings(&[("query", "a \"b\" c")]));
        assert_eq!(result.unwrap(), "echo 'a \"b\" c'");
    }
}
