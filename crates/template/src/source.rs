use crate::Variables;
use crate::error::SubstitutionError;
use handlebars::{Handlebars, no_escape};
use log::debug;
use std::borrow::Cow;

/// Renders markdown source as a Handlebars template.
///
/// Escaping is off because the output is markdown, not HTML, and missing
/// variables render as empty text.
#[derive(Debug)]
pub struct SourceRenderer {
    engine: Handlebars<'static>,
}

impl Default for SourceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRenderer {
    pub fn new() -> Self {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(false);
        engine.register_escape_fn(no_escape);
        Self { engine }
    }

    /// Source is returned untouched when there are no variables or nothing
    /// that looks like an expression.
    pub fn render<'a>(
        &self,
        source: &'a str,
        vars: &Variables,
    ) -> Result<Cow<'a, str>, SubstitutionError> {
        if vars.is_empty() || !source.contains("{{") {
            return Ok(Cow::Borrowed(source));
        }
        debug!("Rendering source template with {} variable(s).", vars.len());
        let rendered = self.engine.render_template(source, vars)?;
        Ok(Cow::Owned(rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, serde_json::Value)]) -> Variables {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_conditionals_and_loops_render() {
        let renderer = SourceRenderer::new();
        let source = concat!(
            "# {{title}}\n",
            "{{#if draft}}**DRAFT**\n{{/if}}",
            "{{#each items}}- {{this}}\n{{/each}}",
        );
        let out = renderer
            .render(
                source,
                &vars(&[
                    ("title", json!("Q3")),
                    ("draft", json!(true)),
                    ("items", json!(["a", "b"])),
                ]),
            )
            .unwrap();
        assert!(out.starts_with("# Q3\n**DRAFT**"));
        assert!(out.contains("- a\n- b"));
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let out = SourceRenderer::new()
            .render("{{v}}", &vars(&[("v", json!("<b> & \"q\""))]))
            .unwrap();
        assert_eq!(out, "<b> & \"q\"");
    }

    #[test]
    fn test_skipped_without_variables() {
        let out = SourceRenderer::new().render("{{#if x}}unclosed", &Variables::new()).unwrap();
        assert!(matches!(out, Cow::Borrowed("{{#if x}}unclosed")));
    }

    #[test]
    fn test_unclosed_block_is_an_error() {
        let err = SourceRenderer::new()
            .render("{{#if x}}never closed", &vars(&[("x", json!(true))]))
            .unwrap_err();
        assert!(matches!(err, SubstitutionError::Render { .. }));
    }

    #[test]
    fn test_missing_variable_renders_empty() {
        let out = SourceRenderer::new()
            .render("a{{missing}}b", &vars(&[("other", json!(1))]))
            .unwrap();
        assert_eq!(out, "ab");
    }
}
