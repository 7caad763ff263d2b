// ABOUTME: Template engine built on Handlebars, restricted to plain placeholder substitution
// ABOUTME: Rejects helpers, blocks and partials so bound values are never evaluated or re-scanned

use handlebars::Handlebars;
use regex::Regex;
use std::sync::LazyLock;

use super::bindings::Bindings;
use super::error::{Result, TemplateError};
use super::library::TemplateName;

static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").unwrap());
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with every built-in template precompiled
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        // Robot Framework source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        for name in TemplateName::ALL {
            Self::placeholders(name.body())?;
            handlebars
                .register_template_string(name.as_str(), name.body())
                .map_err(|e| TemplateError::Syntax {
                    template: name.as_str().to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Substitute bindings into an arbitrary template body.
    ///
    /// Every `{{name}}` must have a binding; extra bindings are ignored.
    pub fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        Self::check_bindings(template, bindings)?;
        self.handlebars
            .render_template(template, bindings)
            .map_err(TemplateError::Render)
    }

    /// Render one of the precompiled built-in templates
    pub fn render_named(&self, name: TemplateName, bindings: &Bindings) -> Result<String> {
        Self::check_bindings(name.body(), bindings)?;
        self.handlebars
            .render(name.as_str(), bindings)
            .map_err(TemplateError::Render)
    }

    /// Placeholder names in order of first appearance.
    ///
    /// Anything other than a bare identifier between double braces is refused,
    /// as is an opening `{{` that never closes.
    pub fn placeholders(template: &str) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();

        for capture in EXPRESSION.captures_iter(template) {
            let expression = capture[1].trim();
            if !IDENTIFIER.is_match(expression) {
                return Err(TemplateError::UnsupportedExpression {
                    expression: expression.to_string(),
                });
            }
            if !names.iter().any(|existing| existing == expression) {
                names.push(expression.to_string());
            }
        }

        let remainder = EXPRESSION.replace_all(template, "");
        if remainder.contains("{{") {
            return Err(TemplateError::UnsupportedExpression {
                expression: "unterminated {{".to_string(),
            });
        }

        Ok(names)
    }

    /// Check if a string contains template expressions
    pub fn has_placeholders(text: &str) -> bool {
        EXPRESSION.is_match(text)
    }

    fn check_bindings(template: &str, bindings: &Bindings) -> Result<()> {
        match Self::placeholders(template)?
            .into_iter()
            .find(|name| !bindings.contains(name))
        {
            Some(name) => Err(TemplateError::MissingBinding { name }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    #[test]
    fn test_basic_substitution() {
        let bindings = Bindings::new().with("name", "World");
        let result = engine().render("Hello {{name}}!", &bindings).unwrap();
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_robot_variables_pass_through() {
        let bindings = Bindings::new().with("url", "https://example.com");
        let result = engine()
            .render("${URL}    {{ url }}\n${BROWSER}    Chrome\n", &bindings)
            .unwrap();
        assert_eq!(result, "${URL}    https://example.com\n${BROWSER}    Chrome\n");
    }

    #[test]
    fn test_values_are_not_rescanned_or_escaped() {
        let bindings = Bindings::new()
            .with("value", "{{secret}} & <b>")
            .with("secret", "leaked");
        let result = engine().render("[{{value}}]", &bindings).unwrap();
        assert_eq!(result, "[{{secret}} & <b>]");
    }

    #[test]
    fn test_missing_binding() {
        let bindings = Bindings::new().with("first", "a");
        let err = engine()
            .render("{{first}} {{second}} {{third}}", &bindings)
            .unwrap_err();
        assert!(matches!(err, TemplateError::MissingBinding { ref name } if name == "second"));
    }

    #[test]
    fn test_unused_bindings_are_ignored() {
        let bindings = Bindings::new().with("used", "x").with("unused", "y");
        assert_eq!(engine().render("{{used}}", &bindings).unwrap(), "x");
    }

    #[test]
    fn test_expressions_are_refused() {
        let bindings = Bindings::new().with("flag", "true");
        for template in [
            "{{#if flag}}yes{{/if}}",
            "{{> partial}}",
            "{{lookup flag 0}}",
            "{{{flag}}}",
            "{{flag",
        ] {
            let err = engine().render(template, &bindings).unwrap_err();
            assert!(
                matches!(err, TemplateError::UnsupportedExpression { .. }),
                "{} should be refused",
                template
            );
        }
    }

    #[test]
    fn test_placeholders_in_order_without_duplicates() {
        let names = TemplateEngine::placeholders("{{b}} {{a}} {{b}}").unwrap();
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_builtin_templates_compile() {
        let engine = engine();
        for name in TemplateName::ALL {
            let placeholders = TemplateEngine::placeholders(name.body()).unwrap();
            let bindings: Bindings = placeholders
                .iter()
                .map(|p| (p.clone(), format!("<{}>", p)))
                .collect();
            let rendered = engine.render_named(name, &bindings).unwrap();
            assert!(rendered.starts_with("*** Settings ***"), "{}", name);
            assert!(!TemplateEngine::has_placeholders(&rendered), "{}", name);
        }
    }

    #[test]
    fn test_fixed_templates_render_verbatim() {
        let engine = engine();
        for name in [
            TemplateName::AdvancedKeywords,
            TemplateName::ExtendedKeywords,
            TemplateName::PerformanceMonitoringTest,
        ] {
            let rendered = engine.render_named(name, &Bindings::new()).unwrap();
            assert_eq!(rendered, name.body());
        }
    }
}
