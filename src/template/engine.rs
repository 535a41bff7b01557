use handlebars::{Handlebars, RenderErrorReason};

use super::TemplateError;
use crate::vars::VariableMap;

/// Helpers `Handlebars::new` registers. Any variable may share their names.
const BUILTIN_HELPERS: &[&str] = &[
    "if", "unless", "each", "with", "lookup", "raw", "log", "eq", "ne", "gt", "gte", "lt",
    "lte", "and", "or", "not", "len",
];

/// Renders `{{NAME}}` references against a [`VariableMap`].
///
/// Rendering is strict: a reference to a name missing from the map fails the
/// whole render instead of expanding to an empty string. Values are inserted
/// verbatim, without HTML escaping, and are never expanded a second time.
///
/// No helpers are registered, so `{{log}}` or `{{len}}` look up variables of
/// those names. A backslash before the opening braces escapes a reference:
/// `\{{H}}` renders as the literal `{{H}}` and the backslash is dropped.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        for helper in BUILTIN_HELPERS {
            handlebars.unregister_helper(helper);
        }
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);
        // rendered files are configs, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Returns `true` if `text` contains a reference opener.
    pub fn has_references(&self, text: &str) -> bool {
        text.contains("{{")
    }

    /// Substitutes every reference in `template`.
    ///
    /// Text without references is returned as-is.
    pub fn render(&self, template: &str, vars: &VariableMap) -> Result<String, TemplateError> {
        if !self.has_references(template) {
            return Ok(template.to_string());
        }

        self.handlebars
            .render_template(template, vars)
            .map_err(|err| match err.reason() {
                RenderErrorReason::MissingVariable(Some(name)) => {
                    TemplateError::UndefinedVariable(name.clone())
                }
                _ => TemplateError::Render(err),
            })
    }

    /// Checks that `template` parses, without rendering it.
    pub fn validate(&self, template: &str) -> Result<(), TemplateError> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::Syntax(e.to_string()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("strict", &self.handlebars.strict_mode())
            .finish()
    }
}
