use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("undefined template variable: {0}")]
    UndefinedVariable(String),

    #[error("template syntax error: {0}")]
    Syntax(String),

    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}
