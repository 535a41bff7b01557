//! In-place rendering of a single file.

use std::path::Path;

use tracing::info;

use crate::content;
use crate::template::TemplateEngine;
use crate::vars::{create_var_map, Vars};
use crate::Error;

/// Renders a file against a set of variables and writes the result back to
/// the same path.
///
/// Built through [`Rewriter::builder`]; [`build`](RewriterBuilder::build)
/// only exists once the variable sources have been supplied.
///
/// ## Example
///
/// ```no_run
/// use replace_var::{Rewriter, Vars};
///
/// let rewriter = Rewriter::builder()
///     .with_vars(Vars::builder().with_process_env())
///     .build();
///
/// rewriter.rewrite("config/app.yaml".as_ref())?;
/// # Ok::<(), replace_var::Error>(())
/// ```
#[derive(Debug)]
pub struct Rewriter {
    vars: Vars,
    engine: TemplateEngine,
}

impl Rewriter {
    /// Creates a new builder for constructing a `Rewriter`.
    pub fn builder() -> RewriterBuilder<()> {
        RewriterBuilder { vars: () }
    }

    /// Rewrites `path` in place.
    ///
    /// An unreadable or missing file renders as empty text. Read and write
    /// failures are logged, not returned. A variable source failure or an
    /// undefined reference is returned and the file is left untouched.
    pub fn rewrite(&self, path: &Path) -> Result<(), Error> {
        let template = content::load(path);
        let vars = create_var_map(path, self.vars.build()?);
        let rendered = self.engine.render(&template, &vars)?;

        content::store(path, &rendered);
        info!(path = %path.display(), bytes = rendered.len(), "rewrote file");
        Ok(())
    }
}

/// Builder for constructing a [`Rewriter`].
///
/// Starts without variable sources (`RewriterBuilder<()>`) and transitions
/// to `RewriterBuilder<Vars>` when [`with_vars`](Self::with_vars) is called.
/// Only the latter can be built.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct RewriterBuilder<V> {
    vars: V,
}

impl RewriterBuilder<()> {
    /// Attaches the variable sources used for every rewrite.
    pub fn with_vars(self, vars: Vars) -> RewriterBuilder<Vars> {
        RewriterBuilder { vars }
    }
}

impl RewriterBuilder<Vars> {
    /// Builds the `Rewriter`.
    pub fn build(self) -> Rewriter {
        Rewriter {
            vars: self.vars,
            engine: TemplateEngine::new(),
        }
    }
}
