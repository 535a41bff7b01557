use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use replace_var::config::LogSettings;
use replace_var::vars::descriptor;
use replace_var::{Rewriter, Settings, Vars};

#[derive(Parser)]
#[command(name = "replace-var")]
#[command(about = "Render {{VAR}} references in a file from the environment, in place")]
#[command(version)]
struct Args {
    #[arg(help = "File to render in place")]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Path to settings file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Also read variables from the container descriptor")]
    docker_env: bool,

    #[arg(long, value_name = "PATH", help = "Container descriptor location")]
    descriptor: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn init_logging(settings: &LogSettings, verbose: bool) {
    let level = if verbose { "debug" } else { settings.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(settings.ansi)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;

    if args.docker_env {
        settings.descriptor.enabled = true;
    }
    if let Some(path) = args.descriptor {
        settings.descriptor.enabled = true;
        settings.descriptor.path = path;
    }

    init_logging(&settings.log, args.verbose);
    debug!(
        ?settings,
        containerized = descriptor::is_containerized(),
        "loaded settings"
    );

    let mut vars = Vars::builder();
    if settings.descriptor.enabled {
        vars = vars.with_descriptor(&settings.descriptor.path, settings.descriptor.required);
    }
    vars = vars.with_process_env();

    // a missing argument is the empty path, which renders and writes nothing
    let path = args.path.unwrap_or_default();
    Rewriter::builder().with_vars(vars).build().rewrite(&path)?;

    Ok(())
}
