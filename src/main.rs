use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkg_release::config;
use pkg_release::manifest::{self, DEFAULT_MANIFEST};
use pkg_release::process::ShellRunner;
use pkg_release::release::ReleaseOrchestrator;
use pkg_release::ui::{self, DialoguerPrompter};

#[derive(clap::Parser)]
#[command(
    name = "pkg-release",
    version,
    about = "Bump, tag, changelog and publish a package release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = DEFAULT_MANIFEST, help = "Package manifest to release")]
    manifest: String,

    #[arg(long, value_name = "CMD", help = "Shell command to run before releasing")]
    before_release: Option<String>,

    #[arg(long, help = "Preview the release commands without running them")]
    dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let code = match release(args) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&e.to_string());
            e.exit_code()
        }
    };

    std::process::exit(code);
}

/// Loads inputs, runs the release and returns the process exit status.
fn release(args: Args) -> pkg_release::Result<i32> {
    let mut config = config::load_config(args.config.as_deref())?;
    if args.before_release.is_some() {
        config.before_release = args.before_release;
    }

    let manifest = manifest::load_manifest(&args.manifest)?;

    let outcome = ReleaseOrchestrator::new(config, manifest, ShellRunner::new(), DialoguerPrompter)?
        .dry_run(args.dry_run)
        .run()?;

    Ok(outcome.exit_code())
}

/// Console logging controlled by RUST_LOG (default: warn), or debug with --verbose.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
