use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use swatchgen::config;
use swatchgen::encoding::RunMode;
use swatchgen::generate::{self, GenerateOptions};
use swatchgen::inputs::Inputs;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatchgen", version)]
#[command(about = "Generate solid-color images, videos and transitions for a palette")]
#[command(long_about = "\
Generate solid-color images, videos and transitions for a palette

For every resolution and every color, three files are produced under
<output-dir>/<WxH>/:

  <WxH>-<color>.jpg                still with the resolution label centered
  <WxH>-<color>.mov                looping video of the still
  <WxH>-<color>-to-<next>.mov      diagonal wipe into the next color

The last color transitions back into the first. Files that already exist
are skipped, so re-running only builds what is missing.

Requires ImageMagick (convert) and ffmpeg on PATH.")]
struct Cli {
    /// Required: Path to colors YAML file
    #[arg(short = 'c', long)]
    colors: Option<PathBuf>,

    /// Required: Path to resolutions YAML file
    #[arg(short = 'r', long)]
    resolutions: Option<PathBuf>,

    /// Output path for generated files (default: current directory)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Don't actually create anything, print the commands instead
    #[arg(short = 'd', long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Optional TOML file with encoder settings
    #[arg(long)]
    encoder_config: Option<PathBuf>,

    /// Print a documented encoder config with all defaults and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    // Missing inputs are a usage problem, not a failure: show help, exit 0.
    let (Some(colors), Some(resolutions)) = (cli.colors.as_deref(), cli.resolutions.as_deref())
    else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|err| format!("cannot get current working directory: {err}"))?,
    };

    let encoder = config::load_config(cli.encoder_config.as_deref())
        .map_err(|err| format!("error loading encoder config: {err}"))?;
    let inputs = Inputs::load(colors, resolutions)?;
    debug!(
        colors = inputs.colors.len(),
        resolutions = inputs.resolutions.len(),
        output_dir = %output_dir.display(),
        "loaded inputs"
    );

    let options = GenerateOptions {
        output_dir,
        mode: RunMode {
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        },
        encoder,
    };
    let report = generate::generate(&inputs, &options);
    debug!(
        built = report.built(),
        skipped = report.skipped(),
        dry_run = report.dry_run(),
        failed = report.failed(),
        blocked = report.blocked(),
        "run finished"
    );

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
