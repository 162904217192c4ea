use anyhow::Context as _;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blockart::error::ConvertError;
use blockart::models::{Context, ConvertConfig, DEFAULT_PROGRAM_FILE};
use blockart::services::process_image;

#[derive(Parser, Debug)]
#[command(name = "blockart")]
#[command(about = "Convert a 40x25 image into a C64 BASIC program that paints it in color RAM")]
struct Cli {
    /// Path to the source image (required)
    #[arg(short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Path to the output image (default out.<ext of input>)
    #[arg(short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path to the generated BASIC program
    #[arg(short = 'f', value_name = "PATH", default_value = DEFAULT_PROGRAM_FILE)]
    file: PathBuf,

    /// Use Floyd-Steinberg dithering
    #[arg(long)]
    dither: bool,
}

/// Accept the single-dash long spellings `-dither` and `-help`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .filter_map(|arg| match arg.to_str() {
            Some("-dither") | Some("-dither=true") | Some("--dither=true") => {
                Some(OsString::from("--dither"))
            }
            Some("-dither=false") | Some("--dither=false") => None,
            Some("-help") => Some(OsString::from("--help")),
            _ => Some(arg),
        })
        .collect()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockart=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing();

    match run(cli) {
        Ok(()) => {
            println!("finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            let usage = e
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_usage);
            if usage {
                let _ = Cli::command().print_help();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let input = cli.input.ok_or(ConvertError::MissingArgument("-i"))?;
    let config = ConvertConfig::new(input, cli.output, Some(cli.file), cli.dither);
    tracing::debug!(?config, "Resolved configuration");

    let context = Context::c64();
    process_image(&config, &context)
        .with_context(|| format!("failed to convert {}", config.input.display()))?;
    Ok(())
}
