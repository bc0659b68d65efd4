use anyhow::{Context, Result};
use clap::Parser;
use idlgen_codegen::{GeneratorConfig, generate_from_files};
use idlgen_codegen::config::DEFAULT_SUBNAMESPACE;
use idlgen_schema::naming::DEFAULT_PREFIX;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "idlgen")]
#[command(about = "Generate IDL declarations and native wrappers from a type schema")]
struct Args {
    /// Type schema XML file
    #[arg(long)]
    schema: PathBuf,

    /// Overrides XML file
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Output directory
    #[arg(long, required_unless_present = "dry_run")]
    out_dir: Option<PathBuf>,

    /// File name stem of the generated .idl and .h files
    #[arg(long, default_value = "Structs")]
    stem: String,

    /// Standard prefix of projected type names
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Namespace segment of runtime class identities
    #[arg(long, default_value = DEFAULT_SUBNAMESPACE)]
    subnamespace: String,

    /// Print the generated text instead of writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = GeneratorConfig::new()
        .with_prefix(args.prefix)
        .with_subnamespace(args.subnamespace);

    let output = generate_from_files(&args.schema, args.overrides.as_deref(), &config)
        .with_context(|| format!("failed to generate from '{}'", args.schema.display()))?;

    if args.dry_run {
        print!("{}", output.idl.as_str());
        print!("{}", output.native.as_str());
        return Ok(());
    }

    let out_dir = args
        .out_dir
        .context("--out-dir is required unless --dry-run is given")?;
    let written = output
        .write_to_dir(&out_dir, &args.stem)
        .context("failed to write generated files")?;

    info!(
        idl = %written.idl.display(),
        native = %written.native.display(),
        "wrote generated files"
    );
    Ok(())
}
