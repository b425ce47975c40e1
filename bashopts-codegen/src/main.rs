use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Write},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bashopts_codegen::{describe, generate, parse_specs};

mod cli;
use cli::Args;

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the generated code.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_from(cli::normalize_flags(std::env::args_os()));
    let config = args.config();

    if args.specs.is_empty() {
        eprintln!("Error: No spec arguments specified");
        eprintln!("Usage: bashopts [OPTIONS] <SPECS>...");
        std::process::exit(1);
    }

    // Validate every spec before anything is written.
    let specs = parse_specs(&config, &args.specs)?;
    let output = if args.list {
        let mut json = describe(&specs)?;
        json.push('\n');
        json
    } else {
        generate(&config, &specs)
    };

    if let Some(output_path) = args.output {
        fs::write(&output_path, output)
            .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

        info!(path = %output_path.display(), "generated code written");
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
