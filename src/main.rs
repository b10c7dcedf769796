//! xd2svg CLI
//!
//! Usage:
//!   xd2svg [OPTIONS] <INPUT>
//!
//! Options:
//!   -o, --output <PATH>        Output directory, or output file with --single
//!   -s, --single               Write all artboards into one file
//!   -c, --config <FILE>        Conversion config (TOML format)
//!   -p, --pretty               Indent the generated markup
//!   --legacy-gradient-order    Emit gradients like the legacy converter
//!   -v, --verbose              Increase log verbosity (repeatable)
//!   -q, --quiet                Only log errors
//!   -h, --help                 Print help

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, Level};

use indexmap::IndexMap;
use xd2svg::{convert_path, ConvertConfig, Error, Output};

/// File the shared definitions are written to in multi-document mode
const DEFS_FILE: &str = "defs.svg";

#[derive(Parser)]
#[command(name = "xd2svg")]
#[command(about = "Convert design packages into SVG documents, one per artboard")]
struct Cli {
    /// Input .xd file or extracted package directory
    input: PathBuf,

    /// Output directory, or output file with --single (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write all artboards into one file
    #[arg(short, long)]
    single: bool,

    /// Conversion config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Indent the generated markup
    #[arg(short, long)]
    pretty: bool,

    /// Emit gradients like the legacy converter (reverse order, first one skipped)
    #[arg(long)]
    legacy_gradient_order: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let output = match load_config(&cli).and_then(|config| convert_path(&cli.input, &config)) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = write_output(output, cli.output.as_deref()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

/// Load the config file if one was given, then let flags override it
fn load_config(cli: &Cli) -> Result<ConvertConfig, Error> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::from_file(path)?,
        None => ConvertConfig::default(),
    };
    config.single |= cli.single;
    config.legacy_gradient_order |= cli.legacy_gradient_order;
    config.svg.pretty_print |= cli.pretty;
    Ok(config)
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_output(output: Output, destination: Option<&Path>) -> io::Result<()> {
    match (output, destination) {
        (Output::Single(markup), None) => {
            println!("{}", markup);
            Ok(())
        }
        (Output::Single(markup), Some(path)) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, markup)?;
            info!(path = %path.display(), "wrote output");
            Ok(())
        }
        (Output::Multiple { .. }, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "an output directory (-o) is required unless --single is set",
        )),
        (Output::Multiple { defs, documents }, Some(dir)) => {
            let files = document_files(&documents)?;
            fs::create_dir_all(dir)?;
            fs::write(dir.join(DEFS_FILE), defs)?;
            for (file, markup) in files {
                let path = dir.join(file);
                fs::write(&path, markup)?;
                info!(path = %path.display(), "wrote artboard");
            }
            Ok(())
        }
    }
}

/// File name for every document, refusing names that would overwrite
/// the shared definitions or another artboard
fn document_files(documents: &IndexMap<String, String>) -> io::Result<Vec<(String, &str)>> {
    let mut taken = HashSet::from([DEFS_FILE.to_string()]);
    let mut files = Vec::with_capacity(documents.len());
    for (name, markup) in documents {
        let file = format!("{}.svg", file_stem(name));
        if !taken.insert(file.clone()) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("artboard '{}' would overwrite output file '{}'", name, file),
            ));
        }
        files.push((file, markup.as_str()));
    }
    Ok(files)
}

/// Artboard names may contain path separators
fn file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
