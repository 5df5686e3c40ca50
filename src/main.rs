//! svg2tsx CLI
//!
//! Usage:
//!   svg2tsx [OPTIONS] [INPUT]
//!
//! Options:
//!   -o, --out <FILE>     Destination component file
//!   -c, --config <FILE>  Config file (TOML format)
//!   -n, --name <NAME>    Component name
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;

use svg2tsx::EmbedConfig;

#[derive(Parser)]
#[command(name = "svg2tsx")]
#[command(about = "Rewrite an SVG icon into an embeddable TSX component")]
struct Cli {
    /// Source SVG file (defaults to the configured source path)
    input: Option<PathBuf>,

    /// Destination component file (defaults to the configured destination)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Component name (defaults to "Logo")
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Load config file, then let CLI flags win over it
    let mut config = match &cli.config {
        Some(path) => match EmbedConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EmbedConfig::default(),
    };

    if let Some(input) = cli.input {
        config.source = input;
    }
    if let Some(out) = cli.out {
        config.destination = out;
    }
    if let Some(name) = cli.name {
        config.component_name = name;
    }

    match svg2tsx::embed(&config) {
        Ok(()) => {
            println!("{} updated successfully.", config.destination.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
