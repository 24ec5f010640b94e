use clap::Parser;
use hbt::build;
use hbt::config::{BuildConfig, parse_excludes};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hbt")]
#[command(about = "Compile local Handlebars templates into static HTML")]
#[command(long_about = "\
Compile local Handlebars templates into static HTML

Assembles a site from four source directories and writes one output file
per page template:

  partials/   Reusable fragments, referenced as {{> name}} in pages
  content/    JSON data files, injected under their filename stem
  helpers/    Rhai helper scripts, callable as {{name arg}} in pages
  pages/      Top-level templates — each becomes public/<name>.html

Every file is registered under its relative path truncated at the first
dot, so pages/nested/deep.hbs produces public/nested/deep.html. Data
entries shadow partials of the same name in the render namespace.

Each flag falls back to its HBT_* environment variable, then the default
shown. Set RUST_LOG=debug for per-file discovery and registration traces.")]
#[command(version)]
struct Cli {
    /// Output directory [env: HBT_OUTPUT_DIR] [default: ./public]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Partials directory [env: HBT_PARTIALS_DIR] [default: ./partials]
    #[arg(long)]
    partials: Option<PathBuf>,

    /// JSON data directory [env: HBT_JSON_DIR] [default: ./content]
    #[arg(long)]
    data: Option<PathBuf>,

    /// Helper scripts directory [env: HBT_HELPERS_DIR] [default: ./helpers]
    #[arg(long)]
    helpers: Option<PathBuf>,

    /// Pages directory [env: HBT_PAGES_DIR] [default: ./pages]
    #[arg(long)]
    pages: Option<PathBuf>,

    /// Extension for written pages [env: HBT_EXT] [default: .html]
    #[arg(long)]
    ext: Option<String>,

    /// Comma-delimited page paths to skip [env: HBT_EXCLUDES]
    #[arg(long)]
    exclude: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = BuildConfig::from_env();
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(partials) = cli.partials {
        config.partials_dir = partials;
    }
    if let Some(data) = cli.data {
        config.data_dir = data;
    }
    if let Some(helpers) = cli.helpers {
        config.helpers_dir = helpers;
    }
    if let Some(pages) = cli.pages {
        config.pages_dir = pages;
    }
    if let Some(ext) = cli.ext {
        config.output_extension = ext;
    }
    if let Some(exclude) = cli.exclude {
        config.excludes = parse_excludes(&exclude);
    }

    println!(
        "==> Building {} -> {}",
        config.pages_dir.display(),
        config.output_dir.display()
    );

    let report = build::build(&config)?;

    println!(
        "==> Loaded {} partials, {} data files, {} helpers",
        report.partials, report.data_files, report.helpers
    );
    for page in &report.pages {
        println!("    {page}");
    }
    println!(
        "==> Compiled {} pages -> {}",
        report.pages.len(),
        config.output_dir.display()
    );

    Ok(())
}
