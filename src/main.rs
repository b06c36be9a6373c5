use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod config;
mod gallery;
mod names;
mod render;
mod scan;
mod template;
mod types;
mod utils;

pub use types::*;

use config::{BuildPaths, OUTPUT_FILE, TEMPLATE_FILE};
use names::OverrideTable;
use render::RenderOptions;
use utils::osc8_file_link;

#[derive(Parser)]
#[command(name = "flag-gallery")]
#[command(about = "Build index.html from index_template.html and the images in flags/")]
struct Cli {
    /// Project root containing flags/ and index_template.html
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Extra name overrides (CONL, `stem = Display Name` per line)
    #[arg(long, value_name = "FILE")]
    overrides: Option<PathBuf>,
    /// HTML-escape flag names and paths in the generated markup
    #[arg(long)]
    escape: bool,
    /// Quiet mode - don't list every flag
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::Level::Warn
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level)?;

    let names = match &cli.overrides {
        Some(path) => OverrideTable::with_overrides_file(path)
            .with_context(|| format!("Could not load overrides from {}", path.display()))?,
        None => OverrideTable::builtin(),
    };
    log::info!("Loaded {} name overrides", names.len());

    let paths = BuildPaths::from_root(&cli.root);
    let options = RenderOptions { escape: cli.escape };

    println!("🏁 Building Flag Gallery...\n");
    println!("📄 Template: {} (read-only)", TEMPLATE_FILE);
    println!("📄 Output:   {} (generated)\n", OUTPUT_FILE);

    let report = match gallery::build(&paths, options, &names) {
        Ok(report) => report,
        Err(e) => {
            if let GalleryError::TemplateMissing(_) = e {
                println!("   Make sure {} exists in the project root.", TEMPLATE_FILE);
            }
            println!("\n❌ Failed to generate {}", OUTPUT_FILE);
            bail!(e);
        }
    };

    println!(
        "📁 Found {} flags in /{} folder:",
        report.count(),
        paths.subdir
    );
    if !cli.quiet {
        for entry in &report.entries {
            println!("   - {} ({})", entry.display_name, entry.filename);
        }
    }

    println!(
        "\n✅ Successfully generated {} with {} flags!",
        osc8_file_link(&report.output, OUTPUT_FILE),
        report.count()
    );
    println!("🏎️ Refresh your browser to see the changes.");
    println!("\n📝 Template ({}) was NOT modified.", TEMPLATE_FILE);

    Ok(())
}
