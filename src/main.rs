//! Main entry point for the pngpacker CLI.
//!
//! Dispatches the `unpack` and `pack` subcommands and prints status lines;
//! all real work happens in the library.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use pngpacker::{Cli, Command, pack_directory, unpack_archive};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Unpack {
            archive,
            output_dir,
        } => {
            let output_dir = output_dir
                .clone()
                .unwrap_or_else(|| default_output_dir(archive, &cli.entry));

            if !cli.quiet {
                println!("Processing: {} ...", archive.display());
            }
            let report = unpack_archive(archive, &cli.entry, &output_dir)?;
            if !cli.quiet {
                println!(
                    "{} png files created at {}",
                    report.image_count,
                    report.output_dir.display()
                );
            }
        }
        Command::Pack { input_dir, archive } => {
            if !cli.quiet {
                println!("Processing: {} ...", input_dir.display());
            }
            let report = pack_directory(input_dir, archive, &cli.entry)?;
            if !cli.quiet {
                println!(
                    "'{}' entry with {} png files packed into {}",
                    cli.entry,
                    report.image_count,
                    report.archive_path.display()
                );
            }
        }
    }

    Ok(())
}

/// Default unpack target: `<entry>_output` next to the archive.
fn default_output_dir(archive: &Path, entry: &str) -> PathBuf {
    let dir = match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    dir.join(format!("{entry}_output"))
}
