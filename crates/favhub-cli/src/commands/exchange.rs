//! Import and export commands.

use std::path::{Path, PathBuf};

use clap::Args;

use favhub_core::error::AppError;
use favhub_service::{BookmarkService, ViewSession};

use crate::output;

/// Arguments for import
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file previously written by `export`
    pub file: PathBuf,
}

/// Arguments for export
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file, or a directory to place the dated file in
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Replace the tree with the contents of a file.
pub fn import(
    args: &ImportArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file).map_err(|e| {
        AppError::import(format!("Failed to read '{}': {e}", args.file.display()))
    })?;
    let count = service.import_json(session, &text)?;
    output::print_kv("Nodes", &count.to_string());
    Ok(())
}

/// Where an export named `file_name` should be written.
fn export_target(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

/// Write the tree to a dated JSON file.
pub fn export(args: &ExportArgs, service: &BookmarkService) -> Result<(), AppError> {
    let export = service.export()?;
    let target = export_target(args.output.as_deref(), &export.file_name);
    std::fs::write(&target, &export.body)?;
    output::print_success(&format!("Exported to {}", target.display()));
    Ok(())
}
