//! Move and reorder commands.

use std::collections::BTreeSet;

use clap::{ArgGroup, Args};

use favhub_core::error::AppError;
use favhub_service::moves::{Destination, MoveReport};
use favhub_service::{BookmarkService, ViewSession};

use crate::output::{self, OutputFormat};

/// Arguments for move
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("destination")
        .required(true)
        .args(["into", "parent", "crumb"])
))]
pub struct MoveArgs {
    /// Position of an item to move; repeat to move several at once
    #[arg(short, long = "index", value_name = "INDEX", required = true)]
    pub indices: Vec<usize>,
    /// Move into the sibling folder at this position
    #[arg(long, value_name = "INDEX")]
    pub into: Option<usize>,
    /// Move into the parent folder
    #[arg(long)]
    pub parent: bool,
    /// Move into the folder at this breadcrumb (-1 is Home)
    #[arg(long, value_name = "CRUMB", allow_negative_numbers = true)]
    pub crumb: Option<isize>,
}

impl MoveArgs {
    fn destination(&self) -> Result<Destination, AppError> {
        match (self.into, self.parent, self.crumb) {
            (Some(folder), false, None) => Ok(Destination::Folder(folder)),
            (None, true, None) => Ok(Destination::Parent),
            (None, false, Some(crumb)) => Ok(Destination::PathIndex(crumb)),
            _ => Err(AppError::validation(
                "Choose exactly one of --into, --parent, or --crumb",
            )),
        }
    }
}

/// Arguments for reorder
#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Current position of the item
    pub from: usize,
    /// Position the item should end up at
    pub to: usize,
}

/// Move items within the tree.
pub fn move_items(
    args: &MoveArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    let destination = args.destination()?;
    let indices: BTreeSet<usize> = args.indices.iter().copied().collect();

    let single = match indices.len() {
        1 => indices.first().copied(),
        _ => None,
    };

    let report: Option<MoveReport> = match single {
        Some(from) => match destination {
            Destination::Folder(to) => Some(service.move_to_folder(session, from, to)?),
            Destination::Parent => service.move_to_parent(session, from)?,
            Destination::PathIndex(crumb) => {
                Some(service.move_to_path_index(session, from, crumb)?)
            }
        },
        None => {
            for index in indices {
                session.selection_mut().add(index);
            }
            service.move_selected(session, destination)?
        }
    };

    match report {
        Some(report) if format == OutputFormat::Json => output::print_item(&report, format),
        Some(_) => {}
        None => output::print_warning("Already at Home; nothing moved"),
    }
    Ok(())
}

/// Reorder an item within the current folder.
pub fn reorder(
    args: &ReorderArgs,
    service: &mut BookmarkService,
    session: &mut ViewSession,
    format: OutputFormat,
) -> Result<(), AppError> {
    match service.reorder(session, args.from, args.to)? {
        Some(report) => match format {
            OutputFormat::Table => output::print_success(&format!(
                "Moved \"{}\" from position {} to {}",
                report.name, report.from, report.to
            )),
            OutputFormat::Json => output::print_item(&report, format),
        },
        None => output::print_warning("Item is already at that position"),
    }
    Ok(())
}
