use std::io::Write;
use std::path::Path;

use log::info;

use crate::domain_paths::DomainPaths;
use crate::extract::{extract, normalize_extensions};
use crate::file_io::{read_command_file, FileError};
use crate::output::{not_found_message, write_listing, write_listing_json};
use crate::resolve::{resolve_by_id, Resolution};

#[derive(thiserror::Error, Debug)]
pub enum CLIError {
    #[error(transparent)]
    File(#[from] FileError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Read `input` and group its curl URLs, skipping the bare extensions in `exclude_ext`.
pub fn load_grouped<S: AsRef<str>>(input: &Path, exclude_ext: &[S]) -> Result<DomainPaths, CLIError> {
    let text = read_command_file(input)?;
    Ok(extract(&text, &normalize_extensions(exclude_ext)))
}

/// Handle listing mode: print every path grouped by domain with its global id.
pub fn handle_list<S, W>(input: &Path, exclude_ext: &[S], json: bool, out: &mut W) -> Result<(), CLIError>
where
    S: AsRef<str>,
    W: Write,
{
    let grouped = load_grouped(input, exclude_ext)?;
    info!(
        "listing {} paths from {}",
        grouped.path_count(),
        input.display()
    );

    if json {
        write_listing_json(out, &grouped)?;
    } else {
        write_listing(out, &grouped)?;
    }
    Ok(())
}

/// Handle identifier mode: print the full command for `id`, or the not-found message.
pub fn handle_id<S, W>(input: &Path, id: i64, exclude_ext: &[S], out: &mut W) -> Result<Resolution, CLIError>
where
    S: AsRef<str>,
    W: Write,
{
    let flattened = load_grouped(input, exclude_ext)?.flatten();
    info!("resolving id {id} among {} paths", flattened.len());

    let resolution = resolve_by_id(input, id, &flattened)?;
    match &resolution {
        Resolution::Found(block) => writeln!(out, "{block}")?,
        Resolution::NotFound => writeln!(out, "{}", not_found_message(id, input))?,
    }
    Ok(resolution)
}
