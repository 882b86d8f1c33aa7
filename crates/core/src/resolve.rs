use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::file_io::{read_command_file, FileError};

const BLOCK_START: &str = "curl '";
const BLOCK_END: char = ';';

// `\r\n`, `\n` and a lone `\r` all end a line.
static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Outcome of looking up a global id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Full text of the matching command, one trimmed line per source line.
    Found(String),
    NotFound,
}

impl Resolution {
    pub fn found(&self) -> Option<&str> {
        match self {
            Resolution::Found(block) => Some(block),
            Resolution::NotFound => None,
        }
    }
}

/// Look up the 1-based `id` in `flattened` and return the first command block
/// of `filename` that mentions that path.
///
/// Ids outside `1..=flattened.len()` resolve to [`Resolution::NotFound`].
pub fn resolve_by_id<P: AsRef<Path>>(
    filename: P,
    id: i64,
    flattened: &[String],
) -> Result<Resolution, FileError> {
    let target = match usize::try_from(id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|idx| flattened.get(idx))
    {
        Some(target) => target,
        None => {
            debug!("id {id} outside 1..={}", flattened.len());
            return Ok(Resolution::NotFound);
        }
    };

    let text = read_command_file(filename)?;
    Ok(match find_command_block(&text, target) {
        Some(block) => Resolution::Found(block),
        None => Resolution::NotFound,
    })
}

enum ScanState {
    Idle,
    InBlock(Vec<String>),
}

/// Scan `text` for the first `;`-terminated `curl '...'` block containing `target`.
///
/// Containment is a plain substring test against the block's lines glued
/// together without separators, so `/a` also matches a block for `/ab`.
/// A block that is never terminated is dropped when the next one starts.
/// Lines may end in `\n`, `\r\n` or a bare `\r`.
pub fn find_command_block(text: &str, target: &str) -> Option<String> {
    let mut state = ScanState::Idle;

    for line in LINE_BREAK_RE.split(text) {
        let line = line.trim();

        if line.starts_with(BLOCK_START) {
            if let ScanState::InBlock(abandoned) = &state {
                debug!("dropping unterminated block of {} lines", abandoned.len());
            }
            state = ScanState::InBlock(Vec::new());
        }

        let ScanState::InBlock(lines) = &mut state else {
            continue;
        };
        lines.push(line.to_owned());

        if line.ends_with(BLOCK_END) {
            if lines.concat().contains(target) {
                return Some(lines.join("\n"));
            }
            state = ScanState::Idle;
        }
    }

    None
}
