pub mod cli_ops;
pub mod domain_paths;
pub mod extract;
pub mod file_io;
pub mod output;
pub mod resolve;
pub mod url_parts;

pub use cli_ops::{handle_id, handle_list, CLIError};
pub use domain_paths::{DomainPaths, IndexedPath};
pub use extract::{extract, extract_urls, normalize_extensions};
pub use file_io::{read_command_file, FileError};
pub use resolve::{find_command_block, resolve_by_id, Resolution};
pub use url_parts::UrlParts;
