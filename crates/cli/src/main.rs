use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use curlscan_core::{handle_id, handle_list, CLIError, FileError, Resolution};
use log::debug;

const EXAMPLES: &str = "\
Examples:
  1. Extract and list all URLs from a file:
     curlscan myfile.txt

  2. Exclude URLs with specific extensions:
     curlscan myfile.txt --exclude-ext js css png

  3. Retrieve the full curl request for a specific global identifier:
     curlscan myfile.txt --id 5

Note: global identifiers follow the listing order, domains by first
appearance and paths sorted within each domain.";

#[derive(Parser)]
#[command(
    version,
    about = "Extract and list URLs from a file containing curl commands, grouped by domain.",
    long_about = "Extract and list URLs from a file containing curl commands, grouped by domain.\n\
                  URLs can be excluded based on their file extensions.\n\
                  Also allows retrieval of the full curl request for a specific global identifier.",
    after_help = EXAMPLES
)]
struct Cli {
    /// The file containing curl commands to process
    filename: PathBuf,

    /// The global identifier of a URL to retrieve the full curl request
    #[arg(long, allow_negative_numbers = true)]
    id: Option<i64>,

    /// File extensions of URLs to exclude, e.g. --exclude-ext js css png
    #[arg(long, num_args = 0.., value_name = "EXT")]
    exclude_ext: Vec<String>,

    /// Print the listing as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            match e {
                CLIError::File(FileError::NotFound(_)) => ExitCode::from(3),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &Cli) -> Result<(), CLIError> {
    let mut stdout = io::stdout().lock();

    match cli.id {
        Some(id) if id != 0 => {
            if let Resolution::NotFound = handle_id(&cli.filename, id, &cli.exclude_ext, &mut stdout)? {
                debug!("no command block matched id {id}");
            }
        }
        _ => handle_list(&cli.filename, &cli.exclude_ext, cli.json, &mut stdout)?,
    }
    Ok(())
}
