//! Command-line interface implementation for incept.
//! Provides argument parsing and help text formatting using clap.

use chrono::NaiveDate;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::registry::ArchetypeKind;

/// Command-line arguments structure for incept.
#[derive(Parser, Debug)]
#[command(author, version, about = "incept: create a new project from a built-in archetype", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a project tree in <OUTPUT_DIR>/<PACKAGE_NAME>
    Build(BuildArgs),
    /// List the available archetypes
    List,
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Package name as it appears in code references, e.g. 'my_package' and
    /// not 'my-package'
    #[arg(value_name = "PACKAGE_NAME")]
    pub package_name: String,

    /// Name of the package author, used in copyright notices and package metadata
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Email of the package author, used in package metadata and the README
    #[arg(value_name = "AUTHOR_EMAIL")]
    pub author_email: String,

    /// Archetype to build [default: standard]
    #[arg(short, long, value_enum)]
    pub archetype: Option<ArchetypeKind>,

    /// Directory the project root is created in [default: .]
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Creation date stamped into generated files instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Print the files that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{}", e.render());
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
