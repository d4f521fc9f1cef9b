//! incept's main application entry point.
//! Handles command-line argument parsing and drives an archetype build.

use std::path::PathBuf;

use chrono::{Local, NaiveTime};
use incept::{
    cli::{get_args, Args, BuildArgs, Command},
    config::load_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    params::ArchetypeParameters,
    registry::ArchetypeKind,
};
use log::debug;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Build(build_args) => build(build_args),
        Command::List => list(),
    }
}

/// Builds the selected archetype.
///
/// # Flow
/// 1. Validates the parameters, before any I/O
/// 2. Merges the defaults file with explicit flags
/// 3. Instantiates the archetype, surfacing template errors
/// 4. Previews or writes the tree under `<output_dir>/<package_name>`
fn build(args: BuildArgs) -> Result<()> {
    let timestamp = match args.date {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };
    let params =
        ArchetypeParameters::new(args.package_name, args.author, args.author_email, timestamp)?;

    let config = load_config(".")?;
    let kind = args.archetype.unwrap_or_else(|| config.archetype_or_default());
    let output_dir: PathBuf = args.output_dir.unwrap_or_else(|| config.output_dir_or_default());
    let root_dir = output_dir.join(params.package_name());
    debug!("Using archetype '{kind}' with root {}", root_dir.display());

    let archetype = kind.archetype()?;
    let paths = archetype.paths(&root_dir, &params)?;

    if args.dry_run {
        for path in paths {
            println!("Would create: '{}'", path.display());
        }
        return Ok(());
    }

    archetype.build(&root_dir, &params)?;
    for path in paths {
        println!("Created: '{}'", path.display());
    }
    println!("Project '{}' created in {}.", params.package_name(), root_dir.display());
    Ok(())
}

fn list() -> Result<()> {
    for kind in ArchetypeKind::ALL {
        let archetype = kind.archetype()?;
        println!("{:<12} {} ({} files)", kind.name(), kind.description(), archetype.len());
    }
    Ok(())
}
