use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::consts::EXIT_ALREADY_EXISTS;
use crate::error::AppError;
use crate::naming::{normalize_suffix, split_keywords};
use crate::output::{
    output_prefixes_json, output_project_json, output_store_json, print_prefixes, print_project,
    print_store_table,
};
use crate::project::{ProjectRequest, ProjectStatus, directory_key, generate};
use crate::store::StateFile;

/// How a successful run ended, for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    AlreadyExists,
}

impl Outcome {
    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::AlreadyExists => ExitCode::from(EXIT_ALREADY_EXISTS),
        }
    }
}

/// Dispatch the parsed command line
pub(crate) fn run(cli: &Cli) -> Result<Outcome, AppError> {
    match &cli.command {
        Some(Commands::List) => handle_list(cli),
        Some(Commands::Prefix { indices }) => {
            if cli.json {
                println!("{}", output_prefixes_json(indices));
            } else {
                print_prefixes(indices);
            }
            Ok(Outcome::Success)
        }
        Some(Commands::Migrate { directory }) => handle_migrate(cli, directory.as_deref()),
        None => handle_generate(cli),
    }
}

fn state_file(cli: &Cli) -> Result<StateFile, AppError> {
    let path = match &cli.state_file {
        Some(path) => path.clone(),
        None => StateFile::default_path().ok_or(AppError::NoHomeDir)?,
    };
    tracing::debug!(path = %path.display(), "using state file");
    Ok(StateFile::new(path))
}

/// Absolute, lexically normalized form of `dir`, or the current directory.
/// Symlinks are left alone.
fn resolve_directory(dir: Option<&Path>) -> Result<PathBuf, AppError> {
    let absolute = match dir {
        Some(dir) => std::path::absolute(dir).map_err(AppError::CurrentDir)?,
        None => std::env::current_dir().map_err(AppError::CurrentDir)?,
    };
    Ok(normalize_lexically(&absolute))
}

/// Drop `.`, fold `..` into the previous component, strip trailing separators
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}

fn handle_generate(cli: &Cli) -> Result<Outcome, AppError> {
    let keywords = split_keywords(cli.inputs.as_deref().unwrap_or_default());
    if keywords.is_empty() {
        return Err(AppError::NoKeywords);
    }
    let request = ProjectRequest {
        keywords,
        suffix: normalize_suffix(cli.suffix.as_deref()),
        directory: resolve_directory(cli.directory.as_deref())?,
        dry_run: cli.dry_run,
    };

    let state = state_file(cli)?;
    let mut store = state.load()?;
    let project = generate(&mut store, &request)?;

    if project.status == ProjectStatus::Created {
        state.save(&store)?;
    }

    if cli.json {
        println!("{}", output_project_json(&project));
    } else {
        print_project(&project);
    }

    Ok(match project.status {
        ProjectStatus::AlreadyExists => Outcome::AlreadyExists,
        ProjectStatus::Created | ProjectStatus::DryRun => Outcome::Success,
    })
}

fn handle_list(cli: &Cli) -> Result<Outcome, AppError> {
    let store = state_file(cli)?.load()?;
    if cli.json {
        println!("{}", output_store_json(&store));
    } else {
        print_store_table(&store, cli.use_color());
    }
    Ok(Outcome::Success)
}

fn handle_migrate(cli: &Cli, directory: Option<&Path>) -> Result<Outcome, AppError> {
    let dir = resolve_directory(directory)?;
    let key = directory_key(&dir);
    let state = state_file(cli)?;
    let last_index = state.migrate_legacy(&key)?;
    println!(
        "Migrated {}: {} -> last_index {}",
        state.path().display(),
        key,
        last_index
    );
    Ok(Outcome::Success)
}
