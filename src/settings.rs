//! Startup settings
//!
//! Resolves where the list lives and how chatty the tool is. Everything is
//! decided once from the command line and handed on explicitly.

use crate::error::{Result, TodoError};
use crate::ui::Verbosity;
use clap::ArgMatches;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Directory, next to the executable, that holds the list document
pub const DATA_DIR_NAME: &str = "Data";

/// File name of the list document
pub const LIST_FILE_NAME: &str = "ToDoList.json";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the list document
    pub list_path: PathBuf,

    pub verbosity: Verbosity,
}

impl Settings {
    pub fn new(list_path: PathBuf) -> Self {
        Settings {
            list_path,
            verbosity: Verbosity::Normal,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Build settings from parsed command line flags
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let list_path = match matches.get_one::<String>("file") {
            Some(path) => PathBuf::from(path),
            None => default_list_path()?,
        };

        Ok(Settings::new(list_path).with_verbosity(get_verbosity(matches)))
    }
}

/// Default location: `Data/ToDoList.json` beside the executable, falling
/// back to the platform data directory.
pub fn default_list_path() -> Result<PathBuf> {
    if let Some(dir) = env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
    {
        return Ok(list_path_in(dir));
    }

    ProjectDirs::from("", "", "todo-cli")
        .map(|dirs| dirs.data_dir().join(LIST_FILE_NAME))
        .ok_or_else(|| {
            TodoError::Settings("Failed to determine a location for the list file".to_string())
        })
}

/// The list path for a given executable directory
pub fn list_path_in(exe_dir: &Path) -> PathBuf {
    exe_dir.join(DATA_DIR_NAME).join(LIST_FILE_NAME)
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}
