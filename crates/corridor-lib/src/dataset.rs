use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::RoadNetwork;

/// Environment variable pointing at a dataset file or directory.
pub const DATASET_ENV_VAR: &str = "CORRIDOR_DATASET";

/// Default filename for a user-supplied dataset.
const DATASET_FILENAME: &str = "network.json";

/// Where a network dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// JSON document on disk.
    File(PathBuf),
    /// Dataset compiled into the library.
    Builtin,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Builtin => f.write_str("<builtin>"),
        }
    }
}

impl DatasetSource {
    /// Load and validate the network this source points at.
    pub fn load(&self) -> Result<RoadNetwork> {
        match self {
            DatasetSource::File(path) => RoadNetwork::from_path(path),
            DatasetSource::Builtin => RoadNetwork::builtin(),
        }
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "corridor", "corridor").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(normalize_data_dir(dirs.data_dir()).join(DATASET_FILENAME))
}

/// Decide which dataset to use.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CORRIDOR_DATASET` environment variable.
/// 3. `network.json` in the platform data directory, when it exists.
/// 4. The built-in North-East India dataset.
///
/// Paths without an extension are treated as directories holding
/// `network.json`. Explicitly requested files are not checked here; loading
/// a missing one fails with [`Error::DatasetNotFound`].
pub fn resolve_dataset_source(target: Option<&Path>) -> DatasetSource {
    let default = match default_dataset_path() {
        Ok(path) => Some(path),
        Err(error) => {
            debug!(%error, "no platform data directory; skipping user dataset lookup");
            None
        }
    };
    resolve_from(target, env::var_os(DATASET_ENV_VAR), default)
}

/// Resolve and load the dataset in one step.
pub fn load_network(target: Option<&Path>) -> Result<RoadNetwork> {
    let source = resolve_dataset_source(target);
    info!(source = %source, "loading road network");
    source.load()
}

fn resolve_from(
    target: Option<&Path>,
    env_value: Option<OsString>,
    default: Option<PathBuf>,
) -> DatasetSource {
    if let Some(explicit) = target {
        return DatasetSource::File(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env_value.filter(|value| !value.is_empty()) {
        return DatasetSource::File(canonical_dataset_path(Path::new(&env_path)));
    }

    match default {
        Some(path) if path.exists() => DatasetSource::File(path),
        _ => DatasetSource::Builtin,
    }
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    path.join(DATASET_FILENAME)
}

fn normalize_data_dir(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        normalize_windows_data_dir(path)
    }
    #[cfg(not(windows))]
    {
        path.to_path_buf()
    }
}

#[cfg(windows)]
/// Upper bound on duplicate-segment collapses performed for one path.
const MAX_NORMALIZATION_ITERATIONS: usize = 100;

#[cfg(windows)]
/// Collapse duplicate consecutive directory names that can appear in Windows data
/// directories, e.g. `%APPDATA%\corridor\corridor\data` becomes
/// `%APPDATA%\corridor\data`.
fn normalize_windows_data_dir(path: &Path) -> PathBuf {
    use std::ffi::OsStr;

    fn eq_ignore_ascii_case(a: &OsStr, b: &OsStr) -> bool {
        a.to_string_lossy()
            .eq_ignore_ascii_case(&b.to_string_lossy())
    }

    fn try_collapse_duplicate(current: &Path) -> Option<PathBuf> {
        let parent = current.parent()?;
        let parent_name = parent.file_name()?;
        let grandparent = parent.parent()?;
        let grandparent_name = grandparent.file_name()?;

        if !eq_ignore_ascii_case(parent_name, grandparent_name) {
            return None;
        }

        let mut base = grandparent.to_path_buf();
        if let Some(file_name) = current.file_name() {
            base.push(file_name);
        }
        Some(base)
    }

    let mut current = path.to_path_buf();
    for _ in 0..MAX_NORMALIZATION_ITERATIONS {
        let Some(next) = try_collapse_duplicate(&current) else {
            break;
        };
        if next == current {
            break;
        }
        current = next;
    }

    current
}
