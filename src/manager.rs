use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Returns the base data directory for PassGen files.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassGen", "PassGen") {
        let dir = proj_dirs.data_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("Could not create data directory {}: {e}", dir.display());
        }
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// Full path of the settings file.
pub fn settings_file_path() -> PathBuf {
    data_dir().join("settings.json")
}
