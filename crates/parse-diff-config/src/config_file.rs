use std::path::PathBuf;

const APP_NAME: &str = "parse-diff";
const LOCAL_CONFIG_FILE: &str = ".parse-diff.toml";

/// Config file locations in lookup order
///
/// 1. `.parse-diff.toml` in the current working directory
/// 2. `parse-diff/config.toml` in the platform config directory
///    (`~/.config/parse-diff/config.toml` on Linux)
/// 3. `.parse-diff.toml` in the home directory
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(LOCAL_CONFIG_FILE));
    }

    candidates
}

/// Load the first readable config file from the default locations.
///
/// Returns the path together with its content, or None if no candidate exists.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    load_first_config(&config_file_candidates())
}

/// Load the first readable file out of `candidates`.
pub fn load_first_config(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path.clone(), content))
    })
}
