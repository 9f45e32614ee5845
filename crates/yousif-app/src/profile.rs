use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use yousif_config::Config;

/// Platform config folder, `./.yousif` when none can be resolved
pub fn config_root() -> PathBuf {
    yousif_config::project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".yousif"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub value: Config,
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

/// Initialize the profiles folder and the main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profiles_dir(root).join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            // Env values stay out of the file, they are applied on every load
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

/// Config stored in a profile file, defaulting to main if name not found.
/// Environment variables are not applied.
pub fn load_profile_config(root: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir(root).join(format!("{name}.json"));

    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = profiles_dir(root).join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::default())
    }
}

/// Load a user profile by name. Environment variables still override what
/// the file says.
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<Config> {
    Ok(load_profile_config(root, name)?.apply_env())
}
