use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::{
    api::breeds::DEFAULT_BREEDS_URL,
    core::SpyCatError,
};

const APP_NAME: &str = "spycat";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub breeds_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            breeds_url: DEFAULT_BREEDS_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Loads settings from the data dir, writing the defaults there on first run.
    pub fn load_or_init() -> Self {
        let path = get_data_file_path(SETTINGS_FILE);
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = save_json_to(&settings, &path) {
                warn!(path = %path.display(), error = %e, "could not write default settings");
            }
            return settings;
        }
        load_json_or_default(&path)
    }
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), SpyCatError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "data saved");
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, SpyCatError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    info!(path = %path.display(), "data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> T {
    match load_json_from::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load, using defaults");
            T::default()
        }
    }
}
