use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SkillError};
use crate::skill::{DEFAULT_CATEGORY, Palette};

const CONFIG_DIR: &str = "skillfile";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = ".skillfile.toml";

/// Data file used when nothing else names one, relative to the current directory.
pub const DEFAULT_DATA_FILE: &str = "main/static/data/skills.json";

/// Contents of a `.skillfile.toml` or global `config.toml`. Every key is optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SettingsFile {
    pub data_file: Option<PathBuf>,
    pub colors: Option<Vec<String>>,
    pub default_category: Option<String>,
}

impl SettingsFile {
    /// Fills keys missing from `self` with the ones from `fallback`.
    fn or(self, fallback: SettingsFile) -> SettingsFile {
        SettingsFile {
            data_file: self.data_file.or(fallback.data_file),
            colors: self.colors.or(fallback.colors),
            default_category: self.default_category.or(fallback.default_category),
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub palette: Palette,
    pub default_category: String,
}

impl Settings {
    /// Resolves settings from the command line override and the settings files
    /// on disk. The override wins over both files, the local file over the global.
    pub fn resolve(file_override: Option<&Path>) -> Result<Settings> {
        let local = read_settings_file(&local_config_path()?)?;
        let global = match global_config_path() {
            Some(path) => read_settings_file(&path)?,
            None => None,
        };
        Ok(Self::from_layers(file_override, local, global))
    }

    pub fn from_layers(
        file_override: Option<&Path>,
        local: Option<SettingsFile>,
        global: Option<SettingsFile>,
    ) -> Settings {
        let merged = local
            .unwrap_or_default()
            .or(global.unwrap_or_default());

        let data_file = file_override
            .map(Path::to_path_buf)
            .or(merged.data_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        debug!(path = %data_file.display(), "resolved data file");

        Settings {
            data_file,
            palette: merged.colors.and_then(Palette::new).unwrap_or_default(),
            default_category: merged
                .default_category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

/// Returns `./.skillfile.toml`.
pub fn local_config_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(LOCAL_CONFIG_FILE))
}

/// Returns `$XDG_CONFIG_HOME/skillfile/config.toml`, falling back to `~/.config`.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(config_home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Reads a settings file, returning `None` if it does not exist.
///
/// A relative `data-file` is anchored at the directory holding the settings file.
pub fn read_settings_file(path: &Path) -> Result<Option<SettingsFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let mut settings: SettingsFile =
        toml::from_str(&content).map_err(|err| SkillError::InvalidConfig {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;

    if settings.colors.as_ref().is_some_and(Vec::is_empty) {
        return Err(SkillError::InvalidConfig {
            path: path.to_path_buf(),
            detail: "colors must list at least one tag".to_string(),
        });
    }

    if let Some(data_file) = settings.data_file.take() {
        let anchored = match path.parent() {
            Some(dir) if data_file.is_relative() => dir.join(data_file),
            _ => data_file,
        };
        settings.data_file = Some(anchored);
    }

    debug!(path = %path.display(), "loaded settings file");
    Ok(Some(settings))
}
