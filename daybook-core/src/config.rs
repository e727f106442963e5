//! daybook configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draft::FormVariant;
use crate::error::{DaybookError, DaybookResult};
use crate::month::WeekStart;

/// Card background colours, cycled by position.
pub const DEFAULT_PALETTE: [&str; 5] = ["#74b9ff", "#55efc4", "#a29bfe", "#fdcb6e", "#ff7675"];

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_seed_sample_events() -> bool {
    true
}

/// `DAYBOOK_*` variables. `DAYBOOK_PALETTE` takes comma-separated colours.
fn environment() -> Environment {
    Environment::with_prefix("DAYBOOK")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("palette")
}

/// Configuration at ~/.config/daybook/config.toml
///
/// Every key can also be set through a `DAYBOOK_`-prefixed environment
/// variable, e.g. `DAYBOOK_WEEK_START=monday`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaybookConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// Which add form to show.
    #[serde(default)]
    pub form: FormVariant,

    #[serde(default = "default_seed_sample_events")]
    pub seed_sample_events: bool,

    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            week_start: WeekStart::default(),
            form: FormVariant::default(),
            seed_sample_events: default_seed_sample_events(),
            palette: default_palette(),
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config file on
    /// first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` layered with `DAYBOOK_*` environment variables.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: Environment) -> DaybookResult<Self> {
        debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# First column of the month grid (\"sunday\" or \"monday\"):
# week_start = \"sunday\"

# Add form: \"timed\" (dates and times) or \"date-only\":
# form = \"timed\"

# Start each session with the sample events:
# seed_sample_events = true

# Event card colours, cycled in order:
# palette = [{}]
",
            DEFAULT_PALETTE
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", ")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The effective settings as TOML.
    pub fn to_toml(&self) -> DaybookResult<String> {
        toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // load_from reads the process environment; tests touching it take turns
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn from_vars(path: &Path, vars: &[(&str, &str)]) -> DaybookResult<DaybookConfig> {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        DaybookConfig::load_layered(path, environment().source(Some(source)))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let _env = env_lock();
        let dir = tempdir().unwrap();
        let config = DaybookConfig::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(config.form, FormVariant::Timed);
        assert!(config.seed_sample_events);
        assert_eq!(config.palette.len(), 5);
    }

    #[test]
    fn default_file_is_all_comments() {
        let _env = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("daybook").join("config.toml");

        DaybookConfig::create_default_config(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().all(|l| l.is_empty() || l.starts_with('#')));

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.palette, default_palette());
    }

    #[test]
    fn reads_values_from_file() {
        let _env = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "week_start = \"monday\"\nform = \"date-only\"\nseed_sample_events = false\npalette = [\"#000000\"]\n",
        )
        .unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();

        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.form, FormVariant::DateOnly);
        assert!(!config.seed_sample_events);
        assert_eq!(config.palette, vec!["#000000".to_string()]);
    }

    #[test]
    fn rejects_unknown_variant() {
        let _env = env_lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "form = \"weekly\"\n").unwrap();

        assert!(matches!(
            DaybookConfig::load_from(&path),
            Err(DaybookError::Config(_))
        ));
    }

    #[test]
    fn env_overrides_scalar_keys() {
        let dir = tempdir().unwrap();
        let config = from_vars(
            &dir.path().join("nope.toml"),
            &[
                ("DAYBOOK_WEEK_START", "monday"),
                ("DAYBOOK_FORM", "date-only"),
                ("DAYBOOK_SEED_SAMPLE_EVENTS", "false"),
            ],
        )
        .unwrap();

        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.form, FormVariant::DateOnly);
        assert!(!config.seed_sample_events);
        assert_eq!(config.palette, default_palette());
    }

    #[test]
    fn env_palette_is_comma_separated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let single = from_vars(&path, &[("DAYBOOK_PALETTE", "#000000")]).unwrap();
        assert_eq!(single.palette, vec!["#000000".to_string()]);

        let several = from_vars(&path, &[("DAYBOOK_PALETTE", "#000000,#ffffff")]).unwrap();
        assert_eq!(several.palette, vec!["#000000".to_string(), "#ffffff".to_string()]);
    }

    #[test]
    fn env_wins_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"sunday\"\npalette = [\"#111111\"]\n").unwrap();

        let config = from_vars(&path, &[("DAYBOOK_WEEK_START", "monday")]).unwrap();

        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.palette, vec!["#111111".to_string()]);
    }

    #[test]
    fn load_from_reads_process_environment() {
        let _env = env_lock();
        let dir = tempdir().unwrap();

        // SAFETY: every test that reads the process environment holds ENV_LOCK
        unsafe { std::env::set_var("DAYBOOK_PALETTE", "#000000,#74b9ff") };
        let loaded = DaybookConfig::load_from(&dir.path().join("nope.toml"));
        unsafe { std::env::remove_var("DAYBOOK_PALETTE") };

        let config = loaded.unwrap();
        assert_eq!(config.palette, vec!["#000000".to_string(), "#74b9ff".to_string()]);
    }
}
