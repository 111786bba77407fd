//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dotmenu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DotmenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub repository: Option<String>,
    pub target: Option<String>,
    pub confirm: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GitConfig {
    pub program: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REPOSITORY: &str = "git@github.com:elmar-hinz/dotfiles.git";
pub const DEFAULT_TARGET: &str = "~/.dotfiles";
pub const DEFAULT_GIT_PROGRAM: &str = "git";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub repository: String,
    pub target: String,
    pub git_program: String,
    /// Ask for and confirm repository/target before showing the menu.
    pub confirm: bool,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub repository: Option<String>,
    pub target: Option<String>,
    pub git_program: Option<String>,
    pub skip_confirm: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dotmenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dotmenu").join("config.toml"))
}

/// Load config from `~/.dotmenu/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DotmenuConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DotmenuConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DotmenuConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same missing-file behavior as `load_config`.
pub fn load_config_from(path: &Path) -> Result<DotmenuConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DotmenuConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DotmenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# dotmenu Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# repository = "git@github.com:elmar-hinz/dotfiles.git"   # Or DOTMENU_REPOSITORY
# target = "~/.dotfiles"                                   # Or DOTMENU_TARGET
# confirm = true                                           # Ask before showing the menu

# [git]
# program = "git"                                          # Or DOTMENU_GIT
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DotmenuConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Repository: CLI → env → config → default
    let repository = cli
        .repository
        .clone()
        .or_else(|| std::env::var("DOTMENU_REPOSITORY").ok())
        .or_else(|| config.general.repository.clone())
        .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string());

    // Target: CLI → env → config → default
    let target = cli
        .target
        .clone()
        .or_else(|| std::env::var("DOTMENU_TARGET").ok())
        .or_else(|| config.general.target.clone())
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    // Git program: CLI → env → config → default
    let git_program = cli
        .git_program
        .clone()
        .or_else(|| std::env::var("DOTMENU_GIT").ok())
        .or_else(|| config.git.program.clone())
        .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string());

    // --yes always wins; otherwise the file decides, defaulting to asking
    let confirm = !cli.skip_confirm && config.general.confirm.unwrap_or(true);

    ResolvedConfig {
        repository,
        target,
        git_program,
        confirm,
    }
}
