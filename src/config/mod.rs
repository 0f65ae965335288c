use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_TEXT_X, DEFAULT_TEXT_Y};
use crate::editor::{ElementDefaults, FontFamily};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_position() -> [f32; 2] {
    [DEFAULT_TEXT_X, DEFAULT_TEXT_Y]
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Canvas-local position given to newly added text
    #[serde(default = "default_position")]
    pub default_position: [f32; 2],

    /// Font size given to newly added text
    #[serde(default = "default_font_size")]
    pub default_font_size: f32,

    /// Font family given to newly added text
    #[serde(default)]
    pub default_font_family: FontFamily,

    /// Maximum undo depth; unlimited when absent
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            default_position: default_position(),
            default_font_size: default_font_size(),
            default_font_family: FontFamily::default(),
            history_limit: None,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

impl AppConfig {
    pub fn element_defaults(&self) -> ElementDefaults {
        ElementDefaults {
            position: Vec2::from_array(self.data.default_position),
            font_size: self.data.default_font_size,
            font_family: self.data.default_font_family,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to make a font the default for new text
#[derive(Message)]
pub struct SetDefaultFontRequest {
    pub size: f32,
    pub family: FontFamily,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Parse config JSON, describing why it was rejected on failure
fn parse_config(json: &str) -> Result<AppConfigData, String> {
    let mut data: AppConfigData = serde_json::from_str(json)
        .map_err(|e| format!("Configuration file was corrupted: {}", e))?;

    // Zero would keep no undo steps at all
    if data.history_limit == Some(0) {
        warn!("Ignoring history_limit of 0, undo history is unlimited");
        data.history_limit = None;
    }
    Ok(data)
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = get_config_path();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match parse_config(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(reason) => {
                    warn!("Failed to parse config file: {}", reason);
                    (AppConfigData::default(), Some(reason))
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Some(parent) = config.config_path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                error!("Failed to create config directory: {}", e);
                return;
            }
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to set the default font for new text
fn set_default_font_system(
    mut events: MessageReader<SetDefaultFontRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.default_font_size = event.size;
        config.data.default_font_family = event.family;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!(
            "Set default font to {} {}",
            event.family.display_name(),
            event.size
        );
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetDefaultFontRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_default_font_system.run_if(on_message::<SetDefaultFontRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
