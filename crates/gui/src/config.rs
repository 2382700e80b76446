// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! ELMR GUI config
//!

use crate::GuiError;
use directories_next::ProjectDirs;
use elmr_core::{Indicator, Period};
use elmr_gui_core::{DefaultWindow, PeriodSliderConfig, SliderMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "ELMR";
const APPLICATION_NAME: &str = "ELMR";
const CONFIG_FILE_NAME: &str = "config.json";

/// The number of months the range slider starts on
const DEFAULT_RANGE_WINDOW_MONTHS: u32 = 18;

/// The config that's saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to a source dataset (JSON).  When set, the sliders cover the
    /// dataset's period instead of their configured dates
    pub dataset_path: Option<PathBuf>,

    /// The single value "month" slider
    pub month_slider: PeriodSliderConfig,

    /// The start/end range slider that the headlines follow
    pub range_slider: PeriodSliderConfig,

    /// The series headlines are shown for
    pub indicators: Vec<Indicator>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            month_slider: PeriodSliderConfig::default(),
            range_slider: PeriodSliderConfig {
                mode: SliderMode::Range,
                default_window: DefaultWindow::LastMonths(DEFAULT_RANGE_WINDOW_MONTHS),
                ..PeriodSliderConfig::default()
            },
            indicators: vec![Indicator::unemployment_rate(), Indicator::employment_level()],
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, creating it with
    /// the defaults if it doesn't exist yet
    pub fn load_or_create() -> Result<Self, GuiError> {
        let path = config_file_path()?;
        if !path.exists() {
            info!("No config file found");
            let config = Config::default();
            config.save_to(&path)?;
            return Ok(config);
        }
        Self::load_from(&path)
    }

    /// Load the config from a file
    pub fn load_from(path: &Path) -> Result<Self, GuiError> {
        info!("Loading config from {path:?}");
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Save the config to a file (creating its directory if needed)
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {path:?}");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    /// Restrict both sliders to a dataset's period
    pub fn restrict_to_period(&mut self, period: Period) {
        for slider in [&mut self.month_slider, &mut self.range_slider] {
            slider.min_date = period.start();
            slider.max_date = Some(period.end());
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    info!("Getting project directories (dev build)");
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(GuiError::Config)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    info!("Getting project directories");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(GuiError::Config)
}

/// Get the path to the config
pub fn config_file_path() -> Result<PathBuf, GuiError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    info!("Config file path = {config_file:?}");
    Ok(config_file)
}
