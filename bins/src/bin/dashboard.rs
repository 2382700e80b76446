// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The ELMR labour market dashboard
//!

use clap::{Parser, ValueEnum};
use eframe::egui::ViewportBuilder;
use elmr_gui::{Config, DEFAULT_WINDOW_SIZE, ElmrApp};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// ELMR dashboard CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Labour market dashboard with month and period sliders",
    after_help = "Without --config the config is read from (or created in) the platform config directory"
)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a source dataset (overrides the config)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// How much to log
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Entry point for the native dashboard
fn main() -> Result<(), eframe::Error> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("elmr").build();
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    // Load the config
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load_or_create(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error loading config: {error}");
            std::process::exit(1);
        }
    };
    if let Some(dataset) = args.dataset {
        config.dataset_path = Some(dataset);
    }

    // Create the dashboard
    let app = match ElmrApp::new(config) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    // Setup the main window's default options
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]),
        ..Default::default()
    };

    info!("Launching dashboard");

    eframe::run_native("ELMR", options, Box::new(|_cc| Ok(Box::new(app))))
}
