// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! ELMR GUI errors
//!

use elmr_core::DatasetError;
use elmr_gui_core::SliderError;
use thiserror::Error;

/// Errors that can arise when setting up or running the dashboard
#[derive(Error, Debug)]
pub enum GuiError {
    /// The platform config directory couldn't be determined
    #[error("Could not determine the config directory")]
    Config,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Slider error: {0}")]
    Slider(#[from] SliderError),
}
