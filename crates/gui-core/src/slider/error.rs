// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Period slider errors
//!

use crate::{SliderMode, SliderPosition};
use elmr_core::PeriodError;
use thiserror::Error;

/// Errors that can arise when building or driving a [`crate::PeriodSlider`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// The configured minimum date is after the maximum date
    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodError),

    /// A range slider must be bound to exactly two display slots
    #[error("Insufficient display bindings: expected {expected}, found {found}")]
    InsufficientDisplays { expected: usize, found: usize },

    /// A single value was given to a range slider (or vice versa)
    #[error("A {mode} slider can't be set to {position:?}")]
    ModeMismatch {
        mode: SliderMode,
        position: SliderPosition,
    },
}
