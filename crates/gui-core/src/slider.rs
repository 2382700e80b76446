// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The period slider: maps month offsets onto the months of an analysis period,
//! keeps display slots in sync with its handle(s) and notifies subscribers of
//! interaction.
//!
//! Handle positions are whole month offsets from the start of the period, so
//! `0` is the first month and `length` is the last.  A range slider always
//! holds `start <= end`: a start handle moved past the end handle is pulled
//! back onto it.
//!
//! There are two notifications:
//!
//! - *slide*, fired on every movement of a handle while it is being dragged.
//!   Subscribers should do little work (e.g. update a label).
//! - *change*, fired once when the interaction is finished.  Expensive work
//!   (e.g. redrawing a map) belongs here.
//!
//! The slider's position is updated before either notification fires.
//! Programmatic moves ([`PeriodSlider::set_position`]) fire neither.
//!

mod config;
mod control;
mod display;
mod error;

pub use config::*;
pub use control::*;
pub use display::*;
pub use error::*;

use elmr_core::{DateFormat, Period, YearMonth};
use std::fmt;

/// Which notification an event is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEventKind {
    Slide,
    Change,
}

/// Passed to slide & change callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderEvent {
    pub kind: SliderEventKind,

    /// The position reported by the control, before the slider adjusted it
    pub requested: SliderPosition,

    /// The position the slider now holds
    pub position: SliderPosition,
}

/// A slide or change subscriber.  Receives the event and the slider (already
/// updated).  The subscriber may move the slider with
/// [`PeriodSlider::set_position`], which notifies nobody.
pub type SliderCallback = Box<dyn FnMut(&SliderEvent, &mut PeriodSlider)>;

/// The optional subscribers of a [`PeriodSlider`]
#[derive(Default)]
pub struct SliderCallbacks {
    on_slide: Option<SliderCallback>,
    on_change: Option<SliderCallback>,
}

impl SliderCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to slide events
    pub fn on_slide(
        mut self,
        callback: impl FnMut(&SliderEvent, &mut PeriodSlider) + 'static,
    ) -> Self {
        self.on_slide = Some(Box::new(callback));
        self
    }

    /// Subscribe to change events
    pub fn on_change(
        mut self,
        callback: impl FnMut(&SliderEvent, &mut PeriodSlider) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SliderCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderCallbacks")
            .field("on_slide", &self.on_slide.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// A display slot and what the slider last showed in it
struct BoundDisplay {
    slot: Box<dyn DisplaySlot>,
    value: DisplayValue,
}

/// A slider over the months of an analysis period (see the module docs)
pub struct PeriodSlider {
    period: Period,
    mode: SliderMode,
    date_format: DateFormat,
    position: SliderPosition,
    control: Box<dyn SliderControl>,
    displays: Vec<BoundDisplay>,
    callbacks: SliderCallbacks,
}

impl PeriodSlider {
    /// Build a slider, bind its control and sync its displays.
    ///
    /// Fails if the period is inverted, if the initial position doesn't match
    /// the mode, or if a range slider isn't given exactly two displays.
    pub fn new(
        config: PeriodSliderConfig,
        control: Box<dyn SliderControl>,
        displays: Vec<Box<dyn DisplaySlot>>,
        callbacks: SliderCallbacks,
    ) -> Result<Self, SliderError> {
        let max_date = config.max_date.unwrap_or_else(YearMonth::current);
        let period = Period::new(config.min_date, max_date)?;
        let length = period.length();

        if config.mode == SliderMode::Range && displays.len() != 2 {
            return Err(SliderError::InsufficientDisplays {
                expected: 2,
                found: displays.len(),
            });
        }

        let initial = match (config.initial, config.mode) {
            (Some(position), mode) if position.mode() != mode => {
                return Err(SliderError::ModeMismatch { mode, position });
            }
            (Some(position), _) => position,
            (None, SliderMode::Single) => SliderPosition::Single(length),
            (None, SliderMode::Range) => {
                let (start, end) = config.default_window.handles(length);
                SliderPosition::Range(start, end)
            }
        };

        let mut slider = Self {
            period,
            mode: config.mode,
            date_format: config.date_format,
            position: initial,
            control,
            displays: displays
                .into_iter()
                .map(|slot| BoundDisplay {
                    slot,
                    value: DisplayValue::default(),
                })
                .collect(),
            callbacks,
        };
        slider.control.bind(0..=length, initial);
        slider.read_back_control();
        slider.sync_displays();

        info!(
            "Built {} period slider over {} to {} ({length} months) at {:?}",
            slider.mode,
            period.start(),
            period.end(),
            slider.position
        );
        Ok(slider)
    }

    /// A slider with an in-memory [`BoundedControl`] and no subscribers
    pub fn headless(
        config: PeriodSliderConfig,
        displays: Vec<Box<dyn DisplaySlot>>,
    ) -> Result<Self, SliderError> {
        Self::new(
            config,
            Box::new(BoundedControl::new()),
            displays,
            SliderCallbacks::new(),
        )
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// The number of months from the start of the period to its end (the
    /// largest handle position)
    pub fn length(&self) -> u32 {
        self.period.length()
    }

    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// The handle position(s)
    pub fn position(&self) -> SliderPosition {
        self.position
    }

    /// The single handle, or the end handle of a range slider
    pub fn current(&self) -> u32 {
        self.position.end()
    }

    /// The `(start, end)` handles of a range slider
    pub fn range(&self) -> Option<(u32, u32)> {
        match self.position {
            SliderPosition::Range(start, end) => Some((start, end)),
            SliderPosition::Single(_) => None,
        }
    }

    /// The month `offset` months after the start of the period.  Not limited
    /// to the period.
    pub fn month_offset_to_date(&self, offset: i64) -> YearMonth {
        self.period.month_at(offset)
    }

    /// The month offset of `date`, or `None` if it isn't in the period
    pub fn date_to_month_offset(&self, date: &YearMonth) -> Option<u32> {
        self.period.offset_of(date)
    }

    /// The formatted month at a handle position
    pub fn format_offset(&self, offset: u32) -> String {
        self.date_format
            .format(&self.month_offset_to_date(i64::from(offset)))
    }

    /// The formatted month of [`PeriodSlider::current`]
    pub fn current_date_string(&self) -> String {
        self.format_offset(self.current())
    }

    /// The formatted months of a range slider's handles
    pub fn range_date_strings(&self) -> Option<(String, String)> {
        self.range()
            .map(|(start, end)| (self.format_offset(start), self.format_offset(end)))
    }

    pub fn display_count(&self) -> usize {
        self.displays.len()
    }

    /// What the slider last showed in the display at `index`
    pub fn display_value(&self, index: usize) -> Option<&DisplayValue> {
        self.displays.get(index).map(|display| &display.value)
    }

    /// The handle position shown by the display at `index`
    pub fn position_of_display(&self, index: usize) -> Option<u32> {
        self.display_value(index).map(|value| value.position)
    }

    /// Move the handle(s) without notifying subscribers.  The control may
    /// clamp the position; the slider keeps what the control reports.
    pub fn set_position(&mut self, position: SliderPosition) -> Result<(), SliderError> {
        self.apply(position)?;
        debug!("Period slider set to {:?}", self.position);
        Ok(())
    }

    /// Move the single handle (see [`PeriodSlider::set_position`])
    pub fn set_value(&mut self, value: u32) -> Result<(), SliderError> {
        self.set_position(SliderPosition::Single(value))
    }

    /// Move both handles (see [`PeriodSlider::set_position`])
    pub fn set_range(&mut self, start: u32, end: u32) -> Result<(), SliderError> {
        self.set_position(SliderPosition::Range(start, end))
    }

    /// A handle is being dragged: update, then notify slide subscribers
    pub fn slide(&mut self, requested: SliderPosition) -> Result<(), SliderError> {
        self.apply(requested)?;
        trace!("Period slider sliding to {:?}", self.position);
        self.notify(SliderEventKind::Slide, requested);
        Ok(())
    }

    /// An interaction has finished: update, then notify change subscribers
    pub fn change(&mut self, requested: SliderPosition) -> Result<(), SliderError> {
        self.apply(requested)?;
        debug!("Period slider changed to {:?}", self.position);
        self.notify(SliderEventKind::Change, requested);
        Ok(())
    }

    /// Push a position through the control, store what it reports & sync the
    /// displays
    fn apply(&mut self, position: SliderPosition) -> Result<(), SliderError> {
        if position.mode() != self.mode {
            return Err(SliderError::ModeMismatch {
                mode: self.mode,
                position,
            });
        }
        self.control.move_to(position);
        self.read_back_control();
        self.sync_displays();
        Ok(())
    }

    /// Take the control's position, normalised.  When normalising changed it
    /// the control is moved to match, so the handles never show `start > end`.
    fn read_back_control(&mut self) {
        let reported = self.control.position();
        self.position = self.normalise(reported);
        if self.position != reported {
            self.control.move_to(self.position);
            self.position = self.normalise(self.control.position());
        }
    }

    /// Keep handles within `[0, length]`, and a range's start no later than
    /// its end
    fn normalise(&self, position: SliderPosition) -> SliderPosition {
        let length = self.length();
        match position {
            SliderPosition::Single(value) => SliderPosition::Single(value.min(length)),
            SliderPosition::Range(start, end) => {
                let end = end.min(length);
                SliderPosition::Range(start.min(end), end)
            }
        }
    }

    /// Write the handle(s) to the display slots.  A single value slider writes
    /// its value to every slot; a range slider writes its start to the first
    /// and its end to the second (the count is checked on construction).
    fn sync_displays(&mut self) {
        let positions = match self.position {
            SliderPosition::Single(value) => vec![value; self.displays.len()],
            SliderPosition::Range(start, end) => vec![start, end],
        };
        let values: Vec<DisplayValue> = positions
            .into_iter()
            .map(|position| DisplayValue {
                text: self.format_offset(position),
                position,
            })
            .collect();
        for (display, value) in self.displays.iter_mut().zip(values) {
            display.slot.show(&value);
            display.value = value;
        }
    }

    fn notify(&mut self, kind: SliderEventKind, requested: SliderPosition) {
        let event = SliderEvent {
            kind,
            requested,
            position: self.position,
        };
        // Taken out for the call so that the callback can borrow the slider.
        // A slide or change from inside the callback finds the slot empty.
        let slot = match kind {
            SliderEventKind::Slide => &mut self.callbacks.on_slide,
            SliderEventKind::Change => &mut self.callbacks.on_change,
        };
        let Some(mut callback) = slot.take() else {
            return;
        };
        callback(&event, self);
        match kind {
            SliderEventKind::Slide => self.callbacks.on_slide = Some(callback),
            SliderEventKind::Change => self.callbacks.on_change = Some(callback),
        }
    }
}

impl fmt::Debug for PeriodSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodSlider")
            .field("period", &self.period)
            .field("mode", &self.mode)
            .field("date_format", &self.date_format)
            .field("position", &self.position)
            .field("displays", &self.displays.len())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
