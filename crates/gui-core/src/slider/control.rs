// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The draggable control behind a period slider
//!

use crate::SliderPosition;
use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Implementing types are the widget the user drags.  The control owns the
/// position the handles are actually at, and may adjust (e.g. clamp) positions
/// it is asked to move to.
pub trait SliderControl {
    /// Set the bounds of the control and place the handles
    fn bind(&mut self, bounds: RangeInclusive<u32>, position: SliderPosition);

    /// Ask the control to move its handles
    fn move_to(&mut self, position: SliderPosition);

    /// Where the handles are
    fn position(&self) -> SliderPosition;
}

/// An in-memory control that clamps every handle to its bounds.  Used where
/// the widget itself holds no state between frames (e.g. `egui`) and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedControl {
    bounds: RangeInclusive<u32>,
    position: SliderPosition,
}

impl BoundedControl {
    pub fn new() -> Self {
        Self {
            bounds: 0..=0,
            position: SliderPosition::Single(0),
        }
    }

    pub fn bounds(&self) -> RangeInclusive<u32> {
        self.bounds.clone()
    }

    fn clamp(&self, value: u32) -> u32 {
        value.clamp(*self.bounds.start(), *self.bounds.end())
    }
}

impl Default for BoundedControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderControl for BoundedControl {
    fn bind(&mut self, bounds: RangeInclusive<u32>, position: SliderPosition) {
        self.bounds = bounds;
        self.move_to(position);
    }

    fn move_to(&mut self, position: SliderPosition) {
        self.position = match position {
            SliderPosition::Single(value) => SliderPosition::Single(self.clamp(value)),
            SliderPosition::Range(start, end) => {
                SliderPosition::Range(self.clamp(start), self.clamp(end))
            }
        };
    }

    fn position(&self) -> SliderPosition {
        self.position
    }
}

/// Lets the owner of a control keep a handle to it after giving it to a slider
impl<T: SliderControl> SliderControl for Rc<RefCell<T>> {
    fn bind(&mut self, bounds: RangeInclusive<u32>, position: SliderPosition) {
        self.borrow_mut().bind(bounds, position);
    }

    fn move_to(&mut self, position: SliderPosition) {
        self.borrow_mut().move_to(position);
    }

    fn position(&self) -> SliderPosition {
        self.borrow().position()
    }
}
