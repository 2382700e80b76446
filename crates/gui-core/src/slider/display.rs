// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Display slots kept in sync with a period slider's handles
//!

use std::cell::RefCell;
use std::rc::Rc;

/// What a display slot shows for one handle: the formatted month and the
/// handle's month offset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayValue {
    pub text: String,
    pub position: u32,
}

/// Implementing types mirror one slider handle (e.g. a text field)
pub trait DisplaySlot {
    /// Called after every change to the handle's position
    fn show(&mut self, value: &DisplayValue);
}

/// A display slot that just remembers the last value it was shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayField {
    value: Option<DisplayValue>,
}

impl DisplayField {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed text (empty before the first sync)
    pub fn text(&self) -> &str {
        self.value.as_ref().map_or("", |value| value.text.as_str())
    }

    /// The attached month offset
    pub fn position(&self) -> Option<u32> {
        self.value.as_ref().map(|value| value.position)
    }
}

impl DisplaySlot for DisplayField {
    fn show(&mut self, value: &DisplayValue) {
        self.value = Some(value.clone());
    }
}

/// Lets the owner of a slot keep a handle to it after giving it to a slider
impl<T: DisplaySlot> DisplaySlot for Rc<RefCell<T>> {
    fn show(&mut self, value: &DisplayValue) {
        self.borrow_mut().show(value);
    }
}
