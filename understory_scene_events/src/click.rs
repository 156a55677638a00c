// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click state helper: recognize clicks and double-clicks per mouse button.
//!
//! A click is a button release over the same object that received the
//! matching press. A double-click is a click on the same object as the
//! previous click of that button, strictly less than the double-click
//! interval after it. Each button keeps its own bookkeeping, so interleaving
//! left and right clicks never produces a double-click.
//!
//! ```
//! use understory_scene_events::click::{ClickResult, ClickState};
//! use understory_scene_events::input::MouseButton;
//!
//! let mut clicks: ClickState<u32> = ClickState::new(0.3);
//! let left = MouseButton::Left;
//!
//! clicks.on_down(left, Some(7));
//! assert_eq!(clicks.on_up(left, 7, 1.0), ClickResult::Click);
//! clicks.on_down(left, Some(7));
//! assert_eq!(clicks.on_up(left, 7, 1.1), ClickResult::DoubleClick);
//! ```

use crate::input::MouseButton;

/// Outcome of a button release over an object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResult {
    /// The press went to another object (or to nothing).
    None,
    /// A single click.
    Click,
    /// A click that also completes a double-click.
    DoubleClick,
}

impl ClickResult {
    /// Returns `true` for both [`Click`](Self::Click) and [`DoubleClick`](Self::DoubleClick).
    pub fn is_click(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct ButtonRecord<K> {
    got_down: Option<K>,
    got_click: Option<K>,
    last_click: Option<f64>,
}

impl<K> ButtonRecord<K> {
    const EMPTY: Self = Self {
        got_down: None,
        got_click: None,
        last_click: None,
    };
}

/// Per-button click bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickState<K> {
    buttons: [ButtonRecord<K>; MouseButton::COUNT],
    interval: f64,
}

impl<K: Copy + Eq> ClickState<K> {
    /// Create click state with the given double-click interval, in seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            buttons: [ButtonRecord::EMPTY; MouseButton::COUNT],
            interval,
        }
    }

    /// The double-click interval, in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Change the double-click interval.
    pub fn set_interval(&mut self, interval: f64) {
        self.interval = interval;
    }

    /// The object that received the last press of `button`.
    pub fn pressed(&self, button: MouseButton) -> Option<K> {
        self.buttons[button.index()].got_down
    }

    /// Record a press of `button` over `node` (which may be nothing).
    pub fn on_down(&mut self, button: MouseButton, node: Option<K>) {
        self.buttons[button.index()].got_down = node;
    }

    /// Record a release of `button` over `node` at `time` and classify it.
    ///
    /// Releases over nothing carry no bookkeeping and are not reported here.
    pub fn on_up(&mut self, button: MouseButton, node: K, time: f64) -> ClickResult {
        let rec = &mut self.buttons[button.index()];
        if rec.got_down != Some(node) {
            return ClickResult::None;
        }

        let double = rec.got_click == Some(node)
            && rec.last_click.is_some_and(|t| time - t < self.interval);
        rec.got_click = Some(node);
        rec.last_click = Some(time);

        if double {
            ClickResult::DoubleClick
        } else {
            ClickResult::Click
        }
    }
}
