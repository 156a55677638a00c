// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input model: the discrete events a host feeds into the dispatcher.
//!
//! The dispatcher does not talk to a windowing system. Hosts translate their
//! platform events into [`InputEvent`] values and deliver them one at a time,
//! together with one [`InputAction::Frame`] per rendered frame.
//!
//! ```
//! use kurbo::Point;
//! use understory_scene_events::input::{InputAction, InputEvent, MouseButton};
//!
//! let press = InputEvent::new(1.25, Point::new(320.0, 200.0), InputAction::Press(MouseButton::Left));
//! assert_eq!(press.kind(), understory_scene_events::input::InputKinds::PRESS);
//! assert_eq!(MouseButton::try_from(2_u8), Ok(MouseButton::Right));
//! ```

use core::fmt;

use bitflags::bitflags;
use kurbo::{Point, Vec2};

/// One discrete input event, or a frame tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputEvent {
    /// Event time in seconds, on the host's monotonic clock.
    pub time: f64,
    /// Cursor position in window coordinates at the time of the event.
    pub cursor: Point,
    /// What happened.
    pub action: InputAction,
}

impl InputEvent {
    /// Create an input event.
    pub fn new(time: f64, cursor: Point, action: InputAction) -> Self {
        Self {
            time,
            cursor,
            action,
        }
    }

    /// A frame tick at `cursor`.
    pub fn frame(time: f64, cursor: Point) -> Self {
        Self::new(time, cursor, InputAction::Frame)
    }

    /// The [`InputKinds`] bit this event belongs to.
    pub fn kind(&self) -> InputKinds {
        self.action.kind()
    }

    /// The button pressed or released, if this is a button event.
    pub fn button(&self) -> Option<MouseButton> {
        match self.action {
            InputAction::Press(b) | InputAction::Release(b) => Some(b),
            _ => None,
        }
    }
}

/// The payload of an [`InputEvent`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputAction {
    /// Once per rendered frame. Drives hover tracking.
    Frame,
    /// A mouse button went down.
    Press(MouseButton),
    /// A mouse button went up.
    Release(MouseButton),
    /// A key went down.
    KeyDown(KeyCode),
    /// A key went up.
    KeyUp(KeyCode),
    /// The scroll wheel moved.
    Scroll(ScrollMotion),
    /// Anything else the host forwards (pointer motion, resize, ...).
    ///
    /// Fires no signal, but focus policies still observe it.
    Other,
}

impl InputAction {
    /// The [`InputKinds`] bit for this action.
    pub fn kind(&self) -> InputKinds {
        match self {
            Self::Frame => InputKinds::FRAME,
            Self::Press(_) => InputKinds::PRESS,
            Self::Release(_) => InputKinds::RELEASE,
            Self::KeyDown(_) => InputKinds::KEY_DOWN,
            Self::KeyUp(_) => InputKinds::KEY_UP,
            Self::Scroll(_) => InputKinds::SCROLL,
            Self::Other => InputKinds::OTHER,
        }
    }
}

/// Mouse buttons with click bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 3;

    /// All tracked buttons, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Left, Self::Middle, Self::Right];

    /// Dense index in `0..COUNT`, for per-button tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

impl TryFrom<u8> for MouseButton {
    type Error = InvalidButtonCode;

    /// Convert a raw button code (`0` left, `1` middle, `2` right).
    ///
    /// Any other code means the input source is malformed; callers should
    /// treat the error as a bug rather than recover from it.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Left),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Right),
            other => Err(InvalidButtonCode(other)),
        }
    }
}

/// A raw button code outside left/middle/right.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidButtonCode(pub u8);

impl fmt::Display for InvalidButtonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid mouse button code {}; is this really a mouse event?",
            self.0
        )
    }
}

impl core::error::Error for InvalidButtonCode {}

/// A platform key code, passed through untouched to subscribers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

/// Scroll wheel motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollMotion {
    /// One notch up.
    Up,
    /// One notch down.
    Down,
    /// Horizontal, to the left.
    Left,
    /// Horizontal, to the right.
    Right,
    /// Free two-dimensional scrolling (touchpads).
    Delta(Vec2),
}

bitflags! {
    /// A set of input kinds.
    ///
    /// Used by [`DispatcherConfig`](crate::config::DispatcherConfig) to decide
    /// which kinds report themselves as consumed to the host.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InputKinds: u8 {
        /// Frame ticks.
        const FRAME = 1 << 0;
        /// Button presses.
        const PRESS = 1 << 1;
        /// Button releases.
        const RELEASE = 1 << 2;
        /// Key presses.
        const KEY_DOWN = 1 << 3;
        /// Key releases.
        const KEY_UP = 1 << 4;
        /// Scroll wheel.
        const SCROLL = 1 << 5;
        /// Everything else.
        const OTHER = 1 << 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_codes_round_trip_through_index() {
        for b in MouseButton::ALL {
            let code = u8::try_from(b.index()).unwrap();
            assert_eq!(MouseButton::try_from(code), Ok(b));
        }
    }

    #[test]
    fn unknown_button_code_is_rejected() {
        assert_eq!(MouseButton::try_from(3), Err(InvalidButtonCode(3)));
        assert_eq!(MouseButton::try_from(255), Err(InvalidButtonCode(255)));
    }

    #[test]
    fn kinds_are_distinct() {
        let actions = [
            InputAction::Frame,
            InputAction::Press(MouseButton::Left),
            InputAction::Release(MouseButton::Left),
            InputAction::KeyDown(KeyCode(1)),
            InputAction::KeyUp(KeyCode(1)),
            InputAction::Scroll(ScrollMotion::Up),
            InputAction::Other,
        ];
        let mut seen = InputKinds::empty();
        for a in actions {
            assert!(!seen.intersects(a.kind()), "{a:?} shares a kind bit");
            seen |= a.kind();
        }
        assert_eq!(seen, InputKinds::all());
    }

    #[test]
    fn button_only_for_press_and_release() {
        let p = Point::ORIGIN;
        assert_eq!(
            InputEvent::new(0.0, p, InputAction::Release(MouseButton::Middle)).button(),
            Some(MouseButton::Middle)
        );
        assert_eq!(InputEvent::frame(0.0, p).button(), None);
    }
}
