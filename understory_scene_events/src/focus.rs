// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus policies: who receives keyboard and wheel events.
//!
//! Keyboard and wheel events do not go to the hovered object. They go to the
//! object held by a [`Focus`], which a [`FocusPolicy`] updates after every
//! processed input event. The host can also set the target directly.
//!
//! - [`FocusPolicy::PointerOver`]: focus follows the pointer, including to
//!   nothing.
//! - [`FocusPolicy::ButtonDown`]: focus moves only on a button press, to
//!   whatever is under the pointer at that moment.
//!
//! Swapping the policy keeps the current target.
//!
//! ```
//! use kurbo::Point;
//! use understory_scene_events::focus::{Focus, FocusPolicy};
//! use understory_scene_events::input::{InputAction, InputEvent, MouseButton};
//!
//! let frame = InputEvent::frame(0.0, Point::ORIGIN);
//! let press = InputEvent::new(0.1, Point::ORIGIN, InputAction::Press(MouseButton::Left));
//!
//! let mut focus: Focus<u32> = Focus::bind(FocusPolicy::ButtonDown);
//! focus.update(&frame, Some(1));
//! assert_eq!(focus.target(), None);
//! focus.update(&press, Some(1));
//! assert_eq!(focus.target(), Some(1));
//!
//! focus.set_policy(FocusPolicy::PointerOver);
//! assert_eq!(focus.target(), Some(1));
//! focus.update(&frame, None);
//! assert_eq!(focus.target(), None);
//! ```

use crate::input::{InputAction, InputEvent};

/// Strategy deciding how a [`Focus`] target changes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusPolicy {
    /// Focus is whatever is under the pointer.
    #[default]
    PointerOver,
    /// Focus moves to what is under the pointer when a button is pressed.
    ButtonDown,
}

impl FocusPolicy {
    /// Update `target` after `event`, given the object now under the pointer.
    pub fn update_focus<K: Copy>(self, target: &mut Option<K>, event: &InputEvent, hovered: Option<K>) {
        match self {
            Self::PointerOver => *target = hovered,
            Self::ButtonDown => {
                if matches!(event.action, InputAction::Press(_)) {
                    *target = hovered;
                }
            }
        }
    }
}

/// A focus reference together with the policy bound to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Focus<K> {
    target: Option<K>,
    policy: FocusPolicy,
}

impl<K: Copy + Eq> Focus<K> {
    /// Bind `policy` to a fresh, empty focus reference.
    pub fn bind(policy: FocusPolicy) -> Self {
        Self {
            target: None,
            policy,
        }
    }

    /// The focused object, if any.
    pub fn target(&self) -> Option<K> {
        self.target
    }

    /// Set the focused object directly.
    pub fn set_target(&mut self, target: Option<K>) {
        self.target = target;
    }

    /// The bound policy.
    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    /// Rebind to another policy; the current target is kept.
    pub fn set_policy(&mut self, policy: FocusPolicy) {
        self.policy = policy;
    }

    /// Run the bound policy. Returns `true` if the target changed.
    pub fn update(&mut self, event: &InputEvent, hovered: Option<K>) -> bool {
        let before = self.target;
        self.policy.update_focus(&mut self.target, event, hovered);
        before != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseButton, ScrollMotion};
    use kurbo::Point;

    fn ev(action: InputAction) -> InputEvent {
        InputEvent::new(0.0, Point::ORIGIN, action)
    }

    #[test]
    fn pointer_over_tracks_hover_on_every_event() {
        let mut f: Focus<u32> = Focus::bind(FocusPolicy::PointerOver);
        assert!(f.update(&ev(InputAction::Frame), Some(1)));
        assert_eq!(f.target(), Some(1));
        assert!(f.update(&ev(InputAction::KeyDown(KeyCode(65))), Some(2)));
        assert_eq!(f.target(), Some(2));
        assert!(f.update(&ev(InputAction::Other), None));
        assert_eq!(f.target(), None);
        assert!(!f.update(&ev(InputAction::Frame), None));
    }

    #[test]
    fn button_down_sticks_until_next_press() {
        let mut f: Focus<u32> = Focus::bind(FocusPolicy::ButtonDown);
        f.update(&ev(InputAction::Press(MouseButton::Right)), Some(3));
        assert_eq!(f.target(), Some(3));
        for action in [
            InputAction::Frame,
            InputAction::Release(MouseButton::Right),
            InputAction::Scroll(ScrollMotion::Down),
            InputAction::KeyUp(KeyCode(1)),
        ] {
            assert!(!f.update(&ev(action), Some(4)));
            assert_eq!(f.target(), Some(3));
        }
        // A press over nothing clears focus.
        f.update(&ev(InputAction::Press(MouseButton::Left)), None);
        assert_eq!(f.target(), None);
    }

    #[test]
    fn policy_swap_preserves_target() {
        let mut f: Focus<u32> = Focus::bind(FocusPolicy::PointerOver);
        f.set_target(Some(9));
        f.set_policy(FocusPolicy::ButtonDown);
        assert_eq!(f.policy(), FocusPolicy::ButtonDown);
        assert_eq!(f.target(), Some(9));
        f.update(&ev(InputAction::Frame), Some(1));
        assert_eq!(f.target(), Some(9));
    }
}
