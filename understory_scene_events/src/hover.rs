// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: derive enter/leave/move transitions from per-frame picks.
//!
//! ## Usage
//! 1) Each frame, resolve the object under the pointer (or `None`) and the
//!    local intersection point on it.
//! 2) Call [`HoverState::update`] to get the transitions since the last frame.
//!
//! ## Minimal example
//! ```
//! use glam::Vec3;
//! use understory_scene_events::hover::{HoverEvent, HoverState};
//!
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1), Vec3::ZERO).as_slice(), &[HoverEvent::Enter(1)]);
//! assert!(h.update(Some(1), Vec3::ZERO).is_empty());
//! assert_eq!(h.update(Some(1), Vec3::X).as_slice(), &[HoverEvent::Move(1)]);
//! assert_eq!(
//!     h.update(Some(2), Vec3::X).as_slice(),
//!     &[HoverEvent::Leave(1), HoverEvent::Enter(2)]
//! );
//! ```

use glam::Vec3;
use smallvec::SmallVec;

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer is now over this object.
    Enter(K),
    /// The pointer is no longer over this object.
    Leave(K),
    /// The pointer moved across this object.
    Move(K),
}

/// Transitions produced by one update; at most a leave and an enter.
pub type HoverEvents<K> = SmallVec<[HoverEvent<K>; 2]>;

/// The object under the pointer and where it was hit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState<K> {
    current: Option<K>,
    position: Vec3,
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create a state with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: None,
            position: Vec3::ZERO,
        }
    }

    /// The hovered object, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Local intersection point on the hovered object.
    ///
    /// Meaningless while nothing is hovered.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Record this frame's hover and return the transitions from the last one.
    ///
    /// Leave is always emitted before enter.
    pub fn update(&mut self, node: Option<K>, position: Vec3) -> HoverEvents<K> {
        let prev = self.current;
        let prev_position = self.position;
        self.current = node;
        self.position = position;

        let mut out = HoverEvents::new();
        if prev == node {
            match node {
                Some(k) if position != prev_position => out.push(HoverEvent::Move(k)),
                _ => {}
            }
        } else {
            if let Some(k) = prev {
                out.push(HoverEvent::Leave(k));
            }
            if let Some(k) = node {
                out.push(HoverEvent::Enter(k));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_nothing_is_silent() {
        let mut h: HoverState<u32> = HoverState::new();
        assert!(h.update(None, Vec3::ZERO).is_empty());
        // Position changes without an object are not moves.
        assert!(h.update(None, Vec3::ONE).is_empty());
    }

    #[test]
    fn enter_then_leave_to_nothing() {
        let mut h = HoverState::new();
        assert_eq!(h.update(Some(5_u32), Vec3::ZERO).as_slice(), &[HoverEvent::Enter(5)]);
        assert_eq!(h.current(), Some(5));
        assert_eq!(h.update(None, Vec3::ZERO).as_slice(), &[HoverEvent::Leave(5)]);
        assert_eq!(h.current(), None);
    }

    #[test]
    fn steady_hover_is_silent() {
        let mut h = HoverState::new();
        let p = Vec3::new(0.5, 0.25, 1.0);
        h.update(Some(1_u32), p);
        for _ in 0..10 {
            assert!(h.update(Some(1), p).is_empty());
        }
    }

    #[test]
    fn move_carries_new_position() {
        let mut h = HoverState::new();
        h.update(Some(1_u32), Vec3::ZERO);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(h.update(Some(1), p).as_slice(), &[HoverEvent::Move(1)]);
        assert_eq!(h.position(), p);
    }

    #[test]
    fn direct_switch_leaves_before_entering() {
        let mut h = HoverState::new();
        h.update(Some(1_u32), Vec3::ZERO);
        // Same local point on a different object still switches.
        assert_eq!(
            h.update(Some(2), Vec3::ZERO).as_slice(),
            &[HoverEvent::Leave(1), HoverEvent::Enter(2)]
        );
    }
}
