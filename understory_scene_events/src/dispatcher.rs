// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event dispatcher: turns raw input plus picking into object events.
//!
//! The host calls [`Dispatcher::handle`] once per input event and once per
//! rendered frame, in arrival order. Each call updates hover, click and focus
//! state and fires zero or more signals synchronously before returning.
//!
//! | Input            | Signals                                                  | Target              |
//! |------------------|----------------------------------------------------------|---------------------|
//! | frame            | `MouseLeave`, `MouseEnter`, `MouseMove`                  | previous / new hover |
//! | press            | `MouseDown`                                              | hovered object       |
//! | release          | `MouseUp`, `Click`, `DoubleClick`                        | hovered object       |
//! | key down / up    | `KeyDown` / `KeyUp`                                      | keyboard focus       |
//! | scroll up / down | `MouseWheelUp` / `MouseWheelDown`                        | wheel focus          |
//!
//! After the signals for an event have fired, both focus policies observe the
//! event and the object now under the pointer.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use glam::Vec3;
//! use kurbo::Point;
//! use understory_scene_events::{Dispatcher, EventKind, FocusPolicy, InputEvent, Intersection};
//! use understory_scene_events::input::{InputAction, MouseButton};
//!
//! let mut d: Dispatcher<u32> = Dispatcher::new(FocusPolicy::PointerOver, FocusPolicy::ButtonDown);
//! d.register(1);
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! for kind in [EventKind::MouseEnter, EventKind::Click] {
//!     let log = Rc::clone(&log);
//!     d.subscribe(1, kind, move |args| log.borrow_mut().push(args.kind)).unwrap();
//! }
//!
//! // Everything left of x = 100 is object 1 (a child of root 0).
//! let mut picker = |p: Point| {
//!     if p.x < 100.0 {
//!         vec![Intersection::new(vec![0_u32, 1], Vec3::ZERO, Vec3::ZERO, Vec3::Z)]
//!     } else {
//!         Vec::new()
//!     }
//! };
//!
//! let at = Point::new(10.0, 10.0);
//! d.handle(&InputEvent::frame(0.0, at), &mut picker);
//! d.handle(&InputEvent::new(0.1, at, InputAction::Press(MouseButton::Left)), &mut picker);
//! d.handle(&InputEvent::new(0.2, at, InputAction::Release(MouseButton::Left)), &mut picker);
//!
//! assert_eq!(*log.borrow(), vec![EventKind::MouseEnter, EventKind::Click]);
//! assert_eq!(d.hovered(), Some(1));
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use glam::Vec3;

use crate::click::{ClickResult, ClickState};
use crate::config::DispatcherConfig;
use crate::error::LookupError;
use crate::focus::{Focus, FocusPolicy};
use crate::hover::{HoverEvent, HoverState};
use crate::input::{InputAction, InputEvent, InputKinds, MouseButton, ScrollMotion};
use crate::pick::{Intersection, Picker, select_hit};
use crate::registry::Registry;
use crate::signal::{EventKind, Signal, SignalArgs};

/// Per-frame event dispatcher for picked scene objects.
///
/// `K` is the host's object handle: a cheap, identity-comparable key. The
/// dispatcher never owns the objects behind it.
#[derive(Debug)]
pub struct Dispatcher<K> {
    registry: Registry<K>,
    hover: HoverState<K>,
    hover_hit: Option<Intersection<K>>,
    clicks: ClickState<K>,
    keyboard: Focus<K>,
    wheel: Focus<K>,
    config: DispatcherConfig,
}

impl<K: Copy + Eq + Hash + Debug> Dispatcher<K> {
    /// Create a dispatcher with the given keyboard and wheel focus policies.
    pub fn new(keyboard_policy: FocusPolicy, wheel_policy: FocusPolicy) -> Self {
        Self::with_config(keyboard_policy, wheel_policy, DispatcherConfig::default())
    }

    /// Create a dispatcher with explicit configuration.
    pub fn with_config(
        keyboard_policy: FocusPolicy,
        wheel_policy: FocusPolicy,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            registry: Registry::new(),
            hover: HoverState::new(),
            hover_hit: None,
            clicks: ClickState::new(config.double_click_interval),
            keyboard: Focus::bind(keyboard_policy),
            wheel: Focus::bind(wheel_policy),
            config,
        }
    }

    // --- registration ---

    /// Enroll `node` for event delivery. See [`Registry::register`].
    pub fn register(&mut self, node: K) {
        self.registry.register(node);
    }

    /// Returns `true` if `node` was registered.
    pub fn is_registered(&self, node: K) -> bool {
        self.registry.contains(node)
    }

    /// The signal for `kind` on `node`.
    pub fn signal_mut(&mut self, node: K, kind: EventKind) -> Result<&mut Signal<K>, LookupError<K>> {
        self.registry.signal_mut(node, kind)
    }

    /// The signal named `kind` on `node`.
    pub fn signal_by_name(&mut self, node: K, kind: &str) -> Result<&mut Signal<K>, LookupError<K>> {
        self.registry.signal_by_name(node, kind)
    }

    /// Subscribe `f` to `kind` on `node`.
    pub fn subscribe(
        &mut self,
        node: K,
        kind: EventKind,
        f: impl FnMut(&SignalArgs<'_, K>) + 'static,
    ) -> Result<(), LookupError<K>> {
        self.registry.signal_mut(node, kind)?.subscribe(f);
        Ok(())
    }

    // --- focus ---

    /// The object receiving keyboard events.
    pub fn keyboard_focus(&self) -> Option<K> {
        self.keyboard.target()
    }

    /// The object receiving wheel events.
    pub fn mouse_wheel_focus(&self) -> Option<K> {
        self.wheel.target()
    }

    /// Give keyboard focus to `node`, or to nothing.
    ///
    /// The keyboard policy may move it again on the next event.
    pub fn set_keyboard_focus(&mut self, node: Option<K>) {
        log::debug!("keyboard focus set to {node:?}");
        self.keyboard.set_target(node);
    }

    /// Give wheel focus to `node`, or to nothing.
    pub fn set_mouse_wheel_focus(&mut self, node: Option<K>) {
        log::debug!("wheel focus set to {node:?}");
        self.wheel.set_target(node);
    }

    /// Replace the keyboard focus policy, keeping the current target.
    pub fn set_keyboard_focus_policy(&mut self, policy: FocusPolicy) {
        log::debug!("keyboard focus policy: {policy:?}");
        self.keyboard.set_policy(policy);
    }

    /// Replace the wheel focus policy, keeping the current target.
    pub fn set_mouse_wheel_focus_policy(&mut self, policy: FocusPolicy) {
        log::debug!("wheel focus policy: {policy:?}");
        self.wheel.set_policy(policy);
    }

    /// The current keyboard focus policy.
    pub fn keyboard_focus_policy(&self) -> FocusPolicy {
        self.keyboard.policy()
    }

    /// The current wheel focus policy.
    pub fn mouse_wheel_focus_policy(&self) -> FocusPolicy {
        self.wheel.policy()
    }

    // --- configuration ---

    /// Current configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Enable or disable back-face ignoring for hit selection.
    pub fn set_ignore_back_faces(&mut self, ignore: bool) {
        self.config.ignore_back_faces = ignore;
    }

    /// Change the double-click interval, in seconds.
    pub fn set_double_click_interval(&mut self, seconds: f64) {
        self.config.double_click_interval = seconds;
        self.clicks.set_interval(seconds);
    }

    /// Choose whether `handle` reports events of `kinds` as consumed.
    pub fn set_consumed(&mut self, kinds: InputKinds, consumed: bool) {
        self.config.consumed.set(kinds, consumed);
    }

    // --- state ---

    /// The registered object under the pointer as of the last frame.
    pub fn hovered(&self) -> Option<K> {
        self.hover.current()
    }

    /// The hit on the hovered object as of the last frame.
    pub fn hover_hit(&self) -> Option<&Intersection<K>> {
        self.hover_hit.as_ref()
    }

    // --- dispatch ---

    /// Process one input event, consulting `picker` on frame ticks.
    ///
    /// Returns whether the event should be considered consumed.
    pub fn handle<P>(&mut self, event: &InputEvent, picker: &mut P) -> bool
    where
        P: Picker<K> + ?Sized,
    {
        if matches!(event.action, InputAction::Frame) {
            let hits = picker.intersections(event.cursor);
            self.handle_with_hits(event, &hits)
        } else {
            self.handle_with_hits(event, &[])
        }
    }

    /// Process one input event with this frame's hits already computed.
    ///
    /// `hits` is only read for [`InputAction::Frame`].
    pub fn handle_with_hits(&mut self, event: &InputEvent, hits: &[Intersection<K>]) -> bool {
        match event.action {
            InputAction::Frame => self.on_frame(event, hits),
            InputAction::Press(button) => self.on_press(event, button),
            InputAction::Release(button) => self.on_release(event, button),
            InputAction::KeyDown(_) => self.on_key(event, EventKind::KeyDown),
            InputAction::KeyUp(_) => self.on_key(event, EventKind::KeyUp),
            InputAction::Scroll(motion) => self.on_scroll(event, motion),
            InputAction::Other => {}
        }

        let hovered = self.hover.current();
        if self.keyboard.update(event, hovered) {
            log::debug!("keyboard focus moved to {:?}", self.keyboard.target());
        }
        if self.wheel.update(event, hovered) {
            log::debug!("wheel focus moved to {:?}", self.wheel.target());
        }

        self.config.consumed.contains(event.kind())
    }

    fn on_frame(&mut self, event: &InputEvent, hits: &[Intersection<K>]) {
        let (node, position, hit) = match select_hit(hits, self.config.ignore_back_faces) {
            Some(h) => match self.registry.resolve(&h.path) {
                Some(node) => (Some(node), h.local_point, Some(h.clone())),
                None => (None, Vec3::ZERO, None),
            },
            None => (None, Vec3::ZERO, None),
        };

        let transitions = self.hover.update(node, position);
        self.hover_hit = hit;

        for t in transitions {
            let (node, kind) = match t {
                HoverEvent::Leave(k) => (k, EventKind::MouseLeave),
                HoverEvent::Enter(k) => (k, EventKind::MouseEnter),
                HoverEvent::Move(k) => (k, EventKind::MouseMove),
            };
            log::trace!("{kind} on {node:?}");
            self.emit(node, kind, event);
        }
    }

    fn on_press(&mut self, event: &InputEvent, button: MouseButton) {
        let hovered = self.hover.current();
        if let Some(node) = hovered {
            self.emit(node, EventKind::MouseDown, event);
        }
        self.clicks.on_down(button, hovered);
    }

    fn on_release(&mut self, event: &InputEvent, button: MouseButton) {
        let Some(node) = self.hover.current() else {
            return;
        };
        self.emit(node, EventKind::MouseUp, event);

        let result = self.clicks.on_up(button, node, event.time);
        if result.is_click() {
            log::trace!("{button:?} click on {node:?}");
            self.emit(node, EventKind::Click, event);
        }
        if result == ClickResult::DoubleClick {
            log::trace!("{button:?} double-click on {node:?}");
            self.emit(node, EventKind::DoubleClick, event);
        }
    }

    fn on_key(&mut self, event: &InputEvent, kind: EventKind) {
        if let Some(node) = self.keyboard.target() {
            self.emit(node, kind, event);
        }
    }

    fn on_scroll(&mut self, event: &InputEvent, motion: ScrollMotion) {
        let kind = match motion {
            ScrollMotion::Up => EventKind::MouseWheelUp,
            ScrollMotion::Down => EventKind::MouseWheelDown,
            ScrollMotion::Left | ScrollMotion::Right | ScrollMotion::Delta(_) => return,
        };
        if let Some(node) = self.wheel.target() {
            self.emit(node, kind, event);
        }
    }

    fn emit(&mut self, node: K, kind: EventKind, input: &InputEvent) {
        let args = SignalArgs {
            node,
            kind,
            input,
            hit: self.hover_hit.as_ref(),
        };
        if !self.registry.emit(&args) {
            // Focus can be set explicitly to objects that were never registered.
            log::debug!("dropping {kind} for unregistered {node:?}");
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> Default for Dispatcher<K> {
    fn default() -> Self {
        Self::new(FocusPolicy::default(), FocusPolicy::default())
    }
}
