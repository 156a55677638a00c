// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event kinds and per-object multicast signals.
//!
//! A [`Signal`] is an ordered list of subscribers for one event kind on one
//! object. Invoking it calls every subscriber once, synchronously, in
//! subscription order.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_scene_events::input::InputEvent;
//! use understory_scene_events::signal::{EventKind, Signal, SignalArgs};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut signal: Signal<u32> = Signal::new();
//! for tag in ["first", "second"] {
//!     let log = Rc::clone(&log);
//!     signal.subscribe(move |args| log.borrow_mut().push((tag, args.node)));
//! }
//!
//! let input = InputEvent::frame(0.0, Point::ORIGIN);
//! signal.invoke(&SignalArgs { node: 9, kind: EventKind::Click, input: &input, hit: None });
//! assert_eq!(*log.borrow(), vec![("first", 9), ("second", 9)]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::input::InputEvent;
use crate::pick::Intersection;

/// The GUI-like events an object can receive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The pointer started hovering the object.
    MouseEnter,
    /// The pointer stopped hovering the object.
    MouseLeave,
    /// The pointer moved while staying over the object.
    MouseMove,
    /// A mouse button went down over the object.
    MouseDown,
    /// A mouse button went up over the object.
    MouseUp,
    /// Down and up of the same button both landed on the object.
    Click,
    /// Second click of the same button on the object within the double-click interval.
    DoubleClick,
    /// Wheel scrolled up while the object had wheel focus.
    MouseWheelUp,
    /// Wheel scrolled down while the object had wheel focus.
    MouseWheelDown,
    /// Key released while the object had keyboard focus.
    KeyUp,
    /// Key pressed while the object had keyboard focus.
    KeyDown,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 11;

    /// Every event kind, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MouseEnter,
        Self::MouseLeave,
        Self::MouseMove,
        Self::MouseDown,
        Self::MouseUp,
        Self::Click,
        Self::DoubleClick,
        Self::MouseWheelUp,
        Self::MouseWheelDown,
        Self::KeyUp,
        Self::KeyDown,
    ];

    /// Dense index in `0..COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The canonical name, e.g. `"MouseEnter"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseEnter => "MouseEnter",
            Self::MouseLeave => "MouseLeave",
            Self::MouseMove => "MouseMove",
            Self::MouseDown => "MouseDown",
            Self::MouseUp => "MouseUp",
            Self::Click => "Click",
            Self::DoubleClick => "DoubleClick",
            Self::MouseWheelUp => "MouseWheelUp",
            Self::MouseWheelDown => "MouseWheelDown",
            Self::KeyUp => "KeyUp",
            Self::KeyDown => "KeyDown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name was not one of the [`EventKind`] names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEventKind;

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown event kind")
    }
}

impl core::error::Error for UnknownEventKind {}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or(UnknownEventKind)
    }
}

/// What a subscriber receives.
#[derive(Copy, Clone, Debug)]
pub struct SignalArgs<'a, K> {
    /// The object the event is delivered to.
    pub node: K,
    /// Which event this is.
    pub kind: EventKind,
    /// The raw input that triggered it.
    pub input: &'a InputEvent,
    /// The hit currently under the pointer, if any.
    ///
    /// For keyboard and wheel events this is the hovered hit, which need not
    /// belong to `node`.
    pub hit: Option<&'a Intersection<K>>,
}

type Subscriber<K> = Box<dyn FnMut(&SignalArgs<'_, K>)>;

/// An ordered multicast callback list.
pub struct Signal<K> {
    subscribers: Vec<Subscriber<K>>,
}

impl<K> Signal<K> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. Duplicates are not detected.
    pub fn subscribe(&mut self, f: impl FnMut(&SignalArgs<'_, K>) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// Call every subscriber once, in subscription order.
    pub fn invoke(&mut self, args: &SignalArgs<'_, K>) {
        for s in &mut self.subscribers {
            s(args);
        }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<K> Default for Signal<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Signal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
