// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scene Events: GUI-like events for objects in a 3D scene.
//!
//! ## Overview
//!
//! Pointer, keyboard and wheel input know nothing about the objects in a
//! scene. This crate combines them with a per-frame picking result and
//! produces object-level events: enter, leave, move, down, up, click,
//! double-click, wheel up/down and key up/down.
//!
//! It does not perform picking itself. A [`Picker`] supplies the ordered
//! ray intersections under the cursor (for example from a renderer's scene
//! query), and the [`Dispatcher`] turns them into transitions.
//!
//! ## Pieces
//!
//! - [`signal`]: [`EventKind`] and [`Signal`], an ordered multicast callback list.
//! - [`registry`]: which objects receive events, and nearest-registered-ancestor resolution.
//! - [`hover`], [`click`]: small state machines for hover transitions and per-button clicks.
//! - [`focus`]: [`FocusPolicy`] strategies routing keyboard and wheel events.
//! - [`pick`]: [`Intersection`] records, the [`Picker`] seam and back-face aware hit selection.
//! - [`dispatcher`]: the [`Dispatcher`] tying it all together.
//!
//! ## Workflow
//!
//! 1) Create a [`Dispatcher`] with a keyboard and a wheel [`FocusPolicy`].
//! 2) [`register`](Dispatcher::register) the objects that should receive
//!    events and [`subscribe`](Dispatcher::subscribe) to their signals.
//!    Registering a group also covers every unregistered descendant.
//! 3) Feed every input event, and one [`InputAction::Frame`](input::InputAction::Frame)
//!    per rendered frame, to [`Dispatcher::handle`]. Subscribers run
//!    synchronously inside that call.
//! 4) Use the returned flag to decide whether other layers (camera
//!    navigation, 2D UI) should also see the event.
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous. Subscribers must not call
//! back into the dispatcher; the borrow checker enforces that for closures
//! that do not smuggle the dispatcher through shared interior mutability.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and glam against the standard library.
//! - `libm`: `no_std` math for Kurbo and glam.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod focus;
pub mod hover;
pub mod input;
pub mod pick;
pub mod registry;
pub mod signal;

pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use error::LookupError;
pub use focus::FocusPolicy;
pub use input::{InputAction, InputEvent};
pub use pick::{Intersection, Picker};
pub use signal::{EventKind, Signal, SignalArgs};
