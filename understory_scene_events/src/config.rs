// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher configuration.

use crate::input::InputKinds;

/// Default double-click interval, in seconds.
pub const DOUBLE_CLICK_INTERVAL: f64 = 0.3;

/// Tunables for a [`Dispatcher`](crate::dispatcher::Dispatcher).
///
/// ```
/// use understory_scene_events::config::DispatcherConfig;
/// use understory_scene_events::input::InputKinds;
///
/// let config = DispatcherConfig::default()
///     .with_ignore_back_faces(true)
///     .with_consumed(InputKinds::PRESS | InputKinds::RELEASE);
/// assert!(config.ignore_back_faces);
/// assert_eq!(config.double_click_interval, 0.3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DispatcherConfig {
    /// Skip back-facing hits when at least two hits are available.
    pub ignore_back_faces: bool,
    /// Maximum gap between two clicks of a double-click, exclusive.
    pub double_click_interval: f64,
    /// Input kinds for which `handle` reports the event as consumed.
    pub consumed: InputKinds,
}

impl DispatcherConfig {
    /// Set [`ignore_back_faces`](Self::ignore_back_faces).
    pub fn with_ignore_back_faces(mut self, ignore: bool) -> Self {
        self.ignore_back_faces = ignore;
        self
    }

    /// Set [`double_click_interval`](Self::double_click_interval).
    pub fn with_double_click_interval(mut self, seconds: f64) -> Self {
        self.double_click_interval = seconds;
        self
    }

    /// Set [`consumed`](Self::consumed).
    pub fn with_consumed(mut self, kinds: InputKinds) -> Self {
        self.consumed = kinds;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            ignore_back_faces: false,
            double_click_interval: DOUBLE_CLICK_INTERVAL,
            consumed: InputKinds::empty(),
        }
    }
}
