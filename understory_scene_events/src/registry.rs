// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node registry: which objects receive events, and their signals.
//!
//! Registering an object creates one [`Signal`] per [`EventKind`], all at
//! once. Registering it again replaces the whole table, dropping every
//! existing subscriber.
//!
//! Picking usually hits leaves that were never registered (for instance the
//! meshes inside a loaded model). [`Registry::resolve`] walks a hit path from
//! the leaf toward the root and returns the nearest registered ancestor, so a
//! registration on the model's root receives events for all of its parts.
//!
//! ```
//! use understory_scene_events::registry::Registry;
//! use understory_scene_events::signal::EventKind;
//! use understory_scene_events::LookupError;
//!
//! let mut reg: Registry<&str> = Registry::new();
//! reg.register("fish");
//!
//! assert_eq!(reg.resolve(&["scene", "fish", "fin"]), Some("fish"));
//! assert_eq!(reg.resolve(&["scene", "tree"]), None);
//!
//! assert!(reg.signal_mut("fish", EventKind::Click).is_ok());
//! assert_eq!(reg.signal_mut("tree", EventKind::Click).err(), Some(LookupError::UnknownObject("tree")));
//! ```

use alloc::string::ToString;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::LookupError;
use crate::signal::{EventKind, Signal, SignalArgs};

/// One signal per event kind, indexed by [`EventKind::index`].
#[derive(Debug)]
pub struct SignalTable<K> {
    signals: [Signal<K>; EventKind::COUNT],
}

impl<K> SignalTable<K> {
    fn new() -> Self {
        Self {
            signals: core::array::from_fn(|_| Signal::new()),
        }
    }

    /// The signal for `kind`.
    pub fn get(&self, kind: EventKind) -> &Signal<K> {
        &self.signals[kind.index()]
    }

    /// The signal for `kind`, mutably.
    pub fn get_mut(&mut self, kind: EventKind) -> &mut Signal<K> {
        &mut self.signals[kind.index()]
    }
}

/// Maps registered objects to their signal tables.
#[derive(Debug)]
pub struct Registry<K> {
    tables: HashMap<K, SignalTable<K>>,
}

impl<K: Copy + Eq + Hash + core::fmt::Debug> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Enroll `node` for event delivery.
    ///
    /// Re-registering replaces the node's signals; previous subscribers are
    /// dropped and must subscribe again.
    pub fn register(&mut self, node: K) {
        if self.tables.insert(node, SignalTable::new()).is_some() {
            log::debug!("re-registered {node:?}, dropping its subscribers");
        } else {
            log::debug!("registered {node:?}");
        }
    }

    /// Returns `true` if `node` was registered.
    pub fn contains(&self, node: K) -> bool {
        self.tables.contains_key(&node)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The signal for `kind` on `node`, for subscribing.
    pub fn signal_mut(&mut self, node: K, kind: EventKind) -> Result<&mut Signal<K>, LookupError<K>> {
        self.tables
            .get_mut(&node)
            .map(|t| t.get_mut(kind))
            .ok_or(LookupError::UnknownObject(node))
    }

    /// The signal named `kind` (e.g. `"MouseDown"`) on `node`.
    ///
    /// The object is checked first, so an unregistered object reports
    /// [`LookupError::UnknownObject`] even if the name is also bad.
    pub fn signal_by_name(&mut self, node: K, kind: &str) -> Result<&mut Signal<K>, LookupError<K>> {
        let table = self
            .tables
            .get_mut(&node)
            .ok_or(LookupError::UnknownObject(node))?;
        let kind: EventKind = kind
            .parse()
            .map_err(|_| LookupError::UnknownEventKind(kind.to_string()))?;
        Ok(table.get_mut(kind))
    }

    /// The nearest registered entry of a root→leaf `path`, searching from the leaf.
    pub fn resolve(&self, path: &[K]) -> Option<K> {
        path.iter().rev().copied().find(|k| self.tables.contains_key(k))
    }

    /// Invoke the signal for `kind` on `node`, if `node` is registered.
    ///
    /// Returns `false` when there was nothing to invoke.
    pub(crate) fn emit(&mut self, args: &SignalArgs<'_, K>) -> bool {
        match self.tables.get_mut(&args.node) {
            Some(table) => {
                table.get_mut(args.kind).invoke(args);
                true
            }
            None => false,
        }
    }
}

impl<K: Copy + Eq + Hash + core::fmt::Debug> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Point;

    fn fire(reg: &mut Registry<u32>, node: u32, kind: EventKind) -> bool {
        let input = InputEvent::frame(0.0, Point::ORIGIN);
        reg.emit(&SignalArgs {
            node,
            kind,
            input: &input,
            hit: None,
        })
    }

    #[test]
    fn register_creates_every_signal() {
        let mut reg = Registry::new();
        reg.register(1_u32);
        for kind in EventKind::ALL {
            assert!(reg.signal_mut(1, kind).is_ok(), "{kind} missing");
            assert!(reg.signal_by_name(1, kind.name()).is_ok(), "{kind} missing by name");
        }
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_object_and_kind() {
        let mut reg = Registry::new();
        reg.register(1_u32);
        assert_eq!(
            reg.signal_mut(2, EventKind::MouseDown).err(),
            Some(LookupError::UnknownObject(2))
        );
        assert_eq!(
            reg.signal_by_name(2, "MouseDown").err(),
            Some(LookupError::UnknownObject(2))
        );
        assert_eq!(
            reg.signal_by_name(1, "Bogus").err(),
            Some(LookupError::UnknownEventKind("Bogus".into()))
        );
        // Failed lookups never register anything.
        assert!(!reg.contains(2));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn reregistration_drops_subscribers() {
        let mut reg = Registry::new();
        reg.register(1_u32);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = Rc::clone(&hits);
            reg.signal_mut(1, EventKind::Click)
                .unwrap()
                .subscribe(move |_| hits.set(hits.get() + 1));
        }
        assert!(fire(&mut reg, 1, EventKind::Click));
        assert_eq!(hits.get(), 1);

        reg.register(1);
        assert!(reg.signal_mut(1, EventKind::Click).unwrap().is_empty());
        assert!(fire(&mut reg, 1, EventKind::Click));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn emit_targets_one_kind_only() {
        let mut reg = Registry::new();
        reg.register(1_u32);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = Rc::clone(&hits);
            reg.signal_mut(1, EventKind::MouseUp)
                .unwrap()
                .subscribe(move |_| hits.set(hits.get() + 1));
        }
        fire(&mut reg, 1, EventKind::MouseDown);
        assert_eq!(hits.get(), 0);
        assert!(!fire(&mut reg, 9, EventKind::MouseUp));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn resolve_prefers_nearest_ancestor() {
        let mut reg = Registry::new();
        reg.register(1_u32);
        reg.register(3);
        assert_eq!(reg.resolve(&[0, 1, 2, 3, 4]), Some(3));
        assert_eq!(reg.resolve(&[0, 1, 2]), Some(1));
        assert_eq!(reg.resolve(&[0, 2]), None);
        assert_eq!(reg.resolve(&[]), None);
    }
}
