// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by signal lookups.

use alloc::string::String;
use core::fmt;

/// Error returned when looking up a signal fails.
///
/// A failed lookup never changes the registry.
#[derive(Clone, PartialEq, Eq)]
pub enum LookupError<K> {
    /// The object was never registered.
    UnknownObject(K),
    /// The event kind name is not one of the defined kinds.
    UnknownEventKind(String),
}

impl<K: fmt::Debug> fmt::Debug for LookupError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject(k) => write!(f, "UnknownObject({k:?})"),
            Self::UnknownEventKind(name) => write!(f, "UnknownEventKind({name:?})"),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for LookupError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject(k) => {
                write!(f, "trying to get a signal of an unknown object {k:?}")
            }
            Self::UnknownEventKind(name) => write!(f, "trying to get an unknown signal '{name}'"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for LookupError<K> {}
