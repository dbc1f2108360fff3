//! Core identifier types

use std::fmt;

/// Identifier for an OS process.
///
/// Only ever used as a lookup key into the OS process table; the crate
/// never dereferences it or assumes the process still exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(u32);

impl ProcessId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The id of the calling process.
    pub fn current() -> Self {
        Self(std::process::id())
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_raw(&self) -> i32 {
        self.0 as i32
    }
}

impl From<u32> for ProcessId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
