//! Stable ID newtypes for graph entities.
//!
//! Node and edge ids are distinct newtype wrappers over `u32` so a `NodeId`
//! cannot be passed where an `EdgeId` is expected. The two id spaces are
//! independent: node 1 and edge 1 may coexist.
//!
//! [`IdCounter`] hands out ids for one space. Ids start at 1; 0 is never
//! allocated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stable node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// Stable edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

// Display implementations -- just print the inner value.

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter for a single id space.
///
/// The counter only moves forward during a session. It is rebuilt from the
/// stored ids on load ([`IdCounter::resume_after`]) and rewound to 1 only by
/// an explicit [`IdCounter::reset`] when the whole graph is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    /// A fresh counter whose first id is 1.
    pub const fn new() -> Self {
        IdCounter { next: 1 }
    }

    /// Resumes after the highest of `existing`, or starts at 1 when empty.
    pub fn resume_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let next = existing
            .into_iter()
            .max()
            .map_or(1, |max| max.saturating_add(1));
        IdCounter { next: next.max(1) }
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Hands out the next id and advances the counter.
    ///
    /// The last id handed out is `u32::MAX - 1`; after that every call
    /// fails rather than wrapping and reusing an id.
    pub fn allocate(&mut self, space: &'static str) -> Result<u32, CoreError> {
        if self.next == u32::MAX {
            return Err(CoreError::IdSpaceExhausted { space });
        }
        let id = self.next;
        self.next += 1;
        Ok(id)
    }

    /// Moves the counter up to `floor` if it is behind. Never moves it back.
    pub fn raise_to(&mut self, floor: u32) {
        self.next = self.next.max(floor);
    }

    /// Rewinds to 1.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
