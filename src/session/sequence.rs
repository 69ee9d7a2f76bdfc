//! Session numbering.

use serde::{Deserialize, Serialize};

/// Label number of a session, unique within one [`SessionSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// Hands out increasing session ids, starting at 1.
///
/// Owned by whoever builds sessions, so two drivers never share numbering.
#[derive(Clone, Debug)]
pub struct SessionSequence {
    next: u32,
}

impl Default for SessionSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SessionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> SessionId {
        let id = SessionId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been handed out.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}
