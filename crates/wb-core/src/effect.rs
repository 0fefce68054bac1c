//! Flag mutations applied by quests and interactions.

use serde::{Deserialize, Serialize};

/// A single flag mutation: sets `flag` to `value`.
///
/// Effects are absolute sets, not deltas; applying the same effect
/// twice leaves the flag store unchanged after the first application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Name of the world flag to set.
    pub flag: String,
    /// The value the flag is set to.
    pub value: i64,
}

impl Effect {
    /// Create an effect setting `flag` to `value`.
    pub fn new(flag: impl Into<String>, value: i64) -> Self {
        Self {
            flag: flag.into(),
            value,
        }
    }
}
