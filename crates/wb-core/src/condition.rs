//! Flag conditions gating quests and interactions.

use serde::{Deserialize, Serialize};

/// A condition requiring a world flag to hold an exact value.
///
/// Quests and interactions carry an `Option<FlagCondition>`; `None`
/// means unconditional. Only exact equality is supported; the puzzle
/// model deliberately has no inequality or range conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCondition {
    /// Name of the flag to test. An empty name is vacuously satisfied.
    pub flag: String,
    /// The value the flag must currently hold.
    pub value: i64,
}

impl FlagCondition {
    /// Create a condition requiring `flag` to equal `value`.
    pub fn new(flag: impl Into<String>, value: i64) -> Self {
        Self {
            flag: flag.into(),
            value,
        }
    }
}
