//! Mutable per-player game state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use wb_core::FlagCondition;

/// A player's progress through the adventure.
///
/// This is the only part of the engine that is persisted. World flags
/// are the single source of truth for puzzle state; a flag that was
/// never written reads as 0. A quest id is never in both the active
/// list and the completed set; the mutators here enforce it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Id of the scene the player is currently in.
    pub scene: String,
    /// Item ids held by the player, in acquisition order.
    ///
    /// Duplicates are allowed; removal takes the first occurrence.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// World flags. Absent keys read as 0.
    #[serde(default)]
    pub flags: BTreeMap<String, i64>,
    /// Ids of quests currently eligible for completion.
    ///
    /// Membership matters, order is only used for resolution scanning.
    #[serde(default)]
    pub active_quests: Vec<String>,
    /// Ids of quests the player has completed.
    #[serde(default)]
    pub completed_quests: BTreeSet<String>,
    /// Whether the state changed since it was last serialized.
    #[serde(skip)]
    dirty: bool,
}

// Equality is persisted identity only; the transient dirty marker is
// not part of it.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.scene == other.scene
            && self.inventory == other.inventory
            && self.flags == other.flags
            && self.active_quests == other.active_quests
            && self.completed_quests == other.completed_quests
    }
}

impl Eq for GameState {}

impl GameState {
    /// Create a fresh state in the given scene with nothing unlocked.
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // Flags
    // -----------------------------------------------------------------------

    /// Read a flag. Flags that were never written read as 0.
    pub fn flag(&self, name: &str) -> i64 {
        self.flags.get(name).copied().unwrap_or(0)
    }

    /// Overwrite a flag and mark the state dirty.
    pub fn set_flag(&mut self, name: impl Into<String>, value: i64) {
        self.flags.insert(name.into(), value);
        self.dirty = true;
    }

    /// Evaluate a flag condition against the current flags.
    ///
    /// `None` is vacuously true, as is (defensively) a condition with
    /// an empty flag name. Otherwise the flag's current value must
    /// equal the required value exactly.
    pub fn satisfies(&self, condition: Option<&FlagCondition>) -> bool {
        match condition {
            None => true,
            Some(condition) if condition.flag.is_empty() => true,
            Some(condition) => self.flag(&condition.flag) == condition.value,
        }
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Check whether at least one copy of an item is held.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Append an item to the inventory. Duplicates are allowed.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
        self.dirty = true;
    }

    /// Append several items to the inventory, preserving their order.
    pub fn add_items(&mut self, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.inventory.extend(items.iter().cloned());
        self.dirty = true;
    }

    /// Remove the first occurrence of an item, keeping the relative
    /// order of everything else. Returns whether a copy was removed.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|held| held == item) {
            self.inventory.remove(pos);
            self.dirty = true;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Quests
    // -----------------------------------------------------------------------

    /// Check whether a quest is in the active set.
    pub fn is_active(&self, quest: &str) -> bool {
        self.active_quests.iter().any(|id| id == quest)
    }

    /// Check whether a quest has been completed.
    pub fn is_completed(&self, quest: &str) -> bool {
        self.completed_quests.contains(quest)
    }

    /// Add a quest to the active set.
    ///
    /// Refused when the quest is already active or already completed,
    /// preserving the at-most-one-membership invariant. Returns whether
    /// the quest was added.
    pub fn activate_quest(&mut self, quest: impl Into<String>) -> bool {
        let quest = quest.into();
        if self.is_active(&quest) || self.is_completed(&quest) {
            return false;
        }
        self.active_quests.push(quest);
        self.dirty = true;
        true
    }

    /// Move a quest from the active set to the completed set.
    pub fn complete_quest(&mut self, quest: &str) {
        self.active_quests.retain(|id| id != quest);
        self.completed_quests.insert(quest.to_string());
        self.dirty = true;
    }

    // -----------------------------------------------------------------------
    // Dirty tracking
    // -----------------------------------------------------------------------

    /// Whether the state changed since it was last serialized.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the state as changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty marker after a successful save.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
