//! Ambient, non-quest interactions.

use serde::{Deserialize, Serialize};

use crate::condition::FlagCondition;
use crate::dialogue::Dialogue;
use crate::effect::Effect;

/// An always-available reaction to interacting with a scene object.
///
/// A target id maps to an ordered list of these; the engine fires the
/// first variant whose condition is satisfied, so the list encodes the
/// object's states (e.g. a cabinet before and after it was unlocked).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticInteraction {
    /// Flag condition gating this variant; `None` is always satisfied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<FlagCondition>,
    /// Player-facing description text.
    #[serde(default)]
    pub text: String,
    /// Dialogue played instead of plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<Dialogue>,
    /// Flags set when the interaction fires.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Items granted to the player.
    #[serde(default)]
    pub item_rewards: Vec<String>,
    /// Scene to switch to after firing; `None` stays in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_scene: Option<String>,
    /// Opaque token for the presentation layer (animation, sound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    /// Sub-view opened by this interaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subview: Option<String>,
}
