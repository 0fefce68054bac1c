//! Interaction results returned to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wb_core::{Dialogue, Outcome};

/// Classification of what a player action resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionStatus {
    /// A quest completed or a static interaction fired.
    Success,
    /// A recognized attempt that failed validation.
    Fail,
    /// A static interaction moved the player to another scene.
    ChangeScene,
    /// The interaction produced dialogue to play.
    Dialogue,
    /// A sub-view should be opened.
    OpenSubview,
    /// Nothing matched the action.
    None,
}

/// What happened in response to one player action.
///
/// Optional fields are omitted from the wire encoding when absent, so
/// a host can distinguish "no flag changes reported" from "an empty
/// set of changes".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// What the action resolved to.
    pub status: InteractionStatus,
    /// Player-facing message.
    #[serde(default)]
    pub message: String,
    /// Opaque presentation trigger (animation, sound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    /// Scene to switch to, when `status` is `CHANGE_SCENE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_scene: Option<String>,
    /// Scene-relevant flag changes. Absent after a scene change; the
    /// presentation layer refetches the whole scene instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_flags: Option<BTreeMap<String, i64>>,
    /// Item consumed from the inventory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_item: Option<String>,
    /// Items granted to the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_items: Option<Vec<String>>,
    /// Dialogue to play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<Dialogue>,
    /// Sub-view to open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subview: Option<String>,
    /// Whether the caller should persist the state now.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub autosave: bool,
}

impl InteractionResult {
    /// A bare result with the given status and message.
    pub fn new(status: InteractionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            trigger: None,
            next_scene: None,
            updated_flags: None,
            removed_item: None,
            new_items: None,
            dialogue: None,
            subview: None,
            autosave: false,
        }
    }

    /// The terminal fallback: no quest and no static interaction
    /// matched. Side-effect free.
    pub fn nothing() -> Self {
        Self::new(InteractionStatus::None, "Nothing special here.")
    }

    /// A failed attempt, carrying a quest's failure outcome.
    pub fn failure(outcome: &Outcome) -> Self {
        let mut result = Self::new(InteractionStatus::Fail, outcome.text.clone());
        result.trigger = outcome.trigger.clone();
        result
    }

    /// A failure-shaped result for reporting boundary errors to a host
    /// that cannot recover the engine mid-call.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(InteractionStatus::Fail, message)
    }

    /// Encode the result for JSON transport.
    ///
    /// Encoding a well-formed result cannot realistically fail; if it
    /// ever does, a minimal failure-shaped blob is returned so the host
    /// always receives valid JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"status":"FAIL","message":"result encoding failed"}"#.to_string()
        })
    }
}
