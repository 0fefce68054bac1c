//! Dialogue blocks spoken by characters.

use serde::{Deserialize, Serialize};

/// A block of spoken lines handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    /// Name of the speaking character, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// The lines to display, in order.
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Dialogue {
    /// Create a dialogue from a list of lines.
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            speaker: None,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the speaker.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}
