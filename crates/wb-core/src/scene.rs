//! Scene descriptors.

use serde::{Deserialize, Serialize};

/// Engine-side configuration of a scene.
///
/// Layout and art are owned entirely by the presentation layer; the
/// engine only tracks which world flags a scene's presentation cares
/// about, so flag changes can be filtered down to the visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Flags this scene wants reported back after a mutation.
    #[serde(default)]
    pub relevant_flags: Vec<String>,
}

impl SceneConfig {
    /// Create a scene descriptor from its relevant flags.
    pub fn new(relevant_flags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            relevant_flags: relevant_flags.into_iter().map(Into::into).collect(),
        }
    }
}
