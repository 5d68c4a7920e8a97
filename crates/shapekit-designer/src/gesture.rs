//! Drag gesture phases and the state reported after each step.

use serde::{Deserialize, Serialize};

use crate::command::CommandsDef;
use crate::interaction::InteractionPoints;

/// Phase of a pointer drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// Pointer moved; live preview only
    Move,
    /// Pointer released; the geometry is committed
    Up,
}

impl Gesture {
    pub fn is_commit(self) -> bool {
        matches!(self, Gesture::Up)
    }
}

/// Resolved state after one drag step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathUpdate {
    pub gesture: Gesture,
    /// Textual path for the live preview
    pub d: String,
    /// Handles and guides of every segment, in path order
    pub helpers: Vec<InteractionPoints>,
    /// Structured form to write back; only set on [`Gesture::Up`]
    pub committed: Option<CommandsDef>,
}

impl PathUpdate {
    pub fn is_commit(&self) -> bool {
        self.committed.is_some()
    }
}
