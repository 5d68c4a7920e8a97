//! Interaction description consumed by the canvas.
//!
//! For every segment the path reports named handles at absolute positions
//! and guide lines between them. The canvas draws a draggable marker per
//! interactive handle and a plain line per guide, and feeds pointer deltas
//! back through [`crate::PathCommands::apply_delta`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use shapekit_core::Point;

/// Name of a segment's draggable geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleName {
    End,
    Control1,
    Control2,
}

impl HandleName {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleName::End => "end",
            HandleName::Control1 => "control1",
            HandleName::Control2 => "control2",
        }
    }
}

impl fmt::Display for HandleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown handle name: {0}")]
pub struct UnknownHandleName(pub String);

impl FromStr for HandleName {
    type Err = UnknownHandleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "end" => Ok(HandleName::End),
            "control1" => Ok(HandleName::Control1),
            "control2" => Ok(HandleName::Control2),
            other => Err(UnknownHandleName(other.to_string())),
        }
    }
}

/// A handle marker at an absolute position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Handle {
    pub name: HandleName,
    pub position: Point,
    /// `false` for derived positions such as a smooth curve's reflected
    /// control point; those must never receive drags.
    pub interactive: bool,
}

/// A line between two absolute positions, e.g. a control tangent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guide {
    pub start: Point,
    pub end: Point,
    pub interactive: bool,
}

/// Handles and guides of one segment
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InteractionPoints {
    pub handles: SmallVec<[Handle; 3]>,
    pub guides: SmallVec<[Guide; 2]>,
}

impl InteractionPoints {
    pub fn handle(&self, name: HandleName) -> Option<&Handle> {
        self.handles.iter().find(|h| h.name == name)
    }

    pub fn position(&self, name: HandleName) -> Option<Point> {
        self.handle(name).map(|h| h.position)
    }

    pub fn interactive_handles(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter().filter(|h| h.interactive)
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty() && self.guides.is_empty()
    }

    pub(crate) fn push_handle(&mut self, name: HandleName, position: Point) {
        self.handles.push(Handle {
            name,
            position,
            interactive: true,
        });
    }

    pub(crate) fn push_derived_handle(&mut self, name: HandleName, position: Point) {
        self.handles.push(Handle {
            name,
            position,
            interactive: false,
        });
    }

    pub(crate) fn push_guide(&mut self, start: Point, end: Point, interactive: bool) {
        self.guides.push(Guide {
            start,
            end,
            interactive,
        });
    }
}
