//! Path shape record.
//!
//! The canvas stores a path as a shape: an id, an offset, optional styling
//! and the committed command list. The live [`PathCommands`] model is built
//! from this record and writes back into it when a drag is committed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shapekit_core::PathError;

use crate::command::CommandsDef;
use crate::gesture::PathUpdate;
use crate::parser;
use crate::path::{PathCommands, PathOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathShape {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    pub commands: CommandsDef,
}

impl PathShape {
    /// Create a shape at the origin. The commands are checked the same way
    /// [`PathCommands::from_defs`] checks them.
    pub fn new(commands: CommandsDef) -> Result<Self, PathError> {
        PathCommands::from_defs(&commands)?;
        Ok(Self {
            shape_type: ShapeType::Path,
            id: Uuid::new_v4(),
            x: 0.0,
            y: 0.0,
            fill: None,
            stroke: None,
            stroke_width: None,
            commands,
        })
    }

    pub fn from_d(d: &str) -> Result<Self, PathError> {
        Self::new(parser::parse(d)?)
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Build the editable model for this shape
    pub fn instantiate(&self, options: PathOptions) -> Result<PathCommands, PathError> {
        PathCommands::with_options(&self.commands, options)
    }

    /// Store the committed commands of a drag. Returns `false` for live
    /// preview updates, which leave the record untouched.
    pub fn apply_update(&mut self, update: &PathUpdate) -> bool {
        match &update.committed {
            Some(commands) => {
                self.commands = commands.clone();
                tracing::debug!(id = %self.id, "stored committed path");
                true
            }
            None => false,
        }
    }

    /// Move the whole shape; the commands are untouched
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
