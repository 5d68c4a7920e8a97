//! Live path segments.
//!
//! A [`Segment`] is the mutable counterpart of a [`CommandDef`]. Its
//! geometry is stored exactly as written (relative segments keep relative
//! coordinates) and every draggable value carries the baseline captured at
//! the start of the current drag gesture. Drags recompute
//! `live = baseline + delta`, so a gesture that returns to its origin
//! restores the original geometry bit for bit.
//!
//! Anything that needs the predecessor chain (absolute positions, smooth
//! reflections, handles) lives on [`crate::PathCommands`]; a segment only
//! knows its predecessor's index.

use std::ops::Add;

use shapekit_core::{PathError, Point};

use crate::command::{CommandDef, CommandKind};
use crate::interaction::HandleName;

/// A value paired with its drag baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracked<T> {
    current: T,
    initial: T,
}

impl<T: Copy + Add<Output = T>> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            initial: value,
        }
    }

    pub fn get(&self) -> T {
        self.current
    }

    /// Set the live value to `baseline + delta`
    pub fn offset(&mut self, delta: T) {
        self.current = self.initial + delta;
    }

    pub fn commit(&mut self) {
        self.initial = self.current;
    }
}

/// Variant-specific geometry
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentKind {
    MoveTo {
        end: Tracked<Point>,
    },
    LineTo {
        end: Tracked<Point>,
    },
    HorizontalLine {
        length: Tracked<f64>,
    },
    VerticalLine {
        length: Tracked<f64>,
    },
    CubicBezier {
        control1: Tracked<Point>,
        control2: Tracked<Point>,
        end: Tracked<Point>,
    },
    /// The first control point is implied by the predecessor
    SmoothCubicBezier {
        control2: Tracked<Point>,
        end: Tracked<Point>,
    },
    ClosePath,
}

const END_ONLY: &[HandleName] = &[HandleName::End];
const CUBIC_HANDLES: &[HandleName] = &[
    HandleName::Control1,
    HandleName::Control2,
    HandleName::End,
];
const SMOOTH_HANDLES: &[HandleName] = &[HandleName::Control2, HandleName::End];

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    relative: bool,
    kind: SegmentKind,
    prev: Option<usize>,
}

impl Segment {
    /// Build the segment at position `index` of a path. Its predecessor is
    /// the segment right before it.
    pub fn from_def(def: &CommandDef, index: usize) -> Result<Self, PathError> {
        let command = def.validate(index)?;
        let point = |i: usize| -> Result<Tracked<Point>, PathError> {
            def.point(i)
                .map(Tracked::new)
                .ok_or_else(|| PathError::malformed(index, format!("missing point {}", i)))
        };
        let number = || -> Result<Tracked<f64>, PathError> {
            def.number(0)
                .map(Tracked::new)
                .ok_or_else(|| PathError::malformed(index, "missing length"))
        };

        let kind = match command {
            CommandKind::MoveTo => SegmentKind::MoveTo { end: point(0)? },
            CommandKind::LineTo => SegmentKind::LineTo { end: point(0)? },
            CommandKind::HorizontalLine => SegmentKind::HorizontalLine { length: number()? },
            CommandKind::VerticalLine => SegmentKind::VerticalLine { length: number()? },
            CommandKind::CubicBezier => SegmentKind::CubicBezier {
                control1: point(0)?,
                control2: point(1)?,
                end: point(2)?,
            },
            CommandKind::SmoothCubicBezier => SegmentKind::SmoothCubicBezier {
                control2: point(0)?,
                end: point(1)?,
            },
            CommandKind::ClosePath => SegmentKind::ClosePath,
        };

        Ok(Self {
            relative: def.is_relative(),
            kind,
            prev: index.checked_sub(1),
        })
    }

    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    pub fn command_kind(&self) -> CommandKind {
        match self.kind {
            SegmentKind::MoveTo { .. } => CommandKind::MoveTo,
            SegmentKind::LineTo { .. } => CommandKind::LineTo,
            SegmentKind::HorizontalLine { .. } => CommandKind::HorizontalLine,
            SegmentKind::VerticalLine { .. } => CommandKind::VerticalLine,
            SegmentKind::CubicBezier { .. } => CommandKind::CubicBezier,
            SegmentKind::SmoothCubicBezier { .. } => CommandKind::SmoothCubicBezier,
            SegmentKind::ClosePath => CommandKind::ClosePath,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn is_move_to(&self) -> bool {
        matches!(self.kind, SegmentKind::MoveTo { .. })
    }

    /// Index of the predecessor in the owning path
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn letter(&self) -> char {
        self.command_kind().letter(self.relative)
    }

    /// Stored (not resolved) end point of point-based segments
    pub fn end(&self) -> Option<Point> {
        match &self.kind {
            SegmentKind::MoveTo { end }
            | SegmentKind::LineTo { end }
            | SegmentKind::CubicBezier { end, .. }
            | SegmentKind::SmoothCubicBezier { end, .. } => Some(end.get()),
            _ => None,
        }
    }

    /// Stored explicit second control point of C and S segments
    pub fn control2(&self) -> Option<Point> {
        match &self.kind {
            SegmentKind::CubicBezier { control2, .. }
            | SegmentKind::SmoothCubicBezier { control2, .. } => Some(control2.get()),
            _ => None,
        }
    }

    /// Handles a canvas may drag on this segment
    pub fn handle_names(&self) -> &'static [HandleName] {
        match self.kind {
            SegmentKind::MoveTo { .. }
            | SegmentKind::LineTo { .. }
            | SegmentKind::HorizontalLine { .. }
            | SegmentKind::VerticalLine { .. } => END_ONLY,
            SegmentKind::CubicBezier { .. } => CUBIC_HANDLES,
            SegmentKind::SmoothCubicBezier { .. } => SMOOTH_HANDLES,
            SegmentKind::ClosePath => &[],
        }
    }

    pub fn to_def(&self) -> CommandDef {
        match &self.kind {
            SegmentKind::MoveTo { end } => CommandDef::move_to(self.relative, end.get()),
            SegmentKind::LineTo { end } => CommandDef::line_to(self.relative, end.get()),
            SegmentKind::HorizontalLine { length } => {
                CommandDef::horizontal_line(self.relative, length.get())
            }
            SegmentKind::VerticalLine { length } => {
                CommandDef::vertical_line(self.relative, length.get())
            }
            SegmentKind::CubicBezier {
                control1,
                control2,
                end,
            } => CommandDef::cubic_bezier(self.relative, control1.get(), control2.get(), end.get()),
            SegmentKind::SmoothCubicBezier { control2, end } => {
                CommandDef::smooth_cubic_bezier(self.relative, control2.get(), end.get())
            }
            SegmentKind::ClosePath => CommandDef::close_path(self.relative),
        }
    }

    /// Textual form such as `C 1 2, 3 4, 5 6`
    pub fn serialize(&self) -> String {
        self.serialize_with(None)
    }

    pub fn serialize_with(&self, precision: Option<usize>) -> String {
        self.to_def().to_path_string(precision)
    }

    /// Move the named geometry to `baseline + delta`.
    ///
    /// H uses only `delta.x`, V only `delta.y`. Dragging the end of a C or S
    /// segment carries its second control point along.
    ///
    /// # Panics
    ///
    /// If the segment does not expose `name` (see [`Segment::handle_names`]).
    pub fn apply_delta(&mut self, name: HandleName, delta: Point) {
        let letter = self.letter();
        match (&mut self.kind, name) {
            (SegmentKind::MoveTo { end } | SegmentKind::LineTo { end }, HandleName::End) => {
                end.offset(delta);
            }
            (SegmentKind::HorizontalLine { length }, HandleName::End) => length.offset(delta.x),
            (SegmentKind::VerticalLine { length }, HandleName::End) => length.offset(delta.y),
            (SegmentKind::CubicBezier { control1, .. }, HandleName::Control1) => {
                control1.offset(delta);
            }
            (
                SegmentKind::CubicBezier { control2, .. }
                | SegmentKind::SmoothCubicBezier { control2, .. },
                HandleName::Control2,
            ) => control2.offset(delta),
            (
                SegmentKind::CubicBezier { control2, end, .. }
                | SegmentKind::SmoothCubicBezier { control2, end },
                HandleName::End,
            ) => {
                end.offset(delta);
                control2.offset(delta);
            }
            (_, name) => panic!("'{}' segment has no draggable '{}' handle", letter, name),
        }
    }

    /// Shift the first control point of a cubic to `baseline + delta`.
    /// Other kinds are left alone.
    pub(crate) fn follow_control1(&mut self, delta: Point) {
        if let SegmentKind::CubicBezier { control1, .. } = &mut self.kind {
            control1.offset(delta);
        }
    }

    /// Make the live geometry the baseline of the next gesture
    pub fn commit(&mut self) {
        match &mut self.kind {
            SegmentKind::MoveTo { end } | SegmentKind::LineTo { end } => end.commit(),
            SegmentKind::HorizontalLine { length } | SegmentKind::VerticalLine { length } => {
                length.commit()
            }
            SegmentKind::CubicBezier {
                control1,
                control2,
                end,
            } => {
                control1.commit();
                control2.commit();
                end.commit();
            }
            SegmentKind::SmoothCubicBezier { control2, end } => {
                control2.commit();
                end.commit();
            }
            SegmentKind::ClosePath => {}
        }
    }
}
