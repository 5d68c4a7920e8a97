//! The editable path.
//!
//! [`PathCommands`] owns its segments in an ordered arena; each segment
//! links back to its predecessor by index. Absolute positions are resolved
//! on demand by walking that chain, so they always reflect the current
//! geometry. After every mutation the path recomputes the interaction
//! description of every segment before returning, which keeps smooth-curve
//! reflections and the positions of downstream relative segments in sync.

use std::fmt;

use shapekit_core::{reflect, PathError, Point};

use crate::command::{CommandDef, CommandsDef};
use crate::gesture::{Gesture, PathUpdate};
use crate::interaction::{HandleName, InteractionPoints};
use crate::parser;
use crate::segment::{Segment, SegmentKind};

/// Editing and serialization knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOptions {
    /// Decimals for the textual form; `None` keeps the shortest exact form
    pub precision: Option<usize>,
    /// Let an absolute cubic's first control point follow its predecessor's
    /// dragged endpoint
    pub tangent_follow: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            precision: None,
            tangent_follow: true,
        }
    }
}

/// Where the current drag started
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    index: usize,
    end: Point,
}

#[derive(Debug, Clone)]
pub struct PathCommands {
    segments: Vec<Segment>,
    helpers: Vec<InteractionPoints>,
    options: PathOptions,
    drag: Option<DragOrigin>,
}

impl PathCommands {
    /// Instantiate a path from its structured form.
    ///
    /// Fails with [`PathError::MalformedCommand`] if `defs` is empty, does
    /// not start with a move, or contains a definition with the wrong arity.
    pub fn from_defs(defs: &[CommandDef]) -> Result<Self, PathError> {
        Self::with_options(defs, PathOptions::default())
    }

    pub fn with_options(defs: &[CommandDef], options: PathOptions) -> Result<Self, PathError> {
        let segments = instantiate(defs)?;
        let mut path = Self {
            segments,
            helpers: Vec::new(),
            options,
            drag: None,
        };
        path.refresh_helpers();

        tracing::debug!(segments = path.segments.len(), "instantiated path");
        Ok(path)
    }

    /// Parse a `d` attribute and instantiate it
    pub fn from_d(d: &str) -> Result<Self, PathError> {
        Self::from_defs(&parser::parse(d)?)
    }

    /// Replace the whole path, e.g. after an external update. On error the
    /// current segments are kept.
    pub fn reload(&mut self, defs: &[CommandDef]) -> Result<(), PathError> {
        self.segments = instantiate(defs)?;
        self.drag = None;
        self.refresh_helpers();
        Ok(())
    }

    pub fn options(&self) -> PathOptions {
        self.options
    }

    pub fn set_options(&mut self, options: PathOptions) {
        self.options = options;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: a path holds at least its opening move
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn to_defs(&self) -> CommandsDef {
        self.segments.iter().map(Segment::to_def).collect()
    }

    /// Space-joined textual form of every segment
    pub fn serialize(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.serialize_with(self.options.precision))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Absolute position the segment leaves the cursor at.
    ///
    /// # Panics
    ///
    /// If `index` is out of range, or a segment other than a move has no
    /// predecessor.
    pub fn absolute_end(&self, index: usize) -> Point {
        let mut chain = vec![index];
        let mut current = self.segment_at(index);
        while let Some(prev) = current.prev() {
            chain.push(prev);
            current = self.segment_at(prev);
        }

        chain
            .iter()
            .rev()
            .fold(None, |prev_end, &i| {
                Some(resolve_end(&self.segments[i], i, prev_end))
            })
            .unwrap_or_else(|| unreachable!("chain contains at least the queried segment"))
    }

    /// Absolute ends of all segments in one forward pass
    pub fn absolute_ends(&self) -> Vec<Point> {
        let mut ends: Vec<Point> = Vec::with_capacity(self.segments.len());
        for (i, segment) in self.segments.iter().enumerate() {
            let prev_end = segment.prev().map(|p| ends[p]);
            ends.push(resolve_end(segment, i, prev_end));
        }
        ends
    }

    /// Resolve one of the segment's stored points. Relative coordinates are
    /// measured from the predecessor's end; the opening move is always
    /// absolute.
    pub fn absolute_point(&self, index: usize, stored: Point) -> Point {
        let segment = self.segment_at(index);
        match segment.prev() {
            Some(prev) if segment.is_relative() => stored + self.absolute_end(prev),
            _ => stored,
        }
    }

    /// Effective first control point of a smooth curve: the predecessor's
    /// second control point mirrored through its end if the predecessor is
    /// a C or S segment, otherwise the predecessor's end. `None` for other
    /// segment kinds.
    pub fn effective_control1(&self, index: usize) -> Option<Point> {
        let segment = self.segment_at(index);
        if !matches!(segment.kind(), SegmentKind::SmoothCubicBezier { .. }) {
            return None;
        }

        let prev = self.predecessor(index);
        let prev_end = self.absolute_end(prev);
        Some(match self.segments[prev].control2() {
            Some(control2) => reflect(self.absolute_point(prev, control2), prev_end),
            None => prev_end,
        })
    }

    /// Handles and guides of one segment, computed from current geometry
    pub fn interaction_points(&self, index: usize) -> InteractionPoints {
        let segment = self.segment_at(index);
        let mut points = InteractionPoints::default();

        match segment.kind() {
            SegmentKind::MoveTo { .. }
            | SegmentKind::LineTo { .. }
            | SegmentKind::HorizontalLine { .. }
            | SegmentKind::VerticalLine { .. } => {
                points.push_handle(HandleName::End, self.absolute_end(index));
            }
            SegmentKind::CubicBezier {
                control1,
                control2,
                ..
            } => {
                let start = self.absolute_end(self.predecessor(index));
                let end = self.absolute_end(index);
                let control1 = self.absolute_point(index, control1.get());
                let control2 = self.absolute_point(index, control2.get());

                points.push_handle(HandleName::Control1, control1);
                points.push_handle(HandleName::Control2, control2);
                points.push_handle(HandleName::End, end);
                points.push_guide(start, control1, true);
                points.push_guide(end, control2, true);
            }
            SegmentKind::SmoothCubicBezier { control2, .. } => {
                let start = self.absolute_end(self.predecessor(index));
                let end = self.absolute_end(index);
                let control2 = self.absolute_point(index, control2.get());
                let reflected = self
                    .effective_control1(index)
                    .unwrap_or_else(|| unreachable!("segment {} is a smooth curve", index));

                points.push_handle(HandleName::Control2, control2);
                points.push_handle(HandleName::End, end);
                points.push_derived_handle(HandleName::Control1, reflected);
                points.push_guide(start, reflected, false);
                points.push_guide(end, control2, true);
            }
            SegmentKind::ClosePath => {}
        }

        points
    }

    /// Interaction description of every segment as of the last mutation
    pub fn helpers(&self) -> &[InteractionPoints] {
        &self.helpers
    }

    /// Apply one drag step to segment `index`.
    ///
    /// `delta` is the pointer offset from where the gesture started, not
    /// from the previous event. Every segment's derived state is recomputed
    /// before this returns. On [`Gesture::Up`] the live geometry becomes the
    /// baseline of the next gesture and the committed definitions are
    /// included in the result.
    ///
    /// # Panics
    ///
    /// If `index` is out of range or the segment has no draggable `name`.
    pub fn apply_delta(
        &mut self,
        index: usize,
        name: HandleName,
        delta: Point,
        gesture: Gesture,
    ) -> PathUpdate {
        let origin = match self.drag {
            Some(origin) if origin.index == index => origin,
            _ => {
                let origin = DragOrigin {
                    index,
                    end: self.absolute_end(index),
                };
                self.drag = Some(origin);
                origin
            }
        };

        self.segment_at_mut(index).apply_delta(name, delta);
        tracing::trace!(index, handle = %name, dx = delta.x, dy = delta.y, "applied delta");

        if self.options.tangent_follow {
            self.follow_tangent(index, origin);
        }

        self.refresh_helpers();

        let committed = if gesture.is_commit() {
            for segment in &mut self.segments {
                segment.commit();
            }
            self.drag = None;
            tracing::debug!(index, handle = %name, "committed drag");
            Some(self.to_defs())
        } else {
            None
        };

        PathUpdate {
            gesture,
            d: self.serialize(),
            helpers: self.helpers.clone(),
            committed,
        }
    }

    /// Carry the first control point of an absolute cubic right after the
    /// dragged segment along with that segment's end. Relative successors
    /// follow on their own.
    fn follow_tangent(&mut self, index: usize, origin: DragOrigin) {
        let next = index + 1;
        let follows = self
            .segments
            .get(next)
            .is_some_and(|s| !s.is_relative() && s.prev() == Some(index));
        if !follows {
            return;
        }

        let displacement = self.absolute_end(index) - origin.end;
        self.segments[next].follow_control1(displacement);
    }

    fn refresh_helpers(&mut self) {
        self.helpers = (0..self.segments.len())
            .map(|i| self.interaction_points(i))
            .collect();
    }

    fn segment_at(&self, index: usize) -> &Segment {
        self.segments.get(index).unwrap_or_else(|| {
            panic!(
                "segment index {} out of range for path of {} segments",
                index,
                self.segments.len()
            )
        })
    }

    fn segment_at_mut(&mut self, index: usize) -> &mut Segment {
        let len = self.segments.len();
        self.segments.get_mut(index).unwrap_or_else(|| {
            panic!(
                "segment index {} out of range for path of {} segments",
                index, len
            )
        })
    }

    fn predecessor(&self, index: usize) -> usize {
        let segment = self.segment_at(index);
        segment.prev().unwrap_or_else(|| {
            panic!(
                "'{}' segment at index {} has no predecessor",
                segment.letter(),
                index
            )
        })
    }
}

impl fmt::Display for PathCommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn instantiate(defs: &[CommandDef]) -> Result<Vec<Segment>, PathError> {
    let first = defs
        .first()
        .ok_or_else(|| PathError::malformed(0, "path has no commands"))?;
    if !first.is_move_to() {
        return Err(PathError::malformed(
            0,
            format!("first command must be a move, got '{}'", first.letter),
        ));
    }

    defs.iter()
        .enumerate()
        .map(|(i, def)| Segment::from_def(def, i))
        .collect()
}

/// Per-variant end resolution given the predecessor's absolute end
fn resolve_end(segment: &Segment, index: usize, prev_end: Option<Point>) -> Point {
    let required = || {
        prev_end.unwrap_or_else(|| {
            panic!(
                "'{}' segment at index {} has no predecessor",
                segment.letter(),
                index
            )
        })
    };
    let offset = |stored: Point| match prev_end {
        Some(from) if segment.is_relative() => stored + from,
        _ => stored,
    };

    match segment.kind() {
        SegmentKind::MoveTo { end } => offset(end.get()),
        SegmentKind::LineTo { end }
        | SegmentKind::CubicBezier { end, .. }
        | SegmentKind::SmoothCubicBezier { end, .. } => {
            required();
            offset(end.get())
        }
        SegmentKind::HorizontalLine { length } => {
            let from = required();
            let x = if segment.is_relative() {
                from.x + length.get()
            } else {
                length.get()
            };
            Point::new(x, from.y)
        }
        SegmentKind::VerticalLine { length } => {
            let from = required();
            let y = if segment.is_relative() {
                from.y + length.get()
            } else {
                length.get()
            };
            Point::new(from.x, y)
        }
        SegmentKind::ClosePath => required(),
    }
}
