//! Structured path command definitions.
//!
//! A [`CommandDef`] is the serializable form of one segment: a letter
//! followed by its arguments, persisted as a flat array such as
//! `["C", {"x":0,"y":10}, {"x":10,"y":10}, {"x":10,"y":0}]`.
//! Uppercase letters are absolute, lowercase letters relative.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use shapekit_core::{PathError, Point};

/// The seven supported segment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLine,
    VerticalLine,
    CubicBezier,
    SmoothCubicBezier,
    ClosePath,
}

impl CommandKind {
    /// Look up a kind by letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Some(CommandKind::MoveTo),
            'L' => Some(CommandKind::LineTo),
            'H' => Some(CommandKind::HorizontalLine),
            'V' => Some(CommandKind::VerticalLine),
            'C' => Some(CommandKind::CubicBezier),
            'S' => Some(CommandKind::SmoothCubicBezier),
            'Z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// The absolute (uppercase) letter
    pub fn upper(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLine => 'H',
            CommandKind::VerticalLine => 'V',
            CommandKind::CubicBezier => 'C',
            CommandKind::SmoothCubicBezier => 'S',
            CommandKind::ClosePath => 'Z',
        }
    }

    pub fn letter(self, relative: bool) -> char {
        if relative {
            self.upper().to_ascii_lowercase()
        } else {
            self.upper()
        }
    }

    /// Whether the single argument is a bare number (H/V)
    pub fn takes_number(self) -> bool {
        matches!(
            self,
            CommandKind::HorizontalLine | CommandKind::VerticalLine
        )
    }

    /// Number of point arguments
    pub fn point_count(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo => 1,
            CommandKind::CubicBezier => 3,
            CommandKind::SmoothCubicBezier => 2,
            CommandKind::HorizontalLine | CommandKind::VerticalLine | CommandKind::ClosePath => 0,
        }
    }

    /// Number of numeric tokens this command consumes in a `d` string
    pub fn number_count(self) -> usize {
        if self.takes_number() {
            1
        } else {
            self.point_count() * 2
        }
    }
}

/// One argument of a command definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandArg {
    Number(f64),
    Point(Point),
}

impl CommandArg {
    pub fn as_point(&self) -> Option<Point> {
        match self {
            CommandArg::Point(p) => Some(*p),
            CommandArg::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CommandArg::Number(n) => Some(*n),
            CommandArg::Point(_) => None,
        }
    }
}

impl From<Point> for CommandArg {
    fn from(p: Point) -> Self {
        CommandArg::Point(p)
    }
}

impl From<f64> for CommandArg {
    fn from(n: f64) -> Self {
        CommandArg::Number(n)
    }
}

/// A structured path segment: letter plus arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDef {
    pub letter: char,
    pub args: SmallVec<[CommandArg; 3]>,
}

/// An ordered command list. Well-formed lists are non-empty and start with
/// a move.
pub type CommandsDef = Vec<CommandDef>;

impl CommandDef {
    pub fn new(letter: char, args: impl IntoIterator<Item = CommandArg>) -> Self {
        Self {
            letter,
            args: args.into_iter().collect(),
        }
    }

    fn with(kind: CommandKind, relative: bool, args: impl IntoIterator<Item = CommandArg>) -> Self {
        Self::new(kind.letter(relative), args)
    }

    pub fn move_to(relative: bool, end: Point) -> Self {
        Self::with(CommandKind::MoveTo, relative, [end.into()])
    }

    pub fn line_to(relative: bool, end: Point) -> Self {
        Self::with(CommandKind::LineTo, relative, [end.into()])
    }

    pub fn horizontal_line(relative: bool, length: f64) -> Self {
        Self::with(CommandKind::HorizontalLine, relative, [length.into()])
    }

    pub fn vertical_line(relative: bool, length: f64) -> Self {
        Self::with(CommandKind::VerticalLine, relative, [length.into()])
    }

    pub fn cubic_bezier(relative: bool, control1: Point, control2: Point, end: Point) -> Self {
        Self::with(
            CommandKind::CubicBezier,
            relative,
            [control1.into(), control2.into(), end.into()],
        )
    }

    pub fn smooth_cubic_bezier(relative: bool, control2: Point, end: Point) -> Self {
        Self::with(
            CommandKind::SmoothCubicBezier,
            relative,
            [control2.into(), end.into()],
        )
    }

    pub fn close_path(relative: bool) -> Self {
        Self::with(CommandKind::ClosePath, relative, [])
    }

    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::from_letter(self.letter)
    }

    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }

    pub fn is_move_to(&self) -> bool {
        self.kind() == Some(CommandKind::MoveTo)
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.args.get(index).and_then(CommandArg::as_point)
    }

    pub fn number(&self, index: usize) -> Option<f64> {
        self.args.get(index).and_then(CommandArg::as_number)
    }

    /// Check letter, arity and finiteness; `index` is the definition's
    /// position in its command list and is only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<CommandKind, PathError> {
        let kind = self.kind().ok_or_else(|| {
            PathError::malformed(index, format!("unknown command letter '{}'", self.letter))
        })?;

        let expected = if kind.takes_number() {
            1
        } else {
            kind.point_count()
        };
        if self.args.len() != expected {
            return Err(PathError::malformed(
                index,
                format!(
                    "'{}' expects {} argument(s), got {}",
                    self.letter,
                    expected,
                    self.args.len()
                ),
            ));
        }

        let types_match = self.args.iter().all(|arg| match arg {
            CommandArg::Number(_) => kind.takes_number(),
            CommandArg::Point(_) => !kind.takes_number(),
        });
        if !types_match {
            let wanted = if kind.takes_number() { "a number" } else { "points" };
            return Err(PathError::malformed(
                index,
                format!("'{}' expects {}", self.letter, wanted),
            ));
        }

        let finite = self.args.iter().all(|arg| match arg {
            CommandArg::Number(n) => n.is_finite(),
            CommandArg::Point(p) => p.is_finite(),
        });
        if !finite {
            return Err(PathError::malformed(
                index,
                format!("'{}' has a non-finite coordinate", self.letter),
            ));
        }

        Ok(kind)
    }

    /// Textual form, e.g. `C 1 2, 3 4, 5 6`
    pub fn to_path_string(&self, precision: Option<usize>) -> String {
        let mut out = String::new();
        out.push(self.letter);

        let mut first = true;
        for arg in &self.args {
            out.push_str(if first { " " } else { ", " });
            first = false;
            match arg {
                CommandArg::Number(n) => out.push_str(&format_number(*n, precision)),
                CommandArg::Point(p) => {
                    out.push_str(&format_number(p.x, precision));
                    out.push(' ');
                    out.push_str(&format_number(p.y, precision));
                }
            }
        }

        out
    }
}

impl fmt::Display for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string(None))
    }
}

/// Format a coordinate for the `d` string.
///
/// Without a precision the shortest representation that parses back to the
/// same value is used (`10`, not `10.0`). With one, trailing zeros are
/// trimmed. Negative zero prints as `0`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let text = match precision {
        None => format!("{}", value),
        Some(digits) => {
            let fixed = format!("{:.*}", digits, value);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

impl Serialize for CommandDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(1 + self.args.len()))?;
        seq.serialize_element(&self.letter)?;
        for arg in &self.args {
            seq.serialize_element(arg)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for CommandDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CommandDefVisitor;

        impl<'de> Visitor<'de> for CommandDefVisitor {
            type Value = CommandDef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array starting with a command letter")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CommandDef, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let letter: char = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;

                let mut args = SmallVec::new();
                while let Some(arg) = seq.next_element::<CommandArg>()? {
                    args.push(arg);
                }

                Ok(CommandDef { letter, args })
            }
        }

        deserializer.deserialize_seq(CommandDefVisitor)
    }
}
