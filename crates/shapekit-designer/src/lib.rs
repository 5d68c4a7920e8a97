//! # ShapeKit Designer
//!
//! The editable path model behind the vector shape editor. A path is an
//! ordered list of SVG-style segments (move, line, horizontal/vertical
//! line, cubic and smooth cubic Bézier, close) that can be parsed from a
//! `d` attribute, resolved to absolute positions, dragged handle by handle
//! and written back out.
//!
//! ## Architecture
//!
//! ```text
//! parser        "M 0 0 C ..." -> CommandsDef
//! command       CommandDef (letter + args), serde as a flat array
//! segment       Segment: live geometry + drag baselines, predecessor index
//! path          PathCommands: arena of segments, resolution, propagation
//! interaction   handles and guides for the canvas
//! gesture       move/up phases, PathUpdate
//! shape         PathShape record holding the committed commands
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{Gesture, HandleName, PathCommands};
//! use shapekit_core::Point;
//!
//! let mut path = PathCommands::from_d("M 10 10 L 5 5 l 1 1").unwrap();
//! assert_eq!(path.absolute_end(2), Point::new(6.0, 6.0));
//!
//! let update = path.apply_delta(1, HandleName::End, Point::new(1.0, 0.0), Gesture::Up);
//! assert_eq!(update.d, "M 10 10 L 6 5 l 1 1");
//! assert_eq!(path.absolute_end(2), Point::new(7.0, 6.0));
//! ```

pub mod command;
pub mod gesture;
pub mod interaction;
pub mod parser;
pub mod path;
pub mod segment;
pub mod shape;

pub use command::{format_number, CommandArg, CommandDef, CommandKind, CommandsDef};
pub use gesture::{Gesture, PathUpdate};
pub use interaction::{Guide, Handle, HandleName, InteractionPoints, UnknownHandleName};
pub use parser::{parse, tokenize, Token};
pub use path::{PathCommands, PathOptions};
pub use segment::{Segment, SegmentKind, Tracked};
pub use shape::{PathShape, ShapeType};

pub use shapekit_core::{PathError, Point};
