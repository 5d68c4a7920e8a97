//! # ShapeKit Core
//!
//! Core types shared by the ShapeKit crates.
//! Provides the 2D point algebra used by the path model and the
//! error taxonomy for path construction and parsing.

pub mod error;
pub mod point;

pub use error::{Error, PathError, Result};
pub use point::{add, reflect, subtract, Point};
