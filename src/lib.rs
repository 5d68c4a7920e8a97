//! # ShapeKit
//!
//! Editable SVG path model for a vector shape editor.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Points, vector helpers, error types
//! 2. **shapekit-designer** - Path commands, parser, drag propagation, shape record
//! 3. **shapekit-settings** - Editor configuration and persistence
//! 4. **shapekit** - Re-exports, logging setup and a small inspection CLI

pub use shapekit_core::{add, reflect, subtract, Error, PathError, Point, Result};

pub use shapekit_designer::{
    format_number, parse, tokenize, CommandArg, CommandDef, CommandKind, CommandsDef, Gesture,
    Guide, Handle, HandleName, InteractionPoints, PathCommands, PathOptions, PathShape,
    PathUpdate, Segment, SegmentKind, ShapeType, Token, Tracked, UnknownHandleName,
};

pub use shapekit_settings::{
    EditingSettings, EditorConfig, SerializationSettings, SettingsError, SettingsResult,
    MAX_PRECISION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Path model options for an editor configuration
pub fn path_options(config: &EditorConfig) -> PathOptions {
    PathOptions {
        precision: config.serialization.precision,
        tangent_follow: config.editing.tangent_follow,
    }
}

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so command output on stdout stays machine
/// readable. `RUST_LOG` overrides the default `warn` level, and
/// `SHAPEKIT_LOG_FORMAT=json` switches to JSON lines.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("SHAPEKIT_LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
