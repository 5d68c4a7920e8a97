use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Serialize;

use shapekit::{
    init_logging, path_options, EditorConfig, Gesture, HandleName, InteractionPoints, PathShape,
    Point, BUILD_DATE, VERSION,
};

const USAGE: &str = "usage: shapekit [--config FILE] [--fill COLOR] [--stroke COLOR WIDTH] \
<d> [--drag INDEX HANDLE DX DY]";

#[derive(Debug)]
struct Drag {
    index: usize,
    handle: HandleName,
    delta: Point,
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    d: Option<String>,
    drag: Option<Drag>,
    fill: Option<String>,
    stroke: Option<(String, f64)>,
    version: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    shape: &'a PathShape,
    d: String,
    ends: Vec<Point>,
    helpers: &'a [InteractionPoints],
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => parsed.version = true,
            "--config" => {
                let file = args.next().context("--config needs a file")?;
                parsed.config = Some(PathBuf::from(file));
            }
            "--fill" => parsed.fill = Some(args.next().context("--fill needs a color")?),
            "--stroke" => {
                let color = args.next().context("--stroke needs a color")?;
                let width: f64 = args
                    .next()
                    .context("--stroke needs a width")?
                    .parse()
                    .context("invalid stroke width")?;
                parsed.stroke = Some((color, width));
            }
            "--drag" => {
                let mut value = |what: &str| {
                    args.next()
                        .with_context(|| format!("--drag is missing {}", what))
                };
                let index: usize = value("INDEX")?.parse().context("invalid drag index")?;
                let handle = value("HANDLE")?.parse::<HandleName>()?;
                let dx: f64 = value("DX")?.parse().context("invalid DX")?;
                let dy: f64 = value("DY")?.parse().context("invalid DY")?;
                parsed.drag = Some(Drag {
                    index,
                    handle,
                    delta: Point::new(dx, dy),
                });
            }
            _ if parsed.d.is_none() => parsed.d = Some(arg),
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }

    Ok(parsed)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<EditorConfig> {
    match path {
        Some(path) => {
            let config = EditorConfig::load_from_file(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::debug!(path = %path.display(), "using config from command line");
            Ok(config)
        }
        None => match EditorConfig::default_path() {
            Ok(path) if path.exists() => Ok(EditorConfig::load_from_file(&path)?),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(EditorConfig::default())
            }
        },
    }
}

/// Build the shape record, applying the optional styling flags
fn build_shape(
    d: &str,
    fill: Option<String>,
    stroke: Option<(String, f64)>,
) -> anyhow::Result<PathShape> {
    let mut shape = PathShape::from_d(d)?;
    if let Some(fill) = fill {
        shape = shape.with_fill(fill);
    }
    if let Some((color, width)) = stroke {
        shape = shape.with_stroke(color, width);
    }
    Ok(shape)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!("shapekit {} ({})", VERSION, BUILD_DATE);
        return Ok(());
    }

    let d = args.d.context(USAGE)?;
    let config = load_config(args.config)?;
    let mut shape = build_shape(&d, args.fill, args.stroke)?;
    let mut path = shape.instantiate(path_options(&config))?;

    if let Some(drag) = args.drag {
        let Some(segment) = path.segment(drag.index) else {
            bail!("segment {} out of range (path has {})", drag.index, path.len());
        };
        if !segment.handle_names().contains(&drag.handle) {
            bail!(
                "segment {} ('{}') has no draggable '{}' handle",
                drag.index,
                segment.letter(),
                drag.handle
            );
        }
        tracing::debug!(
            index = drag.index,
            handle = %drag.handle,
            distance = drag.delta.distance_to(&Point::ZERO),
            "applying drag"
        );
        let update = path.apply_delta(drag.index, drag.handle, drag.delta, Gesture::Up);
        shape.apply_update(&update);
    }

    let report = Report {
        shape: &shape,
        d: path.serialize(),
        ends: path.absolute_ends(),
        helpers: path.helpers(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
