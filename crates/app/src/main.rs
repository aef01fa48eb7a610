//! Whiteboard - headless driver for the brush engine
//!
//! Replays a scripted two-controller gesture against two boards and
//! reports what ended up on each canvas.
//!
//! Usage: `whiteboard [--config <file.json>]`

use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;

use whiteboard::{BrushController, WhiteboardId};
use whiteboard_config::WhiteboardConfig;

mod logging;
mod script;

struct Args {
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { config: None };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = iter.next().map(PathBuf::from),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<WhiteboardConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(WhiteboardConfig::from_json_str(&json)?)
        }
        None => Ok(WhiteboardConfig::from_env()?),
    }
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;
    logging::init(config.verbose);

    info!(
        "Starting whiteboard: {}x{} canvas, undo depth {}, seed {:?}",
        config.canvas_width, config.canvas_height, config.undo_capacity, config.rng_seed
    );

    let left = WhiteboardId(0);
    let right = WhiteboardId(1);
    let mut controller = BrushController::with_boards(&config, [left, right])?;

    let mut player = script::Player::default();
    player.play(&mut controller, &script::demo(left, right));

    for board in controller.boards() {
        let canvas = board.canvas();
        let painted = canvas
            .pixels()
            .iter()
            .zip(canvas.baseline())
            .filter(|(pixel, base)| pixel != base)
            .count();
        info!(
            "Board {}: {} of {} pixels painted, {} undo snapshots",
            board.id().0,
            painted,
            canvas.pixel_count(),
            board.history().len()
        );
    }

    Ok(())
}
