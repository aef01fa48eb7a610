//! Scripted controller gestures
//!
//! Stands in for the XR input loop: every step is one frame of input from
//! one hand, expressed in texture coordinates.

use glam::Vec2;
use tracing::{debug, info};

use whiteboard::{BrushController, Hand, StrategyKind, WhiteboardId};

/// One frame of input from one controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Trigger held and the ray hits `board` at `uv`
    Touch {
        hand: Hand,
        board: WhiteboardId,
        uv: Vec2,
    },
    /// Trigger held but the ray misses every board
    Miss { hand: Hand },
    /// Trigger released
    Release { hand: Hand },
    ToggleErase,
    SetStrategy(StrategyKind),
    Undo,
}

/// Replays steps and counts what they did
#[derive(Debug, Default)]
pub struct Player {
    pub stamps: usize,
    pub undos: usize,
}

impl Player {
    pub fn play(&mut self, controller: &mut BrushController, steps: &[Step]) {
        for step in steps {
            self.apply(controller, *step);
        }
        info!(
            "Script finished: {} steps, {} stamps, {} undos",
            steps.len(),
            self.stamps,
            self.undos
        );
    }

    fn apply(&mut self, controller: &mut BrushController, step: Step) {
        match step {
            Step::Touch { hand, board, uv } => {
                // The marker stays in a stroke until its trigger is released
                let first = !controller.marker(hand).is_drawing();
                self.stamps += controller.sample_uv(hand, board, uv, first);
            }
            Step::Miss { hand } => controller.lose_contact(hand),
            Step::Release { hand } => controller.release(hand),
            Step::ToggleErase => {
                let erasing = controller.brush_mut().toggle_erase();
                debug!("Erase mode: {}", erasing);
            }
            Step::SetStrategy(kind) => controller.brush_mut().set_kind(kind),
            Step::Undo => match controller.undo() {
                Ok(true) => self.undos += 1,
                Ok(false) => debug!("Undo: nothing to revert"),
                Err(err) => tracing::error!("Undo failed: {}", err),
            },
        }
    }
}

/// A stroke of `samples` touches along a straight line, then a release
fn line(hand: Hand, board: WhiteboardId, from: Vec2, to: Vec2, samples: usize) -> Vec<Step> {
    let mut steps: Vec<Step> = (0..samples)
        .map(|i| {
            let t = i as f32 / (samples.max(2) - 1) as f32;
            Step::Touch {
                hand,
                board,
                uv: from.lerp(to, t),
            }
        })
        .collect();
    steps.push(Step::Release { hand });
    steps
}

/// The demo gesture: both hands painting on two boards with every strategy
pub fn demo(left_board: WhiteboardId, right_board: WhiteboardId) -> Vec<Step> {
    let mut steps = Vec::new();

    // Solid diagonal with the left hand
    steps.extend(line(
        Hand::Left,
        left_board,
        Vec2::new(0.1, 0.1),
        Vec2::new(0.9, 0.9),
        24,
    ));

    // Spray across the right board, leaving it for a moment mid-stroke
    steps.push(Step::SetStrategy(StrategyKind::Spray));
    let mut spray = line(
        Hand::Right,
        right_board,
        Vec2::new(0.1, 0.5),
        Vec2::new(0.9, 0.5),
        16,
    );
    spray.insert(8, Step::Miss { hand: Hand::Right });
    steps.extend(spray);

    // Watercolor wash over the left diagonal
    steps.push(Step::SetStrategy(StrategyKind::Diffuse));
    for _ in 0..4 {
        steps.extend(line(
            Hand::Left,
            left_board,
            Vec2::new(0.2, 0.8),
            Vec2::new(0.8, 0.2),
            12,
        ));
    }

    // Erase part of the diagonal, then take the last wash back
    steps.push(Step::SetStrategy(StrategyKind::Solid));
    steps.push(Step::ToggleErase);
    steps.extend(line(
        Hand::Right,
        left_board,
        Vec2::new(0.4, 0.4),
        Vec2::new(0.6, 0.6),
        6,
    ));
    steps.push(Step::ToggleErase);
    steps.push(Step::Undo);

    steps
}
