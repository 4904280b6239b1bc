//! Per-frame control: input intent to movement commands
//!
//! One call per rendered frame. The whole movement decision is re-derived
//! from the current intent every tick (level-triggered, no edge tracking);
//! once the run has ended the tick is a no-op and input stops reaching the
//! player.

use super::state::{GameSession, MotionState};
use crate::engine::EngineHost;

/// Input intent for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Advance the controller by one frame.
pub fn tick(session: &mut GameSession, engine: &mut dyn EngineHost, input: &TickInput) {
    if session.is_game_over() {
        return;
    }

    let player = session.player.body;

    // Horizontal speed is rebuilt from intent every frame. Left wins when
    // both directions are held.
    engine.set_velocity_x(player, 0.0);
    session.player.motion = if input.move_left {
        engine.set_velocity_x(player, -session.tuning.run_speed);
        MotionState::Left
    } else if input.move_right {
        engine.set_velocity_x(player, session.tuning.run_speed);
        MotionState::Right
    } else {
        MotionState::Idle
    };

    // Grounded gate keeps the jump from re-firing mid-air.
    session.player.grounded = engine.touching_down(player);
    if input.jump && session.player.grounded {
        engine.set_velocity_y(player, session.tuning.jump_velocity);
    }
}
