//! Fixed timestep simulation tick
//!
//! Per-tick ordering contract: input → player movement → fire → projectile
//! advance → formation timer → volley timer → collision → terminal check.
//! Movement always precedes collision, and collision always precedes the
//! terminal check, so a destroyed entity never participates in a stale
//! collision and a game over is detected the tick it occurs.

use glam::Vec2;

use super::collision;
use super::registry::ShotOwner;
use super::state::{GameEvent, GamePhase, GameState};
use super::volley;
use crate::consts::*;

/// Input levels and edges for a single tick, sampled once from the
/// external input collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
    pub fire_held: bool,
    /// Single-frame just-pressed edge; the only thing that spawns a shot
    pub fire_pressed: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Terminal state: nothing mutates until a new session reinitializes
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Held direction to horizontal velocity; left wins when both are held
    state.player.vel_x = if input.left_held {
        -PLAYER_SPEED
    } else if input.right_held {
        PLAYER_SPEED
    } else {
        0.0
    };
    state.player.pos.x = crate::clamp_to_playfield(
        state.player.pos.x + state.player.vel_x * dt,
        PLAYER_WIDTH / 2.0,
    );

    if input.fire_pressed {
        let pos = state.player.pos + Vec2::new(0.0, PLAYER_SHOT_OFFSET_Y);
        state
            .registry
            .spawn_shot(ShotOwner::Player, pos, PLAYER_SHOT_SPEED);
        state.events.push(GameEvent::PlayerShotFired);
    }

    // Advance shots, cull anything fully off the playfield
    for shot in state.registry.shots_mut() {
        shot.pos.y += shot.vel_y * dt;
    }
    state.registry.retain_shots(|s| {
        s.pos.y > -PLAYER_SHOT_HEIGHT && s.pos.y < PLAYFIELD_HEIGHT + ENEMY_SHOT_HEIGHT
    });

    // Timer-gated sub-behaviors: independent elapsed-time accumulators,
    // evaluated inside the tick rather than as engine timers
    state.formation.step_timer += dt;
    while state.formation.step_timer >= FORMATION_STEP_INTERVAL {
        state.formation.step_timer -= FORMATION_STEP_INTERVAL;
        state.formation.step(&mut state.registry);
    }

    state.volley_timer += dt;
    while state.volley_timer >= VOLLEY_INTERVAL {
        state.volley_timer -= VOLLEY_INTERVAL;
        volley::fire(state);
    }

    collision::resolve(state);

    if !state.player.alive {
        enter_game_over(state);
    }

    // Invasion: any live enemy past the line ends the run regardless of lives
    if state
        .registry
        .live_enemies()
        .any(|e| e.pos.y > INVASION_LINE_Y)
    {
        enter_game_over(state);
    }
}

fn enter_game_over(state: &mut GameState) {
    if state.phase != GamePhase::GameOver {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }
}
