//! Formation movement: the enemy grid walks as one rigid body
//!
//! Edge detection runs on the extremes of the *current* positions, before the
//! unconditional horizontal step, so the flip lands one interval after the
//! true boundary crossing. The descent is applied on the same invocation that
//! detects the edge.

use glam::Vec2;

use super::registry::EntityRegistry;
use crate::consts::*;

/// Shared movement state for the whole grid
#[derive(Debug, Clone)]
pub struct Formation {
    /// +1.0 walking right, -1.0 walking left
    pub direction: f32,
    /// Elapsed-time accumulator for the movement interval
    pub step_timer: f32,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formation {
    pub fn new() -> Self {
        Self {
            direction: 1.0,
            step_timer: 0.0,
        }
    }

    /// One movement invocation: bounce check, coupled descent, horizontal step.
    /// No-op when the grid is empty.
    pub fn step(&mut self, registry: &mut EntityRegistry) {
        let mut leftmost = f32::INFINITY;
        let mut rightmost = f32::NEG_INFINITY;
        for enemy in registry.live_enemies() {
            leftmost = leftmost.min(enemy.pos.x);
            rightmost = rightmost.max(enemy.pos.x);
        }
        if leftmost > rightmost {
            return;
        }

        if leftmost < FORMATION_EDGE_BUFFER
            || rightmost > PLAYFIELD_WIDTH - FORMATION_EDGE_BUFFER
        {
            self.direction = -self.direction;
            for enemy in registry.live_enemies_mut() {
                enemy.pos.y += FORMATION_DESCENT;
            }
            log::debug!("formation bounced, direction {:+.0}", self.direction);
        }

        for enemy in registry.live_enemies_mut() {
            enemy.pos.x += self.direction * FORMATION_STEP_X;
        }
    }
}

/// Batch-create the full grid, horizontally centered with fixed spacing.
/// Called once per session from `GameState::new`.
pub fn spawn_formation(registry: &mut EntityRegistry) {
    let grid_width = GRID_COLS as f32 * ENEMY_WIDTH;
    let left = (PLAYFIELD_WIDTH - grid_width) / 2.0;

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let x = left + col as f32 * (ENEMY_WIDTH + GRID_SPACING);
            let y = GRID_TOP_Y + row as f32 * (ENEMY_HEIGHT + GRID_SPACING);
            registry.spawn_enemy(row, col, Vec2::new(x, y));
        }
    }
}
