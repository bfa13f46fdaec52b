//! Player ship: two-tier health, shield before lives
//!
//! The shield absorbs hits in fixed chunks; only when it is already empty
//! does a hit consume a life, and the shield refills on that same hit.

use glam::Vec2;

use crate::consts::*;

/// What a single hit did to the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Shield absorbed the hit
    ShieldDamaged,
    /// A life was consumed, shield refilled, ship still flying
    LifeLost,
    /// Last life consumed; the ship is gone
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub vel_x: f32,
    /// Shield strength in percent, always within [0, 100]
    pub shield: u32,
    pub lives: u32,
    pub alive: bool,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerShip {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_Y),
            vel_x: 0.0,
            shield: SHIELD_MAX,
            lives: STARTING_LIVES,
            alive: true,
        }
    }

    /// Apply one enemy hit and report what it cost
    pub fn apply_hit(&mut self) -> HitOutcome {
        if self.shield > 0 {
            self.shield = self.shield.saturating_sub(SHIELD_HIT_DAMAGE);
            HitOutcome::ShieldDamaged
        } else {
            self.lives = self.lives.saturating_sub(1);
            self.shield = SHIELD_MAX;
            if self.lives == 0 {
                self.alive = false;
                HitOutcome::Destroyed
            } else {
                HitOutcome::LifeLost
            }
        }
    }
}
