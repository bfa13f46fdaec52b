//! Game state and core simulation types
//!
//! Everything a session mutates lives here; `GameState::new` is the single
//! initialization path and the only place shield, lives, and score reset.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::formation::{self, Formation};
use super::player::PlayerShip;
use super::registry::EntityRegistry;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; no further entity mutation until reinitialization
    GameOver,
}

/// Discrete things that happened during a tick, drained by the shell
/// and forwarded to the audio/session collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player fired a shot
    PlayerShotFired,
    /// An enemy in the given column fired a shot
    EnemyShotFired { column: u32 },
    /// A player shot destroyed an enemy at this position
    EnemyDestroyed { pos: Vec2 },
    /// An enemy shot hit the player; shield after absorption
    ShieldHit { shield: u32 },
    /// Shield was empty; a life was consumed and the shield refilled
    LifeLost { lives: u32 },
    /// Terminal transition; emitted exactly once per session
    GameOver { score: u32 },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the volley scheduler is its only consumer
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player ship
    pub player: PlayerShip,
    /// Formation movement state and its interval accumulator
    pub formation: Formation,
    /// Elapsed-time accumulator for the volley scheduler
    pub volley_timer: f32,
    /// Live enemies and in-flight shots
    pub registry: EntityRegistry,
    /// Events from the current tick (cleared at the start of the next)
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed: full grid, shield 100,
    /// starting lives, zero score.
    pub fn new(seed: u64) -> Self {
        let mut registry = EntityRegistry::new();
        formation::spawn_formation(&mut registry);

        log::info!("session initialized, seed {seed}");

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            player: PlayerShip::new(),
            formation: Formation::new(),
            volley_timer: 0.0,
            registry,
            events: Vec::new(),
        }
    }
}
