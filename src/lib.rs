//! Gridfire - a fixed-screen formation shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation movement, volleys, collisions, game state)
//! - `audio`: Sound effect dispatch to a fire-and-forget sink
//! - `settings`: User preferences persisted as JSON

pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (origin top-left, +y downward)
    pub const PLAYFIELD_WIDTH: f32 = 1024.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Formation grid
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 11;
    pub const ENEMY_WIDTH: f32 = 46.5;
    pub const ENEMY_HEIGHT: f32 = 42.0;
    /// Gap between adjacent enemies, both axes
    pub const GRID_SPACING: f32 = 15.0;
    /// Top row center y at formation setup
    pub const GRID_TOP_Y: f32 = 50.0;

    /// Formation movement
    pub const FORMATION_STEP_INTERVAL: f32 = 0.5;
    pub const FORMATION_STEP_X: f32 = 15.0;
    /// Padding from the playfield edges that triggers the bounce
    pub const FORMATION_EDGE_BUFFER: f32 = 20.0;
    /// Downward translation applied on every direction flip
    pub const FORMATION_DESCENT: f32 = 50.0;

    /// Enemy volleys
    pub const VOLLEY_INTERVAL: f32 = 1.0;
    /// A column fires when its [1,100] roll is strictly above this
    pub const VOLLEY_ROLL_THRESHOLD: u32 = 90;
    pub const ENEMY_SHOT_SPEED: f32 = 200.0;
    pub const ENEMY_SHOT_OFFSET_Y: f32 = 10.0;
    pub const ENEMY_SHOT_WIDTH: f32 = 9.0;
    pub const ENEMY_SHOT_HEIGHT: f32 = 54.0;

    /// Player ship
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_Y: f32 = 700.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_WIDTH: f32 = 99.0;
    pub const PLAYER_HEIGHT: f32 = 75.0;
    pub const PLAYER_SHOT_SPEED: f32 = -400.0;
    pub const PLAYER_SHOT_OFFSET_Y: f32 = -50.0;
    pub const PLAYER_SHOT_WIDTH: f32 = 9.0;
    pub const PLAYER_SHOT_HEIGHT: f32 = 37.0;

    /// Scoring and health
    pub const KILL_SCORE: u32 = 10;
    pub const SHIELD_MAX: u32 = 100;
    pub const SHIELD_HIT_DAMAGE: u32 = 20;
    pub const STARTING_LIVES: u32 = 1;

    /// Enemies below this line force an immediate game over
    pub const INVASION_LINE_Y: f32 = PLAYFIELD_HEIGHT - 100.0;
}

/// Clamp a ship center x so the full sprite stays inside the playfield
#[inline]
pub fn clamp_to_playfield(x: f32, half_width: f32) -> f32 {
    x.clamp(half_width, consts::PLAYFIELD_WIDTH - half_width)
}
