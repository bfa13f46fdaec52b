//! Gridfire entry point
//!
//! Headless native shell: runs one demo session with the autopilot standing
//! in for a human on the keyboard, wiring simulation events to the audio
//! manager and the session hook. A graphical frontend drives the same
//! `TickInput`/`GameState` surface.

use gridfire::audio::AudioManager;
use gridfire::consts::*;
use gridfire::settings::Settings;
use gridfire::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Session/scene collaborator: receives the single outward notification
trait SessionHooks {
    fn on_game_over(&mut self, final_score: u32);
}

struct LoggingSession {
    final_score: Option<u32>,
}

impl SessionHooks for LoggingSession {
    fn on_game_over(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
        log::info!("session handed off with final score {final_score}");
    }
}

/// Demo pilot: chase the nearest surviving column, fire on cooldown
struct Autopilot {
    fire_cooldown: u32,
}

impl Autopilot {
    fn new() -> Self {
        Self { fire_cooldown: 0 }
    }

    fn decide(&mut self, state: &GameState) -> TickInput {
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
        let mut input = TickInput::default();

        let target = state
            .registry
            .live_enemies()
            .min_by(|a, b| {
                let da = (a.pos.x - state.player.pos.x).abs();
                let db = (b.pos.x - state.player.pos.x).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| e.pos.x);

        let Some(target_x) = target else {
            return input;
        };

        let dx = target_x - state.player.pos.x;
        if dx < -4.0 {
            input.left_held = true;
        } else if dx > 4.0 {
            input.right_held = true;
        } else if self.fire_cooldown == 0 {
            input.fire_pressed = true;
            input.fire_held = true;
            self.fire_cooldown = 20;
        }
        input
    }
}

fn main() {
    env_logger::init();
    log::info!("Gridfire starting...");

    let settings = Settings::load(Settings::DEFAULT_PATH);
    let mut audio = AudioManager::default();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0xDEAD_BEEF)
        });

    let mut state = GameState::new(seed);
    let mut session = LoggingSession { final_score: None };
    let mut pilot = Autopilot::new();

    // Demo cap: five simulated minutes
    let max_ticks: u64 = 5 * 60 * 60;
    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        let input = pilot.decide(&state);
        tick(&mut state, &input, SIM_DT);

        audio.handle_events(&state.events);
        for event in &state.events {
            if let GameEvent::GameOver { score } = event {
                session.on_game_over(*score);
            }
        }

        if state.time_ticks % (60 * 10) == 0 {
            log::debug!(
                "t={}s score={} shield={}% lives={} enemies={}",
                state.time_ticks / 60,
                state.score,
                state.player.shield,
                state.player.lives,
                state.registry.live_enemy_count()
            );
        }
    }

    log::info!(
        "demo finished after {} ticks: score {}, {} enemies remaining{}",
        state.time_ticks,
        state.score,
        state.registry.live_enemy_count(),
        if session.final_score.is_some() {
            " (game over)"
        } else {
            ""
        }
    );
}
