//! Volley scheduler: per-column enemy fire on the volley interval
//!
//! Only the front-most live enemy of each column may shoot. Columns roll
//! independently, so several can fire in the same volley; an empty column
//! never rolls at all.

use glam::Vec2;
use rand::Rng;

use super::registry::ShotOwner;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// One volley invocation across all columns
pub fn fire(state: &mut GameState) {
    for col in 0..GRID_COLS {
        let Some(shooter_pos) = state
            .registry
            .lowest_live_in_column(col)
            .map(|e| e.pos)
        else {
            continue;
        };

        let roll: u32 = state.rng.random_range(1..=100);
        if roll > VOLLEY_ROLL_THRESHOLD {
            state.registry.spawn_shot(
                ShotOwner::Enemy,
                shooter_pos + Vec2::new(0.0, ENEMY_SHOT_OFFSET_Y),
                ENEMY_SHOT_SPEED,
            );
            state.events.push(GameEvent::EnemyShotFired { column: col });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_column(state: &mut GameState, col: u32) {
        let ids: Vec<u32> = state
            .registry
            .live_enemies()
            .filter(|e| e.col == col)
            .map(|e| e.id)
            .collect();
        for id in ids {
            state.registry.remove_enemy(id);
        }
    }

    #[test]
    fn empty_grid_never_fires() {
        let mut state = GameState::new(42);
        for col in 0..GRID_COLS {
            clear_column(&mut state, col);
        }
        for _ in 0..100 {
            fire(&mut state);
        }
        assert_eq!(state.registry.shots().count(), 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn cleared_column_never_fires() {
        let mut state = GameState::new(42);
        clear_column(&mut state, 5);
        for _ in 0..200 {
            fire(&mut state);
        }
        assert!(
            state
                .events
                .iter()
                .all(|e| !matches!(e, GameEvent::EnemyShotFired { column: 5 }))
        );
    }

    #[test]
    fn shots_come_from_the_front_rank() {
        let mut state = GameState::new(7);
        let front = state
            .registry
            .lowest_live_in_column(0)
            .map(|e| (e.row, e.pos))
            .unwrap();
        assert_eq!(front.0, GRID_ROWS - 1);

        // 10% per column per volley; a seeded run of this length fires
        // from column 0 with near certainty
        let mut spawn = None;
        for _ in 0..300 {
            state.events.clear();
            fire(&mut state);
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyShotFired { column: 0 }))
            {
                spawn = state
                    .registry
                    .shots_of(ShotOwner::Enemy)
                    .filter(|s| s.pos.x == front.1.x)
                    .map(|s| s.pos)
                    .last();
                break;
            }
        }
        let spawn = spawn.expect("column 0 never fired under seed 7");
        assert_eq!(spawn.y, front.1.y + ENEMY_SHOT_OFFSET_Y);
    }

    #[test]
    fn volleys_are_deterministic_for_a_seed() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for _ in 0..50 {
            fire(&mut a);
            fire(&mut b);
        }
        assert_eq!(a.registry.shots().count(), b.registry.shots().count());
        let pa: Vec<Vec2> = a.registry.shots().map(|s| s.pos).collect();
        let pb: Vec<Vec2> = b.registry.shots().map(|s| s.pos).collect();
        assert_eq!(pa, pb);
    }
}
