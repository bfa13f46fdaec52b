//! Collision detection and resolution
//!
//! Runs every tick after movement. Hits are collected during the scan and
//! applied in a second pass, so a destroyed entity can never match again
//! within the same resolver pass.

use glam::Vec2;

use super::player::HitOutcome;
use super::registry::ShotOwner;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Axis-aligned overlap test on center/extent boxes
#[inline]
pub fn boxes_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() * 2.0 < a_size.x + b_size.x
        && (a_pos.y - b_pos.y).abs() * 2.0 < a_size.y + b_size.y
}

/// One resolver pass: player shots against the grid, then enemy shots
/// against the ship.
pub fn resolve(state: &mut GameState) {
    resolve_player_shots(state);
    resolve_enemy_shots(state);
}

fn resolve_player_shots(state: &mut GameState) {
    let enemy_size = Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT);
    let shot_size = Vec2::new(PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT);

    let mut spent_shots: Vec<u32> = Vec::new();
    let mut dead_enemies: Vec<(u32, Vec2)> = Vec::new();

    for shot in state.registry.shots_of(ShotOwner::Player) {
        for enemy in state.registry.live_enemies() {
            if dead_enemies.iter().any(|&(id, _)| id == enemy.id) {
                continue;
            }
            if boxes_overlap(shot.pos, shot_size, enemy.pos, enemy_size) {
                spent_shots.push(shot.id);
                dead_enemies.push((enemy.id, enemy.pos));
                break;
            }
        }
    }

    for id in spent_shots {
        state.registry.remove_shot(id);
    }
    for (id, pos) in dead_enemies {
        state.registry.remove_enemy(id);
        state.score += KILL_SCORE;
        state.events.push(GameEvent::EnemyDestroyed { pos });
    }
}

fn resolve_enemy_shots(state: &mut GameState) {
    if !state.player.alive {
        return;
    }
    let player_size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
    let shot_size = Vec2::new(ENEMY_SHOT_WIDTH, ENEMY_SHOT_HEIGHT);

    let mut spent: Vec<u32> = Vec::new();
    for shot in state.registry.shots_of(ShotOwner::Enemy) {
        if boxes_overlap(shot.pos, shot_size, state.player.pos, player_size) {
            spent.push(shot.id);
        }
    }

    for id in spent {
        if !state.player.alive {
            // Destroyed mid-pass; remaining shots stay in flight, motion
            // freezes on the terminal transition anyway
            break;
        }
        state.registry.remove_shot(id);
        match state.player.apply_hit() {
            HitOutcome::ShieldDamaged => state.events.push(GameEvent::ShieldHit {
                shield: state.player.shield,
            }),
            HitOutcome::LifeLost | HitOutcome::Destroyed => {
                state.events.push(GameEvent::LifeLost {
                    lives: state.player.lives,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn first_enemy_pos(state: &GameState) -> Vec2 {
        state.registry.live_enemies().next().unwrap().pos
    }

    #[test]
    fn overlap_is_symmetric_and_edge_exclusive() {
        let a = Vec2::new(0.0, 0.0);
        let size = Vec2::new(10.0, 10.0);
        assert!(boxes_overlap(a, size, Vec2::new(9.0, 0.0), size));
        assert!(boxes_overlap(Vec2::new(9.0, 0.0), size, a, size));
        // Touching edges do not count as overlap
        assert!(!boxes_overlap(a, size, Vec2::new(10.0, 0.0), size));
    }

    #[test]
    fn shot_and_enemy_both_removed_and_score_bumped() {
        let mut state = GameState::new(1);
        let total = state.registry.live_enemy_count();
        let target = first_enemy_pos(&state);
        state
            .registry
            .spawn_shot(ShotOwner::Player, target, PLAYER_SHOT_SPEED);

        resolve(&mut state);

        assert_eq!(state.registry.live_enemy_count(), total - 1);
        assert_eq!(state.registry.shots_of(ShotOwner::Player).count(), 0);
        assert_eq!(state.score, KILL_SCORE);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        );
    }

    #[test]
    fn destroyed_enemy_cannot_be_hit_twice_in_one_pass() {
        let mut state = GameState::new(1);
        let total = state.registry.live_enemy_count();
        let target = first_enemy_pos(&state);
        state
            .registry
            .spawn_shot(ShotOwner::Player, target, PLAYER_SHOT_SPEED);
        state
            .registry
            .spawn_shot(ShotOwner::Player, target, PLAYER_SHOT_SPEED);

        resolve(&mut state);

        // One kill, one shot spent; the second shot found nothing left
        assert_eq!(state.registry.live_enemy_count(), total - 1);
        assert_eq!(state.score, KILL_SCORE);
        assert_eq!(state.registry.shots_of(ShotOwner::Player).count(), 1);
    }

    #[test]
    fn enemy_shot_damages_shield_and_is_spent() {
        let mut state = GameState::new(1);
        let pos = state.player.pos;
        state
            .registry
            .spawn_shot(ShotOwner::Enemy, pos, ENEMY_SHOT_SPEED);

        resolve(&mut state);

        assert_eq!(state.player.shield, SHIELD_MAX - SHIELD_HIT_DAMAGE);
        assert_eq!(state.player.lives, STARTING_LIVES);
        assert_eq!(state.registry.shots_of(ShotOwner::Enemy).count(), 0);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::ShieldHit { shield: 80 }))
        );
    }

    #[test]
    fn no_hits_applied_after_the_ship_is_destroyed() {
        let mut state = GameState::new(1);
        state.player.shield = 0;
        let pos = state.player.pos;
        state
            .registry
            .spawn_shot(ShotOwner::Enemy, pos, ENEMY_SHOT_SPEED);
        state
            .registry
            .spawn_shot(ShotOwner::Enemy, pos, ENEMY_SHOT_SPEED);

        resolve(&mut state);

        assert_eq!(state.player.lives, 0);
        assert!(!state.player.alive);
        // Refill from the fatal hit stands; the second shot applied nothing
        assert_eq!(state.player.shield, SHIELD_MAX);
        assert_eq!(state.registry.shots_of(ShotOwner::Enemy).count(), 1);
    }

    #[test]
    fn distant_shot_hits_nothing() {
        let mut state = GameState::new(1);
        let total = state.registry.live_enemy_count();
        state.registry.spawn_shot(
            ShotOwner::Player,
            Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            PLAYER_SHOT_SPEED,
        );

        resolve(&mut state);

        assert_eq!(state.registry.live_enemy_count(), total);
        assert_eq!(state.score, 0);
        assert_eq!(state.registry.shots_of(ShotOwner::Player).count(), 1);
    }
}
