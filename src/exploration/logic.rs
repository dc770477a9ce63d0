//! Exploration tick: player movement, enemy wandering, and encounters.

use super::types::{clamp_to_bounds, Aabb, World};
use crate::character::{Combatant, Enemy, EnemyId, EnemyKind, Player, Position};
use crate::core::constants::*;
use rand::Rng;
use std::f64::consts::TAU;

/// Replaces the roster with `count` enemies of random kind at uniform
/// random positions.
pub fn spawn_roster(world: &mut World, count: usize, rng: &mut impl Rng) {
    world.enemies.clear();
    for _ in 0..count {
        let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
        let mut position = Position::new(
            rng.gen_range(ENEMY_SPAWN_MIN..=ENEMY_SPAWN_MAX) as f64,
            rng.gen_range(ENEMY_SPAWN_MIN..=ENEMY_SPAWN_MAX) as f64,
        );
        world.clamp(&mut position);
        let id = world.next_enemy_id();
        world.enemies.push(Enemy::from_kind(id, kind, position));
    }
    tracing::debug!(count, "roster spawned");
}

/// Moves the player along the held keys at full speed.
pub fn move_player(world: &World, player: &mut Combatant, delta_time: f64) {
    let (mut dx, mut dy) = world.keys.axis();
    if dx != 0.0 && dy != 0.0 {
        dx *= DIAGONAL_FACTOR;
        dy *= DIAGONAL_FACTOR;
    }
    player.position.x += dx * PLAYER_SPEED * delta_time;
    player.position.y += dy * PLAYER_SPEED * delta_time;
    world.clamp(&mut player.position);
}

/// Picks a new heading every 1-3 seconds and drifts along it.
pub fn update_wander(enemy: &mut Enemy, delta_time: f64, rng: &mut impl Rng) {
    enemy.wander_timer -= delta_time;
    if enemy.wander_timer <= 0.0 {
        enemy.wander_timer =
            rng.gen_range(WANDER_INTERVAL_MIN_SECONDS..=WANDER_INTERVAL_MAX_SECONDS);
        let angle = rng.gen_range(0.0..TAU);
        enemy.wander_direction = (angle.cos(), angle.sin());
    }
    enemy.combatant.position.x += enemy.wander_direction.0 * ENEMY_WANDER_SPEED * delta_time;
    enemy.combatant.position.y += enemy.wander_direction.1 * ENEMY_WANDER_SPEED * delta_time;
}

/// First enemy, in roster order, whose box overlaps the player's.
pub fn find_encounter(player: &Combatant, enemies: &[Enemy]) -> Option<EnemyId> {
    let player_box = Aabb::entity(player.position);
    enemies
        .iter()
        .find(|enemy| player_box.overlaps(&Aabb::entity(enemy.combatant.position)))
        .map(|enemy| enemy.id)
}

/// One exploration update. Returns the enemy the player ran into, if any;
/// enemies after it in the roster are not updated this tick.
pub fn tick_exploration(
    world: &mut World,
    player: &mut Player,
    delta_time: f64,
    rng: &mut impl Rng,
) -> Option<EnemyId> {
    move_player(world, &mut player.combatant, delta_time);
    player.combatant.tick(delta_time);

    world.enemies.retain(|enemy| enemy.combatant.is_alive());

    let player_box = Aabb::entity(player.combatant.position);
    let (width, height) = (world.width, world.height);
    for enemy in world.enemies.iter_mut() {
        update_wander(enemy, delta_time, rng);
        enemy.combatant.tick(delta_time);
        clamp_to_bounds(&mut enemy.combatant.position, width, height);

        if player_box.overlaps(&Aabb::entity(enemy.combatant.position)) {
            tracing::debug!(enemy = %enemy.combatant.name, id = %enemy.id, "encounter");
            return Some(enemy.id);
        }
    }
    None
}
