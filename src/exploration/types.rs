use serde::{Deserialize, Serialize};

use crate::character::{Enemy, EnemyId, Position};
use crate::core::constants::ENTITY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Movement keys currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Unit-ish movement vector; down/right win over up/left when both are held.
    pub fn axis(&self) -> (f64, f64) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy = -1.0;
        }
        if self.down {
            dy = 1.0;
        }
        if self.left {
            dx = -1.0;
        }
        if self.right {
            dx = 1.0;
        }
        (dx, dy)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    /// Standard entity box anchored at `position`.
    pub fn entity(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: ENTITY_SIZE,
            height: ENTITY_SIZE,
        }
    }

    /// Strict overlap; boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Exploration data: the enemy roster and movement input.
///
/// The roster is populated once when a new game starts and survives every
/// trip through Combat, Inventory, and Pause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub enemies: Vec<Enemy>,
    pub keys: HeldKeys,
    pub width: f64,
    pub height: f64,
    next_id: u32,
}

impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            enemies: Vec::new(),
            keys: HeldKeys::default(),
            width,
            height,
            next_id: 0,
        }
    }

    pub fn next_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Keeps a position inside the world.
    pub fn clamp(&self, position: &mut Position) {
        clamp_to_bounds(position, self.width, self.height);
    }
}

/// Keeps an entity box anchored at `position` inside `width` x `height`.
pub fn clamp_to_bounds(position: &mut Position, width: f64, height: f64) {
    position.x = position.x.clamp(0.0, (width - ENTITY_SIZE).max(0.0));
    position.y = position.y.clamp(0.0, (height - ENTITY_SIZE).max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_axis() {
        let mut keys = HeldKeys::default();
        assert_eq!(keys.axis(), (0.0, 0.0));
        keys.set(Direction::Up, true);
        keys.set(Direction::Right, true);
        assert_eq!(keys.axis(), (1.0, -1.0));
        keys.set(Direction::Down, true);
        assert_eq!(keys.axis(), (1.0, 1.0));
        keys.clear();
        assert_eq!(keys, HeldKeys::default());
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::entity(Position::new(0.0, 0.0));
        assert!(a.overlaps(&Aabb::entity(Position::new(49.0, 49.0))));
        assert!(!a.overlaps(&Aabb::entity(Position::new(50.0, 0.0))));
        assert!(!a.overlaps(&Aabb::entity(Position::new(0.0, 120.0))));
    }

    #[test]
    fn test_enemy_ids_are_unique() {
        let mut world = World::new(100.0, 100.0);
        let a = world.next_enemy_id();
        let b = world.next_enemy_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clamp() {
        let world = World::new(200.0, 100.0);
        let mut pos = Position::new(-5.0, 500.0);
        world.clamp(&mut pos);
        assert_eq!(pos, Position::new(0.0, 50.0));
    }
}
