//! Damage, healing, and leveling rules shared by the player and enemies.

use super::types::*;
use crate::core::constants::*;
use rand::Rng;

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        role: Role,
        hp: u32,
        atk: u32,
        defense: u32,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            hp,
            hp_max: hp,
            atk,
            defense,
            level: 1,
            experience: 0,
            alive: hp > 0,
            position,
            hit_flash: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Applies incoming damage after halving defense, floored at 1.
    ///
    /// The returned `died` flag is set on exactly one hit per lifetime.
    pub fn receive_damage(&mut self, raw_damage: u32) -> DamageTaken {
        let realized = mitigated_damage(raw_damage, self.defense);
        self.hp = self.hp.saturating_sub(realized);
        self.hit_flash = HIT_FLASH_SECONDS;

        let died = self.hp == 0 && self.alive;
        if died {
            self.alive = false;
            tracing::info!(name = %self.name, role = ?self.role, "defeated");
        }
        debug_assert!(self.hp <= self.hp_max);
        debug_assert_eq!(self.alive, self.hp > 0, "alive flag out of sync with hp");

        DamageTaken { realized, died }
    }

    /// Restores hp up to `hp_max`. Returns the amount actually restored.
    ///
    /// Dead entities stay dead.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
        self.hp - before
    }

    /// Grows the actor by one level. Enemies never level.
    pub fn level_up(&mut self) {
        match self.role {
            Role::Player => {
                self.level += 1;
                self.hp_max += LEVEL_UP_HP;
                self.hp = self.hp_max;
                self.atk += LEVEL_UP_ATK;
                self.defense += LEVEL_UP_DEFENSE;
            }
            Role::Enemy => {}
        }
    }

    /// Decays presentation timers.
    pub fn tick(&mut self, delta_time: f64) {
        if self.hit_flash > 0.0 {
            self.hit_flash = (self.hit_flash - delta_time).max(0.0);
        }
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.hp_max == 0 {
            0.0
        } else {
            self.hp as f64 / self.hp_max as f64
        }
    }
}

/// `max(1, raw - defense / 2)` with integer floor division.
pub fn mitigated_damage(raw_damage: u32, defense: u32) -> u32 {
    raw_damage.saturating_sub(defense / 2).max(MIN_DAMAGE)
}

/// Independent Bernoulli draw for a critical hit.
pub fn roll_crit(rng: &mut impl Rng) -> bool {
    rng.gen_bool(CRIT_CHANCE)
}

/// Resolves an attack with a known crit roll.
///
/// Order: base atk, x2 on crit, then defense mitigation and the floor of 1.
pub fn strike(attacker: &Combatant, defender: &mut Combatant, is_crit: bool) -> AttackOutcome {
    let raw = if is_crit {
        attacker.atk.saturating_mul(CRIT_MULTIPLIER)
    } else {
        attacker.atk
    };
    let taken = defender.receive_damage(raw);
    AttackOutcome {
        damage: taken.realized,
        is_crit,
        killed: taken.died,
    }
}

/// Rolls for a crit and resolves the attack.
pub fn attack(attacker: &Combatant, defender: &mut Combatant, rng: &mut impl Rng) -> AttackOutcome {
    let is_crit = roll_crit(rng);
    strike(attacker, defender, is_crit)
}

/// Experience needed to level up from `level`.
pub fn xp_threshold(level: u32) -> u32 {
    level * XP_PER_LEVEL
}

impl Player {
    pub fn grant_reward(&mut self, reward: Reward) {
        self.gold = self.gold.saturating_add(reward.gold);
        self.combatant.experience = self.combatant.experience.saturating_add(reward.experience);
    }

    /// Applies at most one level-up if the threshold is met, resetting
    /// experience to zero. Surplus experience is discarded.
    pub fn try_level_up(&mut self) -> bool {
        if self.combatant.experience >= xp_threshold(self.combatant.level) {
            self.combatant.level_up();
            self.combatant.experience = 0;
            tracing::info!(name = %self.combatant.name, level = self.combatant.level, "level up");
            true
        } else {
            false
        }
    }

    /// Index of the first consumable in insertion order.
    pub fn first_consumable(&self) -> Option<usize> {
        self.inventory.iter().position(|item| item.is_consumable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn warrior() -> Player {
        Player::new("Hero", PlayerClass::Warrior, Position::default())
    }

    fn wolf() -> Enemy {
        Enemy::from_kind(EnemyId(0), EnemyKind::WildWolf, Position::default())
    }

    #[test]
    fn test_receive_damage_applies_half_defense() {
        let mut enemy = wolf();
        let taken = enemy.combatant.receive_damage(15);
        assert_eq!(taken.realized, 14);
        assert_eq!(enemy.combatant.hp, 26);
        assert!(!taken.died);
        assert!(enemy.combatant.hit_flash > 0.0);
    }

    #[test]
    fn test_receive_damage_floor_of_one() {
        let mut player = warrior();
        let taken = player.combatant.receive_damage(0);
        assert_eq!(taken.realized, 1);
        assert_eq!(player.combatant.hp, 119);
    }

    #[test]
    fn test_death_signal_fires_once() {
        let mut enemy = wolf();
        enemy.combatant.hp = 5;
        let first = enemy.combatant.receive_damage(30);
        assert_eq!(enemy.combatant.hp, 0);
        assert!(first.died);
        assert!(!enemy.combatant.is_alive());

        let second = enemy.combatant.receive_damage(30);
        assert!(!second.died);
        assert_eq!(enemy.combatant.hp, 0);
        assert!(!enemy.combatant.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = warrior();
        player.combatant.hp = 100;
        assert_eq!(player.combatant.heal(50), 20);
        assert_eq!(player.combatant.hp, 120);
    }

    #[test]
    fn test_heal_does_not_revive() {
        let mut enemy = wolf();
        enemy.combatant.receive_damage(1000);
        assert_eq!(enemy.combatant.heal(20), 0);
        assert_eq!(enemy.combatant.hp, 0);
        assert!(!enemy.combatant.is_alive());
    }

    #[test]
    fn test_player_level_up() {
        let mut player = warrior();
        player.combatant.hp = 10;
        player.combatant.level_up();
        assert_eq!(player.combatant.level, 2);
        assert_eq!(player.combatant.hp_max, 130);
        assert_eq!(player.combatant.hp, 130);
        assert_eq!(player.combatant.atk, 17);
        assert_eq!(player.combatant.defense, 11);
    }

    #[test]
    fn test_enemy_level_up_is_noop() {
        let mut enemy = wolf();
        enemy.combatant.level_up();
        assert_eq!(enemy.combatant.level, 1);
        assert_eq!(enemy.combatant.hp_max, 40);
        assert_eq!(enemy.combatant.atk, 10);
    }

    #[test]
    fn test_strike_without_crit() {
        let player = warrior();
        let mut enemy = wolf();
        let outcome = strike(&player.combatant, &mut enemy.combatant, false);
        assert_eq!(outcome.damage, 14);
        assert!(!outcome.is_crit);
        assert_eq!(enemy.combatant.hp, 26);
    }

    #[test]
    fn test_strike_crit_doubles_before_defense() {
        let player = warrior();
        let mut enemy = wolf();
        let outcome = strike(&player.combatant, &mut enemy.combatant, true);
        // 15 * 2 - 2 / 2
        assert_eq!(outcome.damage, 29);
        assert_eq!(enemy.combatant.hp, 11);
    }

    #[test]
    fn test_attack_uses_injected_rng() {
        let player = warrior();

        // StepRng at u64::MAX never falls under the 10% threshold
        let mut never = StepRng::new(u64::MAX, 0);
        let mut enemy = wolf();
        assert!(!attack(&player.combatant, &mut enemy.combatant, &mut never).is_crit);

        let mut always = StepRng::new(0, 0);
        let mut enemy = wolf();
        assert!(attack(&player.combatant, &mut enemy.combatant, &mut always).is_crit);
    }

    #[test]
    fn test_try_level_up_resets_experience() {
        let mut player = warrior();
        player.combatant.experience = 100;
        player.grant_reward(Reward::new(20, 50));
        assert_eq!(player.gold, STARTING_GOLD + 20);
        assert!(player.try_level_up());
        assert_eq!(player.combatant.level, 2);
        assert_eq!(player.combatant.experience, 0);
        assert!(!player.try_level_up());
    }

    #[test]
    fn test_try_level_up_below_threshold() {
        let mut player = warrior();
        player.combatant.experience = 99;
        assert!(!player.try_level_up());
        assert_eq!(player.combatant.experience, 99);
    }

    #[test]
    fn test_xp_threshold_scales_with_level() {
        assert_eq!(xp_threshold(1), 100);
        assert_eq!(xp_threshold(3), 300);
    }
}
