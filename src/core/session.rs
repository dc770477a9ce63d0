//! Game-flow state machine.
//!
//! A [`Session`] owns all game data and is threaded explicitly through
//! input handling and the per-tick update. Exactly one [`GameFlow`] state is
//! active; every transition runs the old state's exit hook and then the new
//! state's enter hook.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::GameConfig;
use super::constants::*;
use super::error::GameError;
use super::input::Input;
use super::menu::{MainMenuOption, MenuCursor, PauseOption};
use crate::character::{CreationForm, Enemy, EnemyId, Player, PlayerClass, Position};
use crate::combat::{
    acknowledge, process_action, update_combat, CombatAction, CombatOutcome, CombatState,
};
use crate::exploration::{spawn_roster, tick_exploration, Direction, World};
use crate::items::{consume_at, starting_kit};
use crate::quests::wolf_hunt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameFlow {
    MainMenu,
    CharacterCreation,
    Exploring,
    Combat,
    Inventory,
    Paused,
    GameOver,
}

impl GameFlow {
    pub fn name(&self) -> &'static str {
        match self {
            GameFlow::MainMenu => "Main Menu",
            GameFlow::CharacterCreation => "Character Creation",
            GameFlow::Exploring => "Exploring",
            GameFlow::Combat => "Combat",
            GameFlow::Inventory => "Inventory",
            GameFlow::Paused => "Paused",
            GameFlow::GameOver => "Game Over",
        }
    }

    /// Transition table. Any state may navigate back to the main menu.
    pub fn can_transition_to(&self, to: GameFlow) -> bool {
        use GameFlow::*;
        matches!(
            (*self, to),
            (_, MainMenu)
                | (MainMenu, CharacterCreation)
                | (CharacterCreation, Exploring)
                | (Exploring, Combat)
                | (Exploring, Inventory)
                | (Exploring, Paused)
                | (Combat, Exploring)
                | (Combat, GameOver)
                | (Inventory, Exploring)
                | (Paused, Exploring)
        )
    }
}

impl fmt::Display for GameFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a running game owns.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    flow: GameFlow,
    pub player: Option<Player>,
    /// Set only while in Combat.
    current_enemy: Option<EnemyId>,
    pub world: World,
    pub combat: CombatState,
    pub creation: CreationForm,
    pub main_menu: MenuCursor,
    pub pause_menu: MenuCursor,
    pub inventory_cursor: MenuCursor,
    /// Transient line shown by menus and the inventory.
    pub status_message: Option<String>,
    running: bool,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(config.world_width, config.world_height),
            combat: CombatState::new(config.animation_delay),
            config,
            flow: GameFlow::MainMenu,
            player: None,
            current_enemy: None,
            creation: CreationForm::new(),
            main_menu: MenuCursor::default(),
            pause_menu: MenuCursor::default(),
            inventory_cursor: MenuCursor::default(),
            status_message: None,
            running: true,
        }
    }

    pub fn flow(&self) -> GameFlow {
        self.flow
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_enemy_id(&self) -> Option<EnemyId> {
        self.current_enemy
    }

    /// The enemy currently engaged in combat.
    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.world.enemy(self.current_enemy?)
    }

    /// Switches state, running exit then enter hooks.
    pub fn transition(&mut self, to: GameFlow) -> Result<(), GameError> {
        let from = self.flow;
        if !from.can_transition_to(to) {
            tracing::warn!(%from, %to, "rejected transition");
            return Err(GameError::InvalidTransition { from, to });
        }

        let opening_message = if to == GameFlow::Combat {
            let id = self.current_enemy.ok_or(GameError::NoEncounter)?;
            let enemy = self.world.enemy(id).ok_or(GameError::UnknownEnemy(id))?;
            Some(format!("A wild {} appears!", enemy.combatant.name))
        } else {
            None
        };

        self.exit(from);
        self.flow = to;
        self.enter(to, opening_message);
        tracing::debug!(%from, %to, "transition");
        Ok(())
    }

    fn exit(&mut self, state: GameFlow) {
        if state == GameFlow::Combat {
            self.current_enemy = None;
        }
    }

    fn enter(&mut self, state: GameFlow, opening_message: Option<String>) {
        self.status_message = None;
        match state {
            GameFlow::MainMenu => self.main_menu.reset(),
            GameFlow::CharacterCreation => self.creation.reset(),
            GameFlow::Exploring => self.world.keys.clear(),
            GameFlow::Combat => self.combat.reset(opening_message.unwrap_or_default()),
            GameFlow::Inventory => self.inventory_cursor.reset(),
            GameFlow::Paused => self.pause_menu.reset(),
            GameFlow::GameOver => {}
        }
    }

    /// Routes one decoded input to the active state.
    pub fn handle_input(&mut self, input: Input, rng: &mut impl Rng) -> Result<(), GameError> {
        match self.flow {
            GameFlow::MainMenu => self.main_menu_input(input),
            GameFlow::CharacterCreation => self.creation_input(input, rng),
            GameFlow::Exploring => self.exploring_input(input),
            GameFlow::Combat => self.combat_input(input, rng),
            GameFlow::Inventory => self.inventory_input(input),
            GameFlow::Paused => self.pause_input(input),
            GameFlow::GameOver => match input {
                Input::Confirm | Input::Cancel => self.transition(GameFlow::MainMenu),
                _ => Ok(()),
            },
        }
    }

    /// Advances the active state by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f64, rng: &mut impl Rng) -> Result<(), GameError> {
        match self.flow {
            GameFlow::Exploring => {
                let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
                if let Some(id) = tick_exploration(&mut self.world, player, delta_time, rng) {
                    self.current_enemy = Some(id);
                    self.transition(GameFlow::Combat)?;
                }
                Ok(())
            }
            GameFlow::Combat => {
                let id = self.current_enemy.ok_or(GameError::NoEncounter)?;
                let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
                let enemy = self.world.enemy_mut(id).ok_or(GameError::UnknownEnemy(id))?;
                update_combat(&mut self.combat, delta_time, player, enemy, rng);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn main_menu_input(&mut self, input: Input) -> Result<(), GameError> {
        let len = MainMenuOption::ALL.len();
        let chosen = match input {
            Input::Press(Direction::Up) => {
                self.main_menu.step(false, len);
                None
            }
            Input::Press(Direction::Down) => {
                self.main_menu.step(true, len);
                None
            }
            Input::Confirm => Some(self.main_menu.index),
            Input::Select(index) if index < len => {
                self.main_menu.index = index;
                Some(index)
            }
            _ => None,
        };

        match chosen.map(|index| MainMenuOption::ALL[index]) {
            Some(MainMenuOption::NewGame) => self.transition(GameFlow::CharacterCreation),
            Some(MainMenuOption::LoadGame) => {
                self.status_message = Some(PERSISTENCE_UNAVAILABLE_MESSAGE.to_string());
                Ok(())
            }
            Some(MainMenuOption::Quit) => {
                tracing::info!("quit requested");
                self.running = false;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn creation_input(&mut self, input: Input, rng: &mut impl Rng) -> Result<(), GameError> {
        match input {
            Input::Char(c) => self.creation.handle_char_input(c),
            Input::Backspace => self.creation.handle_backspace(),
            Input::Press(Direction::Up | Direction::Left) => self.creation.cycle_class(false),
            Input::Press(Direction::Down | Direction::Right) => self.creation.cycle_class(true),
            Input::Select(index) => self.creation.select_class(index),
            Input::Cancel => return self.transition(GameFlow::MainMenu),
            Input::Confirm => {
                if let Some((name, class)) = self.creation.confirm() {
                    self.start_new_game(name, class, rng);
                    return self.transition(GameFlow::Exploring);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Allocates the session's player and enemy roster.
    fn start_new_game(&mut self, name: String, class: PlayerClass, rng: &mut impl Rng) {
        let mut player = Player::new(name, class, Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        player.inventory = starting_kit();
        player.quests.push(wolf_hunt());
        tracing::info!(name = %player.name(), %class, "new game");
        self.player = Some(player);

        self.world = World::new(self.config.world_width, self.config.world_height);
        spawn_roster(&mut self.world, self.config.enemy_count, rng);
        self.current_enemy = None;
    }

    fn exploring_input(&mut self, input: Input) -> Result<(), GameError> {
        match input {
            Input::Press(direction) => self.world.keys.set(direction, true),
            Input::Release(direction) => self.world.keys.set(direction, false),
            Input::OpenInventory => return self.transition(GameFlow::Inventory),
            Input::Cancel => return self.transition(GameFlow::Paused),
            _ => {}
        }
        Ok(())
    }

    fn combat_input(&mut self, input: Input, rng: &mut impl Rng) -> Result<(), GameError> {
        if self.combat.is_finished() {
            if input != Input::Confirm {
                return Ok(());
            }
            return match acknowledge(&self.combat) {
                Some(CombatOutcome::Victory) => self.transition(GameFlow::Exploring),
                Some(CombatOutcome::Defeat) => self.transition(GameFlow::GameOver),
                None => Ok(()),
            };
        }

        let action = match input {
            Input::Press(Direction::Up | Direction::Left) => {
                self.combat.move_selection(false);
                return Ok(());
            }
            Input::Press(Direction::Down | Direction::Right) => {
                self.combat.move_selection(true);
                return Ok(());
            }
            Input::Confirm => self.combat.selected(),
            Input::Select(index) => match CombatAction::ALL.get(index) {
                Some(action) => {
                    self.combat.selected_action = index;
                    *action
                }
                None => return Ok(()),
            },
            _ => return Ok(()),
        };

        let id = self.current_enemy.ok_or(GameError::NoEncounter)?;
        let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
        let enemy = self.world.enemy_mut(id).ok_or(GameError::UnknownEnemy(id))?;
        process_action(&mut self.combat, action, player, enemy, rng);
        Ok(())
    }

    fn inventory_input(&mut self, input: Input) -> Result<(), GameError> {
        let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
        let len = player.inventory.len();
        match input {
            Input::Press(Direction::Up) => self.inventory_cursor.step(false, len),
            Input::Press(Direction::Down) => self.inventory_cursor.step(true, len),
            Input::Select(index) if index < len => self.inventory_cursor.index = index,
            Input::Confirm => {
                let index = self.inventory_cursor.index;
                self.status_message = Some(match consume_at(player, index) {
                    Some(used) => used.message(),
                    None => match player.inventory.get(index) {
                        Some(item) => format!("{} can't be used.", item.name),
                        None => NO_ITEMS_MESSAGE.to_string(),
                    },
                });
                self.inventory_cursor.clamp(player.inventory.len());
            }
            Input::Cancel | Input::OpenInventory => return self.transition(GameFlow::Exploring),
            _ => {}
        }
        Ok(())
    }

    fn pause_input(&mut self, input: Input) -> Result<(), GameError> {
        let len = PauseOption::ALL.len();
        let chosen = match input {
            Input::Press(Direction::Up) => {
                self.pause_menu.step(false, len);
                None
            }
            Input::Press(Direction::Down) => {
                self.pause_menu.step(true, len);
                None
            }
            Input::Confirm => Some(PauseOption::ALL[self.pause_menu.index]),
            Input::Select(index) => PauseOption::ALL.get(index).copied(),
            Input::Cancel => Some(PauseOption::Resume),
            _ => None,
        };

        match chosen {
            Some(PauseOption::Resume) => self.transition(GameFlow::Exploring),
            Some(PauseOption::SaveGame) => {
                self.status_message = Some(PERSISTENCE_UNAVAILABLE_MESSAGE.to_string());
                Ok(())
            }
            Some(PauseOption::MainMenu) => self.transition(GameFlow::MainMenu),
            None => Ok(()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::EnemyKind;
    use crate::combat::CombatPhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn type_name(session: &mut Session, name: &str, rng: &mut ChaCha8Rng) {
        for c in name.chars() {
            session.handle_input(Input::Char(c), rng).expect("char input");
        }
    }

    fn exploring_session(rng: &mut ChaCha8Rng) -> Session {
        let mut session = Session::default();
        session.handle_input(Input::Confirm, rng).expect("new game");
        type_name(&mut session, "Hero", rng);
        session.handle_input(Input::Select(0), rng).expect("class");
        session.handle_input(Input::Confirm, rng).expect("confirm");
        session
    }

    /// Places a wolf on top of the player and ticks into combat.
    fn combat_session(rng: &mut ChaCha8Rng) -> (Session, EnemyId) {
        let mut session = exploring_session(rng);
        session.world.enemies.clear();
        let id = session.world.next_enemy_id();
        let spawn = Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        session
            .world
            .enemies
            .push(Enemy::from_kind(id, EnemyKind::WildWolf, spawn));
        session.update(0.0, rng).expect("tick");
        (session, id)
    }

    #[test]
    fn test_transition_table() {
        use GameFlow::*;
        assert!(MainMenu.can_transition_to(CharacterCreation));
        assert!(Exploring.can_transition_to(Combat));
        assert!(Combat.can_transition_to(GameOver));
        assert!(Paused.can_transition_to(MainMenu));
        assert!(GameOver.can_transition_to(MainMenu));
        assert!(!MainMenu.can_transition_to(Combat));
        assert!(!Inventory.can_transition_to(Combat));
        assert!(!Paused.can_transition_to(Combat));
        assert!(!CharacterCreation.can_transition_to(GameOver));
    }

    #[test]
    fn test_invalid_transition_is_error() {
        let mut session = Session::default();
        let err = session.transition(GameFlow::Inventory).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidTransition {
                from: GameFlow::MainMenu,
                to: GameFlow::Inventory
            }
        );
        assert_eq!(session.flow(), GameFlow::MainMenu);
    }

    #[test]
    fn test_combat_requires_enemy() {
        let mut rng = rng();
        let mut session = exploring_session(&mut rng);
        assert_eq!(session.transition(GameFlow::Combat), Err(GameError::NoEncounter));
        assert_eq!(session.flow(), GameFlow::Exploring);
    }

    #[test]
    fn test_new_game_creates_player_and_roster() {
        let mut rng = rng();
        let session = exploring_session(&mut rng);
        assert_eq!(session.flow(), GameFlow::Exploring);
        let player = session.player.as_ref().expect("player");
        assert_eq!(player.name(), "Hero");
        assert_eq!(player.class, PlayerClass::Warrior);
        assert_eq!(player.gold, STARTING_GOLD);
        assert_eq!(player.inventory.len(), STARTING_POTIONS);
        assert_eq!(player.quests.len(), 1);
        assert_eq!(player.combatant.position, Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(session.world.enemies.len(), ROSTER_SIZE);
    }

    #[test]
    fn test_creation_confirm_needs_name_and_class() {
        let mut rng = rng();
        let mut session = Session::default();
        session.handle_input(Input::Confirm, &mut rng).expect("new game");
        session.handle_input(Input::Confirm, &mut rng).expect("confirm");
        assert_eq!(session.flow(), GameFlow::CharacterCreation);
        assert!(session.creation.validation_error.is_some());

        session.handle_input(Input::Cancel, &mut rng).expect("cancel");
        assert_eq!(session.flow(), GameFlow::MainMenu);
    }

    #[test]
    fn test_roster_survives_pause_and_inventory() {
        let mut rng = rng();
        let mut session = exploring_session(&mut rng);
        let ids: Vec<EnemyId> = session.world.enemies.iter().map(|e| e.id).collect();

        session.handle_input(Input::Press(Direction::Right), &mut rng).expect("press");
        session.handle_input(Input::Cancel, &mut rng).expect("pause");
        assert_eq!(session.flow(), GameFlow::Paused);
        session.handle_input(Input::Cancel, &mut rng).expect("resume");
        assert_eq!(session.flow(), GameFlow::Exploring);
        // Keys reset on every entry
        assert_eq!(session.world.keys.axis(), (0.0, 0.0));

        session.handle_input(Input::OpenInventory, &mut rng).expect("inventory");
        assert_eq!(session.flow(), GameFlow::Inventory);
        session.handle_input(Input::Cancel, &mut rng).expect("back");

        let after: Vec<EnemyId> = session.world.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn test_collision_enters_combat() {
        let mut rng = rng();
        let (session, id) = combat_session(&mut rng);
        assert_eq!(session.flow(), GameFlow::Combat);
        assert_eq!(session.current_enemy_id(), Some(id));
        assert_eq!(session.combat.phase, CombatPhase::PlayerTurn);
        assert_eq!(session.combat.message, "A wild Wild Wolf appears!");
    }

    #[test]
    fn test_leaving_combat_clears_enemy() {
        let mut rng = rng();
        let (mut session, _) = combat_session(&mut rng);
        session.transition(GameFlow::MainMenu).expect("to menu");
        assert_eq!(session.current_enemy_id(), None);
        assert!(session.current_enemy().is_none());
    }

    #[test]
    fn test_victory_returns_to_exploring() {
        let mut rng = rng();
        let (mut session, id) = combat_session(&mut rng);
        session.world.enemy_mut(id).expect("wolf").combatant.hp = 1;

        session.handle_input(Input::Confirm, &mut rng).expect("attack");
        session.update(1.0, &mut rng).expect("resolve");
        assert_eq!(session.combat.phase, CombatPhase::Victory);

        // Only Confirm leaves a finished fight
        session.handle_input(Input::Cancel, &mut rng).expect("ignored");
        assert_eq!(session.flow(), GameFlow::Combat);
        session.handle_input(Input::Confirm, &mut rng).expect("continue");
        assert_eq!(session.flow(), GameFlow::Exploring);
        assert_eq!(session.current_enemy_id(), None);

        session.update(0.0, &mut rng).expect("tick");
        assert!(session.world.enemy(id).is_none());
    }

    #[test]
    fn test_defeat_goes_to_game_over() {
        let mut rng = rng();
        let (mut session, _) = combat_session(&mut rng);
        session.player.as_mut().expect("player").combatant.hp = 1;

        session.handle_input(Input::Confirm, &mut rng).expect("attack");
        session.update(1.0, &mut rng).expect("enemy turn");
        session.update(1.0, &mut rng).expect("resolve");
        assert_eq!(session.combat.phase, CombatPhase::Defeat);

        session.handle_input(Input::Confirm, &mut rng).expect("continue");
        assert_eq!(session.flow(), GameFlow::GameOver);
        session.handle_input(Input::Confirm, &mut rng).expect("menu");
        assert_eq!(session.flow(), GameFlow::MainMenu);
    }

    #[test]
    fn test_inventory_use_outside_combat() {
        let mut rng = rng();
        let mut session = exploring_session(&mut rng);
        session.player.as_mut().expect("player").combatant.hp = 50;
        session.handle_input(Input::OpenInventory, &mut rng).expect("open");
        session.handle_input(Input::Confirm, &mut rng).expect("use");

        let player = session.player.as_ref().expect("player");
        assert_eq!(player.combatant.hp, 70);
        assert_eq!(player.inventory.len(), STARTING_POTIONS - 1);
        assert_eq!(
            session.status_message.as_deref(),
            Some("You use Health Potion. HP +20")
        );

        session.handle_input(Input::Confirm, &mut rng).expect("use");
        session.handle_input(Input::Confirm, &mut rng).expect("use");
        assert_eq!(session.status_message.as_deref(), Some(NO_ITEMS_MESSAGE));
    }

    #[test]
    fn test_menu_stubs_and_quit() {
        let mut rng = rng();
        let mut session = Session::default();
        session.handle_input(Input::Select(1), &mut rng).expect("load");
        assert_eq!(
            session.status_message.as_deref(),
            Some(PERSISTENCE_UNAVAILABLE_MESSAGE)
        );
        assert_eq!(session.flow(), GameFlow::MainMenu);

        session.handle_input(Input::Press(Direction::Down), &mut rng).expect("down");
        session.handle_input(Input::Confirm, &mut rng).expect("quit");
        assert!(!session.is_running());
    }

    #[test]
    fn test_pause_menu_options() {
        let mut rng = rng();
        let mut session = exploring_session(&mut rng);
        session.handle_input(Input::Cancel, &mut rng).expect("pause");
        session.handle_input(Input::Select(1), &mut rng).expect("save");
        assert_eq!(
            session.status_message.as_deref(),
            Some(PERSISTENCE_UNAVAILABLE_MESSAGE)
        );
        assert_eq!(session.flow(), GameFlow::Paused);
        session.handle_input(Input::Select(2), &mut rng).expect("menu");
        assert_eq!(session.flow(), GameFlow::MainMenu);
    }

    #[test]
    fn test_update_without_player_is_error() {
        let mut session = Session::default();
        session.flow = GameFlow::Exploring;
        assert_eq!(session.update(0.016, &mut rng()), Err(GameError::NoPlayer));
    }
}
