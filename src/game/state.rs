//! Game state and turn resolution.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::game::{
    blow_damage, Direction, Event, FinalStats, FixedFloorGenerator, Floor,
    FloorGenerator, ItemKind, MeleeResult, Player, Position,
};

/// Outcome of a single [`GameState::advance_turn`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Everything that happened, in resolution order.
    pub events: Vec<Event>,
    /// Whether the driver should stop (turn limit reached or player dead).
    pub finished: bool,
}

impl Turn {
    /// A turn that changed nothing and asks the driver to stop.
    fn noop() -> Self {
        Self {
            events: Vec::new(),
            finished: true,
        }
    }
}

/// Complete simulator state.
///
/// Generic over the floor generation strategy; the stock harness uses
/// [`FixedFloorGenerator`].
#[derive(Debug, Clone)]
pub struct GameState<G = FixedFloorGenerator> {
    /// Rules this simulation runs with.
    pub config: SimConfig,
    /// The player.
    pub player: Player,
    /// Current floor contents.
    pub floor: Floor,
    /// Completed turns. Never exceeds `config.max_turns`.
    pub turn: u32,
    /// Set once the player dies. Nothing changes afterwards.
    pub game_over: bool,
    generator: G,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Create a simulator using the fixed floor fixtures.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self::with_generator(config, FixedFloorGenerator::new(config.floor_center))
    }
}

impl<G: FloorGenerator> GameState<G> {
    /// Create a simulator with a custom floor generator.
    ///
    /// The state is ready to play on floor 1 immediately.
    #[must_use]
    pub fn with_generator(config: SimConfig, generator: G) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let floor = generator.generate(1, &mut rng);
        let player = Player::new(floor.entry, config.player_max_hp);

        Self {
            config,
            player,
            floor,
            turn: 0,
            game_over: false,
            generator,
            rng,
        }
    }

    /// Reset to the first floor with a fresh player.
    ///
    /// Returns the start-of-game event.
    pub fn initialize(&mut self) -> Vec<Event> {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.floor = self.generator.generate(1, &mut self.rng);
        self.player = Player::new(self.floor.entry, self.config.player_max_hp);
        self.turn = 0;
        self.game_over = false;

        log::info!(
            "starting on floor {} with {} enemies",
            self.floor.number,
            self.floor.living_enemies()
        );

        vec![Event::GameStarted {
            floor: self.floor.number,
            hp: self.player.hp,
            max_hp: self.player.max_hp,
        }]
    }

    /// Current turn counter.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Current floor number.
    #[must_use]
    pub const fn floor_number(&self) -> u32 {
        self.floor.number
    }

    /// Whether further turns are ignored.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.game_over || self.turn >= self.config.max_turns
    }

    /// Summary of the run so far.
    #[must_use]
    pub const fn final_stats(&self) -> FinalStats {
        FinalStats {
            floors_cleared: self.floor.number.saturating_sub(1),
            kills: self.player.kills,
            hp: self.player.hp,
            max_hp: self.player.max_hp,
            score: self.player.score,
            game_over: self.game_over,
        }
    }

    /// Resolve one turn with the player stepping in `dir`.
    ///
    /// Order: player move or melee, item pickup, enemy phase, death check,
    /// stairs check, turn counter. Once the game is over or the turn limit
    /// is reached this does nothing.
    pub fn advance_turn(&mut self, dir: Direction) -> Turn {
        if self.is_finished() {
            return Turn::noop();
        }

        let mut events = Vec::new();
        let destination = self.player.pos + dir;
        events.push(Event::TurnStarted {
            turn: self.turn + 1,
            destination,
        });
        log::debug!("turn {}: player heads to {destination}", self.turn + 1);

        self.player_phase(destination, &mut events);

        if self.enemy_phase(&mut events) {
            self.game_over = true;
            log::warn!("player died on turn {}", self.turn + 1);
            events.push(Event::PlayerDied);
            events.push(Event::FinalStats(self.final_stats()));
            return Turn {
                events,
                finished: true,
            };
        }

        if self.stairs_reached() {
            self.descend(&mut events);
        }

        self.turn += 1;

        #[cfg(debug_assertions)]
        for violation in crate::game::check_invariants(self) {
            log::error!("{violation}");
        }

        if self.turn >= self.config.max_turns {
            log::info!("turn limit {} reached", self.config.max_turns);
            events.push(Event::SimulationCompleted);
            events.push(Event::FinalStats(self.final_stats()));
            return Turn {
                events,
                finished: true,
            };
        }

        Turn {
            events,
            finished: false,
        }
    }

    /// Bump-attack a living enemy on `destination`, or move there and pick
    /// up whatever lies on the tile.
    fn player_phase(&mut self, destination: Position, events: &mut Vec<Event>) {
        if let Some(idx) = self.floor.living_enemy_at(destination) {
            let result = self.strike_enemy(idx);
            let enemy = self.floor.enemies[idx];
            events.push(Event::PlayerAttacked {
                enemy: enemy.kind,
                damage: result.damage,
                hp: result.remaining_hp,
                max_hp: enemy.max_hp,
            });
            if result.killed {
                self.player.add_kill();
                events.push(Event::EnemyKilled {
                    enemy: enemy.kind,
                    kills: self.player.kills,
                });
            }
            return;
        }

        self.player.pos = destination;

        let Some(idx) = self.floor.available_item_at(destination) else {
            return;
        };
        let item = &mut self.floor.items[idx];
        item.collect();
        let kind = item.kind;
        events.push(Event::ItemPickedUp { item: kind });

        match kind {
            ItemKind::HealthPotion => {
                let amount = self.player.heal(self.config.potion_heal);
                events.push(Event::Healed {
                    amount,
                    hp: self.player.hp,
                    max_hp: self.player.max_hp,
                });
            }
            ItemKind::Gold => {
                self.player.add_score(self.config.gold_value);
                events.push(Event::GoldCollected {
                    amount: self.config.gold_value,
                    score: self.player.score,
                });
            }
        }
    }

    fn strike_enemy(&mut self, idx: usize) -> MeleeResult {
        let enemy = &mut self.floor.enemies[idx];
        let damage = blow_damage(self.config.player_attack, enemy.defense);
        let killed = enemy.take_damage(damage);
        MeleeResult {
            damage,
            remaining_hp: enemy.hp,
            killed,
        }
    }

    /// Let every living enemy act in spawn order.
    ///
    /// Returns `true` if the player died; later enemies do not act.
    fn enemy_phase(&mut self, events: &mut Vec<Event>) -> bool {
        let target = self.player.pos;

        for enemy in self.floor.enemies.iter_mut().filter(|e| e.is_alive()) {
            let distance = enemy.pos.manhattan(target);

            if distance <= 1 {
                let damage = blow_damage(enemy.attack, self.config.player_defense);
                let died = self.player.take_damage(damage);
                events.push(Event::EnemyAttacked {
                    enemy: enemy.kind,
                    damage,
                    hp: self.player.hp,
                    max_hp: self.player.max_hp,
                });
                if died {
                    return true;
                }
            } else if distance <= u64::from(self.config.chase_radius) {
                enemy.pos = enemy.pos.step_toward(target);
                log::trace!("{} steps to {}", enemy.kind, enemy.pos);
                events.push(Event::EnemyMoved {
                    enemy: enemy.kind,
                    to: enemy.pos,
                });
            }
        }

        false
    }

    /// Stairs are scripted: they appear on a fixed turn, wherever the
    /// player stands.
    const fn stairs_reached(&self) -> bool {
        self.turn == self.config.stairs_turn
    }

    fn descend(&mut self, events: &mut Vec<Event>) {
        let next = self.floor.number + 1;
        self.floor = self.generator.generate(next, &mut self.rng);
        self.player.pos = self.floor.entry;
        log::info!(
            "descended to floor {next} with {} enemies",
            self.floor.living_enemies()
        );
        events.push(Event::FloorAdvanced { floor: next });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Enemy, EnemyKind, Item, Vitality};
    use rand::RngCore;

    fn create_test_game() -> GameState {
        let mut game = GameState::new(SimConfig::default());
        game.initialize();
        game
    }

    /// Generator that leaves floors empty so tests can place fixtures by hand.
    #[derive(Debug, Clone, Copy)]
    struct EmptyFloors;

    impl FloorGenerator for EmptyFloors {
        fn generate(&self, floor: u32, _rng: &mut dyn RngCore) -> Floor {
            Floor {
                number: floor,
                entry: Position::new(0, 0),
                enemies: Vec::new(),
                items: Vec::new(),
            }
        }
    }

    fn empty_game(config: SimConfig) -> GameState<EmptyFloors> {
        GameState::with_generator(config, EmptyFloors)
    }

    #[test]
    fn test_initialize() {
        let mut game = GameState::new(SimConfig::default());
        let events = game.initialize();
        assert_eq!(
            events,
            vec![Event::GameStarted {
                floor: 1,
                hp: 20,
                max_hp: 20
            }]
        );
        assert_eq!(game.player.pos, Position::new(30, 30));
        assert_eq!(game.turn(), 0);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_move_into_slime_attacks_without_moving() {
        let mut game = create_test_game();
        game.player.pos = Position::new(34, 30);

        let turn = game.advance_turn(Direction::RIGHT);

        assert_eq!(game.player.pos, Position::new(34, 30));
        assert_eq!(game.floor.enemies[0].hp, 2);
        assert!(game.floor.enemies[0].is_alive());
        assert_eq!(game.player.kills, 0);
        assert_eq!(
            turn.events[1],
            Event::PlayerAttacked {
                enemy: EnemyKind::Slime,
                damage: 3,
                hp: 2,
                max_hp: 5
            }
        );
        // The slime is adjacent and hits back for max(1, 2 - 1)
        assert_eq!(game.player.hp, 19);
    }

    #[test]
    fn test_second_attack_kills_slime() {
        let mut game = create_test_game();
        game.player.pos = Position::new(34, 30);

        game.advance_turn(Direction::RIGHT);
        let turn = game.advance_turn(Direction::RIGHT);

        let slime = game.floor.enemies[0];
        assert_eq!(slime.hp, -1);
        assert_eq!(slime.vitality, Vitality::Dead);
        assert_eq!(game.player.kills, 1);
        assert!(turn.events.contains(&Event::EnemyKilled {
            enemy: EnemyKind::Slime,
            kills: 1
        }));
        // Dead enemies do not retaliate
        assert_eq!(game.player.hp, 19);
        assert_eq!(game.floor.enemies.len(), 1);
    }

    #[test]
    fn test_dead_enemy_tile_is_walkable() {
        let mut game = create_test_game();
        game.player.pos = Position::new(34, 30);
        game.advance_turn(Direction::RIGHT);
        game.advance_turn(Direction::RIGHT);

        game.advance_turn(Direction::RIGHT);
        assert_eq!(game.player.pos, Position::new(35, 30));
        assert_eq!(game.player.kills, 1);
    }

    #[test]
    fn test_gold_pickup() {
        let mut game = create_test_game();
        game.player.pos = Position::new(28, 27);

        let turn = game.advance_turn(Direction::DOWN);

        assert_eq!(game.player.pos, Position::new(28, 28));
        assert_eq!(game.player.score, 10);
        assert!(!game.floor.items[1].is_available());
        assert_eq!(turn.events[1], Event::ItemPickedUp { item: ItemKind::Gold });
        assert_eq!(
            turn.events[2],
            Event::GoldCollected {
                amount: 10,
                score: 10
            }
        );
    }

    #[test]
    fn test_collected_item_is_ignored() {
        let mut game = create_test_game();
        game.player.pos = Position::new(28, 27);
        game.advance_turn(Direction::DOWN);
        game.advance_turn(Direction::UP);
        game.advance_turn(Direction::DOWN);
        assert_eq!(game.player.score, 10);
    }

    #[test]
    fn test_potion_heal_capped() {
        let mut game = create_test_game();
        game.player.pos = Position::new(31, 32);
        game.player.hp = 15;

        let turn = game.advance_turn(Direction::RIGHT);

        assert_eq!(game.player.hp, 20);
        assert_eq!(
            turn.events[2],
            Event::Healed {
                amount: 5,
                hp: 20,
                max_hp: 20
            }
        );
        assert_eq!(game.player.score, 0);
    }

    #[test]
    fn test_enemy_chases_within_radius() {
        let mut game = create_test_game();
        let turn = game.advance_turn(Direction::RIGHT);

        assert_eq!(game.floor.enemies[0].pos, Position::new(34, 30));
        assert!(turn.events.contains(&Event::EnemyMoved {
            enemy: EnemyKind::Slime,
            to: Position::new(34, 30)
        }));
    }

    #[test]
    fn test_enemy_ignores_distant_player() {
        let mut game = create_test_game();
        game.player.pos = Position::new(0, 0);
        game.advance_turn(Direction::LEFT);
        assert_eq!(game.floor.enemies[0].pos, Position::new(35, 30));
    }

    #[test]
    fn test_stairs_on_fixed_turn() {
        let mut game = create_test_game();
        game.turn = 5;
        game.player.pos = Position::new(0, 0);
        game.floor.items[0].collect();

        let turn = game.advance_turn(Direction::RIGHT);

        assert_eq!(game.floor_number(), 2);
        assert_eq!(game.player.pos, Position::new(30, 30));
        assert_eq!(game.floor.enemies.len(), 1);
        assert_eq!(game.floor.enemies[0].pos, Position::new(35, 30));
        assert!(game.floor.items.iter().all(Item::is_available));
        assert_eq!(game.turn(), 6);
        assert!(turn.events.contains(&Event::FloorAdvanced { floor: 2 }));
    }

    #[test]
    fn test_no_stairs_on_other_turns() {
        let mut game = create_test_game();
        for _ in 0..5 {
            game.advance_turn(Direction::new(0, 0));
            assert_eq!(game.floor_number(), 1);
        }
    }

    #[test]
    fn test_turn_limit_finishes() {
        let mut game = create_test_game();
        game.player.pos = Position::new(-100, -100);
        game.turn = 9;

        let turn = game.advance_turn(Direction::UP);

        assert!(turn.finished);
        assert_eq!(game.turn(), 10);
        assert_eq!(turn.events[turn.events.len() - 2], Event::SimulationCompleted);
        assert!(matches!(turn.events.last(), Some(Event::FinalStats(_))));

        let after = game.advance_turn(Direction::UP);
        assert_eq!(after, Turn::noop());
        assert_eq!(game.turn(), 10);
        assert_eq!(game.player.pos, Position::new(-100, -101));
    }

    #[test]
    fn test_player_death_short_circuits() {
        let mut game = empty_game(SimConfig::default());
        game.player.hp = 1;
        game.floor.enemies = vec![
            Enemy::spawn(EnemyKind::Skeleton, Position::new(1, 0)),
            Enemy::spawn(EnemyKind::Slime, Position::new(3, 0)),
        ];

        let turn = game.advance_turn(Direction::new(0, 0));

        assert!(turn.finished);
        assert!(game.game_over);
        assert_eq!(game.player.hp, 0);
        // Second enemy never got to move
        assert_eq!(game.floor.enemies[1].pos, Position::new(3, 0));
        assert_eq!(game.turn(), 0);
        assert_eq!(
            turn.events[turn.events.len() - 2..],
            [
                Event::PlayerDied,
                Event::FinalStats(FinalStats {
                    floors_cleared: 0,
                    kills: 0,
                    hp: 0,
                    max_hp: 20,
                    score: 0,
                    game_over: true,
                })
            ]
        );
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let mut game = empty_game(SimConfig::default());
        game.player.hp = 1;
        game.floor.enemies = vec![Enemy::spawn(EnemyKind::Slime, Position::new(0, 1))];
        game.advance_turn(Direction::new(0, 0));
        assert!(game.game_over);

        let player = game.player;
        let floor = game.floor.clone();
        let turn = game.advance_turn(Direction::RIGHT);

        assert!(turn.events.is_empty());
        assert!(turn.finished);
        assert_eq!(game.player, player);
        assert_eq!(game.floor, floor);
    }

    #[test]
    fn test_skeleton_retaliation_damage() {
        let mut game = empty_game(SimConfig::default());
        game.floor.enemies = vec![Enemy::spawn(EnemyKind::Skeleton, Position::new(1, 1))];
        game.advance_turn(Direction::DOWN);
        assert_eq!(game.player.hp, 18);
    }

    #[test]
    fn test_extreme_direction_saturates() {
        let mut game = create_test_game();

        let turn = game.advance_turn(Direction::new(i32::MIN, 0));

        assert_eq!(game.player.pos, Position::new(i32::MIN, 30));
        assert_eq!(
            turn.events[0],
            Event::TurnStarted {
                turn: 1,
                destination: Position::new(i32::MIN, 30)
            }
        );
        assert_eq!(game.player.hp, 20);
        assert_eq!(game.floor.enemies[0].pos, Position::new(35, 30));
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_enemy_across_grid_is_not_adjacent() {
        let mut game = empty_game(SimConfig::default());
        game.player.pos = Position::new(i32::MIN, 0);
        game.floor.enemies = vec![Enemy::spawn(EnemyKind::Slime, Position::new(i32::MAX, 0))];

        let turn = game.advance_turn(Direction::new(0, 0));

        assert_eq!(game.player.hp, 20);
        assert_eq!(game.floor.enemies[0].pos, Position::new(i32::MAX, 0));
        assert_eq!(turn.events.len(), 1);
    }

    #[test]
    fn test_initialize_restarts() {
        let mut game = create_test_game();
        game.player.pos = Position::new(28, 27);
        game.advance_turn(Direction::DOWN);
        assert_eq!(game.player.score, 10);

        game.initialize();
        assert_eq!(game.player.score, 0);
        assert_eq!(game.turn(), 0);
        assert!(game.floor.items.iter().all(Item::is_available));
    }
}
