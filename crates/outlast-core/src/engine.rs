//! Game state - the aggregate the game loop owns and steps once per frame

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::*;
use crate::config::{BalanceConfig, Restoration};
use crate::error::{Result, Shortfall};
use crate::generation::{generate_world, spawn_object, Terrain, WorldConfig, WorldLayout};
use crate::items::{Catalog, ItemKind};
use crate::systems::*;

/// What happened during one [`GameState::update`]
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Player died and respawned with reduced needs. The presentation layer
    /// decides where the player reappears.
    pub died: bool,
    /// Cook and boil outputs credited this tick
    pub cooked: Vec<ItemKind>,
    pub near_campfire: bool,
    pub speed_multiplier: f32,
}

/// Everything one survival session owns
pub struct GameState {
    /// ECS world containing every world object
    pub world: World,
    pub player: Player,
    pub cooking: CookingScheduler,
    pub catalog: Catalog,
    pub config: BalanceConfig,
    pub layout: Option<WorldLayout>,
    rng: StdRng,
    /// Seconds since the session started
    clock: f64,
    near_campfire: Option<Entity>,
    speed_multiplier: f32,
}

impl GameState {
    /// New session with an empty world and a player holding the starting kit.
    pub fn new(config: BalanceConfig, seed: u64) -> Result<Self> {
        let catalog = Catalog::standard().with_recipe_overrides(&config.recipes)?;
        let player = Player::with_kit(&catalog, config.starting_kit)?;
        Ok(Self {
            world: World::new(),
            player,
            cooking: CookingScheduler::new(&config.cooking),
            catalog,
            config,
            layout: None,
            rng: StdRng::seed_from_u64(seed),
            clock: 0.0,
            near_campfire: None,
            speed_multiplier: 1.0,
        })
    }

    /// Populate the world around the origin.
    pub fn generate(&mut self, world_config: &WorldConfig, terrain: &impl Terrain) {
        let layout = generate_world(&mut self.world, world_config, terrain, &mut self.rng);
        self.layout = Some(layout);
    }

    /// Advance the session by `delta_seconds`: needs, cooking, animals,
    /// then campfire proximity.
    pub fn update(&mut self, delta_seconds: f32) -> Result<TickReport> {
        let dt = delta_seconds.max(0.0);
        self.clock += dt as f64;

        let needs = needs_system(&mut self.player, &self.config.needs, dt);
        self.speed_multiplier = needs.speed_multiplier;

        let cooked = cooking_system(
            &mut self.cooking,
            &mut self.player.inventory,
            &self.catalog,
            self.clock,
        )?;

        wandering_system(
            &mut self.world,
            self.clock,
            dt,
            &self.config.wander,
            &mut self.rng,
        );

        self.near_campfire = near_campfire(
            &self.world,
            self.player.position,
            self.config.cooking.proximity_bonus,
        );

        Ok(TickReport {
            died: needs.died,
            cooked,
            near_campfire: self.near_campfire.is_some(),
            speed_multiplier: needs.speed_multiplier,
        })
    }

    /// Act on `target` with the equipped item.
    pub fn interact(&mut self, target: Entity) -> Result<InteractionOutcome> {
        let ctx = Interactor {
            catalog: &self.catalog,
            inventory: &mut self.player.inventory,
            cooking: &mut self.cooking,
            position: self.player.position,
            campfire_bonus: self.config.cooking.proximity_bonus,
            now: self.clock,
            rng: &mut self.rng,
        };
        interact(&mut self.world, target, ctx)
    }

    /// Act on the closest reachable object. `None` when nothing is in reach.
    pub fn interact_nearest(&mut self) -> Result<Option<InteractionOutcome>> {
        match self.nearest_interactable() {
            Some(target) => self.interact(target).map(Some),
            None => Ok(None),
        }
    }

    pub fn nearest_interactable(&self) -> Option<Entity> {
        nearest_interactable_in(
            &self.world,
            self.player.position,
            self.config.interaction.range_bonus,
        )
    }

    pub fn craft(&mut self, kind: ItemKind) -> Result<()> {
        try_craft(&self.catalog, &mut self.player.inventory, kind)
    }

    pub fn craftable(&self) -> Vec<ItemKind> {
        craftable(&self.catalog, &self.player.inventory)
    }

    /// Ingredients still missing for `kind`.
    pub fn shortfall(&self, kind: ItemKind) -> Result<Vec<Shortfall>> {
        let recipe = self.catalog.recipe(kind)?;
        Ok(shortfall(recipe, &self.player.inventory))
    }

    pub fn consume(&mut self, kind: ItemKind) -> Result<Option<Restoration>> {
        consume(&mut self.player, &self.config.consumption, kind)
    }

    /// Eat or drink whatever is equipped.
    pub fn consume_equipped(&mut self) -> Result<Option<Restoration>> {
        match self.player.inventory.equipped() {
            Some(kind) => self.consume(kind),
            None => Ok(None),
        }
    }

    /// Put the equipped placeable down at `position`. `None` with empty hands.
    pub fn place(&mut self, position: Vec3) -> Result<Option<Entity>> {
        let Some(item) = self.player.inventory.equipped() else {
            return Ok(None);
        };
        place(&mut self.world, &mut self.player.inventory, item, position).map(Some)
    }

    /// Spawn a world object directly, outside world generation.
    pub fn spawn(&mut self, kind: ObjectKind, position: Vec3) -> Entity {
        spawn_object(&mut self.world, kind, position)
    }

    pub fn select_slot(&mut self, index: usize) -> Result<()> {
        self.player.inventory.select_slot(index)
    }

    pub fn cycle_slot(&mut self, delta: i32) {
        self.player.inventory.cycle_slot(delta);
    }

    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.player.sprinting = sprinting;
    }

    /// Walk by `displacement`, scaled by the current sprint multiplier.
    /// Returns false and stays put when the destination is blocked.
    pub fn move_player(&mut self, displacement: Vec3) -> bool {
        let target = self.player.position + displacement * self.speed_multiplier;
        if is_blocked(&self.world, target, self.config.interaction.player_radius) {
            return false;
        }
        self.player.position = target;
        true
    }

    /// Seconds since the session started
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn near_campfire(&self) -> Option<Entity> {
        self.near_campfire
    }

    pub fn object_count(&self) -> usize {
        self.world.query::<&WorldObject>().iter().count()
    }

    pub fn count_of(&self, kind: ObjectKind) -> usize {
        self.world
            .query::<&WorldObject>()
            .iter()
            .filter(|(_, obj)| obj.kind == kind)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartingKit;
    use crate::generation::FlatTerrain;

    fn game() -> GameState {
        GameState::new(BalanceConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = game();
        assert_eq!(game.object_count(), 0);
        assert_eq!(game.clock(), 0.0);
        assert_eq!(game.player.inventory.equipped(), Some(ItemKind::Axe));
        assert_eq!(game.player.inventory.count(ItemKind::Wood), 5);
    }

    #[test]
    fn test_game_generation() {
        let mut game = game();
        game.generate(&WorldConfig::default(), &FlatTerrain::default());
        assert!(game.object_count() > 0);
        let layout = game.layout.as_ref().unwrap();
        assert_eq!(game.count_of(ObjectKind::Building), layout.buildings.len());
    }

    #[test]
    fn test_game_update_advances_clock() {
        let mut game = game();
        game.generate(&WorldConfig::default(), &FlatTerrain::default());
        for _ in 0..600 {
            game.update(0.1).unwrap();
        }
        assert!((game.clock() - 60.0).abs() < 0.01);
        assert!((game.player.vitals.hunger - 97.0).abs() < 0.05);
    }

    #[test]
    fn test_cook_at_campfire_through_update() {
        let config = BalanceConfig {
            starting_kit: StartingKit::Plenty,
            ..Default::default()
        };
        let mut game = GameState::new(config, 1).unwrap();
        let fire = game.spawn(ObjectKind::Campfire, Vec3::new(2.0, 0.0, 0.0));

        let report = game.update(0.1).unwrap();
        assert!(report.near_campfire);
        assert_eq!(game.near_campfire(), Some(fire));

        let slot = game.player.inventory.slot_of(ItemKind::RawMeat).unwrap();
        game.select_slot(slot).unwrap();
        assert_eq!(
            game.interact(fire).unwrap(),
            InteractionOutcome::Cooking {
                item: ItemKind::RawMeat
            }
        );

        let mut cooked = Vec::new();
        while game.clock() < 40.0 {
            cooked.extend(game.update(1.0).unwrap().cooked);
        }
        assert_eq!(cooked, vec![ItemKind::CookedMeat]);
        assert_eq!(game.player.inventory.count(ItemKind::CookedMeat), 1);
        assert_eq!(game.player.inventory.count(ItemKind::RawMeat), 4);
    }

    #[test]
    fn test_move_player_respects_blockers_and_sprint() {
        let mut game = game();
        game.spawn(ObjectKind::Rock, Vec3::new(3.0, 0.0, 0.0));

        assert!(game.move_player(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!game.move_player(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(game.player.position, Vec3::new(1.0, 0.0, 0.0));

        game.set_sprinting(true);
        let report = game.update(0.1).unwrap();
        assert_eq!(report.speed_multiplier, 1.5);
        assert!(game.move_player(Vec3::new(0.0, 0.0, 2.0)));
        assert_eq!(game.player.position, Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_place_equipped() {
        let mut game = game();
        game.player
            .inventory
            .add(&game.catalog, ItemKind::CraftingTable, 1)
            .unwrap();
        let slot = game.player.inventory.slot_of(ItemKind::CraftingTable).unwrap();
        game.select_slot(slot).unwrap();

        let table = game.place(Vec3::new(5.0, 0.0, 5.0)).unwrap().unwrap();
        assert_eq!(game.count_of(ObjectKind::CraftingTable), 1);
        assert_eq!(game.player.inventory.count(ItemKind::CraftingTable), 0);
        assert!(game.world.contains(table));
        assert_eq!(game.place(Vec3::ZERO).unwrap(), None);
    }

    #[test]
    fn test_interact_nearest_out_of_reach() {
        let mut game = game();
        game.spawn(ObjectKind::Tree, Vec3::new(20.0, 0.0, 0.0));
        assert_eq!(game.interact_nearest().unwrap(), None);
    }

    #[test]
    fn test_recipe_override_from_config() {
        let config = BalanceConfig::from_json(r#"{ "recipes": { "axe": { "wood": 1 } } }"#).unwrap();
        let mut game = GameState::new(config, 0).unwrap();
        game.craft(ItemKind::Axe).unwrap();
        assert_eq!(game.player.inventory.count(ItemKind::Axe), 2);
        assert_eq!(game.player.inventory.count(ItemKind::Wood), 4);
        assert_eq!(game.player.inventory.count(ItemKind::Stone), 3);
    }

    #[test]
    fn test_inverted_wander_ranges_from_config() {
        let config = BalanceConfig::from_json(
            r#"{ "wander": { "min_speed": 5.0, "min_hold_secs": 20.0 } }"#,
        )
        .unwrap();
        let mut game = GameState::new(config, 3).unwrap();
        let deer = game.spawn(ObjectKind::Animal, Vec3::new(10.0, 0.0, 0.0));

        game.update(0.1).unwrap();

        let wander = *game.world.get::<&Wander>(deer).unwrap();
        assert!((3.0..=5.0).contains(&wander.speed));
        assert!((10.0..=20.0).contains(&wander.hold_for));
    }
}
