//! Interaction system - the per-object state machine driven by the player's
//! equipped item.
//!
//! Resource nodes and animals are despawned once depleted, containers flip
//! to searched for good, water and campfires never change state. Invalid
//! attempts (wrong tool, already searched, nothing to cook) are not errors:
//! they come back as [`InteractionOutcome::NoEffect`].

use hecs::{Entity, World};
use rand::Rng;

use crate::components::{
    weapon_damage, Durability, InteractionRole, Loot, LootRange, ObjectKind, Position, Vec3,
    WorldObject,
};
use crate::error::{GameError, Result};
use crate::generation::spawn_object;
use crate::inventory::Inventory;
use crate::items::{Catalog, ItemKind};
use crate::systems::cooking::{cook_output, CookingScheduler};

/// Chance that each loot line of a container pays out.
pub const LOOT_PAYOUT_CHANCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoEffectReason {
    WrongTool,
    AlreadySearched,
    NothingToCook,
    TooFar,
    NotInteractable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// Resource node took a hit and is still standing.
    Hit { remaining: i32 },
    /// Resource node gave up its yield and left the world.
    Depleted { item: ItemKind, count: u32 },
    Wounded { remaining: i32 },
    /// Animal died; loot credited and carcass removed.
    Killed { loot: Vec<(ItemKind, u32)> },
    /// Container opened. `loot` may be empty if every line missed.
    Searched { loot: Vec<(ItemKind, u32)> },
    CollectedWater,
    Cooking { item: ItemKind },
    NoEffect(NoEffectReason),
}

impl InteractionOutcome {
    pub fn had_effect(&self) -> bool {
        !matches!(self, Self::NoEffect(_))
    }
}

/// Player-side state an interaction reads and mutates
pub struct Interactor<'a, R: Rng> {
    pub catalog: &'a Catalog,
    pub inventory: &'a mut Inventory,
    pub cooking: &'a mut CookingScheduler,
    pub position: Vec3,
    /// Campfire reach is `size + campfire_bonus`.
    pub campfire_bonus: f32,
    pub now: f64,
    pub rng: &'a mut R,
}

/// Act on `target` with whatever the player has equipped.
pub fn interact<R: Rng>(
    world: &mut World,
    target: Entity,
    ctx: Interactor<'_, R>,
) -> Result<InteractionOutcome> {
    let object = *world
        .get::<&WorldObject>(target)
        .map_err(|_| GameError::NoSuchObject)?;
    if !object.interactable {
        return Ok(InteractionOutcome::NoEffect(NoEffectReason::NotInteractable));
    }
    let equipped = ctx.inventory.equipped();

    match object.kind.behavior().role {
        InteractionRole::Resource(yields) => {
            if yields.tool.is_some() && equipped != yields.tool {
                return Ok(InteractionOutcome::NoEffect(NoEffectReason::WrongTool));
            }
            ctx.catalog.get(yields.output.item)?;
            {
                let mut durability = world
                    .get::<&mut Durability>(target)
                    .map_err(|_| GameError::NoSuchObject)?;
                durability.remaining -= 1;
                if !durability.is_depleted() {
                    let remaining = durability.remaining;
                    log::debug!("hit {} ({remaining} left)", object.kind);
                    return Ok(InteractionOutcome::Hit { remaining });
                }
            }

            let count = yields.output.roll(ctx.rng);
            ctx.inventory.add(ctx.catalog, yields.output.item, count)?;
            despawn(world, target)?;
            log::info!("{} depleted: +{count} {}", object.kind, yields.output.item);
            Ok(InteractionOutcome::Depleted {
                item: yields.output.item,
                count,
            })
        }

        InteractionRole::Animal { loot, .. } => {
            let Some(damage) = equipped.and_then(weapon_damage) else {
                return Ok(InteractionOutcome::NoEffect(NoEffectReason::WrongTool));
            };
            check_known(ctx.catalog, loot)?;
            {
                let mut health = world
                    .get::<&mut Durability>(target)
                    .map_err(|_| GameError::NoSuchObject)?;
                health.remaining -= damage;
                if !health.is_depleted() {
                    let remaining = health.remaining;
                    log::debug!("animal hit for {damage} ({remaining} left)");
                    return Ok(InteractionOutcome::Wounded { remaining });
                }
            }

            let mut credited = Vec::new();
            for line in loot {
                let count = line.roll(ctx.rng);
                if count > 0 {
                    ctx.inventory.add(ctx.catalog, line.item, count)?;
                    credited.push((line.item, count));
                }
            }
            despawn(world, target)?;
            log::info!("animal killed, loot {credited:?}");
            Ok(InteractionOutcome::Killed { loot: credited })
        }

        InteractionRole::Container { .. } => {
            let lines: Vec<LootRange> = {
                let mut loot = world
                    .get::<&mut Loot>(target)
                    .map_err(|_| GameError::NoSuchObject)?;
                if loot.searched {
                    return Ok(InteractionOutcome::NoEffect(NoEffectReason::AlreadySearched));
                }
                check_known(ctx.catalog, &loot.lines)?;
                loot.searched = true;
                std::mem::take(&mut loot.lines)
            };

            let mut credited = Vec::new();
            for line in &lines {
                if !ctx.rng.gen_bool(LOOT_PAYOUT_CHANCE) {
                    continue;
                }
                let count = line.roll(ctx.rng);
                if count > 0 {
                    ctx.inventory.add(ctx.catalog, line.item, count)?;
                    credited.push((line.item, count));
                }
            }
            log::debug!("searched {}, found {credited:?}", object.kind);
            Ok(InteractionOutcome::Searched { loot: credited })
        }

        InteractionRole::Water => {
            if equipped != Some(ItemKind::Canteen) {
                return Ok(InteractionOutcome::NoEffect(NoEffectReason::WrongTool));
            }
            ctx.inventory.add(ctx.catalog, ItemKind::Water, 1)?;
            log::debug!("filled canteen");
            Ok(InteractionOutcome::CollectedWater)
        }

        InteractionRole::Campfire => {
            let fire_pos = world
                .get::<&Position>(target)
                .map_err(|_| GameError::NoSuchObject)?
                .0;
            if ctx.position.distance(&fire_pos) >= object.size + ctx.campfire_bonus {
                return Ok(InteractionOutcome::NoEffect(NoEffectReason::TooFar));
            }
            commit_to_cook(target, equipped, ctx)
        }

        InteractionRole::Structure => {
            Ok(InteractionOutcome::NoEffect(NoEffectReason::NotInteractable))
        }
    }
}

/// Put one unit of the equipped raw meat, or one water when holding the
/// canteen, on `campfire`.
fn commit_to_cook<R: Rng>(
    campfire: Entity,
    equipped: Option<ItemKind>,
    ctx: Interactor<'_, R>,
) -> Result<InteractionOutcome> {
    let item = match equipped {
        Some(ItemKind::RawMeat) => ItemKind::RawMeat,
        Some(ItemKind::Canteen) => ItemKind::Water,
        _ => return Ok(InteractionOutcome::NoEffect(NoEffectReason::NothingToCook)),
    };
    if !ctx.inventory.has(item, 1) {
        return Ok(InteractionOutcome::NoEffect(NoEffectReason::NothingToCook));
    }
    let output = cook_output(item).ok_or(GameError::NotCookable(item))?;
    ctx.catalog.get(output)?;

    ctx.inventory.remove(item, 1)?;
    ctx.cooking.enqueue(item, campfire, ctx.now)?;
    Ok(InteractionOutcome::Cooking { item })
}

/// Every item a loot table can pay out must be in the catalog before the
/// object changes state, so a failed credit never leaves it half looted.
fn check_known<'l>(
    catalog: &Catalog,
    lines: impl IntoIterator<Item = &'l LootRange>,
) -> Result<()> {
    for line in lines {
        catalog.get(line.item)?;
    }
    Ok(())
}

fn despawn(world: &mut World, entity: Entity) -> Result<()> {
    world.despawn(entity).map_err(|_| GameError::NoSuchObject)
}

/// Closest interactable object within reach of `player`, reach being
/// `size + range_bonus`. Equal distances keep the first object seen.
pub fn nearest_interactable<T, I>(player: Vec3, objects: I, range_bonus: f32) -> Option<T>
where
    I: IntoIterator<Item = (T, Vec3, WorldObject)>,
{
    let mut best: Option<(T, f32)> = None;
    for (id, pos, object) in objects {
        if !object.interactable {
            continue;
        }
        let distance = player.distance(&pos);
        if distance >= object.size + range_bonus {
            continue;
        }
        if best.as_ref().map_or(true, |(_, d)| distance < *d) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}

/// [`nearest_interactable`] over every object in the world.
pub fn nearest_interactable_in(world: &World, player: Vec3, range_bonus: f32) -> Option<Entity> {
    let mut query = world.query::<(&Position, &WorldObject)>();
    nearest_interactable(
        player,
        query.iter().map(|(e, (pos, obj))| (e, pos.0, *obj)),
        range_bonus,
    )
}

/// Closest campfire the player is standing near.
pub fn near_campfire(world: &World, player: Vec3, proximity_bonus: f32) -> Option<Entity> {
    world
        .query::<(&Position, &WorldObject)>()
        .iter()
        .filter(|(_, (_, obj))| obj.kind == ObjectKind::Campfire)
        .map(|(e, (pos, obj))| (e, player.distance(&pos.0), obj.size))
        .filter(|(_, d, size)| *d < size + proximity_bonus)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(e, _, _)| e)
}

/// Whether a body of `radius` at `pos` overlaps any movement-blocking object.
pub fn is_blocked(world: &World, pos: Vec3, radius: f32) -> bool {
    world
        .query::<(&Position, &WorldObject)>()
        .iter()
        .any(|(_, (p, obj))| obj.blocks_movement && pos.distance(&p.0) < obj.size + radius)
}

/// Put one unit of a placeable item into the world at `position`.
pub fn place(
    world: &mut World,
    inventory: &mut Inventory,
    item: ItemKind,
    position: Vec3,
) -> Result<Entity> {
    let kind = ObjectKind::from_placeable(item).ok_or(GameError::NotPlaceable(item))?;
    inventory.remove(item, 1)?;
    let entity = spawn_object(world, kind, position);
    log::info!("placed {kind} at ({:.1}, {:.1})", position.x, position.z);
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CookingConfig;
    use crate::items::ItemDefinition;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Fixture {
        world: World,
        catalog: Catalog,
        inventory: Inventory,
        cooking: CookingScheduler,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                world: World::new(),
                catalog: Catalog::standard(),
                inventory: Inventory::new(),
                cooking: CookingScheduler::new(&CookingConfig::default()),
                rng: StdRng::seed_from_u64(42),
            }
        }

        fn give(&mut self, kind: ItemKind, count: u32) {
            self.inventory.add(&self.catalog, kind, count).unwrap();
        }

        fn equip(&mut self, kind: ItemKind) {
            let slot = self.inventory.slot_of(kind).unwrap();
            self.inventory.select_slot(slot).unwrap();
        }

        fn attempt(&mut self, target: Entity, position: Vec3) -> Result<InteractionOutcome> {
            let ctx = Interactor {
                catalog: &self.catalog,
                inventory: &mut self.inventory,
                cooking: &mut self.cooking,
                position,
                campfire_bonus: 3.0,
                now: 0.0,
                rng: &mut self.rng,
            };
            interact(&mut self.world, target, ctx)
        }

        fn hit(&mut self, target: Entity) -> InteractionOutcome {
            self.attempt(target, Vec3::ZERO).unwrap()
        }
    }

    #[test]
    fn test_tree_needs_axe_and_depletes_after_all_hits() {
        let mut f = Fixture::new();
        f.give(ItemKind::Knife, 1);
        f.give(ItemKind::Axe, 1);
        let tree = spawn_object(&mut f.world, ObjectKind::Tree, Vec3::ZERO);

        assert_eq!(
            f.hit(tree),
            InteractionOutcome::NoEffect(NoEffectReason::WrongTool)
        );

        f.equip(ItemKind::Axe);
        for expected in (1..5).rev() {
            assert_eq!(f.hit(tree), InteractionOutcome::Hit { remaining: expected });
            assert_eq!(f.inventory.count(ItemKind::Wood), 0);
        }
        match f.hit(tree) {
            InteractionOutcome::Depleted { item, count } => {
                assert_eq!(item, ItemKind::Wood);
                assert!((2..=5).contains(&count));
                assert_eq!(f.inventory.count(ItemKind::Wood), count);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(!f.world.contains(tree));
    }

    #[test]
    fn test_grass_needs_no_tool() {
        let mut f = Fixture::new();
        let grass = spawn_object(&mut f.world, ObjectKind::Grass, Vec3::ZERO);
        assert!(matches!(
            f.hit(grass),
            InteractionOutcome::Depleted {
                item: ItemKind::Grass,
                ..
            }
        ));
    }

    #[test]
    fn test_animal_dies_when_health_reaches_zero() {
        let mut f = Fixture::new();
        f.give(ItemKind::Axe, 1);
        let deer = spawn_object(&mut f.world, ObjectKind::Animal, Vec3::ZERO);
        f.world.insert_one(deer, Durability::new(75)).unwrap();

        assert_eq!(f.hit(deer), InteractionOutcome::Wounded { remaining: 50 });
        assert_eq!(f.hit(deer), InteractionOutcome::Wounded { remaining: 25 });
        match f.hit(deer) {
            InteractionOutcome::Killed { loot } => {
                assert!(loot.iter().any(|(k, _)| *k == ItemKind::RawMeat));
                assert!(f.inventory.count(ItemKind::RawMeat) >= 2);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(!f.world.contains(deer));
    }

    #[test]
    fn test_unknown_animal_loot_leaves_animal_untouched() {
        let mut f = Fixture::new();
        f.catalog = Catalog::from_definitions(
            [ItemKind::Axe, ItemKind::RawMeat, ItemKind::Leather].map(ItemDefinition::standard),
        );
        f.give(ItemKind::Axe, 1);
        let deer = spawn_object(&mut f.world, ObjectKind::Animal, Vec3::ZERO);

        for _ in 0..5 {
            assert!(matches!(
                f.attempt(deer, Vec3::ZERO),
                Err(GameError::UnknownItemKind(_))
            ));
        }
        assert!(f.world.contains(deer));
        assert_eq!(f.world.get::<&Durability>(deer).unwrap().remaining, 50);
        assert_eq!(f.inventory.count(ItemKind::RawMeat), 0);
        assert_eq!(f.inventory.count(ItemKind::Leather), 0);

        f.catalog = Catalog::standard();
        assert_eq!(f.hit(deer), InteractionOutcome::Wounded { remaining: 25 });
        assert!(matches!(f.hit(deer), InteractionOutcome::Killed { .. }));
        assert!(f.inventory.count(ItemKind::RawMeat) <= 4);
    }

    #[test]
    fn test_unknown_container_loot_keeps_container_unsearched() {
        let mut f = Fixture::new();
        f.catalog = Catalog::from_definitions([ItemDefinition::standard(ItemKind::Nails)]);
        let chest = spawn_object(&mut f.world, ObjectKind::Container, Vec3::ZERO);
        let lines = [
            LootRange::new(ItemKind::Nails, 2, 2),
            LootRange::new(ItemKind::Fat, 1, 1),
        ];
        f.world.insert_one(chest, Loot::new(lines)).unwrap();

        assert!(matches!(
            f.attempt(chest, Vec3::ZERO),
            Err(GameError::UnknownItemKind(_))
        ));
        {
            let loot = f.world.get::<&Loot>(chest).unwrap();
            assert!(!loot.searched);
            assert_eq!(loot.lines, lines.to_vec());
        }
        assert_eq!(f.inventory.count(ItemKind::Nails), 0);

        f.catalog = Catalog::standard();
        assert!(matches!(f.hit(chest), InteractionOutcome::Searched { .. }));
        assert!(f.world.get::<&Loot>(chest).unwrap().searched);
    }

    #[test]
    fn test_unknown_resource_yield_keeps_node_intact() {
        let mut f = Fixture::new();
        f.catalog = Catalog::from_definitions([ItemDefinition::standard(ItemKind::Axe)]);
        f.give(ItemKind::Axe, 1);
        let tree = spawn_object(&mut f.world, ObjectKind::Tree, Vec3::ZERO);

        assert!(f.attempt(tree, Vec3::ZERO).is_err());
        assert_eq!(f.world.get::<&Durability>(tree).unwrap().remaining, 5);
    }

    #[test]
    fn test_animal_ignores_non_weapons() {
        let mut f = Fixture::new();
        f.give(ItemKind::Canteen, 1);
        let deer = spawn_object(&mut f.world, ObjectKind::Animal, Vec3::ZERO);
        assert_eq!(
            f.hit(deer),
            InteractionOutcome::NoEffect(NoEffectReason::WrongTool)
        );
        assert_eq!(f.world.get::<&Durability>(deer).unwrap().remaining, 50);
    }

    #[test]
    fn test_container_searched_once() {
        let mut f = Fixture::new();
        let crate_ = spawn_object(&mut f.world, ObjectKind::Container, Vec3::ZERO);
        f.world
            .insert_one(crate_, Loot::new([LootRange::new(ItemKind::Nails, 4, 4)]))
            .unwrap();

        match f.hit(crate_) {
            InteractionOutcome::Searched { loot } => {
                let nails = f.inventory.count(ItemKind::Nails);
                assert!(nails == 0 || nails == 4);
                assert_eq!(loot.iter().map(|(_, n)| n).sum::<u32>(), nails);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        let after_first = f.inventory.clone();
        assert_eq!(
            f.hit(crate_),
            InteractionOutcome::NoEffect(NoEffectReason::AlreadySearched)
        );
        assert_eq!(f.inventory, after_first);
        let loot = f.world.get::<&Loot>(crate_).unwrap();
        assert!(loot.searched);
        assert!(loot.lines.is_empty());
    }

    #[test]
    fn test_water_needs_canteen() {
        let mut f = Fixture::new();
        f.give(ItemKind::Axe, 1);
        f.give(ItemKind::Canteen, 1);
        let lake = spawn_object(&mut f.world, ObjectKind::Water, Vec3::ZERO);

        assert_eq!(
            f.hit(lake),
            InteractionOutcome::NoEffect(NoEffectReason::WrongTool)
        );
        f.equip(ItemKind::Canteen);
        assert_eq!(f.hit(lake), InteractionOutcome::CollectedWater);
        assert_eq!(f.hit(lake), InteractionOutcome::CollectedWater);
        assert_eq!(f.inventory.count(ItemKind::Water), 2);
        assert!(f.world.contains(lake));
    }

    #[test]
    fn test_campfire_takes_raw_meat_and_water() {
        let mut f = Fixture::new();
        f.give(ItemKind::RawMeat, 2);
        f.give(ItemKind::Canteen, 1);
        let fire = spawn_object(&mut f.world, ObjectKind::Campfire, Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(
            f.hit(fire),
            InteractionOutcome::Cooking {
                item: ItemKind::RawMeat
            }
        );
        assert_eq!(f.inventory.count(ItemKind::RawMeat), 1);

        f.equip(ItemKind::Canteen);
        assert_eq!(
            f.hit(fire),
            InteractionOutcome::NoEffect(NoEffectReason::NothingToCook)
        );
        f.give(ItemKind::Water, 1);
        assert_eq!(
            f.hit(fire),
            InteractionOutcome::Cooking {
                item: ItemKind::Water
            }
        );
        assert_eq!(f.cooking.pending_at(fire).count(), 2);
    }

    #[test]
    fn test_campfire_out_of_reach() {
        let mut f = Fixture::new();
        f.give(ItemKind::RawMeat, 1);
        let fire = spawn_object(&mut f.world, ObjectKind::Campfire, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(f.hit(fire), InteractionOutcome::NoEffect(NoEffectReason::TooFar));
        assert!(f.cooking.is_idle());
    }

    #[test]
    fn test_campfire_reach_boundary_is_exclusive() {
        let mut f = Fixture::new();
        f.give(ItemKind::RawMeat, 2);
        // campfire size 1.0 plus a bonus of 3.0
        let fire = spawn_object(&mut f.world, ObjectKind::Campfire, Vec3::ZERO);

        let edge = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(
            f.attempt(fire, edge).unwrap(),
            InteractionOutcome::NoEffect(NoEffectReason::TooFar)
        );
        assert!(f.cooking.is_idle());
        assert_eq!(f.inventory.count(ItemKind::RawMeat), 2);

        let inside = Vec3::new(3.99, 0.0, 0.0);
        assert_eq!(
            f.attempt(fire, inside).unwrap(),
            InteractionOutcome::Cooking {
                item: ItemKind::RawMeat
            }
        );
        assert_eq!(f.inventory.count(ItemKind::RawMeat), 1);
    }

    #[test]
    fn test_structures_and_missing_targets() {
        let mut f = Fixture::new();
        let forge = spawn_object(&mut f.world, ObjectKind::Forge, Vec3::ZERO);
        assert_eq!(
            f.hit(forge),
            InteractionOutcome::NoEffect(NoEffectReason::NotInteractable)
        );

        let rock = spawn_object(&mut f.world, ObjectKind::Rock, Vec3::ZERO);
        f.world.despawn(rock).unwrap();
        let ctx = Interactor {
            catalog: &f.catalog,
            inventory: &mut f.inventory,
            cooking: &mut f.cooking,
            position: Vec3::ZERO,
            campfire_bonus: 3.0,
            now: 0.0,
            rng: &mut f.rng,
        };
        assert!(matches!(
            interact(&mut f.world, rock, ctx),
            Err(GameError::NoSuchObject)
        ));
    }

    #[test]
    fn test_nearest_interactable_picks_closest_in_range() {
        let objects = vec![
            (0, Vec3::new(3.5, 0.0, 0.0), WorldObject::new(ObjectKind::Rock)),
            (1, Vec3::new(2.0, 0.0, 0.0), WorldObject::new(ObjectKind::Grass)),
            (2, Vec3::new(1.0, 0.0, 0.0), WorldObject::new(ObjectKind::Forge)),
            (3, Vec3::new(50.0, 0.0, 0.0), WorldObject::new(ObjectKind::Water)),
        ];
        assert_eq!(nearest_interactable(Vec3::ZERO, objects, 2.0), Some(1));
    }

    #[test]
    fn test_nearest_interactable_tie_keeps_first() {
        let objects = vec![
            (7, Vec3::new(1.0, 0.0, 0.0), WorldObject::new(ObjectKind::Rock)),
            (8, Vec3::new(-1.0, 0.0, 0.0), WorldObject::new(ObjectKind::Rock)),
        ];
        assert_eq!(nearest_interactable(Vec3::ZERO, objects, 2.0), Some(7));
    }

    #[test]
    fn test_nearest_interactable_range_is_exclusive() {
        let objects = vec![(0, Vec3::new(3.0, 0.0, 0.0), WorldObject::new(ObjectKind::Rock))];
        assert_eq!(nearest_interactable(Vec3::ZERO, objects, 2.0), None);
    }

    #[test]
    fn test_blocking_and_campfire_proximity() {
        let mut world = World::new();
        spawn_object(&mut world, ObjectKind::Tree, Vec3::new(10.0, 0.0, 0.0));
        spawn_object(&mut world, ObjectKind::Grass, Vec3::new(0.0, 0.0, 0.0));
        let fire = spawn_object(&mut world, ObjectKind::Campfire, Vec3::new(-5.0, 0.0, 0.0));

        assert!(is_blocked(&world, Vec3::new(8.0, 0.0, 0.0), 0.5));
        assert!(!is_blocked(&world, Vec3::new(7.0, 0.0, 0.0), 0.5));
        assert!(!is_blocked(&world, Vec3::ZERO, 0.5));

        assert_eq!(near_campfire(&world, Vec3::new(-2.0, 0.0, 0.0), 3.0), Some(fire));
        assert_eq!(near_campfire(&world, Vec3::new(-1.0, 0.0, 0.0), 3.0), None);
    }

    #[test]
    fn test_near_campfire_boundary_is_exclusive() {
        let mut world = World::new();
        let fire = spawn_object(&mut world, ObjectKind::Campfire, Vec3::ZERO);

        assert_eq!(near_campfire(&world, Vec3::new(0.0, 0.0, 4.0), 3.0), None);
        assert_eq!(near_campfire(&world, Vec3::new(-4.0, 0.0, 0.0), 3.0), None);
        assert_eq!(near_campfire(&world, Vec3::new(0.0, 0.0, 3.99), 3.0), Some(fire));
        assert_eq!(near_campfire(&world, Vec3::new(4.0, 0.0, 0.0), 3.5), Some(fire));
    }

    #[test]
    fn test_place_consumes_item() {
        let mut world = World::new();
        let catalog = Catalog::standard();
        let mut inv = Inventory::new();
        inv.add(&catalog, ItemKind::Campfire, 1).unwrap();
        inv.add(&catalog, ItemKind::Wood, 1).unwrap();

        let fire = place(&mut world, &mut inv, ItemKind::Campfire, Vec3::ZERO).unwrap();
        assert_eq!(
            world.get::<&WorldObject>(fire).unwrap().kind,
            ObjectKind::Campfire
        );
        assert_eq!(inv.count(ItemKind::Campfire), 0);

        assert!(matches!(
            place(&mut world, &mut inv, ItemKind::Wood, Vec3::ZERO),
            Err(GameError::NotPlaceable(ItemKind::Wood))
        ));
        assert!(matches!(
            place(&mut world, &mut inv, ItemKind::Forge, Vec3::ZERO),
            Err(GameError::InsufficientQuantity { .. })
        ));
    }
}
