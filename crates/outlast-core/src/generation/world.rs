//! World generation - scatters resource nodes, animals, water and buildings
//! over a square map.

use std::collections::HashSet;

use hecs::{Entity, EntityBuilder, World};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{
    Building, Durability, InteractionRole, Loot, ObjectKind, Position, Vec3, Wander, WorldObject,
};

/// Ground height provider. The presentation layer owns the real terrain.
pub trait Terrain {
    fn height_at(&self, x: f32, z: f32) -> f32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain {
    pub height: f32,
}

impl Terrain for FlatTerrain {
    fn height_at(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }
}

/// Configuration for world generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Objects land in `[-half_extent, half_extent]` on both axes.
    pub half_extent: f32,
    pub attempts: u32,
    /// Occupancy grid cell edge
    pub cell_size: f32,
    /// Chance to drop an attempt that lands in an occupied cell
    pub skip_occupied_chance: f64,
    /// Gap kept between the origin, where the player starts, and the edge
    /// of every spawned object.
    pub spawn_clearance: f32,
    pub spawn_weights: Vec<(ObjectKind, f32)>,
    pub min_containers: u32,
    pub max_containers: u32,
    /// Containers sit within this fraction of the building's size.
    pub container_spread: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            half_extent: 40.0,
            attempts: 150,
            cell_size: 5.0,
            skip_occupied_chance: 0.7,
            spawn_clearance: 1.0,
            spawn_weights: vec![
                (ObjectKind::Tree, 0.30),
                (ObjectKind::Rock, 0.15),
                (ObjectKind::Grass, 0.20),
                (ObjectKind::Nails, 0.05),
                (ObjectKind::Scrap, 0.05),
                (ObjectKind::Barrel, 0.05),
                (ObjectKind::Building, 0.05),
                (ObjectKind::Animal, 0.10),
                (ObjectKind::Water, 0.05),
            ],
            min_containers: 1,
            max_containers: 3,
            container_spread: 0.7,
        }
    }
}

/// What generation produced
#[derive(Debug, Clone, Default)]
pub struct WorldLayout {
    /// Top-level objects in spawn order. Building containers are listed on
    /// their [`Building`] component.
    pub objects: Vec<Entity>,
    pub buildings: Vec<Entity>,
    pub skipped: u32,
}

/// Spawn one object with the components its kind needs.
pub fn spawn_object(world: &mut World, kind: ObjectKind, position: Vec3) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add(Position(position)).add(WorldObject::new(kind));

    match kind.behavior().role {
        InteractionRole::Resource(yields) => {
            builder.add(Durability::new(yields.hits as i32));
        }
        InteractionRole::Animal { health, .. } => {
            builder.add(Durability::new(health)).add(Wander::idle());
        }
        InteractionRole::Container { loot } => {
            builder.add(Loot::new(loot.iter().copied()));
        }
        InteractionRole::Structure if kind == ObjectKind::Building => {
            builder.add(Building::default());
        }
        _ => {}
    }
    world.spawn(builder.build())
}

/// Spawn a building plus its child containers scattered inside its footprint.
pub fn spawn_building(
    world: &mut World,
    position: Vec3,
    config: &WorldConfig,
    terrain: &impl Terrain,
    rng: &mut impl Rng,
) -> Entity {
    let building = spawn_object(world, ObjectKind::Building, position);
    let spread = (ObjectKind::Building.behavior().size * config.container_spread).abs();
    let (lo, hi) = if config.min_containers <= config.max_containers {
        (config.min_containers, config.max_containers)
    } else {
        (config.max_containers, config.min_containers)
    };

    let count = rng.gen_range(lo..=hi);
    let mut containers = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let x = position.x + rng.gen_range(-spread..=spread);
        let z = position.z + rng.gen_range(-spread..=spread);
        let pos = Vec3::new(x, terrain.height_at(x, z), z);
        containers.push(spawn_object(world, ObjectKind::Container, pos));
    }

    if let Ok(mut b) = world.get::<&mut Building>(building) {
        b.containers = containers;
    }
    building
}

/// Populate `world` from the weighted spawn table.
pub fn generate_world(
    world: &mut World,
    config: &WorldConfig,
    terrain: &impl Terrain,
    rng: &mut impl Rng,
) -> WorldLayout {
    let mut layout = WorldLayout::default();

    let dist = match WeightedIndex::new(config.spawn_weights.iter().map(|(_, w)| *w)) {
        Ok(dist) => dist,
        Err(e) => {
            log::warn!("spawn table unusable ({e}), world left empty");
            return layout;
        }
    };

    let mut occupied: HashSet<(i32, i32)> = HashSet::new();
    let cell_size = config.cell_size.max(f32::EPSILON);
    let extent = config.half_extent.abs();

    for _ in 0..config.attempts {
        let x = rng.gen_range(-extent..=extent);
        let z = rng.gen_range(-extent..=extent);
        let kind = config.spawn_weights[dist.sample(rng)].0;
        if Vec3::ground(x, z).length() < config.spawn_clearance + kind.behavior().size {
            layout.skipped += 1;
            continue;
        }

        let cell = ((x / cell_size).floor() as i32, (z / cell_size).floor() as i32);
        if occupied.contains(&cell) && rng.gen_bool(config.skip_occupied_chance.clamp(0.0, 1.0)) {
            layout.skipped += 1;
            continue;
        }
        occupied.insert(cell);

        let position = Vec3::new(x, terrain.height_at(x, z), z);
        let entity = if kind == ObjectKind::Building {
            let b = spawn_building(world, position, config, terrain, rng);
            layout.buildings.push(b);
            b
        } else {
            spawn_object(world, kind, position)
        };
        layout.objects.push(entity);
    }

    log::info!(
        "generated world: {} objects, {} buildings, {} attempts skipped",
        layout.objects.len(),
        layout.buildings.len(),
        layout.skipped
    );
    layout
}
