//! Wandering system - animals walk in a random heading, re-rolling it every
//! few seconds and turning around when they bump into something.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use hecs::{Entity, World};
use rand::Rng;

use crate::components::{Position, Vec3, Wander, WorldObject};
use crate::config::WanderConfig;

/// Inclusive range over two bounds given in either order.
fn span(a: f32, b: f32) -> RangeInclusive<f32> {
    a.min(b)..=a.max(b)
}

/// Pick a fresh heading, speed and hold time.
pub fn reroll_wander(wander: &mut Wander, config: &WanderConfig, now: f64, rng: &mut impl Rng) {
    let angle = rng.gen_range(0.0..TAU);
    wander.direction = Vec3::new(angle.cos(), 0.0, angle.sin());
    wander.speed = rng.gen_range(span(config.min_speed, config.max_speed));
    wander.hold_for = rng.gen_range(span(config.min_hold_secs, config.max_hold_secs)) as f64;
    wander.changed_at = now;
}

/// Move every wandering object by `dt` seconds.
///
/// A step that would overlap a movement-blocking object is not taken; the
/// heading is reversed instead and the hold timer restarts.
pub fn wandering_system(
    world: &mut World,
    now: f64,
    dt: f32,
    config: &WanderConfig,
    rng: &mut impl Rng,
) {
    let dt = dt.max(0.0);

    let obstacles: Vec<(Entity, Vec3, f32)> = world
        .query::<(&Position, &WorldObject)>()
        .iter()
        .filter(|(_, (_, obj))| obj.blocks_movement)
        .map(|(e, (pos, obj))| (e, pos.0, obj.size))
        .collect();

    for (entity, (pos, obj, wander)) in world.query_mut::<(&mut Position, &WorldObject, &mut Wander)>() {
        if wander.is_due(now) {
            reroll_wander(wander, config, now, rng);
        }

        let next = pos.0 + wander.direction * (wander.speed * dt);
        let collides = obstacles.iter().any(|(other, other_pos, other_size)| {
            *other != entity
                && next.distance(other_pos) < (obj.size + other_size) * config.collision_factor
        });

        if collides {
            wander.direction = -wander.direction;
            wander.changed_at = now;
        } else {
            pos.0 = next;
        }
    }
}
