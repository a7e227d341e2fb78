use crate::config::ArenaConfig;
use common::shapes::{Point, Rectangle};
use quadtree::Particle;
use rand::Rng;
use tracing::debug;

/// Extra gap kept between new food and any player's rim.
pub const FOOD_CLEARANCE: f64 = 20.0;
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

// Samples until `is_free` accepts a point, settling for the last sample
// when the area is too crowded.
fn place<R: Rng>(area: &Rectangle, rng: &mut R, is_free: impl Fn(&Point) -> bool) -> Point {
    let mut point = area.get_random_point_inside(rng);
    for _ in 1..MAX_PLACEMENT_ATTEMPTS {
        if is_free(&point) {
            return point;
        }
        point = area.get_random_point_inside(rng);
    }
    debug!(x = point.x, y = point.y, "no free spawn point found, placing anyway");
    point
}

/// Spawns `count` players with ids from `first_id`, none starting inside
/// another player's body.
pub fn spawn_players<R: Rng>(
    config: &ArenaConfig,
    count: usize,
    first_id: u32,
    rng: &mut R,
) -> Vec<Particle> {
    let area = config.spawn_area();
    let mut players: Vec<Particle> = Vec::with_capacity(count);
    for id in (first_id..).take(count) {
        let position = place(&area, rng, |point| {
            players
                .iter()
                .all(|player| !player.circle().contains_point(point))
        });
        players.push(Particle::player(id, position, config.player_radius));
    }
    players
}

/// Spawns `count` food particles with ids from `first_id`, kept clear of
/// every player.
pub fn spawn_food<R: Rng>(
    config: &ArenaConfig,
    count: usize,
    first_id: u32,
    players: &[Particle],
    rng: &mut R,
) -> Vec<Particle> {
    let area = config.spawn_area();
    (first_id..)
        .take(count)
        .map(|id| {
            let position = place(&area, rng, |point| {
                players.iter().all(|player| {
                    player.position.distance_to(point) > player.radius + FOOD_CLEARANCE
                })
            });
            Particle::food(id, position, config.food_radius)
        })
        .collect()
}

/// Brings `food` back up to `config.num_food`, drawing ids from `next_id`.
/// Returns how many were added.
pub fn replenish_food<R: Rng>(
    config: &ArenaConfig,
    food: &mut Vec<Particle>,
    players: &[Particle],
    next_id: &mut u32,
    rng: &mut R,
) -> usize {
    let missing = config.num_food.saturating_sub(food.len());
    if missing == 0 {
        return 0;
    }
    food.extend(spawn_food(config, missing, *next_id, players, rng));
    *next_id += missing as u32;
    missing
}
