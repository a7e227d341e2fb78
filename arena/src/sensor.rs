use crate::index::TickIndex;
use common::shapes::Point;
use quadtree::{Particle, ParticleId, ParticleKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeighbourSlot {
    Seen {
        id: ParticleId,
        /// Gap between the two rims, never negative.
        distance: f64,
        /// The sensing particle is the bigger of the two.
        prey: bool,
    },
    Empty,
}

impl NeighbourSlot {
    pub fn distance(&self) -> Option<f64> {
        match self {
            NeighbourSlot::Seen { distance, .. } => Some(*distance),
            NeighbourSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NeighbourSlot::Empty)
    }
}

/// Nearest `slots` neighbours of `subject` by rim distance, padded with
/// `Empty` when fewer are in sight. `subject` itself is skipped.
pub fn nearest_neighbours(
    subject: &Particle,
    neighbours: &[Particle],
    slots: usize,
) -> Vec<NeighbourSlot> {
    let body = subject.circle();
    let mut seen: Vec<NeighbourSlot> = neighbours
        .iter()
        .filter(|other| other.id != subject.id)
        .map(|other| NeighbourSlot::Seen {
            id: other.id,
            distance: body.edge_distance(&other.circle()),
            prey: subject.radius > other.radius,
        })
        .collect();
    seen.sort_by(|a, b| {
        let a = a.distance().unwrap_or(f64::INFINITY);
        let b = b.distance().unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    seen.truncate(slots);
    seen.resize(slots, NeighbourSlot::Empty);
    seen
}

/// What one player perceives at the start of a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFrame {
    pub subject: ParticleId,
    pub position: Point,
    pub players: Vec<NeighbourSlot>,
    pub food: Vec<NeighbourSlot>,
}

impl SensorFrame {
    /// Flattens to `[x, y, player distances.., player prey flags.., food
    /// distances..]`, with empty slots reading as `empty_distance` and a
    /// zero flag.
    pub fn to_inputs(&self, empty_distance: f64) -> Vec<f64> {
        let distance = |slot: &NeighbourSlot| slot.distance().unwrap_or(empty_distance);
        let prey = |slot: &NeighbourSlot| match slot {
            NeighbourSlot::Seen { prey: true, .. } => 1.0,
            _ => 0.0,
        };

        let mut inputs = Vec::with_capacity(2 + self.players.len() * 2 + self.food.len());
        inputs.push(self.position.x);
        inputs.push(self.position.y);
        inputs.extend(self.players.iter().map(distance));
        inputs.extend(self.players.iter().map(prey));
        inputs.extend(self.food.iter().map(distance));
        inputs
    }
}

impl TickIndex<'_> {
    pub fn sense(&self, player: &Particle) -> SensorFrame {
        let config = self.context().config;
        let players = self.nearby(player, Some(ParticleKind::Player));
        let food = self.nearby(player, Some(ParticleKind::Food));
        SensorFrame {
            subject: player.id,
            position: player.position,
            players: nearest_neighbours(player, &players, config.player_detection),
            food: nearest_neighbours(player, &food, config.food_detection),
        }
    }
}
