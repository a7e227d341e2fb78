use crate::index::TickIndex;
use fxhash::FxHashSet;
use quadtree::{Particle, ParticleId, ParticleKind};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    FoodEaten { player: ParticleId, food: ParticleId },
    PlayerEaten { eater: ParticleId, eaten: ParticleId },
}

impl Contact {
    /// The particle removed from the world by this contact.
    pub fn consumed(&self) -> ParticleId {
        match self {
            Contact::FoodEaten { food, .. } => *food,
            Contact::PlayerEaten { eaten, .. } => *eaten,
        }
    }
}

pub fn touching(a: &Particle, b: &Particle) -> bool {
    a.circle().touches(&b.circle())
}

/// `eater` must be more than `threshold` (a fraction) bigger than `other`.
pub fn can_eat(eater: &Particle, other: &Particle, threshold: f64) -> bool {
    eater.radius > other.radius * (1.0 + threshold)
}

impl TickIndex<'_> {
    /// Walks `players` in order and reports what each one eats this tick.
    ///
    /// Consumed particles are removed from the index as soon as they are
    /// claimed, so nothing is eaten twice and an eaten player takes no
    /// further part in the tick.
    pub fn resolve_contacts(&mut self, players: &[Particle]) -> Vec<Contact> {
        let threshold = self.context().config.eat_player_threshold;
        let mut consumed: FxHashSet<ParticleId> = FxHashSet::default();
        let mut contacts = Vec::new();

        for player in players {
            if consumed.contains(&player.id) {
                continue;
            }

            for other in self.nearby(player, Some(ParticleKind::Player)) {
                if other.id == player.id || !touching(player, &other) {
                    continue;
                }
                if can_eat(player, &other, threshold) && self.remove(&other) {
                    trace!(eater = %player, eaten = %other, "player eaten");
                    consumed.insert(other.id);
                    contacts.push(Contact::PlayerEaten {
                        eater: player.id,
                        eaten: other.id,
                    });
                }
            }

            for food in self.nearby(player, Some(ParticleKind::Food)) {
                if touching(player, &food) && self.remove(&food) {
                    trace!(player = %player, food = %food, "food eaten");
                    consumed.insert(food.id);
                    contacts.push(Contact::FoodEaten {
                        player: player.id,
                        food: food.id,
                    });
                }
            }
        }

        contacts
    }
}
