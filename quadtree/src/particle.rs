use common::shapes::{Circle, Point, Rectangle};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Player,
    Food,
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleKind::Player => write!(f, "Player"),
            ParticleKind::Food => write!(f, "Food"),
        }
    }
}

/// Snapshot of a simulated entity as seen by the index for one tick.
///
/// The simulation owns the live entity; the tree keeps a copy taken at
/// insertion time, so a position changed afterwards is only visible once the
/// particle is inserted again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Point,
    pub radius: f64,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(id: u32, position: Point, radius: f64, kind: ParticleKind) -> Self {
        Self {
            id: ParticleId(id),
            position,
            radius,
            kind,
        }
    }

    pub fn player(id: u32, position: Point, radius: f64) -> Self {
        Self::new(id, position, radius, ParticleKind::Player)
    }

    pub fn food(id: u32, position: Point, radius: f64) -> Self {
        Self::new(id, position, radius, ParticleKind::Food)
    }

    pub fn is_player(&self) -> bool {
        self.kind == ParticleKind::Player
    }

    pub fn is_food(&self) -> bool {
        self.kind == ParticleKind::Food
    }

    // Containment is decided by the centre alone; the radius may overhang.
    pub fn is_inside(&self, region: &Rectangle) -> bool {
        region.contains_point(&self.position)
    }

    pub fn matches(&self, kind_filter: Option<ParticleKind>) -> bool {
        kind_filter.map_or(true, |kind| self.kind == kind)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

// Renders the legacy entity name, e.g. `Player_7` or `Food_12`.
impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}
