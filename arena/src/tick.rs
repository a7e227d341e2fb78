use crate::contact::Contact;
use crate::context::TickContext;
use crate::error::ArenaResult;
use crate::index::TickIndex;
use crate::sensor::SensorFrame;
use fxhash::FxHashSet;
use quadtree::{Particle, ParticleId};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub frame: u64,
    pub indexed: usize,
    pub dropped: Vec<ParticleId>,
    /// One frame per player, in input order, taken before any contact.
    pub sensors: Vec<SensorFrame>,
    pub contacts: Vec<Contact>,
}

/// Runs the index side of one tick: build the tree, read every player's
/// sensors, then resolve contacts. Movement and scoring stay with the
/// caller.
pub fn run_tick(ctx: TickContext<'_>, particles: &[Particle]) -> ArenaResult<TickReport> {
    let mut index = TickIndex::build(ctx, particles)?;
    let indexed = index.len();
    let players: Vec<Particle> = particles.iter().filter(|p| p.is_player()).copied().collect();

    let sensors: Vec<SensorFrame> = players.iter().map(|player| index.sense(player)).collect();
    let contacts = index.resolve_contacts(&players);
    debug!(
        frame = ctx.frame,
        players = players.len(),
        contacts = contacts.len(),
        "tick resolved"
    );

    Ok(TickReport {
        frame: ctx.frame,
        indexed,
        dropped: index.dropped().to_vec(),
        sensors,
        contacts,
    })
}

/// Drops every particle consumed by `contacts`.
pub fn apply_contacts(particles: &mut Vec<Particle>, contacts: &[Contact]) {
    let consumed: FxHashSet<ParticleId> = contacts.iter().map(Contact::consumed).collect();
    particles.retain(|particle| !consumed.contains(&particle.id));
}
