use super::QuadTree;
use crate::particle::{Particle, ParticleKind};
use common::shapes::Rectangle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    // Overlap tests against node boundaries
    pub node_checks: u64,
    // Nodes whose boundary overlapped the region
    pub node_visits: u64,
    pub particle_visits: u64,
}

impl QuadTree {
    // Nearest to the centre of `region` first
    pub fn query(&self, region: &Rectangle, kind_filter: Option<ParticleKind>) -> Vec<Particle> {
        self.query_with_stats(region, kind_filter).0
    }

    pub fn query_with_stats(
        &self,
        region: &Rectangle,
        kind_filter: Option<ParticleKind>,
    ) -> (Vec<Particle>, QueryStats) {
        let mut found = Vec::new();
        let mut stats = QueryStats::default();
        self.query_from(region, kind_filter, &mut found, &mut stats);

        let center = region.center();
        let mut keyed: Vec<(f64, Particle)> = found
            .into_iter()
            .map(|particle| (particle.position.distance_to(&center), particle))
            .collect();
        // Stable sort, equidistant particles keep children-first gather order.
        keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        let found = keyed.into_iter().map(|(_, particle)| particle).collect();
        (found, stats)
    }

    fn query_from(
        &self,
        region: &Rectangle,
        kind_filter: Option<ParticleKind>,
        found: &mut Vec<Particle>,
        stats: &mut QueryStats,
    ) {
        stats.node_checks += 1;
        if region.disjoint(&self.boundary) {
            return;
        }
        stats.node_visits += 1;

        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.query_from(region, kind_filter, found, stats);
            }
        }

        stats.particle_visits += self.particles.len() as u64;
        found.extend(
            self.particles
                .iter()
                .filter(|particle| particle.is_inside(region) && particle.matches(kind_filter))
                .copied(),
        );
    }
}
