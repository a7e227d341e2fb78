use crate::context::TickContext;
use crate::error::ArenaResult;
use common::shapes::Rectangle;
use quadtree::quadtree::QuadTree;
use quadtree::{Particle, ParticleId, ParticleKind};
use tracing::{debug, warn};

/// The spatial index for a single tick. Built from scratch every frame and
/// dropped when the frame ends.
pub struct TickIndex<'a> {
    ctx: TickContext<'a>,
    tree: QuadTree,
    dropped: Vec<ParticleId>,
}

impl<'a> TickIndex<'a> {
    pub fn build(ctx: TickContext<'a>, particles: &[Particle]) -> ArenaResult<Self> {
        let mut tree = QuadTree::new_with_config(ctx.world, ctx.config.quadtree_config())?;
        let mut dropped = Vec::new();
        for particle in particles {
            if !tree.insert(*particle) {
                dropped.push(particle.id);
            }
        }

        if !dropped.is_empty() {
            warn!(
                frame = ctx.frame,
                dropped = dropped.len(),
                "particles outside the world bounds were left out of the index"
            );
        }
        debug!(frame = ctx.frame, indexed = tree.len(), "built tick index");

        Ok(Self { ctx, tree, dropped })
    }

    /// Particles inside `particle`'s vision rectangle, nearest first. The
    /// particle itself is included when it is indexed.
    pub fn nearby(&self, particle: &Particle, kind_filter: Option<ParticleKind>) -> Vec<Particle> {
        self.tree.query(&self.ctx.vision_rect(particle), kind_filter)
    }

    pub fn query(&self, region: &Rectangle, kind_filter: Option<ParticleKind>) -> Vec<Particle> {
        self.tree.query(region, kind_filter)
    }

    pub fn remove(&mut self, particle: &Particle) -> bool {
        self.tree.remove(particle)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ids of particles whose position fell outside the world this tick.
    pub fn dropped(&self) -> &[ParticleId] {
        &self.dropped
    }

    pub fn context(&self) -> &TickContext<'a> {
        &self.ctx
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Node boundaries for an overlay renderer.
    pub fn node_boundaries(&self) -> Vec<Rectangle> {
        let mut boundaries = Vec::new();
        self.tree.all_node_bounding_boxes(&mut boundaries);
        boundaries
    }
}
