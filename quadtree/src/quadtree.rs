mod config;
mod diagnostics;
mod query;

pub use config::Config;
pub use query::QueryStats;

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::particle::{Particle, ParticleId};
use common::shapes::Rectangle;
use smallvec::SmallVec;

const INLINE_PARTICLES: usize = 4;

// Particles held by a node when it splits stay there; only overflow goes
// to the children. Children are never merged back.
#[derive(Debug, Clone)]
pub struct QuadTree {
    boundary: Rectangle,
    node_capacity: usize,
    max_depth: usize,
    depth: usize,
    particles: SmallVec<[Particle; INLINE_PARTICLES]>,
    // nw, ne, sw, se
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    pub fn new(boundary: Rectangle, capacity: usize) -> QuadtreeResult<Self> {
        Self::new_with_config(
            boundary,
            Config {
                node_capacity: capacity,
                ..Config::default()
            },
        )
    }

    pub fn new_with_config(boundary: Rectangle, config: Config) -> QuadtreeResult<Self> {
        if !boundary.is_valid() {
            return Err(QuadtreeError::InvalidRectangleDims {
                x: boundary.x,
                y: boundary.y,
                width: boundary.width,
                height: boundary.height,
            });
        }
        if config.node_capacity == 0 {
            return Err(QuadtreeError::InvalidNodeCapacity {
                capacity: config.node_capacity,
            });
        }
        Ok(Self::leaf(boundary, config.node_capacity, config.max_depth, 0))
    }

    fn leaf(boundary: Rectangle, node_capacity: usize, max_depth: usize, depth: usize) -> Self {
        Self {
            boundary,
            node_capacity,
            max_depth,
            depth,
            particles: SmallVec::new(),
            children: None,
        }
    }

    fn subdivide(
        boundary: Rectangle,
        node_capacity: usize,
        max_depth: usize,
        depth: usize,
    ) -> Box<[QuadTree; 4]> {
        Box::new(
            boundary
                .quadrants()
                .map(|quadrant| QuadTree::leaf(quadrant, node_capacity, max_depth, depth + 1)),
        )
    }

    pub fn insert(&mut self, particle: Particle) -> bool {
        if !particle.is_inside(&self.boundary) {
            return false;
        }

        // A node at max depth absorbs the overflow instead of splitting.
        if self.particles.len() < self.node_capacity || self.depth >= self.max_depth {
            self.particles.push(particle);
            return true;
        }

        let (boundary, node_capacity, max_depth, depth) =
            (self.boundary, self.node_capacity, self.max_depth, self.depth);
        let children = self
            .children
            .get_or_insert_with(|| Self::subdivide(boundary, node_capacity, max_depth, depth));
        // Edge points fit several children; the first in nw, ne, sw, se order wins.
        children.iter_mut().any(|child| child.insert(particle))
    }

    pub fn remove(&mut self, particle: &Particle) -> bool {
        self.remove_id(particle.id)
    }

    pub fn remove_id(&mut self, id: ParticleId) -> bool {
        if let Some(index) = self.particles.iter().position(|held| held.id == id) {
            self.particles.remove(index);
            return true;
        }
        match self.children.as_deref_mut() {
            Some(children) => children.iter_mut().any(|child| child.remove_id(id)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        let mut count = self.particles.len();
        if let Some(children) = self.children.as_deref() {
            count += children.iter().map(QuadTree::len).sum::<usize>();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // nw, ne, sw, se
    pub fn children(&self) -> Option<&[QuadTree; 4]> {
        self.children.as_deref()
    }
}
