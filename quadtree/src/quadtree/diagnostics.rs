use super::QuadTree;
use crate::particle::Particle;
use common::shapes::Rectangle;
use std::fmt;

impl QuadTree {
    // Retrieve all node bounding boxes, parents before children
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.boundary);
        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.all_node_bounding_boxes(bounding_boxes);
            }
        }
    }

    // Retrieve all particles, each node's own before its children's
    pub fn all_particles(&self, particles: &mut Vec<Particle>) {
        particles.extend(self.particles.iter().copied());
        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.all_particles(particles);
            }
        }
    }
}

// Dump format: the boundary and the node's own particles, then the
// children labelled in nw, ne, se, sw order.
impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.boundary)?;
        for particle in self.particles.iter() {
            write!(f, ", {}", particle)?;
        }
        if let Some([nw, ne, sw, se]) = self.children.as_deref() {
            write!(f, "\nnw: {}, \nne: {}, \nse: {}, \nsw: {}", nw, ne, se, sw)?;
        }
        Ok(())
    }
}
