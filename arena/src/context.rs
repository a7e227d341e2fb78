use crate::config::ArenaConfig;
use common::shapes::Rectangle;
use quadtree::Particle;

/// Everything a tick needs to know about the session it runs in.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub frame: u64,
    pub world: Rectangle,
    pub config: &'a ArenaConfig,
}

impl<'a> TickContext<'a> {
    pub fn new(frame: u64, config: &'a ArenaConfig) -> Self {
        Self {
            frame,
            world: config.world(),
            config,
        }
    }

    pub fn next(&self) -> Self {
        Self {
            frame: self.frame + 1,
            ..*self
        }
    }

    pub fn is_last_frame(&self) -> bool {
        self.frame >= self.config.frame_limit
    }

    pub fn vision_rect(&self, particle: &Particle) -> Rectangle {
        vision_rect(particle, self.config.vision_distance)
    }
}

/// Square of side `vision_distance + 2 * radius` centred on the particle.
pub fn vision_rect(particle: &Particle, vision_distance: f64) -> Rectangle {
    Rectangle::centered_on(particle.position, vision_distance / 2.0 + particle.radius)
}
