#[derive(Debug, Clone)]
pub struct Config {
    pub node_capacity: usize,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            // Halving a screen-sized boundary 32 times leaves sub-micron
            // cells, so the cap only ever triggers for coincident particles.
            max_depth: 32,
        }
    }
}
