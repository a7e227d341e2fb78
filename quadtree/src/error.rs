use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    InvalidNodeCapacity { capacity: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "boundary must be finite with non-negative width/height (x: {}, y: {}, width: {}, height: {})",
                    x, y, width, height
                )
            }
            QuadtreeError::InvalidNodeCapacity { capacity } => {
                write!(
                    f,
                    "node capacity must be at least 1 (capacity: {})",
                    capacity
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
