use super::Vector;

/// ## Instruction pointer
///
/// Position and direction of travel. Motion wraps around the grid
/// bounds given at the time of the move.

#[derive(Debug, Clone)]
pub struct Cursor {
    position: Vector,
    direction: Vector,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor {
            position: Vector::new(0, 0),
            direction: Vector::RIGHT,
        }
    }
}

impl Cursor {
    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vector) {
        self.direction = direction;
    }

    pub fn advance(&mut self, size: Vector) {
        self.position = (self.position.wrap(size) + self.direction).wrap(size);
    }

    /// Not normalized until the next advance.
    pub fn teleport(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn skip(&mut self, size: Vector) {
        self.advance(size);
    }
}
