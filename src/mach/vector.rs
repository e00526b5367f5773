/// ## Integer grid vector
///
/// Used both for positions and for directions of travel.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: isize,
    pub y: isize,
}

impl Vector {
    pub const UP: Vector = Vector { x: 0, y: -1 };
    pub const RIGHT: Vector = Vector { x: 1, y: 0 };
    pub const DOWN: Vector = Vector { x: 0, y: 1 };
    pub const LEFT: Vector = Vector { x: -1, y: 0 };

    /// Clockwise from up. The random instruction indexes into this.
    pub const CARDINALS: [Vector; 4] = [Vector::UP, Vector::RIGHT, Vector::DOWN, Vector::LEFT];

    pub const fn new(x: isize, y: isize) -> Vector {
        Vector { x, y }
    }

    /// Component-wise true modulo. A zero extent is treated as one.
    pub fn wrap(self, size: Vector) -> Vector {
        Vector {
            x: self.x.rem_euclid(size.x.max(1)),
            y: self.y.rem_euclid(size.y.max(1)),
        }
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl From<(isize, isize)> for Vector {
    fn from((x, y): (isize, isize)) -> Vector {
        Vector { x, y }
    }
}

impl From<Vector> for (isize, isize) {
    fn from(v: Vector) -> (isize, isize) {
        (v.x, v.y)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
