use super::Vector;
use crate::error;
use crate::lang::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Self-modifying program surface
///
/// Rows are stored independently and may have unequal lengths.
/// Reads outside a row return a space. Writes grow the grid as needed
/// and the grid never shrinks.

#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    size: Vector,
}

impl Grid {
    pub fn new(source: &str) -> Grid {
        let rows: Vec<Vec<char>> = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let size = Vector::new(width as isize, rows.len() as isize);
        Grid { rows, size }
    }

    /// Bounding box as (width, height).
    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn read(&self, x: isize, y: isize) -> char {
        if x < 0 || y < 0 {
            return ' ';
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(' ')
    }

    fn max_extent(&self) -> usize {
        u16::max_value() as usize
    }

    /// Returns false when the cell cannot exist (negative coordinates).
    /// Growing past 65536 cells in either direction is out of memory.
    pub fn write(&mut self, x: isize, y: isize, value: char) -> Result<bool> {
        if x < 0 || y < 0 {
            return Ok(false);
        }
        let (ux, uy) = (x as usize, y as usize);
        if (ux >= self.rows.get(uy).map_or(0, |row| row.len()) && ux > self.max_extent())
            || (uy >= self.rows.len() && uy > self.max_extent())
        {
            return Err(error!(OutOfMemory; "grid"));
        }
        if uy >= self.rows.len() {
            debug!(height = uy + 1, "grid grows downward");
            self.rows.resize_with(uy + 1, Vec::new);
            self.size.y = self.rows.len() as isize;
        }
        let row = &mut self.rows[uy];
        if ux >= row.len() {
            row.resize(ux + 1, ' ');
            if row.len() as isize > self.size.x {
                debug!(width = row.len(), "grid grows rightward");
                self.size.x = row.len() as isize;
            }
        }
        row[ux] = value;
        Ok(true)
    }

    /// Owned copy of every row for display.
    pub fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}
