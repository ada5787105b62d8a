//! Grid and cell types.

use std::fmt;

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Pos {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    /// Open floor.
    Empty,
    /// Impassable wall.
    Wall,
    /// A pack of enemies waiting to ambush.
    Enemy,
    /// Health pickup.
    Health,
    /// A hidden trap.
    Trap,
    /// Food pickup.
    Food,
    /// The player marker.
    Player,
    /// The exit marker.
    Exit,
}

impl Cell {
    /// Single-character symbol used when rendering the grid.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => 'w',
            Cell::Enemy => 'E',
            Cell::Health => 'H',
            Cell::Trap => 'T',
            Cell::Food => 'F',
            Cell::Player => 'P',
            Cell::Exit => 'X',
        }
    }
}

/// The dungeon grid.
///
/// Cells are stored in row-major order. The outermost ring is always wall;
/// the generator establishes that invariant and nothing in the engine
/// writes to border cells afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in cells.
    width: u16,
    /// Height in cells.
    height: u16,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; size],
        }
    }

    /// Get the width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a position is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Check if a position lies on the outer border ring.
    #[must_use]
    pub const fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.x + 1 >= self.width || pos.y == 0 || pos.y + 1 >= self.height
    }

    /// Convert a position to an index into the cells array.
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "position out of bounds: {pos:?}");
        usize::from(pos.y) * usize::from(self.width) + usize::from(pos.x)
    }

    /// Get the cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Set the cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Iterate over all positions and cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            #[allow(clippy::cast_possible_truncation)]
            let x = (idx % usize::from(width)) as u16;
            #[allow(clippy::cast_possible_truncation)]
            let y = (idx / usize::from(width)) as u16;
            (Pos::new(x, y), cell)
        })
    }

    /// Count cells holding the given content.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(usize::from(self.width).max(1)) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.count(Cell::Empty), 64);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(8, 8);
        let pos = Pos::new(3, 4);
        assert_eq!(grid.get(pos), Cell::Empty);

        grid.set(pos, Cell::Trap);
        assert_eq!(grid.get(pos), Cell::Trap);
        assert_eq!(grid.count(Cell::Trap), 1);
    }

    #[test]
    fn test_border_predicate() {
        let grid = Grid::new(10, 8);
        assert!(grid.is_border(Pos::new(0, 3)));
        assert!(grid.is_border(Pos::new(9, 3)));
        assert!(grid.is_border(Pos::new(4, 0)));
        assert!(grid.is_border(Pos::new(4, 7)));
        assert!(!grid.is_border(Pos::new(1, 1)));
        assert!(!grid.is_border(Pos::new(8, 6)));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(10, 8);
        assert!(grid.in_bounds(Pos::new(9, 7)));
        assert!(!grid.in_bounds(Pos::new(10, 0)));
        assert!(!grid.in_bounds(Pos::new(0, 8)));
    }

    #[test]
    fn test_render_rows() {
        let mut grid = Grid::new(3, 2);
        grid.set(Pos::new(0, 0), Cell::Wall);
        grid.set(Pos::new(2, 1), Cell::Exit);
        assert_eq!(grid.to_string(), "w  \n  X\n");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Wall.symbol(), 'w');
        assert_eq!(Cell::Enemy.symbol(), 'E');
        assert_eq!(Cell::Health.symbol(), 'H');
        assert_eq!(Cell::Trap.symbol(), 'T');
        assert_eq!(Cell::Food.symbol(), 'F');
        assert_eq!(Cell::Player.symbol(), 'P');
        assert_eq!(Cell::Exit.symbol(), 'X');
    }
}
