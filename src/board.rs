use std::fmt;

use crate::constants::{CORNERS, N};

/// One of the two players. Black (wire value 1) maximizes, White (2) minimizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// +1 for Black, -1 for White. Scores are kept from Black's point of view.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Side),
}

impl Cell {
    /// Wire encoding: 0 empty, 1 black, 2 white.
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Stone(Side::Black)),
            2 => Some(Cell::Stone(Side::White)),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(Side::Black) => 1,
            Cell::Stone(Side::White) => 2,
        }
    }
}

/// 8x8 grid addressed with 1-indexed `(x, y)` coordinates.
///
/// `Board` is `Copy`: search code branches by value and never shares storage
/// with a parent position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard starting layout: white on D4/E5, black on E4/D5.
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.write(4, 4, Cell::Stone(Side::White));
        board.write(5, 5, Cell::Stone(Side::White));
        board.write(5, 4, Cell::Stone(Side::Black));
        board.write(4, 5, Cell::Stone(Side::Black));
        board
    }

    #[inline]
    fn in_range(x: i8, y: i8) -> bool {
        (1..=N as i8).contains(&x) && (1..=N as i8).contains(&y)
    }

    /// Cell at `(x, y)`, or `None` when the coordinate is off the board.
    #[inline]
    pub fn read(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_range(x, y) {
            return None;
        }
        Some(self.cells[(y - 1) as usize][(x - 1) as usize])
    }

    /// Set the cell at `(x, y)`. Returns false, leaving the board untouched,
    /// when the coordinate is off the board.
    pub fn write(&mut self, x: i8, y: i8, value: Cell) -> bool {
        if !Self::in_range(x, y) {
            return false;
        }
        self.cells[(y - 1) as usize][(x - 1) as usize] = value;
        true
    }

    /// Whether `(x, y)` holds a stone of `side`. Off-board never matches.
    #[inline]
    pub fn is(&self, x: i8, y: i8, side: Side) -> bool {
        self.read(x, y) == Some(Cell::Stone(side))
    }

    /// Iterate over `(x, y, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (col as i8 + 1, row as i8 + 1, cell))
        })
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Stone(side))
            .count()
    }

    pub fn empties(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Empty)
            .count()
    }

    pub fn corners(&self, side: Side) -> usize {
        CORNERS
            .iter()
            .filter(|&&(x, y)| self.is(x, y, side))
            .count()
    }

    /// Black count minus white count.
    pub fn differential(&self) -> i32 {
        self.count(Side::Black) as i32 - self.count(Side::White) as i32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..N {
            write!(f, "{} ", (b'A' + x as u8) as char)?;
        }
        writeln!(f)?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{} ", row + 1)?;
            for cell in line {
                let ch = match cell {
                    Cell::Stone(Side::Black) => 'X',
                    Cell::Stone(Side::White) => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
