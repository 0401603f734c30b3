use anyhow::{anyhow, Result};

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Black,
    White,
    Empty,
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Black => 'b',
            Cell::White => 'w',
            Cell::Empty => '-',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn pawn(&self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    pub fn from_char(color_char: char) -> Result<Color> {
        match color_char {
            'b' => Ok(Color::Black),
            'w' => Ok(Color::White),
            _ => Err(anyhow!(
                "could not parse '{}' as a color, expected 'b' or 'w'",
                color_char
            )),
        }
    }
}

/// A square pawn-game position.
///
/// Black pawns advance toward row 0, White pawns toward the last row.
/// Boards are value types: playing a move builds a new board with the
/// origin vacated and the destination occupied, the original untouched.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    // cells are stored in row-major order, top row first
    cells: Vec<Cell>,
    size: usize,
}

impl Board {
    /// Creates the conventional starting position: White pawns filling the
    /// top row, Black pawns filling the bottom row.
    pub fn starting(size: usize) -> Self {
        let mut cells = vec![Cell::Empty; size * size];
        for column in 0..size {
            cells[column] = Cell::White;
            cells[(size - 1) * size + column] = Cell::Black;
        }
        Self { cells, size }
    }

    /// Parses a board from `size` rows of `size` characters drawn from
    /// `{'b', 'w', '-'}`, top row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], size: usize) -> Result<Self> {
        if size == 0 {
            return Err(anyhow!("invalid board size 0, expected at least one row"));
        }
        if rows.len() != size {
            return Err(anyhow!("expected {} rows, got {}", size, rows.len()));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            if text.chars().count() != size {
                return Err(anyhow!(
                    "row {} is {} cells wide, expected {}",
                    row,
                    text.chars().count(),
                    size
                ));
            }
            for cell_char in text.chars() {
                match cell_char {
                    'b' => cells.push(Cell::Black),
                    'w' => cells.push(Cell::White),
                    '-' => cells.push(Cell::Empty),
                    _ => {
                        return Err(anyhow!(
                            "could not parse '{}' as a cell, expected 'b', 'w' or '-'",
                            cell_char
                        ))
                    }
                }
            }
        }
        Ok(Self { cells, size })
    }

    /// Serializes the board back to its row strings.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|column| self.get(row, column).to_char())
                    .collect()
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.size + column]
    }

    pub fn pawn_count(&self, color: Color) -> usize {
        let pawn = color.pawn();
        self.cells.iter().filter(|&&cell| cell == pawn).count()
    }

    /// Returns the color that has reached its goal rank, if any.
    ///
    /// White's goal rank is checked before Black's.
    pub fn winner(&self) -> Option<Color> {
        let last_row = self.size.checked_sub(1)?;
        if (0..self.size).any(|column| self.get(last_row, column) == Cell::White) {
            Some(Color::White)
        } else if (0..self.size).any(|column| self.get(0, column) == Cell::Black) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Generates every legal successor board for `color`: all forward
    /// moves in row-major order, then all captures in row-major order
    /// with the left diagonal before the right for each pawn.
    pub fn generate_moves(&self, color: Color) -> Vec<Board> {
        let mut moves = self.forward_moves(color);
        moves.extend(self.capture_moves(color));
        moves
    }

    fn forward_moves(&self, color: Color) -> Vec<Board> {
        if self.settled() {
            return Vec::new();
        }

        let pawn = color.pawn();
        let mut moves = Vec::new();
        for row in 0..self.size {
            for column in 0..self.size {
                if self.get(row, column) != pawn {
                    continue;
                }
                if let Some(ahead) = self.row_ahead(row, color) {
                    if self.get(ahead, column).is_empty() {
                        moves.push(self.with_move((row, column), (ahead, column), pawn));
                    }
                }
            }
        }
        moves
    }

    fn capture_moves(&self, color: Color) -> Vec<Board> {
        if self.settled() {
            return Vec::new();
        }

        let pawn = color.pawn();
        let prey = color.opponent().pawn();
        let mut moves = Vec::new();
        for row in 0..self.size {
            for column in 0..self.size {
                if self.get(row, column) != pawn {
                    continue;
                }
                let ahead = match self.row_ahead(row, color) {
                    Some(ahead) => ahead,
                    None => continue,
                };
                // left diagonal before right, both clipped at the edges
                if column > 0 && self.get(ahead, column - 1) == prey {
                    moves.push(self.with_move((row, column), (ahead, column - 1), pawn));
                }
                if column + 1 < self.size && self.get(ahead, column + 1) == prey {
                    moves.push(self.with_move((row, column), (ahead, column + 1), pawn));
                }
            }
        }
        moves
    }

    // a settled game generates no further moves for either color
    fn settled(&self) -> bool {
        self.winner().is_some()
            || self.pawn_count(Color::Black) == 0
            || self.pawn_count(Color::White) == 0
    }

    // the row a pawn of `color` advances into, None from its goal rank
    fn row_ahead(&self, row: usize, color: Color) -> Option<usize> {
        match color {
            Color::Black => row.checked_sub(1),
            Color::White => {
                if row + 1 < self.size {
                    Some(row + 1)
                } else {
                    None
                }
            }
        }
    }

    fn with_move(&self, from: (usize, usize), to: (usize, usize), pawn: Cell) -> Board {
        let mut next = self.clone();
        next.cells[from.0 * self.size + from.1] = Cell::Empty;
        next.cells[to.0 * self.size + to.1] = pawn;
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                write!(f, "{}", self.get(row, column).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
