//! Puzzle configurations and the moves between them

use std::fmt;

use rand::{seq::SliceRandom, Rng};

use crate::error::{Error, Result};

/// Side length of the grid
pub const DIMENSION: usize = 3;

/// Number of cells on the grid
pub const CELLS: usize = DIMENSION * DIMENSION;

/// Value stored in the blank cell
pub const BLANK: u8 = 0;

/// Separator between the cells of a row when a state is displayed
pub const TILES_DELIMITER: char = '|';

/// A direction in which the blank tile moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    /// Every action, in expansion order
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

    /// Row and column offset applied to the blank
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Action::Left => (0, -1),
            Action::Right => (0, 1),
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// An arrangement of the eight tiles and the blank.
///
/// States are plain values: every move produces a new `State` and the grid
/// can only be read through copies. Equality and hashing compare the whole
/// grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    cells: [u8; CELLS],
    blank: u8,
}

impl State {
    /// Builds a state from numeric rows, `BLANK` marking the empty cell.
    pub fn new(rows: [[u8; DIMENSION]; DIMENSION]) -> Result<Self> {
        let mut cells = [BLANK; CELLS];

        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value as usize >= CELLS {
                    return Err(Error::UnknownSymbol {
                        symbol: value.to_string(),
                        row: i,
                        col: j,
                    });
                }
                cells[i * DIMENSION + j] = value;
            }
        }

        Self::from_cells(cells)
    }

    /// Builds a state from textual cells such as the ones read from a CSV
    /// record. `"1"` to `"8"` are tiles; `" "` or an empty cell is the blank.
    /// Anything else, including padded digits, is rejected.
    pub fn from_symbols<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let row_lengths: Vec<usize> = rows.iter().map(|row| row.as_ref().len()).collect();
        if row_lengths.len() != DIMENSION || row_lengths.iter().any(|&len| len != DIMENSION) {
            return Err(Error::InvalidShape {
                rows: row_lengths.len(),
                row_lengths,
            });
        }

        let mut cells = [BLANK; CELLS];
        for (i, row) in rows.iter().enumerate() {
            for (j, symbol) in row.as_ref().iter().enumerate() {
                cells[i * DIMENSION + j] = parse_symbol(symbol.as_ref()).ok_or_else(|| {
                    Error::UnknownSymbol {
                        symbol: symbol.as_ref().to_string(),
                        row: i,
                        col: j,
                    }
                })?;
            }
        }

        Self::from_cells(cells)
    }

    fn from_cells(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            seen[value as usize] = true;
        }

        if seen.iter().any(|&present| !present) {
            return Err(Error::InvalidTiles {
                values: cells.to_vec(),
            });
        }

        let blank = cells
            .iter()
            .position(|&value| value == BLANK)
            .ok_or_else(|| Error::InvalidTiles {
                values: cells.to_vec(),
            })?;

        Ok(Self {
            cells,
            blank: blank as u8,
        })
    }

    /// The solved arrangement: tiles in reading order, blank last.
    pub fn solved() -> Self {
        let mut cells = [BLANK; CELLS];
        for (i, cell) in cells.iter_mut().take(CELLS - 1).enumerate() {
            *cell = i as u8 + 1;
        }

        Self {
            cells,
            blank: (CELLS - 1) as u8,
        }
    }

    /// A uniformly shuffled arrangement. Half of these cannot reach any
    /// given goal; see [`State::random_reachable`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut flattened: [u8; CELLS] = std::array::from_fn(|i| i as u8);
        flattened.shuffle(rng);

        let blank = flattened
            .iter()
            .position(|&value| value == BLANK)
            .unwrap_or_default();

        Self {
            cells: flattened,
            blank: blank as u8,
        }
    }

    /// Reshuffles until the arrangement can be transformed into `goal`.
    pub fn random_reachable<R: Rng + ?Sized>(rng: &mut R, goal: &State) -> Self {
        loop {
            let candidate = Self::random(rng);
            if candidate.same_parity_as(goal) {
                return candidate;
            }
        }
    }

    /// The state reached by sliding the blank towards `action`, or `None`
    /// if the blank would leave the grid.
    pub fn after(&self, action: Action) -> Option<State> {
        let (row, col) = self.blank_position();
        let (dx, dy) = action.as_offset();

        let new_row = row as isize + dx;
        let new_col = col as isize + dy;

        if new_row >= 0 && new_row < DIMENSION as isize && new_col >= 0 && new_col < DIMENSION as isize {
            let target = new_row as usize * DIMENSION + new_col as usize;

            let mut cells = self.cells;
            cells.swap(self.blank as usize, target);

            Some(State {
                cells,
                blank: target as u8,
            })
        } else {
            None
        }
    }

    /// Every valid move from this state together with its result
    pub fn successors(&self) -> impl Iterator<Item = (Action, State)> {
        let state = *self;
        Action::ALL
            .into_iter()
            .filter_map(move |action| state.after(action).map(|next| (action, next)))
    }

    /// Row and column of the blank
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self.blank as usize;
        (index / DIMENSION, index % DIMENSION)
    }

    /// A copy of the grid
    pub fn tiles(&self) -> [[u8; DIMENSION]; DIMENSION] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.cells[i * DIMENSION + j]))
    }

    /// The grid in reading order
    pub fn cells(&self) -> [u8; CELLS] {
        self.cells
    }

    /// Number of tile pairs that appear in the opposite order of their
    /// values when read row by row, ignoring the blank.
    pub fn inversions(&self) -> usize {
        let mut tiles = [BLANK; CELLS - 1];
        for (slot, &value) in tiles
            .iter_mut()
            .zip(self.cells.iter().filter(|&&value| value != BLANK))
        {
            *slot = value;
        }

        (0..tiles.len())
            .flat_map(|i| (i + 1..tiles.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| tiles[i] > tiles[j])
            .count()
    }

    /// Whether `other` can be reached from this state. On an odd-width grid
    /// a move never changes the inversion parity, and every arrangement of
    /// the same parity is reachable.
    pub fn same_parity_as(&self, other: &State) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl Default for State {
    fn default() -> Self {
        Self::solved()
    }
}

/// Character shown for a cell value
pub fn symbol(value: u8) -> char {
    if value == BLANK {
        ' '
    } else {
        char::from(b'0' + value)
    }
}

fn parse_symbol(symbol: &str) -> Option<u8> {
    match symbol.as_bytes() {
        b"" | b" " => Some(BLANK),
        &[digit @ b'1'..=b'8'] => Some(digit - b'0'),
        _ => None,
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(DIMENSION).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "{}", TILES_DELIMITER)?;
                }
                write!(f, "{}", symbol(val))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.tiles()).finish()
    }
}
