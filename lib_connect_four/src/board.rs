use lib_boardgame::Player;
use std::fmt;

/// Number of pieces in a row needed to win.
pub const CONNECT_LENGTH: usize = 4;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;

/// Every direction a winning line can run in, as (row step, column step).
/// Row 0 is the bottom, so (1, 1) rises to the right and (-1, 1) falls.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("a board needs at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} does not exist on a board with {columns} columns")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// A `rows x columns` grid of cells, filled from row 0 (the bottom) upwards.
///
/// Queries taking a row or column panic when it is out of range;
/// use `contains_column` first when the column comes from outside.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }

        Ok(Self::empty(rows, columns))
    }

    fn empty(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains_column(&self, column: usize) -> bool {
        column < self.columns
    }

    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// True if a piece can still be dropped into `column`.
    pub fn is_valid(&self, column: usize) -> bool {
        self.get(self.rows - 1, column) == Cell::Empty
    }

    /// The lowest empty row of `column`, or `None` if it is full.
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.get(row, column) == Cell::Empty)
    }

    /// Places a piece at exactly (`row`, `column`).
    /// Gravity is the caller's responsibility; see `next_open_row`.
    pub fn drop(&mut self, row: usize, column: usize, player: Player) {
        let i = self.index(row, column);
        self.cells[i] = Cell::from(player);
    }

    /// Undoes a `drop` at (`row`, `column`).
    pub fn clear(&mut self, row: usize, column: usize) {
        let i = self.index(row, column);
        self.cells[i] = Cell::Empty;
    }

    /// Drops a piece into `column`, letting it fall to the lowest empty row.
    /// Returns the row it landed in.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if !self.contains_column(column) {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }

        let row = self
            .next_open_row(column)
            .ok_or(MoveError::ColumnFull { column })?;

        self.drop(row, column, player);

        Ok(row)
    }

    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.columns).filter(|&c| self.is_valid(c)).collect()
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !(0..self.columns).any(|c| self.is_valid(c))
    }

    pub fn has_connect_four(&self, player: Player) -> bool {
        let target = Cell::from(player);

        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    /// Every horizontal, vertical and diagonal run of `CONNECT_LENGTH` cells
    /// that fits on the board.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; CONNECT_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(row_step, column_step)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.columns)
                    .filter_map(move |column| self.window_at(row, column, row_step, column_step))
            })
        })
    }

    fn window_at(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
    ) -> Option<[Cell; CONNECT_LENGTH]> {
        let position = |i: usize| {
            (
                row as isize + row_step * i as isize,
                column as isize + column_step * i as isize,
            )
        };

        let (last_row, last_column) = position(CONNECT_LENGTH - 1);
        if last_row < 0
            || last_row >= self.rows as isize
            || last_column < 0
            || last_column >= self.columns as isize
        {
            return None;
        }

        let mut window = [Cell::Empty; CONNECT_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let (r, c) = position(i);
            *cell = self.get(r as usize, c as usize);
        }

        Some(window)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is outside a {}x{} board",
            row,
            column,
            self.rows,
            self.columns
        );

        row * self.columns + column
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.columns.to_string().len();

        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.get(row, column).as_char(), width = width)?;
            }
            writeln!(f)?;
        }

        for column in 0..self.columns {
            if column > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>width$}", column + 1, width = width)?;
        }

        Ok(())
    }
}
