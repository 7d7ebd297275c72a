//! The Connect Four board and its `GameState` implementation.

pub mod board;
pub mod state;

pub use board::{Board, BoardError, Cell, MoveError, CONNECT_LENGTH, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use state::{ConnectFourAction, ConnectFourState, ParseActionError};
