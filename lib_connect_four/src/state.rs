use crate::board::{Board, BoardError};
use lib_boardgame::{GameMove, GameResult, GameState, Player};
use std::fmt;
use std::str::FromStr;

/// Dropping a piece into a column, 0-based.
/// Displayed and parsed 1-based, the way players count columns.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ConnectFourAction(pub usize);

impl GameMove for ConnectFourAction {}

impl ConnectFourAction {
    pub fn column(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectFourAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("'{0}' is not a column number (columns are counted from 1)")]
pub struct ParseActionError(String);

impl FromStr for ConnectFourAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(ConnectFourAction(n - 1)),
            _ => Err(ParseActionError(trimmed.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectFourState {
    board: Board,
    current_player: Player,
    result: Option<GameResult>,
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self::from_board(Board::default(), Player::One)
    }
}

impl ConnectFourState {
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(rows, columns)?, Player::One))
    }

    /// Starts from an arbitrary position with `to_move` to play.
    /// A board that already holds a win or is full is over from the start.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let result = if board.has_connect_four(Player::One) {
            Some(GameResult::PlayerOneWins)
        } else if board.has_connect_four(Player::Two) {
            Some(GameResult::PlayerTwoWins)
        } else if board.is_full() {
            Some(GameResult::Tie)
        } else {
            None
        };

        Self {
            board,
            current_player: to_move,
            result,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl fmt::Display for ConnectFourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;

        match self.result {
            None => write!(f, "{} to move", self.current_player),
            Some(GameResult::Tie) => write!(f, "Draw"),
            Some(result) => match result.winner() {
                Some(winner) => write!(f, "{} wins", winner),
                None => Ok(()),
            },
        }
    }
}

impl GameState for ConnectFourState {
    type Move = ConnectFourAction;

    fn human_friendly(&self) -> String {
        self.to_string()
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        if self.result.is_some() {
            return Vec::new();
        }

        self.board
            .valid_columns()
            .into_iter()
            .map(ConnectFourAction)
            .collect()
    }

    fn apply_move(&mut self, action: Self::Move) {
        assert!(
            self.result.is_none(),
            "move {} applied to a finished game",
            action
        );

        let mover = self.current_player;
        if let Err(e) = self.board.drop_piece(action.column(), mover) {
            panic!("{} played an illegal move: {}", mover, e);
        }

        if self.board.has_connect_four(mover) {
            self.result = Some(GameResult::win_for(mover));
        } else if self.board.is_full() {
            self.result = Some(GameResult::Tie);
        }

        self.current_player = mover.opponent();
    }

    fn current_player_turn(&self) -> Player {
        self.current_player
    }

    fn game_result(&self) -> Option<GameResult> {
        self.result
    }
}
