use std::fmt;
pub mod game_runner;

#[cfg(test)]
pub mod test_impls;

pub use game_runner::{play_game, GameRecord, MoveTiming};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The 1-based number players are known by at the table.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Tie,
    PlayerOneWins,
    PlayerTwoWins,
}

impl GameResult {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameResult::PlayerOneWins,
            Player::Two => GameResult::PlayerTwoWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerOneWins => Some(Player::One),
            GameResult::PlayerTwoWins => Some(Player::Two),
            GameResult::Tie => None,
        }
    }

    pub fn is_win_for_player(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

/// Describes a move a player can make in a game.
/// I.e., in Connect Four, a move is the column a piece is dropped into.
pub trait GameMove: Copy + fmt::Debug + PartialEq {}

/// Describes a complete state of some Game,
/// such as the board position, the current player's turn,
/// or any other relevant info.
pub trait GameState: Clone {
    type Move: GameMove;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String;

    /// Returns the possible moves the current player can make.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply the given move (or 'action') to this state, mutating this state
    /// and advancing it to the resulting state.
    /// The move must be one of `legal_moves()`.
    fn apply_move(&mut self, action: Self::Move);

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> Player;

    /// The GameResult, or None if the game is not yet over.
    fn game_result(&self) -> Option<GameResult>;

    /// True if the game is over (a player has won, or no moves remain).
    fn is_game_over(&self) -> bool {
        self.game_result().is_some()
    }

    /// Given a legal move (or 'action'), return the resulting state of applying the action
    /// to this state (does not mutate this state).
    fn next_state(&self, action: Self::Move) -> Self {
        let mut cloned = self.clone();
        cloned.apply_move(action);

        cloned
    }

    /// Apply the given moves (or 'actions') to this state, mutating it
    /// each time and advancing it through the chain of states.
    /// Implemented in terms of apply_move().
    fn apply_moves(&mut self, moves: impl IntoIterator<Item = Self::Move>) {
        for m in moves {
            self.apply_move(m);
        }
    }
}

/// Failures an agent can report instead of a move.
/// An illegal move is not one of these: the runner scores that as a forfeit.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("agent '{agent}' found no move although legal moves exist")]
    NoMoveFound { agent: String },

    #[error("unknown agent '{0}'")]
    UnknownAgent(String),

    #[error("input stream closed before a move was entered")]
    InputClosed,

    #[error("I/O error while reading a move: {0}")]
    Io(#[from] std::io::Error),
}

/// A trait representing the functionality of a GameAgent.
/// Specifically, given a GameState, a GameAgent must be able to decide a GameMove.
pub trait GameAgent<TState: GameState> {
    fn pick_move(
        &mut self,
        state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError>;

    /// Display name used in reports and logs.
    fn name(&self) -> &str;
}

impl<TState: GameState, A: GameAgent<TState> + ?Sized> GameAgent<TState> for Box<A> {
    fn pick_move(
        &mut self,
        state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        (**self).pick_move(state, legal_moves)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
