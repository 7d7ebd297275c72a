use lib_boardgame::GameState;
use std::cell::Cell;
use std::fmt;

/// Summary of one node's statistics, detached from the tree.
#[derive(Clone)]
pub struct MctsResult<TState: GameState> {
    pub action: TState::Move,
    pub visits: usize,
    pub score: i64,
}

impl<TState: GameState> MctsResult<TState> {
    /// Average outcome per visit, in [-1, 1].
    pub fn mean_score(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score as f64 / self.visits as f64
        }
    }
}

impl<TState> fmt::Debug for MctsResult<TState>
where
    TState: GameState,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {:?} V: {:>8} S: {:>8} ({:.3})",
            self.action,
            self.visits,
            self.score,
            self.mean_score()
        )
    }
}

/// MCTS-related data that every Node will have.
///
/// `score` is kept from the point of view of the player the search runs for:
/// +1 per simulated win, -1 per simulated loss, unchanged on a draw.
pub struct MctsData<T>
where
    T: GameState,
{
    state: T,
    action: Option<T::Move>,
    visits: Cell<usize>,
    score: Cell<i64>,
    is_expanded: Cell<bool>,
}

impl<T> Clone for MctsData<T>
where
    T: GameState,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            action: self.action,
            visits: self.visits.clone(),
            score: self.score.clone(),
            is_expanded: self.is_expanded.clone(),
        }
    }
}

impl<T> fmt::Debug for MctsData<T>
where
    T: GameState,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Action: {:?} Visits: {} Score: {} Expanded: {}",
            self.action,
            self.visits(),
            self.score(),
            self.is_expanded()
        )
    }
}

impl<T> MctsData<T>
where
    T: GameState,
{
    pub fn new(state: T, action: Option<T::Move>) -> Self {
        Self {
            state,
            action,
            visits: Cell::new(0),
            score: Cell::new(0),
            is_expanded: Cell::new(false),
        }
    }

    // "Read" functions

    pub fn state(&self) -> &T {
        &self.state
    }

    /// The move that led from the parent's state to this one.
    /// None for the root.
    pub fn action(&self) -> Option<T::Move> {
        self.action
    }

    pub fn visits(&self) -> usize {
        self.visits.get()
    }

    pub fn score(&self) -> i64 {
        self.score.get()
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded.get()
    }

    pub fn result(&self) -> Option<MctsResult<T>> {
        let action = self.action?;

        Some(MctsResult {
            action,
            visits: self.visits(),
            score: self.score(),
        })
    }

    // "Write" functions

    /// The owner of the tree search should call this upon expanding the node.
    /// It tells apart terminal nodes (expanded, still childless)
    /// from leaves that simply have not been expanded yet.
    pub fn mark_expanded(&self) {
        self.is_expanded.set(true);
    }

    /// Counts one more simulation through this node, with the given outcome.
    pub fn record_visit(&self, outcome: i64) {
        self.visits.set(self.visits.get() + 1);
        self.score.set(self.score.get() + outcome);
    }
}

impl<T> fmt::Display for MctsData<T>
where
    T: GameState + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_connect_four::{ConnectFourAction, ConnectFourState};

    #[test]
    fn new_data_expects_unvisited_and_unexpanded() {
        let data = MctsData::new(ConnectFourState::default(), None);

        assert_eq!(0, data.visits());
        assert_eq!(0, data.score());
        assert!(!data.is_expanded());
    }

    #[test]
    fn mark_expanded_expects_is_expanded() {
        let data = MctsData::new(ConnectFourState::default(), None);
        data.mark_expanded();

        assert!(data.is_expanded());
    }

    #[test]
    fn record_visit_expects_visits_and_signed_score_accumulate() {
        let data = MctsData::new(ConnectFourState::default(), None);

        data.record_visit(1);
        data.record_visit(1);
        data.record_visit(-1);
        data.record_visit(0);

        assert_eq!(4, data.visits());
        assert_eq!(1, data.score());
    }

    #[test]
    fn result_expects_none_for_root() {
        let data = MctsData::new(ConnectFourState::default(), None);

        assert!(data.result().is_none());
    }

    #[test]
    fn result_expects_snapshot_of_statistics() {
        let data = MctsData::new(ConnectFourState::default(), Some(ConnectFourAction(3)));
        data.record_visit(1);
        data.record_visit(-1);
        data.record_visit(1);
        data.record_visit(1);

        let result = data.result().expect("child data has an action");

        assert_eq!(ConnectFourAction(3), result.action);
        assert_eq!(4, result.visits);
        assert_eq!(2, result.score);
        assert!((result.mean_score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn clone_expects_independent_counters() {
        let data = MctsData::new(ConnectFourState::default(), None);
        data.record_visit(1);

        let cloned = data.clone();
        cloned.record_visit(1);

        assert_eq!(1, data.visits());
        assert_eq!(2, cloned.visits());
    }
}
