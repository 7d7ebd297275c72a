use crate::util;

use lib_boardgame::{GameResult, GameState, Player};
use lib_connect_four::{Board, ConnectFourState};
use monte_carlo_tree::{MctsData, MctsResult, Node, RcNode};
use std::borrow::Borrow;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(250);
pub const DEFAULT_EXPLORATION: f64 = std::f64::consts::SQRT_2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MctsParams {
    /// Wall-clock time for the search loop, checked once per iteration.
    pub time_budget: Duration,

    /// The UCT exploration constant.
    pub exploration: f64,
}

impl Default for MctsParams {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            exploration: DEFAULT_EXPLORATION,
        }
    }
}

pub struct MctsSummary<TState: GameState> {
    /// The most visited root move, or None if there was no legal move.
    pub best: Option<TState::Move>,

    /// Statistics per root move. Empty when the search was skipped.
    pub children: Vec<MctsResult<TState>>,
    pub iterations: usize,
}

/// Creates one child per legal move of a non-terminal node and marks it expanded.
/// Returns the node's children.
fn expand<TNode, TState>(node: &TNode) -> Vec<TNode::Handle>
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
{
    let data = node.data();
    data.mark_expanded();

    if !node.is_leaf() {
        return node.children();
    }

    let state = data.state();
    if state.is_game_over() {
        return Vec::new();
    }

    for action in state.legal_moves() {
        let resulting_state = state.next_state(action);
        node.new_child(MctsData::new(resulting_state, Some(action)));
    }

    node.children()
}

/// Plays uniformly random legal moves from the node's state until the game ends.
fn simulate<TNode, TState, R>(node: &TNode, rng: &mut R) -> GameResult
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
    R: rand::Rng,
{
    let mut state = node.data().state().clone();

    loop {
        if let Some(result) = state.game_result() {
            return result;
        }

        let legal_moves = state.legal_moves();
        match util::random_pick(&legal_moves, rng) {
            Some(&action) => state.apply_move(action),
            None => return GameResult::Tie,
        }
    }
}

/// Counts the simulation on every node from `node` up to the root,
/// scored +1 / -1 / 0 for `player`.
fn backprop_sim_result<TNode, TState>(node: &TNode, result: GameResult, player: Player)
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
{
    let outcome = match result.winner() {
        Some(winner) if winner == player => 1,
        Some(_) => -1,
        None => 0,
    };

    let mut handle = Some(node.get_handle());

    while let Some(h) = handle {
        let node: &TNode = h.borrow();
        node.data().record_visit(outcome);

        handle = node.parent();
    }
}

/// Always chooses the child with the best score for the searching player,
/// even on the opponent's turn (i.e. no pessimism).
fn select_to_leaf_uninverted<TNode, TState, R>(
    root: &TNode,
    exploration: f64,
    rng: &mut R,
) -> TNode::Handle
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
    R: rand::Rng,
{
    let mut cur_node = root.get_handle();

    loop {
        let selected_child = {
            let node: &TNode = cur_node.borrow();
            select_child::<TNode, TState, R>(node, exploration, rng)
        };

        match selected_child {
            Some(c) => cur_node = c,
            None => return cur_node,
        }
    }
}

/// Any unvisited child, picked at random; once every child has been visited,
/// the child with the highest UCT score (ties broken by the first).
/// None if the node has no children.
fn select_child<TNode, TState, R>(
    node: &TNode,
    exploration: f64,
    rng: &mut R,
) -> Option<TNode::Handle>
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
    R: rand::Rng,
{
    let children = node.children();

    let unvisited = children
        .iter()
        .filter(|&c| {
            let child: &TNode = c.borrow();
            child.data().visits() == 0
        })
        .cloned()
        .collect::<Vec<_>>();

    if !unvisited.is_empty() {
        return util::random_pick(&unvisited, rng).cloned();
    }

    let parent_visits = node.data().visits();
    let mut best: Option<(TNode::Handle, f64)> = None;

    for child in children {
        let score = score_node_uct::<TNode, TState>(child.borrow(), parent_visits, exploration);

        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            best = Some((child, score));
        }
    }

    best.map(|(child, _)| child)
}

/// Mean outcome plus the exploration bonus. Only meaningful for visited nodes.
fn score_node_uct<TNode, TState>(node: &TNode, parent_visits: usize, exploration: f64) -> f64
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
{
    let data = node.data();
    let visits = data.visits() as f64;
    let parent_visits = parent_visits as f64;

    data.score() as f64 / visits + exploration * f64::sqrt(f64::ln(parent_visits) / visits)
}

/// Runs select / expand / simulate / backprop until the time budget is spent.
/// The root is expanded up front, so it has children even with a zero budget.
/// Returns the number of iterations run.
fn mcts<TNode, TState, R>(root: &TNode, player: Player, params: &MctsParams, rng: &mut R) -> usize
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
    R: rand::Rng,
{
    let now = Instant::now();

    expand(root);

    let mut iterations: usize = 0;
    while now.elapsed() < params.time_budget {
        iterations += 1;

        // Select: travel down to a leaf node, using the explore/exploit rules.
        let leaf_handle = select_to_leaf_uninverted::<TNode, TState, R>(root, params.exploration, rng);
        let leaf: &TNode = leaf_handle.borrow();

        // Expand: terminal leaves stay childless.
        let children = if leaf.data().is_expanded() {
            leaf.children()
        } else {
            expand(leaf)
        };

        let sim_handle = match util::random_pick(&children, rng) {
            Some(child) => child.clone(),
            None => leaf.get_handle(),
        };
        let sim_node: &TNode = sim_handle.borrow();

        let sim_result = simulate(sim_node, rng);
        backprop_sim_result(sim_node, sim_result, player);
    }

    iterations
}

/// Searches `state` for `player` and reports the most visited root move.
///
/// With exactly one legal move it is returned without searching.
pub fn mcts_result<TNode, TState, R>(
    state: TState,
    player: Player,
    params: &MctsParams,
    rng: &mut R,
) -> MctsSummary<TState>
where
    TNode: Node<Data = MctsData<TState>>,
    TState: GameState,
    R: rand::Rng,
{
    let legal_moves = state.legal_moves();

    match legal_moves.as_slice() {
        [] => {
            return MctsSummary {
                best: None,
                children: Vec::new(),
                iterations: 0,
            }
        }
        [only] => {
            return MctsSummary {
                best: Some(*only),
                children: Vec::new(),
                iterations: 0,
            }
        }
        _ => {}
    }

    let root_handle = TNode::new_root(MctsData::new(state, None));
    let root: &TNode = root_handle.borrow();

    let iterations = mcts::<TNode, TState, R>(root, player, params, rng);

    let children = root
        .children()
        .iter()
        .filter_map(|c| {
            let child: &TNode = c.borrow();
            child.data().result()
        })
        .collect::<Vec<_>>();

    // Robust child: most visits, first on ties.
    let mut best: Option<&MctsResult<TState>> = None;
    for child in &children {
        if best.map_or(true, |b| child.visits > b.visits) {
            best = Some(child);
        }
    }
    let best = best.map(|b| b.action);

    debug!(iterations, ?best, ?children, "mcts search finished");

    MctsSummary {
        best,
        children,
        iterations,
    }
}

/// The column MCTS picks for `player` on `board`, or None if no column is open
/// (or the game on the board is already decided).
pub fn search_column<R: rand::Rng>(
    board: &Board,
    player: Player,
    params: &MctsParams,
    rng: &mut R,
) -> Option<usize> {
    let state = ConnectFourState::from_board(board.clone(), player);

    mcts_result::<RcNode<_>, _, _>(state, player, params, rng)
        .best
        .map(|action| action.column())
}
