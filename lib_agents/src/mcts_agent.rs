mod agent;
pub mod tree_search;

pub use agent::MctsAgent;
pub use tree_search::{
    mcts_result, search_column, MctsParams, MctsSummary, DEFAULT_EXPLORATION, DEFAULT_TIME_BUDGET,
};
