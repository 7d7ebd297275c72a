pub mod config;
pub mod error;
pub mod menu;
pub mod simulator;
pub mod stats;

pub use config::HarnessConfig;
pub use error::{ConfigError, HarnessError};
pub use menu::{parse_game_count, read_selection, Selection};
pub use simulator::{run_matchup, run_matchup_from};
pub use stats::{MatchReport, MatchStats};
