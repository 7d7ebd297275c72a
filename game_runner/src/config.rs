use crate::error::ConfigError;
use lib_agents::{AgentConfig, TieBreak};
use lib_connect_four::{CONNECT_LENGTH, DEFAULT_COLUMNS, DEFAULT_ROWS};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the config file to load.
pub const CONFIG_PATH_VAR: &str = "CONNECT_FOUR_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "connect_four.toml";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreakSetting {
    First,
    Random,
}

impl From<TieBreakSetting> for TieBreak {
    fn from(setting: TieBreakSetting) -> Self {
        match setting {
            TieBreakSetting::First => TieBreak::FirstEncountered,
            TieBreakSetting::Random => TieBreak::Random,
        }
    }
}

/// Settings for a batch of simulated games, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub rows: usize,
    pub columns: usize,
    pub minimax_depth: usize,
    pub mcts_time_budget_secs: f64,
    pub exploration: f64,
    pub tie_break: TieBreakSetting,
    pub seed: Option<u64>,

    /// Filter directive used when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            minimax_depth: 4,
            mcts_time_budget_secs: 0.25,
            exploration: std::f64::consts::SQRT_2,
            tie_break: TieBreakSetting::First,
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}

impl HarnessConfig {
    /// The file named by `CONNECT_FOUR_CONFIG`, or `connect_four.toml`.
    pub fn default_path() -> PathBuf {
        env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: HarnessConfig = toml::from_str(content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < CONNECT_LENGTH || self.columns < CONNECT_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must be at least {0}x{0}, got {1}x{2}",
                CONNECT_LENGTH, self.rows, self.columns
            )));
        }
        if self.minimax_depth == 0 {
            return Err(ConfigError::Validation(
                "minimax_depth must be > 0".into(),
            ));
        }
        let budget_fits = Duration::try_from_secs_f64(self.mcts_time_budget_secs).is_ok();
        if !budget_fits || self.mcts_time_budget_secs <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "mcts_time_budget_secs must be a positive number of seconds, got {}",
                self.mcts_time_budget_secs
            )));
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(ConfigError::Validation(
                "exploration must be >= 0".into(),
            ));
        }

        Ok(())
    }

    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            minimax_depth: self.minimax_depth,
            // Saturates for budgets validate() rejects.
            mcts_time_budget: Duration::try_from_secs_f64(self.mcts_time_budget_secs)
                .unwrap_or(Duration::MAX),
            exploration: self.exploration,
            tie_break: self.tie_break.into(),
            seed: self.seed,
        }
    }
}
