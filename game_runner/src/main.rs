use anyhow::{Context, Result};
use game_runner::{read_selection, run_matchup, HarnessConfig};
use lib_agents::{build_agent, AgentConfig};
use std::io;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log_level '{}'", level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config_path = HarnessConfig::default_path();
    let config = HarnessConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    // The lock is released at the end of this statement; Human agents read on
    // from the same stdin buffer.
    let selection = read_selection(&mut io::stdin().lock(), &mut io::stdout())
        .context("reading the matchup from the menu")?;

    let agent_config = config.agent_config();
    let mut agent_a = build_agent(selection.agent_a, &agent_config);
    // Agent B draws from the next seed.
    let agent_b_config = AgentConfig {
        seed: agent_config.seed.map(|seed| seed.wrapping_add(1)),
        ..agent_config
    };
    let mut agent_b = build_agent(selection.agent_b, &agent_b_config);

    let stats = run_matchup(
        &mut *agent_a,
        &mut *agent_b,
        selection.games,
        config.rows,
        config.columns,
    )
    .with_context(|| format!("running {} vs {}", selection.agent_a, selection.agent_b))?;

    println!();
    println!("{}", stats.report());

    Ok(())
}
