use crate::error::HarnessError;
use lib_agents::AgentKind;
use std::io::{BufRead, Write};

/// What the operator chose at the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub agent_a: AgentKind,
    pub agent_b: AgentKind,
    pub games: usize,
}

pub fn parse_game_count(input: &str) -> Result<usize, HarnessError> {
    let trimmed = input.trim();

    match trimmed.parse::<usize>() {
        Ok(games) if games > 0 => Ok(games),
        _ => Err(HarnessError::InvalidGameCount(trimmed.to_string())),
    }
}

/// Lists the agents, then asks for two of them and a game count.
/// The first bad answer ends the session with an error.
pub fn read_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Selection, HarnessError> {
    writeln!(output, "Available agents:")?;
    for kind in AgentKind::ALL.iter() {
        writeln!(output, "{}: {}", kind.menu_key(), kind)?;
    }

    let agent_a = prompt(input, output, "Select agent 1 (moves first in even games): ", "agent 1")?
        .parse::<AgentKind>()?;
    let agent_b = prompt(input, output, "Select agent 2 (moves first in odd games): ", "agent 2")?
        .parse::<AgentKind>()?;
    let games = parse_game_count(&prompt(
        input,
        output,
        "How many games to simulate? ",
        "the game count",
    )?)?;

    Ok(Selection {
        agent_a,
        agent_b,
        games,
    })
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
    waiting_for: &'static str,
) -> Result<String, HarnessError> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(HarnessError::InputClosed(waiting_for));
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_agents::HumanAgent;
    use lib_boardgame::{AgentError, GameAgent, GameState};
    use lib_connect_four::{ConnectFourAction, ConnectFourState};

    fn select(answers: &str) -> (Result<Selection, HarnessError>, String) {
        let mut input = answers.as_bytes();
        let mut output = Vec::new();

        let selection = read_selection(&mut input, &mut output);

        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn read_selection_expects_menu_keys_and_names() {
        let (selection, printed) = select("2\nmcts\n10\n");

        assert_eq!(
            Selection {
                agent_a: AgentKind::Greedy,
                agent_b: AgentKind::Mcts,
                games: 10,
            },
            selection.unwrap()
        );
        assert!(printed.starts_with("Available agents:\n1: RandomAI\n"));
        assert!(printed.contains("4: MinimaxAI-H1\n"));
        assert!(printed.contains("How many games to simulate? "));
    }

    #[test]
    fn read_selection_when_unknown_agent_expects_failure_before_game_count() {
        let (selection, printed) = select("1\n9\n10\n");

        assert!(matches!(
            selection,
            Err(HarnessError::Agent(AgentError::UnknownAgent(_)))
        ));
        assert!(!printed.contains("How many games"));
    }

    #[test]
    fn read_selection_when_input_ends_expects_input_closed() {
        let (selection, _) = select("1\n");

        assert!(matches!(selection, Err(HarnessError::InputClosed("agent 2"))));
    }

    #[test]
    fn read_selection_expects_remaining_lines_left_for_human_agent() {
        let mut input: &[u8] = b"6\n1\n2\n4\n";
        let mut output = Vec::new();

        let selection = read_selection(&mut input, &mut output).unwrap();
        assert_eq!(AgentKind::Human, selection.agent_a);
        assert_eq!(2, selection.games);

        let state = ConnectFourState::default();
        let mut human = HumanAgent::new(&mut input, Vec::new());
        let action = human.pick_move(&state, &state.legal_moves()).unwrap();

        assert_eq!(ConnectFourAction(3), action);
    }

    #[test]
    fn parse_game_count_expects_positive_integers_only() {
        assert_eq!(25, parse_game_count(" 25\n").unwrap());

        for bad in &["0", "-3", "ten", ""] {
            assert!(
                matches!(parse_game_count(bad), Err(HarnessError::InvalidGameCount(_))),
                "{:?} was accepted",
                bad
            );
        }
    }
}
