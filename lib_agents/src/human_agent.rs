use lib_boardgame::{AgentError, GameAgent, GameState};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::str::FromStr;

/// Where a `HumanAgent` reads its answers from, one line at a time.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each line.
/// Reads go through std's single stdin buffer, so any number of agents and menus
/// can take turns on the same stream without losing buffered input.
pub struct SharedStdin(Stdin);

impl LineSource for SharedStdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Asks a person for each move over a text stream.
/// Unparsable or unavailable moves are answered with a new prompt.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<SharedStdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(SharedStdin(io::stdin()), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt_input(&mut self, prompt: &str) -> Result<String, AgentError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(AgentError::InputClosed);
        }

        Ok(input)
    }
}

impl<TState, R, W> GameAgent<TState> for HumanAgent<R, W>
where
    TState: GameState,
    TState::Move: FromStr + Display,
    <TState::Move as FromStr>::Err: Display,
    R: LineSource,
    W: Write,
{
    fn pick_move(
        &mut self,
        state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        let (first, last) = match (legal_moves.first(), legal_moves.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(AgentError::NoMoveFound {
                    agent: String::from("Human"),
                })
            }
        };
        let prompt = format!(
            "{}: Make your selection ({}-{}): ",
            state.current_player_turn(),
            first,
            last
        );

        writeln!(self.output, "{}", state.human_friendly())?;

        loop {
            let user_input = self.prompt_input(&prompt)?;

            match user_input.parse::<TState::Move>() {
                Ok(action) if legal_moves.contains(&action) => return Ok(action),
                Ok(action) => writeln!(
                    self.output,
                    "Column {} is not available. Try again.",
                    action
                )?,
                Err(e) => writeln!(self.output, "{}. Try again.", e)?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
