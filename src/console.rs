//! Terminal front end: prompts for the roster and for each move.

use crate::bot::MoveSource;
use crate::config::TournamentConfig;
use crate::error::ArenaError;
use crate::game::{MatchState, Move};
use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, Write};
use std::str::FromStr;

/// Reads whitespace separated tokens, so `1 2` on one line answers both
/// the row and the column prompt.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<(), ArenaError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, ArenaError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ArenaError::InputExhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front().ok_or(ArenaError::InputExhausted)
    }

    /// Anything that does not parse is fatal; there is no retry at this level.
    fn next_value<T: FromStr>(&mut self) -> Result<T, ArenaError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| ArenaError::MalformedInput(token))
    }

    /// Ask for player count, names and, unless already known, board size.
    pub fn prompt_config(&mut self, board_size: Option<usize>) -> Result<TournamentConfig, ArenaError> {
        self.prompt("Enter the number of players: ")?;
        let count: usize = self.next_value()?;

        let mut players = Vec::new();
        for i in 1..=count {
            self.prompt(&format!("Enter name of player {}: ", i))?;
            players.push(self.next_token()?);
        }

        let board_size = match board_size {
            Some(size) => size,
            None => {
                self.prompt(
                    "Enter the size of the Tic Tac Toe board (e.g., 3 for 3x3, 4 for 4x4, etc.): ",
                )?;
                self.next_value()?
            }
        };

        Ok(TournamentConfig {
            players,
            board_size,
        })
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn next_move(&mut self, _player: &str, state: &MatchState) -> Result<Move, ArenaError> {
        let last = state.board_size() - 1;
        self.prompt(&format!("Enter row number (0-{}): ", last))?;
        let row = self.next_value()?;
        self.prompt(&format!("Enter column number (0-{}): ", last))?;
        let col = self.next_value()?;
        Ok(Move::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_row_then_column() {
        let state = MatchState::new(3).unwrap();
        let mut c = console("1\n2\n");
        assert_eq!(c.next_move("A", &state).unwrap(), Move::new(1, 2));

        let output = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(output, "Enter row number (0-2): Enter column number (0-2): ");
    }

    #[test]
    fn test_both_coordinates_on_one_line() {
        let state = MatchState::new(4).unwrap();
        let mut c = console("0 3\n-1 7\n");
        assert_eq!(c.next_move("A", &state).unwrap(), Move::new(0, 3));
        // Negative numbers parse; the board refuses them later
        assert_eq!(c.next_move("B", &state).unwrap(), Move::new(-1, 7));
    }

    #[test]
    fn test_non_integer_is_malformed() {
        let state = MatchState::new(3).unwrap();
        let mut c = console("one 1\n");
        match c.next_move("A", &state) {
            Err(ArenaError::MalformedInput(token)) => assert_eq!(token, "one"),
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_end_of_input() {
        let state = MatchState::new(3).unwrap();
        let mut c = console("1\n");
        assert!(matches!(
            c.next_move("A", &state),
            Err(ArenaError::InputExhausted)
        ));
    }

    #[test]
    fn test_prompt_config() {
        let mut c = console("3\nAlice\nBob Carol\n4\n");
        let config = c.prompt_config(None).unwrap();
        assert_eq!(config.players, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(config.board_size, 4);
    }

    #[test]
    fn test_prompt_config_with_known_board_size() {
        let mut c = console("2\nA\nB\n");
        let config = c.prompt_config(Some(5)).unwrap();
        assert_eq!(config.board_size, 5);

        let output = String::from_utf8(c.into_output()).unwrap();
        assert!(!output.contains("size of the Tic Tac Toe board"));
    }

    #[test]
    fn test_huge_player_count_runs_out_of_names() {
        let mut c = console("18446744073709551615\nA\nB\n");
        assert!(matches!(
            c.prompt_config(Some(3)),
            Err(ArenaError::InputExhausted)
        ));
    }

    #[test]
    fn test_negative_player_count_is_malformed() {
        let mut c = console("-2\n");
        assert!(matches!(
            c.prompt_config(None),
            Err(ArenaError::MalformedInput(_))
        ));
    }
}
