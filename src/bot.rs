use crate::error::ArenaError;
use crate::game::{GameError, MatchState, Move};
use std::collections::VecDeque;

/// Where moves come from. A match pulls one move per turn and keeps asking
/// the same player until a move is accepted.
pub trait MoveSource {
    /// Get the next move for `player`, who holds the current mark in `state`
    fn next_move(&mut self, player: &str, state: &MatchState) -> Result<Move, ArenaError>;

    /// Notified when a match starts
    fn match_start(&mut self, _player_a: &str, _player_b: &str) {}

    /// Notified when the last move was refused; the same player moves again
    fn move_rejected(&mut self, _mv: Move, _error: &GameError) {}
}

/// Replays a fixed list of moves, across as many matches as it lasts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
    rejected: usize,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        ScriptedMoves {
            moves: moves.into_iter().collect(),
            rejected: 0,
        }
    }

    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        Self::new(pairs.iter().map(|&(row, col)| Move::new(row, col)))
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// How many scripted moves the match refused
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _player: &str, _state: &MatchState) -> Result<Move, ArenaError> {
        self.moves.pop_front().ok_or(ArenaError::InputExhausted)
    }

    fn move_rejected(&mut self, _mv: Move, _error: &GameError) {
        self.rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_moves_replay_in_order() {
        let state = MatchState::new(3).unwrap();
        let mut source = ScriptedMoves::from_pairs(&[(0, 0), (2, 1)]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_move("A", &state).unwrap(), Move::new(0, 0));
        assert_eq!(source.next_move("B", &state).unwrap(), Move::new(2, 1));
        assert!(matches!(
            source.next_move("A", &state),
            Err(ArenaError::InputExhausted)
        ));
    }

    #[test]
    fn test_scripted_moves_count_rejections() {
        let mut source = ScriptedMoves::default();
        source.move_rejected(Move::new(5, 5), &GameError::GameOver);
        assert_eq!(source.rejected(), 1);
    }
}
