use crate::bot::MoveSource;
use crate::config::{validate_board_size, validate_roster};
use crate::error::ArenaError;
use crate::game::{GameStatus, Mark, MatchState, MIN_BOARD_SIZE};
use crate::log;
use crate::results::TournamentResults;
use crate::schedule::{Fixture, Schedule, generate_schedule};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub board_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            board_size: MIN_BOARD_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WinA,
    WinB,
    Draw,
}

impl Outcome {
    fn from_status(status: GameStatus) -> Option<Outcome> {
        match status {
            GameStatus::Won(Mark::X) => Some(Outcome::WinA),
            GameStatus::Won(Mark::O) => Some(Outcome::WinB),
            GameStatus::Drawn => Some(Outcome::Draw),
            GameStatus::InProgress => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_a: String,
    pub player_b: String,
    pub outcome: Outcome,
    pub moves: usize,
}

impl MatchResult {
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::WinA => Some(&self.player_a),
            Outcome::WinB => Some(&self.player_b),
            Outcome::Draw => None,
        }
    }

    pub fn loser(&self) -> Option<&str> {
        match self.outcome {
            Outcome::WinA => Some(&self.player_b),
            Outcome::WinB => Some(&self.player_a),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(winner) => write!(f, "{} wins!", winner),
            None => write!(f, "It's a draw!"),
        }
    }
}

/// One game between two players. Player A holds X and always moves first.
pub struct Match {
    player_a: String,
    player_b: String,
    state: MatchState,
    verbose: bool,
}

impl Match {
    pub fn new(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        config: MatchConfig,
        verbose: bool,
    ) -> Result<Self, ArenaError> {
        Ok(Match {
            player_a: player_a.into(),
            player_b: player_b.into(),
            state: MatchState::new(config.board_size)?,
            verbose,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    fn player_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player_b,
            Mark::X => &self.player_a,
        }
    }

    /// Pull moves from `source` until the game is won or drawn. Refused
    /// moves are reported and the same player is asked again.
    pub fn play(&mut self, source: &mut dyn MoveSource) -> Result<MatchResult, ArenaError> {
        source.match_start(&self.player_a, &self.player_b);
        log!(
            "Match starting: {} (X) vs {} (O) on {}x{}",
            self.player_a,
            self.player_b,
            self.state.board_size(),
            self.state.board_size()
        );

        let outcome = loop {
            if let Some(outcome) = Outcome::from_status(self.state.status()) {
                break outcome;
            }

            let mark = self.state.current_mark();
            let player = self.player_for(mark).to_string();
            if self.verbose {
                println!("{}", self.state.display_board());
                println!("It's {}'s turn ({})", player, mark);
            }

            let mv = source.next_move(&player, &self.state)?;
            match self.state.apply_move(mv) {
                Ok(next) => self.state = next,
                Err(e) => {
                    if self.verbose {
                        println!("Invalid move! Please try again.");
                    }
                    log!("Rejected move {} from {}: {}", mv, player, e);
                    source.move_rejected(mv, &e);
                }
            }
        };

        let result = MatchResult {
            player_a: self.player_a.clone(),
            player_b: self.player_b.clone(),
            outcome,
            moves: self.state.move_count(),
        };

        if self.verbose {
            println!("{}", self.state.display_board());
            println!("{}", result);
        }
        log!(
            "Match over after {} moves: {:?}",
            result.moves,
            result.outcome
        );

        Ok(result)
    }
}

/// Plays a whole round robin. The schedule is fixed when the tournament
/// is created and matches run strictly in schedule order.
pub struct Tournament {
    players: Vec<String>,
    schedule: Schedule<String>,
    config: MatchConfig,
    verbose: bool,
}

impl Tournament {
    pub fn new(players: Vec<String>, config: MatchConfig, verbose: bool) -> Result<Self, ArenaError> {
        validate_board_size(config.board_size)?;
        validate_roster(&players)?;

        let schedule = generate_schedule(&players);
        log!(
            "Scheduled {} matches over {} rounds for {} players",
            schedule.match_count(),
            schedule.rounds().len(),
            players.len()
        );

        Ok(Tournament {
            players,
            schedule,
            config,
            verbose,
        })
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn schedule(&self) -> &Schedule<String> {
        &self.schedule
    }

    pub fn run(&self, source: &mut dyn MoveSource) -> Result<TournamentResults, ArenaError> {
        let mut results = TournamentResults::new(&self.players, self.config.board_size);

        if self.schedule.is_empty() {
            log!("Fewer than two players, no matches to play");
        }

        for round in self.schedule.rounds() {
            let mut match_number = 0;
            for fixture in &round.fixtures {
                match fixture {
                    Fixture::Match(player_a, player_b) => {
                        match_number += 1;
                        if self.verbose {
                            println!(
                                "\nRound {}, Match {}: {} vs {}",
                                round.number, match_number, player_a, player_b
                            );
                        }
                        let mut game = Match::new(
                            player_a.as_str(),
                            player_b.as_str(),
                            self.config,
                            self.verbose,
                        )?;
                        let result = game.play(source)?;
                        results.record_match(round.number, result)?;
                    }
                    Fixture::Bye(player) => {
                        if self.verbose {
                            println!("\nRound {}: {} has a bye", round.number, player);
                        }
                        log!("{} sits out round {}", player, round.number);
                        results.record_bye(round.number, player);
                    }
                }
            }
        }

        log!("Tournament over, {} matches played", results.matches().len());
        Ok(results)
    }
}
