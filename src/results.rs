//! Score keeping and tournament reports

use crate::arena::{MatchResult, Outcome};
use crate::error::ArenaError;
use crate::schedule::{Fixture, Schedule};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Standing {
    fn new(player: &str) -> Self {
        Standing {
            player: player.to_string(),
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Win counts per player, kept in roster order. A player's score is their
/// number of wins; draws and losses are tracked for the report only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    entries: Vec<Standing>,
}

impl ScoreLedger {
    pub fn new(players: &[String]) -> Self {
        ScoreLedger {
            entries: players.iter().map(|p| Standing::new(p)).collect(),
        }
    }

    fn index_of(&self, player: &str) -> Result<usize, ArenaError> {
        self.entries
            .iter()
            .position(|s| s.player == player)
            .ok_or_else(|| ArenaError::UnknownPlayer(player.to_string()))
    }

    pub fn standing(&self, player: &str) -> Option<&Standing> {
        self.entries.iter().find(|s| s.player == player)
    }

    pub fn wins(&self, player: &str) -> Option<u32> {
        self.standing(player).map(|s| s.wins)
    }

    /// Credit a finished match. Both players must be on the roster; if
    /// either is missing nothing is recorded.
    pub fn record(&mut self, result: &MatchResult) -> Result<(), ArenaError> {
        let a_index = self.index_of(&result.player_a)?;
        let b_index = self.index_of(&result.player_b)?;
        let (a, b) = match result.outcome {
            Outcome::WinA => (Slot::Win, Slot::Loss),
            Outcome::WinB => (Slot::Loss, Slot::Win),
            Outcome::Draw => (Slot::Draw, Slot::Draw),
        };
        a.apply(&mut self.entries[a_index]);
        b.apply(&mut self.entries[b_index]);
        Ok(())
    }

    /// Roster order.
    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    /// Most wins first; equal scores keep roster order.
    pub fn standings(&self) -> Vec<&Standing> {
        let mut sorted: Vec<&Standing> = self.entries.iter().collect();
        sorted.sort_by(|x, y| y.wins.cmp(&x.wins));
        sorted
    }
}

#[derive(Clone, Copy)]
enum Slot {
    Win,
    Draw,
    Loss,
}

impl Slot {
    fn apply(self, standing: &mut Standing) {
        match self {
            Slot::Win => standing.wins += 1,
            Slot::Draw => standing.draws += 1,
            Slot::Loss => standing.losses += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub round: usize,
    pub result: MatchResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByeEntry {
    pub round: usize,
    pub player: String,
}

/// Everything a finished tournament leaves behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub board_size: usize,
    pub players: Vec<String>,
    matches: Vec<MatchEntry>,
    byes: Vec<ByeEntry>,
    ledger: ScoreLedger,
}

impl TournamentResults {
    pub fn new(players: &[String], board_size: usize) -> Self {
        TournamentResults {
            board_size,
            players: players.to_vec(),
            matches: Vec::new(),
            byes: Vec::new(),
            ledger: ScoreLedger::new(players),
        }
    }

    pub fn record_match(&mut self, round: usize, result: MatchResult) -> Result<(), ArenaError> {
        self.ledger.record(&result)?;
        self.matches.push(MatchEntry { round, result });
        Ok(())
    }

    pub fn record_bye(&mut self, round: usize, player: &str) {
        self.byes.push(ByeEntry {
            round,
            player: player.to_string(),
        });
    }

    pub fn matches(&self) -> &[MatchEntry] {
        &self.matches
    }

    pub fn byes(&self) -> &[ByeEntry] {
        &self.byes
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Write results as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Tournament Results ===\n");
        report.push_str(&format!(
            "Board: {}x{}, Players: {}, Matches: {}\n\n",
            self.board_size,
            self.board_size,
            self.players.len(),
            self.matches.len()
        ));

        if !self.matches.is_empty() {
            report.push_str("Matches:\n");
            for entry in &self.matches {
                let r = &entry.result;
                report.push_str(&format!(
                    "  Round {}: {} vs {} -> {} ({} moves)\n",
                    entry.round, r.player_a, r.player_b, r, r.moves
                ));
            }
            report.push('\n');
        }

        report.push_str("Final Scores:\n");
        report.push_str(&format!(
            "  {:<20} {:>4} {:>4} {:>4} {:>4}\n",
            "Player", "W", "D", "L", "P"
        ));
        report.push_str(&format!("  {}\n", "-".repeat(40)));
        for s in self.ledger.standings() {
            report.push_str(&format!(
                "  {:<20} {:>4} {:>4} {:>4} {:>4}\n",
                s.player,
                s.wins,
                s.draws,
                s.losses,
                s.played()
            ));
        }

        report
    }

    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// One line per fixture, grouped by round.
pub fn format_schedule(schedule: &Schedule<String>) -> String {
    let mut text = String::from("Tournament Schedule:\n");
    if schedule.is_empty() {
        text.push_str("  (no matches)\n");
        return text;
    }
    for round in schedule.rounds() {
        let mut match_number = 0;
        for fixture in &round.fixtures {
            match fixture {
                Fixture::Match(a, b) => {
                    match_number += 1;
                    text.push_str(&format!(
                        "  Round {}, Match {}: {} vs {}\n",
                        round.number, match_number, a, b
                    ));
                }
                Fixture::Bye(p) => {
                    text.push_str(&format!("  Round {}: {} has a bye\n", round.number, p));
                }
            }
        }
    }
    text
}
