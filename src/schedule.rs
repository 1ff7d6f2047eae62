//! Round-robin pairing by the circle method.
//!
//! The first seat stays put while the others turn around it. Instead of
//! rotating a list, round `r` reads seat `s` of the turning ring as
//! `tail[(s + r) % tail.len()]`.

use serde::{Deserialize, Serialize};

/// A place at the table: a real player or the filler seat that evens out
/// an odd roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat<P> {
    Player(P),
    Bye,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fixture<P> {
    /// First player takes X and moves first
    Match(P, P),
    /// Player sits this round out
    Bye(P),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round<P> {
    /// 1-based
    pub number: usize,
    pub fixtures: Vec<Fixture<P>>,
}

impl<P> Round<P> {
    pub fn matches(&self) -> impl Iterator<Item = (&P, &P)> {
        self.fixtures.iter().filter_map(|fixture| match fixture {
            Fixture::Match(a, b) => Some((a, b)),
            Fixture::Bye(_) => None,
        })
    }

    pub fn bye(&self) -> Option<&P> {
        self.fixtures.iter().find_map(|fixture| match fixture {
            Fixture::Bye(p) => Some(p),
            Fixture::Match(..) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule<P> {
    rounds: Vec<Round<P>>,
}

impl<P> Schedule<P> {
    pub fn rounds(&self) -> &[Round<P>] {
        &self.rounds
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Every pairing in play order.
    pub fn matches(&self) -> impl Iterator<Item = (&P, &P)> {
        self.rounds.iter().flat_map(Round::matches)
    }

    pub fn match_count(&self) -> usize {
        self.matches().count()
    }
}

/// Build the full round robin for `players` in the given order.
///
/// With fewer than two players there is nothing to play and the schedule is
/// empty. An odd roster gets a bye seat, so each player sits out exactly one
/// of the `n` rounds.
pub fn generate_schedule<P: Clone>(players: &[P]) -> Schedule<P> {
    if players.len() < 2 {
        return Schedule { rounds: Vec::new() };
    }

    let mut seats: Vec<Seat<P>> = players.iter().cloned().map(Seat::Player).collect();
    if seats.len() % 2 == 1 {
        seats.push(Seat::Bye);
    }

    let fixed = &seats[0];
    let tail = &seats[1..];
    let ring = tail.len();
    let matches_per_round = seats.len() / 2;

    let rounds = (0..ring)
        .map(|r| {
            let at = |slot: usize| &tail[(slot + r) % ring];
            let mut fixtures = Vec::with_capacity(matches_per_round);
            fixtures.extend(pair(fixed, at(0)));
            for slot in 1..matches_per_round {
                fixtures.extend(pair(at(slot), at(ring - slot)));
            }
            Round {
                number: r + 1,
                fixtures,
            }
        })
        .collect();

    Schedule { rounds }
}

fn pair<P: Clone>(home: &Seat<P>, away: &Seat<P>) -> Option<Fixture<P>> {
    match (home, away) {
        (Seat::Player(a), Seat::Player(b)) => Some(Fixture::Match(a.clone(), b.clone())),
        (Seat::Player(p), Seat::Bye) | (Seat::Bye, Seat::Player(p)) => {
            Some(Fixture::Bye(p.clone()))
        }
        (Seat::Bye, Seat::Bye) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i)).collect()
    }

    fn unordered(a: &str, b: &str) -> (String, String) {
        if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    #[test]
    fn test_fewer_than_two_players_is_empty() {
        assert!(generate_schedule::<String>(&[]).is_empty());
        let schedule = generate_schedule(&roster(1));
        assert!(schedule.is_empty());
        assert_eq!(schedule.match_count(), 0);
    }

    #[test]
    fn test_two_players_single_match() {
        let schedule = generate_schedule(&["A", "B"]);
        assert_eq!(schedule.rounds().len(), 1);
        assert_eq!(
            schedule.rounds()[0].fixtures,
            vec![Fixture::Match("A", "B")]
        );
    }

    #[test]
    fn test_four_players_exact_layout() {
        let schedule = generate_schedule(&["A", "B", "C", "D"]);
        let rounds: Vec<Vec<Fixture<&str>>> = schedule
            .rounds()
            .iter()
            .map(|r| r.fixtures.clone())
            .collect();
        assert_eq!(
            rounds,
            vec![
                vec![Fixture::Match("A", "B"), Fixture::Match("C", "D")],
                vec![Fixture::Match("A", "C"), Fixture::Match("D", "B")],
                vec![Fixture::Match("A", "D"), Fixture::Match("B", "C")],
            ]
        );
    }

    #[test]
    fn test_even_rosters_cover_every_pair_once() {
        for n in (2..=16).step_by(2) {
            let players = roster(n);
            let schedule = generate_schedule(&players);

            assert_eq!(schedule.rounds().len(), n - 1, "rounds for n={}", n);
            for round in schedule.rounds() {
                assert_eq!(round.fixtures.len(), n / 2);
                assert!(round.bye().is_none());

                // Nobody plays twice in the same round
                let mut seen = HashSet::new();
                for (a, b) in round.matches() {
                    assert!(seen.insert(a.clone()));
                    assert!(seen.insert(b.clone()));
                }
            }

            let mut pairs = HashSet::new();
            for (a, b) in schedule.matches() {
                assert_ne!(a, b);
                assert!(pairs.insert(unordered(a, b)), "repeat pair for n={}", n);
            }
            assert_eq!(pairs.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_odd_rosters_give_each_player_one_bye() {
        for n in (3..=11).step_by(2) {
            let players = roster(n);
            let schedule = generate_schedule(&players);

            assert_eq!(schedule.rounds().len(), n);
            let mut byes = Vec::new();
            for round in schedule.rounds() {
                assert_eq!(round.matches().count(), (n - 1) / 2);
                byes.push(round.bye().cloned().unwrap());
            }
            byes.sort();
            let mut expected = players.clone();
            expected.sort();
            assert_eq!(byes, expected);

            let pairs: HashSet<_> = schedule.matches().map(|(a, b)| unordered(a, b)).collect();
            assert_eq!(pairs.len(), n * (n - 1) / 2);
            assert_eq!(schedule.match_count(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_three_players_layout() {
        let schedule = generate_schedule(&["A", "B", "C"]);
        let rounds: Vec<Vec<Fixture<&str>>> = schedule
            .rounds()
            .iter()
            .map(|r| r.fixtures.clone())
            .collect();
        assert_eq!(
            rounds,
            vec![
                vec![Fixture::Match("A", "B"), Fixture::Bye("C")],
                vec![Fixture::Match("A", "C"), Fixture::Bye("B")],
                vec![Fixture::Bye("A"), Fixture::Match("B", "C")],
            ]
        );
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let players = roster(8);
        assert_eq!(generate_schedule(&players), generate_schedule(&players));
    }

    #[test]
    fn test_round_numbers_start_at_one() {
        let schedule = generate_schedule(&roster(6));
        let numbers: Vec<usize> = schedule.rounds().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
