//! Stdin-backed move source for the human player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{ShotError, ShotOutcome};
use crate::coord::Coord;
use crate::player::MoveSource;

pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1-based "row column" pair into a 0-based coordinate. Returns
/// `None` on the wrong token count or non-numeric tokens; bounds are left
/// to the board.
fn parse_target(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?;
    let col = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let row: i32 = row.parse().ok()?;
    let col: i32 = col.parse().ok()?;
    Some(Coord::new(col - 1, row - 1))
}

impl MoveSource for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: i32) -> Coord {
        loop {
            print!("Your shot (row column): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            let read = io::stdin().read_line(&mut line).unwrap();
            if read == 0 {
                // stdin closed; nothing sensible left to do in a turn loop
                println!();
                std::process::exit(0);
            }
            match parse_target(line.trim()) {
                Some(target) => return target,
                None => println!("Enter two numbers, e.g. \"2 5\"."),
            }
        }
    }

    fn notify_rejected(&mut self, _target: Coord, reason: &ShotError) {
        println!("{}", reason);
    }

    fn notify_outcome(&mut self, _target: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => println!("Hit!"),
            ShotOutcome::Miss => println!("Miss."),
            ShotOutcome::Sunk => println!("Ship sunk!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_target;
    use crate::coord::Coord;

    #[test]
    fn parses_one_based_row_column() {
        assert_eq!(parse_target("2 5"), Some(Coord::new(4, 1)));
        assert_eq!(parse_target(" 1 1 "), Some(Coord::new(0, 0)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("3"), None);
        assert_eq!(parse_target("1 2 3"), None);
        assert_eq!(parse_target("a b"), None);
    }

    #[test]
    fn passes_out_of_range_numbers_through() {
        // bounds are the board's concern, not the parser's
        assert_eq!(parse_target("0 7"), Some(Coord::new(6, -1)));
    }
}
