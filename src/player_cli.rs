//! Interactive player reading targets from standard input.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::player::TargetSource;

/// Human player prompted on stdout, read from stdin. Malformed input is
/// re-requested here; rule violations come back through
/// [`TargetSource::notify_rejected`] and trigger a fresh prompt on the
/// next call.
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

/// Parse a human-entered target: exactly two whitespace-separated
/// 1-indexed integers, converted to a 0-indexed coordinate. Anything else
/// is rejected; bounds are the board's concern.
pub fn parse_target(input: &str) -> Option<Coord> {
    let mut tokens = input.split_whitespace();
    let x: u32 = tokens.next()?.parse().ok()?;
    let y: u32 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() || x == 0 || y == 0 {
        return None;
    }
    Some(Coord::new(x as i32 - 1, y as i32 - 1))
}

impl TargetSource for CliPlayer {
    fn next_target(&mut self, _rng: &mut SmallRng) -> Coord {
        loop {
            print!("Your turn, enter row and column (like \"1 2\"): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match parse_target(&line) {
                Some(coord) => return coord,
                None => println!("Please enter exactly two numbers."),
            }
        }
    }

    fn notify_rejected(&mut self, _target: Coord, err: &BoardError) {
        println!("{err}");
    }
}
