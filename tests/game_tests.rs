use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    resolve_move, AiPlayer, Board, BoardError, Coord, Match, MatchState, Orientation, Ship,
    ShotOutcome, Side, TargetSource,
};

/// Target source that replays a fixed list of coordinates, recording any
/// rejections the board reports back.
struct Scripted {
    targets: VecDeque<Coord>,
    rejections: Vec<BoardError>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
            rejections: Vec::new(),
        }
    }
}

impl TargetSource for Scripted {
    fn next_target(&mut self, _rng: &mut SmallRng) -> Coord {
        self.targets.pop_front().expect("script ran out of targets")
    }

    fn notify_rejected(&mut self, _target: Coord, err: &BoardError) {
        self.rejections.push(*err);
    }
}

fn one_ship_board(bow: (i32, i32), length: u8) -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Coord::new(bow.0, bow.1), length, Orientation::Vertical))
        .unwrap();
    board
}

#[test]
fn test_resolve_move_retries_without_consuming_turn() {
    let mut board = one_ship_board((0, 0), 1);
    board.shoot(Coord::new(5, 5)).unwrap();
    // off-board, repeat, then a valid miss
    let mut source = Scripted::new(&[(9, 9), (5, 5), (3, 3)]);
    let mut rng = SmallRng::seed_from_u64(0);
    let outcome = resolve_move(&mut source, &mut board, &mut rng);
    assert_eq!(outcome, ShotOutcome::Miss);
    assert_eq!(
        source.rejections,
        vec![BoardError::OutOfBounds, BoardError::AlreadyTargeted]
    );
}

#[test]
fn test_miss_flips_turn_hit_keeps_it() {
    let board_a = one_ship_board((0, 0), 2);
    let board_b = one_ship_board((0, 0), 2);
    // A misses; B hits then misses
    let player_a = Scripted::new(&[(5, 5)]);
    let player_b = Scripted::new(&[(0, 0), (4, 4)]);
    let mut game = Match::with_boards(
        board_a,
        board_b,
        Box::new(player_a),
        Box::new(player_b),
    );
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(game.state(), MatchState::Turn(Side::A));
    assert_eq!(game.step(&mut rng), Some(ShotOutcome::Miss));
    assert_eq!(game.state(), MatchState::Turn(Side::B));
    assert_eq!(game.step(&mut rng), Some(ShotOutcome::Hit));
    assert_eq!(game.state(), MatchState::Turn(Side::B));
    assert_eq!(game.step(&mut rng), Some(ShotOutcome::Miss));
    assert_eq!(game.state(), MatchState::Turn(Side::A));
}

#[test]
fn test_sinking_last_ship_wins_and_ends_match() {
    let board_a = one_ship_board((0, 0), 1);
    let board_b = one_ship_board((2, 2), 2);
    // A hits until B's only ship is gone
    let player_a = Scripted::new(&[(2, 2), (3, 2)]);
    let player_b = Scripted::new(&[]);
    let mut game = Match::with_boards(
        board_a,
        board_b,
        Box::new(player_a),
        Box::new(player_b),
    );
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(game.step(&mut rng), Some(ShotOutcome::Hit));
    assert_eq!(game.state(), MatchState::Turn(Side::A));
    assert_eq!(game.step(&mut rng), Some(ShotOutcome::Sunk));
    assert_eq!(game.state(), MatchState::Won(Side::A));
    assert!(game.board(Side::B).is_defeated());
    // no further moves are accepted
    assert_eq!(game.step(&mut rng), None);
    assert_eq!(game.state(), MatchState::Won(Side::A));
}

#[test]
fn test_ai_match_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let cfg = sea_battle::GameConfig::default();
    let mut game = Match::new(
        &cfg,
        Box::new(AiPlayer::new(cfg.board_size)),
        Box::new(AiPlayer::new(cfg.board_size)),
        &mut rng,
    );
    let winner = game.run(&mut rng);
    assert!(game.board(winner.other()).is_defeated());
    assert!(!game.board(winner).is_defeated());
    assert_eq!(game.state(), MatchState::Won(winner));
}

#[test]
fn test_opponent_board_starts_concealed() {
    let mut rng = SmallRng::seed_from_u64(5);
    let cfg = sea_battle::GameConfig::default();
    let game = Match::new(
        &cfg,
        Box::new(AiPlayer::new(cfg.board_size)),
        Box::new(AiPlayer::new(cfg.board_size)),
        &mut rng,
    );
    assert!(!game.board(Side::A).is_concealed());
    assert!(game.board(Side::B).is_concealed());
}
