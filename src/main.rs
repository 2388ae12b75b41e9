use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, render, AiPlayer, CliPlayer, GameConfig, Match, MatchState, Side,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 grid", long_about = None)]
struct Cli {
    /// Fix the RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play both sides.
    #[arg(long)]
    auto: bool,
}

fn greet() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    sea battle     ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let cfg = GameConfig::default();
    let mut game = if cli.auto {
        Match::new(
            &cfg,
            Box::new(AiPlayer::new(cfg.board_size)),
            Box::new(AiPlayer::new(cfg.board_size)),
            &mut rng,
        )
    } else {
        Match::new(
            &cfg,
            Box::new(CliPlayer::new()),
            Box::new(AiPlayer::new(cfg.board_size)),
            &mut rng,
        )
    };

    greet();
    loop {
        match game.state() {
            MatchState::Turn(side) => {
                if side == Side::A {
                    println!("\nYour board:");
                    println!("{}", render(game.board(Side::A)));
                    println!("\nEnemy board:");
                    println!("{}", render(game.board(Side::B)));
                    println!("\nPlayer move:");
                } else {
                    println!("\nEnemy move:");
                }
                game.step(&mut rng);
            }
            MatchState::Won(side) => {
                println!("\nYour board:");
                println!("{}", render(game.board(Side::A)));
                println!("\nEnemy board:");
                println!("{}", render(game.board(Side::B)));
                match side {
                    Side::A => println!("\nPlayer is the winner!"),
                    Side::B => println!("\nEnemy is the winner!"),
                }
                break;
            }
        }
    }
    Ok(())
}
