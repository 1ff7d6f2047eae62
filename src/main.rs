use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tictactoe_arena::*;
use tictactoe_arena::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe-arena", about = "Round-robin Tic-Tac-Toe tournament")]
struct Args {
    /// YAML file with `players` and `board_size`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Add a player; repeat in seating order. Replaces the config roster.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    #[arg(long)]
    board_size: Option<usize>,

    /// Write the final results as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long)]
    log_prefix: Option<String>,

    /// Silence log lines on stderr
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.log_prefix.clone(), args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ArenaError> {
    println!("Tic-Tac-Toe Arena - Round Robin Tournament");
    println!("==========================================\n");

    let mut console = Console::stdio();

    let mut config = match &args.config {
        Some(path) => {
            log!("Loading config from {}", path.display());
            TournamentConfig::load(path)?
        }
        None if args.players.is_empty() => console.prompt_config(args.board_size)?,
        None => TournamentConfig::default(),
    };
    if !args.players.is_empty() {
        config.players = args.players.clone();
    }
    if let Some(size) = args.board_size {
        config.board_size = size;
    }
    config.validate()?;

    let match_config = MatchConfig {
        board_size: config.board_size,
    };
    let tournament = Tournament::new(config.players, match_config, true)?;
    println!("{}", format_schedule(tournament.schedule()));

    let results = tournament.run(&mut console)?;

    println!("\nTournament over!");
    results.print_report();

    if let Some(path) = &args.report {
        results.save(path)?;
        log!("Results written to {}", path.display());
    }

    Ok(())
}
