use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_k::ai::{Agent, RandomAgent, SearchAgent, SearchEngine};
use connect_k::config::AppConfig;
use connect_k::game::{Board, GameSession, GameStatus, History, PlayerId};

/// Gravity-drop connection game with a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-k", about = "Play connect-K against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-k.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Log search decisions
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Let the engine move first
        #[arg(long)]
        second: bool,
    },
    /// Pit the engine against a random player
    SelfPlay {
        #[arg(long, default_value_t = 10)]
        games: u64,

        /// Seed for the random player
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print the default configuration as TOML
    PrintConfig,
}

type Saved = (Board, PlayerId);

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid settings")?;

    match cli.command.unwrap_or(Command::Play { second: false }) {
        Command::Play { second } => play(&config, second),
        Command::SelfPlay { games, seed } => self_play(&config, games, seed),
        Command::PrintConfig => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
    }
}

fn new_session(config: &AppConfig) -> Result<GameSession> {
    let board = &config.board;
    GameSession::new(board.rows, board.cols, board.run_length).context("creating game")
}

fn engine_agent(config: &AppConfig) -> SearchAgent {
    SearchAgent::with_engine(SearchEngine::from_config(&config.search), config.search.depth)
}

fn print_board(session: &GameSession) {
    let header: Vec<String> = (1..=session.board().cols())
        .map(|c| (c % 10).to_string())
        .collect();
    println!("\n {} ", header.join(" "));
    println!("{}", session.board());
}

fn play(config: &AppConfig, engine_first: bool) -> Result<()> {
    let mut session = new_session(config)?;
    let mut history: History<Saved> = History::new();
    let mut engine = engine_agent(config);
    let human = if engine_first {
        PlayerId::SECOND
    } else {
        PlayerId::FIRST
    };

    println!(
        "You are {} ({}). Enter a column number, 'u' to undo, 'r' to redo, 'q' to quit.",
        human.name(),
        human.glyph()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&session);

        if session.status().is_terminal() {
            match session.status() {
                GameStatus::Won(winner) => println!("{} wins!", winner.name()),
                _ => println!("Draw."),
            }
            print!("'u' to take the last move back, anything else to quit> ");
            io::stdout().flush()?;
            match lines.next().transpose()? {
                Some(line) if line.trim() == "u" => {
                    step_back(&mut session, &mut history, human, true)?;
                    continue;
                }
                _ => break,
            }
        }

        let me = session.current_player();
        let opponent = me.next(session.player_count());
        if me != human {
            let col = engine.select_column(session.board(), me, opponent)?;
            history.record((session.snapshot(), me));
            session.apply_move(col)?;
            println!("{} plays column {}", engine.name(), col + 1);
            continue;
        }

        print!("{}> ", me.name());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "q" => break,
            "u" => step_back(&mut session, &mut history, human, true)?,
            "r" => step_back(&mut session, &mut history, human, false)?,
            input => match input.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    let saved = (session.snapshot(), me);
                    match session.apply_move(n - 1) {
                        Ok(_) => history.record(saved),
                        Err(err) => println!("{err}"),
                    }
                }
                _ => println!("expected a column between 1 and {}", session.board().cols()),
            },
        }
    }
    Ok(())
}

/// Undo (or redo) moves until it is the human's turn again.
fn step_back(
    session: &mut GameSession,
    history: &mut History<Saved>,
    human: PlayerId,
    undo: bool,
) -> Result<()> {
    loop {
        let current = (session.snapshot(), session.current_player());
        let step = if undo {
            history.undo(current)
        } else {
            history.redo(current)
        };
        let (board, player) = match step {
            Ok(saved) => saved,
            Err(err) => {
                println!("{err}");
                return Ok(());
            }
        };
        session.restore(board, player)?;
        if player == human {
            return Ok(());
        }
    }
}

fn self_play(config: &AppConfig, games: u64, seed: u64) -> Result<()> {
    let mut engine = engine_agent(config);
    let (mut wins, mut losses, mut draws) = (0u64, 0u64, 0u64);

    for game in 0..games {
        let mut random = RandomAgent::with_seed(seed.wrapping_add(game));
        let engine_player = if game % 2 == 0 {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        };

        let mut session = new_session(config)?;
        while !session.status().is_terminal() {
            let me = session.current_player();
            let opponent = me.next(session.player_count());
            let agent: &mut dyn Agent = if me == engine_player {
                &mut engine
            } else {
                &mut random
            };
            let col = agent.select_column(session.board(), me, opponent)?;
            session.apply_move(col)?;
        }

        match session.status() {
            GameStatus::Won(p) if p == engine_player => wins += 1,
            GameStatus::Won(_) => losses += 1,
            _ => draws += 1,
        }
        info!(game, status = ?session.status(), turns = session.turn(), "game finished");
    }

    println!(
        "{} vs Random over {games} games: {wins} won, {losses} lost, {draws} drawn",
        engine.name()
    );
    Ok(())
}
