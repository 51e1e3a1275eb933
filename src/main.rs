use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chic_rules::chess_board::fen::INITIAL_POSITION;
use chic_rules::engines::{ChessEngine, RandomCaptureEngine};
use chic_rules::ui::render_board;
use chic_rules::{ChessBoard, ChessField, Color, Game, GameStatus, Move};

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use tracing::Level;

fn main() {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play against the random capture engine")
                .arg(
                    arg!(
                    -c --color <COLOR> "Side played by the human"
                            )
                    .value_parser(["white", "black"])
                    .default_value("white"),
                )
                .arg(
                    arg!(
                    -s --seed <SEED> "Engine seed, random if omitted"
                            )
                    .required(false)
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    --"delay-ms" <MS> "Pause before the engine replies"
                            )
                    .default_value("500")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                ),
        )
        .subcommand(
            Command::new("selfplay")
                .about("Let the engine play against itself")
                .arg(
                    arg!(
                    -g --games <N> "Number of games"
                            )
                    .default_value("10")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -s --seed <SEED> "Seed of the first game"
                            )
                    .default_value("1")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    --"max-plies" <N> "Stop a game after this many plies"
                            )
                    .default_value("300")
                    .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("moves").about("List the legal moves of a position").arg(
                arg!(
                -f --fen <FEN> "Board position"
                        )
                .default_value(INITIAL_POSITION),
            ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(arg_matches),
        Some(("selfplay", arg_matches)) => {
            selfplay(arg_matches);
            Ok(())
        }
        Some(("moves", arg_matches)) => moves(arg_matches),
        None => play_default(),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

const DEFAULT_DELAY: Duration = Duration::from_millis(500);

fn play_default() -> chic_rules::Result<()> {
    let game = Game::new(Some(Color::White), RandomCaptureEngine::from_entropy());
    run_game(game, DEFAULT_DELAY)
}

fn play(arg_matches: &ArgMatches) -> chic_rules::Result<()> {
    let human = match arg_matches.get_one::<String>("color").map(String::as_str) {
        Some("black") => Color::Black,
        _ => Color::White,
    };
    let engine = match arg_matches.get_one::<u64>("seed") {
        Some(&seed) => RandomCaptureEngine::seeded(seed),
        None => RandomCaptureEngine::from_entropy(),
    };
    let delay = arg_matches
        .get_one::<u64>("delay-ms")
        .map_or(DEFAULT_DELAY, |&ms| Duration::from_millis(ms));
    let fen = arg_matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION);

    let game = Game::from_board(ChessBoard::from_fen(fen)?, Some(human), engine)?;
    run_game(game, delay)
}

fn run_game<E: ChessEngine>(mut game: Game<E>, delay: Duration) -> chic_rules::Result<()> {
    if let Some(human) = game.human() {
        println!(
            "{} by {} plays {}",
            game.engine().name(),
            game.engine().author(),
            human.opposite()
        );
    }
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut highlights: Vec<ChessField> = Vec::new();

    loop {
        println!("{}", render_board(game.board(), &highlights));
        highlights.clear();
        if let Some(message) = game.status().message() {
            println!("{}", message);
        }
        if game.status().is_over() {
            return Ok(());
        }

        if !game.is_human_turn() {
            thread::sleep(delay);
            match game.play_engine_move()? {
                Some(report) => println!("{} plays {}", report.mover, report.mv),
                None => println!("{} has no move left", game.side_to_move()),
            }
            continue;
        }

        print!("{} to move (e2e4, e2 to show moves, quit): ", game.side_to_move());
        io::stdout().flush()?;
        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };
        let input = line.trim();
        match input {
            "quit" | "exit" => return Ok(()),
            _ if input.len() == 2 => match ChessField::from_algebraic(input) {
                Ok(field) if game.selectable(field) => {
                    highlights = game.legal_destinations(field);
                    highlights.push(field);
                }
                Ok(field) => println!("Nothing to select on {}", field),
                Err(e) => println!("{}", e),
            },
            _ => match Move::from_algebraic(input).and_then(|mv| game.play_human_move(mv)) {
                Ok(report) => {
                    if let Some(piece) = report.captured {
                        println!("{} captures {}", report.mover, piece.symbol());
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }
}

#[derive(Tabled)]
struct SelfplayRow {
    game: u64,
    seed: u64,
    plies: usize,
    captures: usize,
    pieces_left: usize,
    result: String,
}

fn selfplay(arg_matches: &ArgMatches) {
    let games = *arg_matches.get_one::<u64>("games").unwrap_or(&10);
    let base_seed = *arg_matches.get_one::<u64>("seed").unwrap_or(&1);
    let max_plies = *arg_matches.get_one::<usize>("max-plies").unwrap_or(&300);

    let mut table_rows = Vec::new();
    for index in 0..games {
        let seed = base_seed.wrapping_add(index);
        let mut game = Game::new(None, RandomCaptureEngine::seeded(seed));
        let mut plies = 0;
        let mut captures = 0;
        while plies < max_plies && !game.status().is_over() {
            match game.play_engine_move() {
                Ok(Some(report)) => {
                    plies += 1;
                    if report.captured.is_some() {
                        captures += 1;
                    }
                }
                Ok(None) | Err(_) => break,
            }
        }
        let result = match game.status() {
            GameStatus::Checkmate { loser } => format!("{} checkmated", loser),
            GameStatus::KingCaptured { winner } => format!("{} took the king", winner),
            _ => "ply limit".to_string(),
        };
        table_rows.push(SelfplayRow {
            game: index + 1,
            seed,
            plies,
            captures,
            pieces_left: game.board().piece_count(),
            result,
        });
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

fn moves(arg_matches: &ArgMatches) -> chic_rules::Result<()> {
    let fen = arg_matches
        .get_one::<String>("fen")
        .map(String::as_str)
        .unwrap_or(INITIAL_POSITION);
    let board = ChessBoard::from_fen(fen)?;
    println!("{}", board);

    let color = board.active_color;
    let legal_moves: Vec<String> = board
        .generate_legal_moves(color)
        .into_iter()
        .map(|mv| {
            if board.is_capture(mv) {
                format!("{}x", mv)
            } else {
                mv.to_string()
            }
        })
        .collect();
    println!("{} to move, {} moves: {}", color, legal_moves.len(), legal_moves.join(" "));

    for side in [Color::White, Color::Black] {
        if board.find_king_position(side).is_none() {
            println!("{}: no king", side);
            continue;
        }
        println!(
            "{}: check {}, checkmate {}",
            side,
            board.is_in_check(side),
            board.is_checkmate(side)
        );
    }
    Ok(())
}
