//! Plum Checkers command-line front-end.
//!
//! Run with:
//! `cargo run --release -- selfplay --light hard --dark easy --seed 7`
//! `cargo run --release -- play --difficulty medium`
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use plum_checkers::analysis::game_review::GameReview;
use plum_checkers::engines::difficulty::{build_engine, Difficulty};
use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_types::Color;
use plum_checkers::move_generation::legal_move_generator::legal_moves;
use plum_checkers::search::alpha_beta::AlphaBetaSearcher;
use plum_checkers::utils::board_text::render_board;
use plum_checkers::utils::notation::{move_to_text, text_to_move};
use plum_checkers::utils::self_play_harness::{play_game, GameSession, MatchConfig};

struct CliOptions {
    mode: String,
    light: Difficulty,
    dark: Difficulty,
    difficulty: Difficulty,
    seed: Option<u64>,
    max_plies: u16,
    analysis_depth: u8,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            mode: "selfplay".to_owned(),
            light: Difficulty::Hard,
            dark: Difficulty::Medium,
            difficulty: Difficulty::Medium,
            seed: None,
            max_plies: MatchConfig::default().max_plies,
            analysis_depth: Difficulty::Hard.depth(),
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, Box<dyn Error>> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("missing value for {arg}"))
        };
        match arg.as_str() {
            "selfplay" | "play" => opts.mode = arg.clone(),
            "--light" => opts.light = value()?.parse()?,
            "--dark" => opts.dark = value()?.parse()?,
            "--difficulty" => opts.difficulty = value()?.parse()?,
            "--seed" => opts.seed = Some(value()?.parse()?),
            "--max-plies" => opts.max_plies = value()?.parse()?,
            "--analysis-depth" => opts.analysis_depth = value()?.parse()?,
            other => return Err(format!("unknown argument '{other}'").into()),
        }
    }
    Ok(opts)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    match opts.mode.as_str() {
        "play" => run_interactive(&opts),
        _ => run_selfplay(&opts),
    }
}

fn run_selfplay(opts: &CliOptions) -> Result<(), Box<dyn Error>> {
    let mut light = build_engine(opts.light, opts.seed);
    let mut dark = build_engine(opts.dark, opts.seed.map(|s| s.wrapping_add(1)));
    println!("{} ({}) vs {} ({})", light.name(), opts.light, dark.name(), opts.dark);

    let config = MatchConfig {
        max_plies: opts.max_plies,
        analysis_depth: Some(opts.analysis_depth),
        ..MatchConfig::default()
    };
    let game = play_game(light.as_mut(), dark.as_mut(), &config)?;

    for record in game.review.records() {
        println!("{}  {}", record.summary_line(), record.rationale);
    }
    println!();
    println!("{}", render_board(&game.final_board));
    println!("{}", game.review.render_report(Some(game.outcome.result_line())));
    Ok(())
}

fn run_interactive(opts: &CliOptions) -> Result<(), Box<dyn Error>> {
    let human = Color::Light;
    let mut engine = build_engine(opts.difficulty, opts.seed);
    let hint_searcher = AlphaBetaSearcher::with_depth(opts.analysis_depth);
    let mut session = GameSession::new(
        Board::new_game(),
        human,
        Some(opts.analysis_depth),
        MatchConfig::default().repetition_limit,
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", render_board(session.board()));
    println!("You play light (o). Enter moves like c3-d4, or hint, moves, board, quit.");

    let mut lines = stdin.lock().lines();
    let mut outcome = None;
    loop {
        if let Some(decided) = session.outcome() {
            outcome = Some(decided);
            println!("{}", decided.result_line());
            break;
        }

        let side = session.to_move();
        if side != human {
            let out = engine.choose_move(session.board(), side)?;
            let Some(mv) = out.best_move else {
                break;
            };
            session.play(mv)?;
            println!("{} plays {}", engine.name(), move_to_text(mv));
            print_last_grade(session.review());
            println!("{}", render_board(session.board()));
            continue;
        }

        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "board" => println!("{}", render_board(session.board())),
            "moves" => {
                let listed: Vec<String> = legal_moves(session.board(), human)
                    .into_iter()
                    .map(move_to_text)
                    .collect();
                println!("{}", listed.join(" "));
            }
            "hint" => match hint_searcher.best_move(session.board(), human) {
                Some(result) => println!(
                    "hint: {} (score {}, {} nodes)",
                    move_to_text(result.mv),
                    result.score,
                    result.stats.nodes
                ),
                None => println!("no legal moves"),
            },
            text => {
                let played = text_to_move(text).and_then(|mv| session.play(mv).map(|_| ()));
                match played {
                    Ok(()) => print_last_grade(session.review()),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    println!(
        "{}",
        session
            .review()
            .render_report(outcome.map(|o| o.result_line()))
    );
    Ok(())
}

fn print_last_grade(review: &GameReview) {
    if let Some(record) = review.records().last() {
        println!("{}: {}", record.classification.title(), record.rationale);
    }
}
