use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use gambit_core::{state_of, Color, Game, GameState, MoveError, PieceKind, Square};
use gambit_engine::Searcher;
use tracing::{error, info};

/// How long the engine is allowed to think per move.
const SEARCH_BUDGET: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    if std::env::args().nth(1).as_deref() == Some("test") {
        std::process::exit(if self_test() { 0 } else { 1 });
    }

    info!("gambit starting");
    run_interactive()?;
    Ok(())
}

fn run_interactive() -> Result<()> {
    let user_color = prompt_color()?;
    let mut game = Game::new();
    let searcher = Searcher::new();

    loop {
        print_board(&game);

        let side = game.side_to_move();
        match state_of(&mut game, side) {
            GameState::Loss => {
                println!("{side} is checkmated. {} wins.", !side);
                return Ok(());
            }
            GameState::Draw => {
                println!("Stalemate. The game is a draw.");
                return Ok(());
            }
            GameState::InPlay => {}
        }

        if side == user_color {
            play_user_ply(&mut game)?;
        } else {
            play_engine_ply(&mut game, &searcher);
        }
    }
}

fn play_engine_ply(game: &mut Game, searcher: &Searcher) {
    match searcher.suggest_move(game, SEARCH_BUDGET) {
        Some(result) => {
            info!(depth = result.depth, score = result.score, nodes = result.nodes, "engine search complete");
            let mv = result.best_move;
            game.apply(mv);
            println!("Engine plays {mv}.");
        }
        None => println!("Engine has no legal move."),
    }
}

fn play_user_ply(game: &mut Game) -> Result<()> {
    loop {
        let line = prompt("Your move (e.g. e2 to e4): ")?;
        let Some((from, to)) = parse_move(&line) else {
            println!("Couldn't parse that as \"<file><rank> to <file><rank>\".");
            continue;
        };

        match game.try_user_move(from, to, None) {
            Ok(_) => return Ok(()),
            Err(MoveError::PromotionRequired { .. }) => {
                let Some(kind) = prompt_promotion()? else {
                    println!("Unrecognized promotion piece; try the move again.");
                    continue;
                };
                match game.try_user_move(from, to, Some(kind)) {
                    Ok(_) => return Ok(()),
                    Err(err) => println!("{err}"),
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_color() -> Result<Color> {
    loop {
        let line = prompt("Play as white or black? (w/b): ")?;
        match line.trim().to_ascii_lowercase().as_str() {
            "w" => return Ok(Color::White),
            "b" => return Ok(Color::Black),
            _ => println!("Please answer w or b."),
        }
    }
}

fn prompt_promotion() -> Result<Option<PieceKind>> {
    let line = prompt("Promote to (k)night, (b)ishop, (r)ook, or (q)ueen: ")?;
    Ok(parse_promotion_letter(line.trim().chars().next().unwrap_or(' ')))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Parse `"<file><rank> to <file><rank>"`, e.g. `"e2 to e4"`.
fn parse_move(line: &str) -> Option<(Square, Square)> {
    let mut parts = line.trim().split(" to ");
    let from = Square::from_algebraic(parts.next()?.trim())?;
    let to = Square::from_algebraic(parts.next()?.trim())?;
    Some((from, to))
}

fn parse_promotion_letter(c: char) -> Option<PieceKind> {
    match c.to_ascii_lowercase() {
        'k' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

fn print_board(game: &Game) {
    println!();
    for rank in (0u8..8).rev() {
        print!("{}  ", rank + 1);
        for file in 0u8..8 {
            let square = Square::new(file, rank).expect("file/rank in range");
            let glyph = match game.piece_at(square) {
                Some(piece) => piece_glyph(piece.color, piece.kind),
                None => '.',
            };
            print!("{glyph} ");
        }
        println!();
    }
    println!("   a b c d e f g h");
}

fn piece_glyph(color: Color, kind: PieceKind) -> char {
    let letter = kind.letter();
    if color == Color::White {
        letter
    } else {
        letter.to_ascii_lowercase()
    }
}

/// Run a handful of sanity checks against known-good results and report
/// pass/fail without panicking, for the `test` CLI argument.
fn self_test() -> bool {
    let mut ok = true;

    let mut game = Game::new();
    if state_of(&mut game, Color::White) != GameState::InPlay {
        error!("self-test: fresh game should be in play");
        ok = false;
    }

    let nodes = gambit_core::perft(&mut Game::new(), 3);
    if nodes != 8_902 {
        error!(nodes, expected = 8_902, "self-test: perft(3) mismatch");
        ok = false;
    }

    let mut fools_mate = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        fools_mate
            .try_user_move(Square::from_algebraic(from).unwrap(), Square::from_algebraic(to).unwrap(), None)
            .expect("fool's mate setup moves are legal");
    }
    let searcher = Searcher::new();
    match searcher.suggest_move(&fools_mate, Duration::from_secs(2)) {
        Some(result) if result.best_move.to == Square::from_algebraic("h4").unwrap() => {}
        other => {
            error!(?other, "self-test: expected engine to find Qh4# for black");
            ok = false;
        }
    }

    if ok {
        info!("self-test passed");
    }
    ok
}
