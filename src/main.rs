#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use tictactoe_rs::{Game, Move, Player, search_best_move};
use tracing_subscriber::EnvFilter;

fn read_move() -> Option<Move> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok()?;

    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    // adapt to index
    Some(Move::new(row.checked_sub(1)?, col.checked_sub(1)?))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    let mut current_player = Player::Player1;

    println!("Let's play tic-tac-toe against the computer.");
    loop {
        println!("----------------");
        println!("{}", game.board());

        if game.board().gameover() {
            println!("Gameover: draw");
            break;
        }

        // Human player
        if current_player == Player::Player1 {
            println!("Choose your move (row column, both 1-3):");

            let Some(mv) = read_move() else {
                println!("Invalid input, try again.");
                continue;
            };
            if let Err(e) = game.play(mv) {
                println!("Illegal move: {e}");
                continue;
            }

            {
                if game.board().winner() == Some(current_player) {
                    println!("You won!");
                    break;
                }

                current_player = current_player.opponent();
            }
        }
        // Computer player
        else {
            let best_move = search_best_move(&game).expect("should have a possible move");
            tracing::info!(%best_move, "computer chose its move");
            println!(
                "Computer chose ({}, {})",
                best_move.row + 1,
                best_move.col + 1
            );
            game.play(best_move).expect("search only yields legal moves");

            {
                if game.board().winner() == Some(current_player) {
                    println!("Computer won!");
                    break;
                }

                current_player = current_player.opponent();
            }
        }
    }

    println!("----------------");
    println!("{}", game.board());
}
