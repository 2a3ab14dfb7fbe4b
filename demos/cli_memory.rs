//! CLI memory example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use memrs::{Board, Card, Cell, DECK_SIZE, Game, GameOptions, GuessOutcome, Winner};

fn main() {
    println!("Welcome to the card game 'Memory'!");

    let names = prompt_names();
    greet(&names);
    let size = prompt_board_size();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_board_size(size);
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut game = match Game::new(&name_refs, options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start the game: {err}");
            return;
        }
    };

    println!(
        "All members are present. The deck has been shuffled. \
         A random order of turns has been set. Let the game begin!"
    );
    println!("{}", render_board(game.board(), &[]));

    loop {
        let player_name = game.current_player().name().to_string();
        println!("It's {player_name}'s turn.");

        let (r1, c1, r2, c2) = prompt_guess(&game);

        let outcome = match game.submit_guess(r1, c1, r2, c2) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("Guess error: {err}");
                continue;
            }
        };

        match outcome {
            GuessOutcome::Match(..) => {
                println!("{}", render_board(game.board(), &[]));
                println!("Good guess. You correctly matched a pair of cards.");
            }
            GuessOutcome::Mismatch(a, b) => {
                // Show the wrong guess briefly, then cover the cards again.
                println!(
                    "{}",
                    render_board(game.board(), &[((r1, c1), a), ((r2, c2), b)])
                );
                println!("{}", render_board(game.board(), &[]));
                println!("Incorrect guess. Your turn is over.");
            }
        }

        if let Some(player) = game.players().iter().find(|p| p.name() == player_name) {
            if outcome.matched() {
                println!(
                    "The pair of cards has been added to your hand: {}",
                    format_hand(player.hand())
                );
            } else {
                println!("Your hand remains: {}", format_hand(player.hand()));
            }
            println!("Your score is: {}\n", player.score());
        }

        if game.is_complete() {
            match game.winner() {
                Some(Winner::Single(name)) => println!("The winner is: {name}"),
                Some(Winner::Tie(tied)) => {
                    println!("There was a tie between <{}>", tied.join(", "));
                }
                None => {}
            }
            println!("Final standings:");
            for standing in game.standings() {
                println!("  {}: {}", standing.name, standing.score);
            }
            println!(
                "Thanks so much for playing - hope you sharpened those memory skills. \
                 Come back soon!"
            );
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_names() -> Vec<String> {
    loop {
        let input = prompt_line("Who all is playing today? [Provide names separated by spaces]: ");
        let names: Vec<String> = input.split_whitespace().map(str::to_string).collect();
        if names.is_empty() {
            println!("We need at least one person at the table.");
            continue;
        }
        return names;
    }
}

fn greet(names: &[String]) {
    print!("Good to have you with us, ");
    match names {
        [only] => println!("{only}."),
        [first, second] => println!("{first} and {second}."),
        _ => {
            let head = names[..names.len() - 1].join(", ");
            println!("{head}, and {}.", names[names.len() - 1]);
        }
    }
}

fn prompt_board_size() -> usize {
    loop {
        let input = prompt_line(
            "We need an (n x n) board to play the game. Please specify an even integer 'n': ",
        );
        let Ok(n) = input.parse::<usize>() else {
            println!("That wasn't an integer.");
            continue;
        };
        if n == 0 || n % 2 != 0 {
            println!("That wasn't a positive even integer.");
            continue;
        }
        if n * n > DECK_SIZE {
            println!(
                "Couldn't construct an ({n} x {n}) board with a deck of 52 cards. \
                 Please specify a smaller even integer 'n'."
            );
            continue;
        }
        return n;
    }
}

fn prompt_guess(game: &Game) -> (usize, usize, usize, usize) {
    let size = game.board().size();
    loop {
        let input = prompt_line(
            "Please input your two guesses separated by spaces 'row_one' 'col_one' 'row_two' 'col_two': ",
        );
        let parsed: Result<Vec<usize>, _> = input.split_whitespace().map(str::parse).collect();
        let Ok(parts) = parsed else {
            println!("Please make sure your guesses are integers.");
            continue;
        };
        if parts.len() != 4 {
            println!("Please input 4 guesses.");
            continue;
        }
        let (r1, c1, r2, c2) = (parts[0], parts[1], parts[2], parts[3]);
        if (r1, c1) == (r2, c2) {
            println!("Your guesses must correspond to different cards.");
            continue;
        }
        if [r1, c1, r2, c2].iter().any(|&v| v >= size) {
            println!(
                "Please ensure the 4 guesses are all integers less than {size}, \
                 which is the dimension of the board."
            );
            continue;
        }
        let uncovered =
            |row, col| !matches!(game.board().cell(row, col), Some(Cell::Hidden));
        if uncovered(r1, c1) || uncovered(r2, c2) {
            println!("You can't guess a card that is already uncovered.");
            continue;
        }
        return (r1, c1, r2, c2);
    }
}

/// Renders the board as a headed grid of fixed 3-character cells, with any
/// `shown` overrides displayed face-up (used for the transient mismatch view).
fn render_board(board: &Board, shown: &[((usize, usize), Card)]) -> String {
    let size = board.size();
    let mut out = String::from("\n");

    let header: String = (0..size)
        .map(|col| format!(" {col} "))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("\t   {header}\n"));

    for row in 0..size {
        let cells: Vec<String> = (0..size)
            .map(|col| cell_text(board, shown, row, col))
            .collect();
        out.push_str(&format!("\t{row}  {}\n", cells.join("  ")));
    }
    out
}

fn cell_text(board: &Board, shown: &[((usize, usize), Card)], row: usize, col: usize) -> String {
    for &((r, c), card) in shown {
        if (r, c) == (row, col) {
            return card.to_string();
        }
    }
    match board.cell(row, col) {
        Some(Cell::Revealed(card)) => card.to_string(),
        _ => " X ".to_string(),
    }
}

fn format_hand(hand: &[Card]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.iter()
        .map(|card| card.to_string().trim_end().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
