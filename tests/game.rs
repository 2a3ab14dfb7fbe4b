//! Game integration tests.

use memrs::{
    Board, BoardError, Card, CardError, Cell, DECK_SIZE, Deck, DeckError, Game, GameOptions,
    GameState, GuessError, GuessOutcome, NewGameError, Suit, Winner,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn new_game(names: &[&str], size: usize, seed: u64) -> Game {
    let options = GameOptions::default()
        .with_board_size(size)
        .with_shuffle_players(false);
    Game::new(names, options, seed).unwrap()
}

fn solution_card(board: &Board, row: usize, col: usize) -> Card {
    board.solution()[row * board.size() + col]
}

/// Pairs up the positions of every rank on the solution grid.
fn pair_positions(board: &Board) -> Vec<((usize, usize), (usize, usize))> {
    let n = board.size();
    let mut by_rank: Vec<Vec<(usize, usize)>> = vec![Vec::new(); 13];
    for row in 0..n {
        for col in 0..n {
            by_rank[solution_card(board, row, col).rank as usize].push((row, col));
        }
    }

    let mut pairs = Vec::new();
    for positions in by_rank {
        for chunk in positions.chunks(2) {
            if let [a, b] = chunk {
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}

/// Finds two hidden cells whose cards do not match.
fn find_mismatch(board: &Board) -> ((usize, usize), (usize, usize)) {
    let n = board.size();
    let mut hidden = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if board.cell(row, col) == Some(Cell::Hidden) {
                hidden.push((row, col));
            }
        }
    }

    for (i, &a) in hidden.iter().enumerate() {
        for &b in &hidden[i + 1..] {
            if !solution_card(board, a.0, a.1).matches(solution_card(board, b.0, b.1)) {
                return (a, b);
            }
        }
    }
    panic!("no mismatching hidden cells left");
}

#[test]
fn card_mapping_from_index() {
    let ace_of_spades = Card::from_index(0).unwrap();
    assert_eq!(ace_of_spades.rank, 0);
    assert_eq!(ace_of_spades.suit, Suit::Spades);

    let ace_of_hearts = Card::from_index(13).unwrap();
    assert_eq!(ace_of_hearts.rank, 0);
    assert_eq!(ace_of_hearts.suit, Suit::Hearts);
    assert!(ace_of_spades.matches(ace_of_hearts));

    let king_of_diamonds = Card::from_index(51).unwrap();
    assert_eq!(king_of_diamonds.rank, 12);
    assert_eq!(king_of_diamonds.suit, Suit::Diamonds);
    assert!(!king_of_diamonds.matches(ace_of_spades));

    assert_eq!(Card::from_index(52).unwrap_err(), CardError::InvalidIndex);

    for index in 0..DECK_SIZE as u8 {
        assert_eq!(Card::from_index(index).unwrap().index(), index);
    }
}

#[test]
fn card_display_is_three_characters() {
    let ace_of_spades = Card::from_index(0).unwrap();
    assert_eq!(ace_of_spades.to_string(), "A\u{2660} ");

    // Rank 9 is the ten, the only two-character label.
    let ten_of_hearts = Card::from_index(13 + 9).unwrap();
    assert_eq!(ten_of_hearts.to_string(), "10\u{2665}");

    for index in 0..DECK_SIZE as u8 {
        let text = Card::from_index(index).unwrap().to_string();
        assert_eq!(text.chars().count(), 3, "{text:?} is not 3 characters wide");
    }
}

#[test]
fn suit_letter_and_glyph_forms() {
    assert_eq!(Suit::Spades.letter(), 'S');
    assert_eq!(Suit::Hearts.glyph(), '\u{2665}');
    assert_eq!(Suit::Clubs.letter(), 'C');
    assert_eq!(Suit::Diamonds.glyph(), '\u{2666}');
}

#[test]
fn deck_rejects_too_many_and_invalid_indices() {
    let err = Deck::new((0..53).collect()).unwrap_err();
    assert_eq!(err, DeckError::TooManyCards);

    let err = Deck::new(vec![60]).unwrap_err();
    assert_eq!(err, DeckError::Card(CardError::InvalidIndex));
}

#[test]
fn deck_draws_from_the_end() {
    let mut deck = Deck::new(vec![0, 13, 26]).unwrap();
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.cards().len(), 3);

    assert_eq!(deck.draw().unwrap().index(), 26);
    assert_eq!(deck.draw().unwrap().index(), 13);
    assert_eq!(deck.draw().unwrap().index(), 0);
    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
}

#[test]
fn deck_shuffle_is_a_seeded_permutation() {
    let indices: Vec<u8> = (0..10).collect();

    let mut first = Deck::new(indices.clone()).unwrap();
    first.shuffle(&mut rng(1));

    let mut second = Deck::new(indices).unwrap();
    second.shuffle(&mut rng(1));

    assert_eq!(first, second);

    let mut drawn: Vec<u8> = (0..10).map(|_| first.draw().unwrap().index()).collect();
    drawn.sort_unstable();
    assert_eq!(drawn, (0..10).collect::<Vec<u8>>());
}

#[test]
fn board_size_validation() {
    assert_eq!(Board::build(3, &mut rng(0)).unwrap_err(), BoardError::OddSize);
    assert_eq!(Board::build(8, &mut rng(0)).unwrap_err(), BoardError::TooLarge);
    assert_eq!(Board::build(0, &mut rng(0)).unwrap_err(), BoardError::ZeroSize);
}

#[test]
fn build_places_rank_pairs_face_down() {
    for size in [2, 4, 6] {
        let board = Board::build(size, &mut rng(9)).unwrap();
        assert_eq!(board.size(), size);
        assert_eq!(board.solution().len(), size * size);

        let mut rank_counts = [0usize; 13];
        for card in board.solution() {
            rank_counts[card.rank as usize] += 1;
        }
        for (rank, count) in rank_counts.iter().enumerate() {
            assert_eq!(count % 2, 0, "rank {rank} appears an odd number of times");
        }

        for row in 0..size {
            for col in 0..size {
                assert_eq!(board.cell(row, col), Some(Cell::Hidden));
            }
        }
        assert_eq!(board.revealed_count(), 0);
        assert!(!board.is_complete());
    }
}

#[test]
fn build_is_deterministic_under_a_seed() {
    let first = Board::build(4, &mut rng(1234)).unwrap();
    let second = Board::build(4, &mut rng(1234)).unwrap();
    assert_eq!(first.solution(), second.solution());
}

#[test]
fn mismatch_leaves_cells_hidden_and_is_repeatable() {
    let mut board = Board::build(4, &mut rng(7)).unwrap();
    let ((r1, c1), (r2, c2)) = find_mismatch(&board);

    for _ in 0..3 {
        let outcome = board.check_guess(r1, c1, r2, c2).unwrap();
        match outcome {
            GuessOutcome::Mismatch(a, b) => {
                assert_eq!(a, solution_card(&board, r1, c1));
                assert_eq!(b, solution_card(&board, r2, c2));
            }
            GuessOutcome::Match(..) => panic!("cells were chosen not to match"),
        }
        assert_eq!(board.cell(r1, c1), Some(Cell::Hidden));
        assert_eq!(board.cell(r2, c2), Some(Cell::Hidden));
        assert_eq!(board.revealed_count(), 0);
    }
}

#[test]
fn match_reveals_permanently_and_rejects_a_reguess() {
    let mut board = Board::build(4, &mut rng(7)).unwrap();
    let ((r1, c1), (r2, c2)) = pair_positions(&board)[0];

    let outcome = board.check_guess(r1, c1, r2, c2).unwrap();
    let GuessOutcome::Match(a, b) = outcome else {
        panic!("paired cells must match");
    };
    assert!(a.matches(b));
    assert_eq!(board.cell(r1, c1), Some(Cell::Revealed(a)));
    assert_eq!(board.cell(r2, c2), Some(Cell::Revealed(b)));
    assert_eq!(board.revealed_count(), 2);

    assert_eq!(
        board.check_guess(r1, c1, r2, c2).unwrap_err(),
        GuessError::AlreadyRevealed
    );
}

#[test]
fn guess_validation_errors() {
    let mut board = Board::build(4, &mut rng(3)).unwrap();

    assert_eq!(
        board.check_guess(0, 0, 0, 0).unwrap_err(),
        GuessError::SameCell
    );
    assert_eq!(
        board.check_guess(0, 0, 4, 0).unwrap_err(),
        GuessError::OutOfBounds
    );
    assert_eq!(
        board.check_guess(0, 4, 0, 0).unwrap_err(),
        GuessError::OutOfBounds
    );
}

#[test]
fn completion_happens_exactly_on_the_last_pair() {
    let mut board = Board::build(2, &mut rng(11)).unwrap();
    let pairs = pair_positions(&board);
    assert_eq!(pairs.len(), 2);

    let ((r1, c1), (r2, c2)) = pairs[0];
    board.check_guess(r1, c1, r2, c2).unwrap();
    assert!(!board.is_complete());

    let ((r1, c1), (r2, c2)) = pairs[1];
    board.check_guess(r1, c1, r2, c2).unwrap();
    assert!(board.is_complete());
    assert_eq!(board.revealed_count(), 4);
}

#[test]
fn new_game_validates_players_and_board() {
    let options = GameOptions::default();

    assert_eq!(
        Game::new(&[], options, 1).unwrap_err(),
        NewGameError::NoPlayers
    );
    assert_eq!(
        Game::new(&["ada", "  "], options, 1).unwrap_err(),
        NewGameError::EmptyName
    );

    let odd = GameOptions::default().with_board_size(3);
    assert_eq!(
        Game::new(&["ada"], odd, 1).unwrap_err(),
        NewGameError::Board(BoardError::OddSize)
    );
}

#[test]
fn unshuffled_players_keep_their_order() {
    let game = new_game(&["ada", "grace", "edsger"], 4, 5);
    let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["ada", "grace", "edsger"]);
    assert_eq!(game.current_player().name(), "ada");
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn turn_repeats_on_match_and_passes_on_mismatch() {
    let mut game = new_game(&["ada", "grace"], 4, 21);
    let pairs = pair_positions(game.board());

    // Two matches in a row keep the turn with the same player.
    for &((r1, c1), (r2, c2)) in &pairs[..2] {
        let outcome = game.submit_guess(r1, c1, r2, c2).unwrap();
        assert!(outcome.matched());
        assert_eq!(game.current_player().name(), "ada");
    }

    let ada = &game.players()[0];
    assert_eq!(ada.score(), 2);
    assert_eq!(ada.hand().len(), 4);

    let ((r1, c1), (r2, c2)) = find_mismatch(game.board());
    let outcome = game.submit_guess(r1, c1, r2, c2).unwrap();
    assert!(!outcome.matched());
    assert_eq!(game.current_player().name(), "grace");
}

#[test]
fn single_winner_and_game_over() {
    let mut game = new_game(&["ada", "grace"], 2, 17);
    let pairs = pair_positions(game.board());

    // Ada keeps her turn through both matches and clears the board alone.
    for &((r1, c1), (r2, c2)) in &pairs {
        game.submit_guess(r1, c1, r2, c2).unwrap();
    }

    assert!(game.is_complete());
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.winner(), Some(Winner::Single("ada".into())));

    let standings = game.standings();
    assert_eq!(standings.len(), 2);
    assert_eq!((standings[0].name.as_str(), standings[0].score), ("ada", 2));
    assert_eq!((standings[1].name.as_str(), standings[1].score), ("grace", 0));

    assert_eq!(game.submit_guess(0, 0, 0, 1).unwrap_err(), GuessError::GameOver);
}

#[test]
fn equal_scores_are_reported_as_a_tie() {
    let mut game = new_game(&["ada", "grace"], 4, 33);
    let pairs = pair_positions(game.board());
    assert_eq!(pairs.len(), 8);

    // Ada takes four pairs, hands the turn over with a mismatch, and Grace
    // takes the remaining four.
    for &((r1, c1), (r2, c2)) in &pairs[..4] {
        assert!(game.submit_guess(r1, c1, r2, c2).unwrap().matched());
    }

    let ((r1, c1), (r2, c2)) = find_mismatch(game.board());
    assert!(!game.submit_guess(r1, c1, r2, c2).unwrap().matched());
    assert_eq!(game.current_player().name(), "grace");

    for &((r1, c1), (r2, c2)) in &pairs[4..] {
        assert!(game.submit_guess(r1, c1, r2, c2).unwrap().matched());
    }

    assert!(game.is_complete());
    assert_eq!(
        game.winner(),
        Some(Winner::Tie(vec!["ada".into(), "grace".into()]))
    );
}

#[test]
fn winner_is_unavailable_while_in_progress() {
    let game = new_game(&["ada", "grace"], 4, 2);
    assert_eq!(game.winner(), None);
}

#[test]
fn sessions_with_equal_seeds_replay_identically() {
    let first = new_game(&["ada", "grace"], 4, 99);
    let second = new_game(&["ada", "grace"], 4, 99);
    assert_eq!(first.board().solution(), second.board().solution());
}
