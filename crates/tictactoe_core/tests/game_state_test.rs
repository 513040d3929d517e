//! Tests for the game state engine.

use tictactoe_core::{GameError, GameState, InvalidMove, Outcome, Player, Position, Square};

fn play(moves: &[(usize, Player)]) -> GameState {
    let mut game = GameState::new();
    for &(cell, player) in moves {
        game.register_turn(cell, player).expect("Legal move");
    }
    game
}

#[test]
fn test_new_game_is_empty() {
    let game = GameState::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.marks_placed(), 0);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
}

#[test]
fn test_register_turn_marks_and_alternates() {
    let mut game = GameState::new();
    game.register_turn(4, Player::X).unwrap();
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.marks_placed(), 1);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_win_by_row() {
    let game = play(&[
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ]);
    assert!(game.has_player_won(Player::X, 2));
    assert!(!game.has_player_won(Player::O, 2));
    assert!(!game.is_tie());
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
}

#[test]
fn test_tie() {
    // O X O / X O X / X O X, no line completed.
    let game = play(&[
        (1, Player::X),
        (0, Player::O),
        (3, Player::X),
        (2, Player::O),
        (5, Player::X),
        (4, Player::O),
        (6, Player::X),
        (7, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(game.marks_placed(), 9);
    assert!(!game.has_player_won(Player::X, 8));
    assert!(!game.has_player_won(Player::O, 8));
    assert!(game.is_tie());
    assert_eq!(game.outcome(), Outcome::Tie);
}

#[test]
fn test_win_on_last_square_is_not_a_tie() {
    // X fills the board and completes the 0-4-8 diagonal with the ninth mark.
    let game = play(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (5, Player::O),
        (3, Player::X),
        (6, Player::O),
        (4, Player::X),
        (7, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(game.marks_placed(), 9);
    assert!(game.has_player_won(Player::X, 8));
    assert!(!game.is_tie());
}

#[test]
fn test_occupied_cell_rejected_and_board_unchanged() {
    let mut game = play(&[(4, Player::X)]);
    let before = game.clone();

    let result = game.register_turn(4, Player::O);
    assert_eq!(
        result,
        Err(GameError::InvalidMove(InvalidMove::Occupied(Position::Center)))
    );
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = GameState::new();
    let result = game.register_turn(9, Player::X);
    assert_eq!(result, Err(GameError::InvalidMove(InvalidMove::OutOfRange(9))));
    assert_eq!(game.marks_placed(), 0);
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = GameState::new();
    let result = game.register_turn(0, Player::O);
    assert_eq!(
        result,
        Err(GameError::InvalidMove(InvalidMove::WrongPlayer(Player::O)))
    );
    assert_eq!(game.marks_placed(), 0);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = play(&[
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ]);
    assert_eq!(
        game.register_turn(5, Player::O),
        Err(GameError::InvalidMove(InvalidMove::GameOver))
    );
    assert_eq!(game.computer_turn(), Err(GameError::NoMovesAvailable));
}

#[test]
fn test_computer_turn_on_full_board_fails() {
    let game = play(&[
        (1, Player::X),
        (0, Player::O),
        (3, Player::X),
        (2, Player::O),
        (5, Player::X),
        (4, Player::O),
        (6, Player::X),
        (7, Player::O),
        (8, Player::X),
    ]);
    assert_eq!(game.computer_turn(), Err(GameError::NoMovesAvailable));
}

#[test]
fn test_computer_blocks_row() {
    // X holds 0 and 1; O's mark sits out of the way.
    let game = play(&[(0, Player::X), (8, Player::O), (1, Player::X)]);
    assert_eq!(game.computer_turn(), Ok(Position::TopRight));
}

#[test]
fn test_computer_prefers_win_over_block() {
    // O holds 3 and 4 (wins at 5); X holds 0 and 1 (threatens 2).
    // The computer always plays O, even while X is to move.
    let game = play(&[
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
    ]);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.computer_turn(), Ok(Position::MiddleRight));
}

#[test]
fn test_computer_turn_does_not_mutate() {
    let game = play(&[(4, Player::X)]);
    let before = game.clone();
    let _ = game.computer_turn().unwrap();
    assert_eq!(game, before);
}

#[test]
fn test_has_player_won_out_of_range_is_false() {
    let game = GameState::new();
    assert!(!game.has_player_won(Player::X, 42));
}

/// Walks every legal game and checks the engine against a full-board scan.
#[test]
fn test_all_legal_games() {
    fn full_scan(game: &GameState, player: Player) -> bool {
        tictactoe_core::rules::LINES.iter().any(|line| {
            line.iter()
                .all(|pos| game.board().get(*pos) == Square::Occupied(player))
        })
    }

    fn walk(game: &GameState, games: &mut usize) {
        if game.outcome().is_over() {
            *games += 1;
            return;
        }

        let suggested = game.computer_turn().expect("Moves remain");
        assert!(game.board().is_empty(suggested));

        for pos in Position::valid_moves(game.board()) {
            let mut next = game.clone();
            let player = next.to_move();
            next.register_turn(pos.to_index(), player).unwrap();

            let cell = pos.to_index();
            assert_eq!(next.has_player_won(player, cell), full_scan(&next, player));
            assert!(!(full_scan(&next, Player::X) && full_scan(&next, Player::O)));
            assert_eq!(
                next.is_tie(),
                next.marks_placed() == 9 && !full_scan(&next, player)
            );
            walk(&next, games);
        }
    }

    let mut games = 0;
    walk(&GameState::new(), &mut games);
    assert_eq!(games, 255_168);
}
