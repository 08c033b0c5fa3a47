use checkers_core::{
    choose_engine_move, is_legal, Board, Color, Difficulty, GameState, GameStatus, Move,
    MoveGenerator, Piece, PieceType,
};
use std::collections::HashSet;

fn man(color: Color) -> Piece {
    Piece {
        piece_type: PieceType::Man,
        color,
    }
}

/// Dark men on (0,7) and (2,3), Light man on (3,4): exactly three legal
/// Dark moves, one of them a capture.
fn three_move_position() -> Board {
    let mut board = Board::new();
    board.clear();
    board.add_piece(0, 7, man(Color::Dark));
    board.add_piece(2, 3, man(Color::Dark));
    board.add_piece(3, 4, man(Color::Light));
    board
}

#[test]
fn easy_mode_covers_the_whole_move_pool() {
    let board = three_move_position();
    let legal: HashSet<Move> = MoveGenerator::new()
        .generate_moves(&board, Color::Dark)
        .iter()
        .copied()
        .collect();
    assert_eq!(legal.len(), 3);

    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let mv = choose_engine_move(&board, Color::Dark, Difficulty::Easy)
            .expect("moves are available");
        assert!(legal.contains(&mv), "easy mode played illegal {mv:?}");
        seen.insert(mv);
    }
    // With 1000 uniform draws over 3 moves, missing one is astronomically
    // unlikely.
    assert_eq!(seen, legal);
}

#[test]
fn engine_never_returns_an_illegal_move() {
    let board = Board::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for color in [Color::Dark, Color::Light] {
            let mv = choose_engine_move(&board, color, difficulty).expect("opening has moves");
            assert!(is_legal(&board, mv.from_square(), mv.to_square()));
        }
    }
}

#[test]
fn engine_reports_no_move_without_searching() {
    let mut board = Board::new();
    board.clear();
    board.add_piece(7, 0, man(Color::Dark));
    board.add_piece(5, 2, man(Color::Light));

    // Dark is stalemated: no move pool, no search.
    assert_eq!(choose_engine_move(&board, Color::Dark, Difficulty::Hard), None);
    // A stalemated opponent means the position is already decided, so the
    // search hits its terminal check at the root and yields no move either.
    assert_eq!(choose_engine_move(&board, Color::Light, Difficulty::Hard), None);

    // Give Dark a mobile man and the game is live again; Light's search
    // returns a real move.
    board.add_piece(2, 3, man(Color::Dark));
    let mv = choose_engine_move(&board, Color::Light, Difficulty::Hard).expect("live position");
    assert!(is_legal(&board, mv.from_square(), mv.to_square()));
}

#[test]
fn medium_engines_play_a_full_game_legally() {
    let mut game = GameState::new();
    for _ in 0..150 {
        if game.status != GameStatus::Playing {
            break;
        }
        let mv = choose_engine_move(&game.board, game.turn, Difficulty::Medium)
            .expect("in-progress game has moves for the side to move");
        assert!(is_legal(&game.board, mv.from_square(), mv.to_square()));
        game.make_move(mv.from_square(), mv.to_square()).unwrap();
    }

    match game.status {
        GameStatus::Won(winner) => {
            assert!(game.board.piece_count(winner) > 0);
        }
        // Non-forced captures allow long shuffling games; hitting the ply
        // cap with a live position is acceptable.
        GameStatus::Playing => {}
    }
}

#[test]
fn hard_search_finishes_at_depth_five_from_the_opening() {
    let board = Board::new();
    let mv = choose_engine_move(&board, Color::Dark, Difficulty::Hard).unwrap();
    assert!(is_legal(&board, mv.from_square(), mv.to_square()));
}
