//! Rules integration tests.
//!
//! These tests drive the move generator and the engine together through
//! complete turns, including capture chains, promotion and turn handover.

use checkers_engine::core::{
    Board, Capture, Color, GameState, Move, MoveError, Piece, Position, PromotionRule,
};
use checkers_engine::rules::{CheckersEngine, GameStatus, MoveGenerator};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn path(squares: &[(i8, i8)]) -> Move {
    let squares: Vec<Position> = squares.iter().map(|&(r, c)| pos(r, c)).collect();
    Move::from_path(&squares).unwrap()
}

fn board_with(pieces: &[((i8, i8), Piece)]) -> Board {
    let mut board = Board::empty();
    for &((row, col), piece) in pieces {
        board.set(pos(row, col), Some(piece));
    }
    board
}

// =============================================================================
// Move Generation Scenarios
// =============================================================================

/// A lone red man next to a black man has exactly one jump.
#[test]
fn test_single_capture_scenario() {
    let board = board_with(&[
        ((3, 4), Piece::man(Color::Red)),
        ((2, 3), Piece::man(Color::Black)),
    ]);
    let generator = MoveGenerator::default();

    let captures = generator.find_piece_captures(&board, pos(3, 4), Color::Red);
    assert_eq!(
        captures,
        vec![Capture { from: pos(3, 4), to: pos(1, 2), captured: pos(2, 3) }]
    );
}

/// A red king chains through two black men.
#[test]
fn test_king_double_capture_scenario() {
    let board = board_with(&[
        ((5, 4), Piece::king(Color::Red)),
        ((4, 3), Piece::man(Color::Black)),
        ((2, 1), Piece::man(Color::Black)),
    ]);
    let generator = MoveGenerator::default();

    let sequences = generator.find_capture_sequences(&board, pos(5, 4), Color::Red);
    assert_eq!(sequences.len(), 1);
    assert_eq!(sequences[0].landing(), pos(1, 0));
    assert_eq!(sequences[0].captured().collect::<Vec<_>>(), vec![pos(4, 3), pos(2, 1)]);
}

/// Nobody can capture from the opening position.
#[test]
fn test_no_captures_at_start() {
    let generator = MoveGenerator::default();
    let board = Board::standard();

    assert!(generator.find_all_captures(&board, Color::Red).is_empty());
    assert!(generator.find_all_captures(&board, Color::Black).is_empty());
    assert!(!generator.has_capture(&board, Color::Red));
}

// =============================================================================
// Turn Handling Tests
// =============================================================================

/// Moves alternate between the sides and bump the version every time.
#[test]
fn test_turns_alternate() {
    let engine = CheckersEngine::default();
    let mut state = GameState::new();

    engine.apply_move(&mut state, &path(&[(5, 2), (4, 3)])).unwrap();
    assert_eq!(state.current_player(), Color::Black);
    assert_eq!(state.turn_number(), 2);

    engine.apply_move(&mut state, &path(&[(2, 5), (3, 4)])).unwrap();
    assert_eq!(state.current_player(), Color::Red);
    assert_eq!(state.turn_number(), 3);
    assert_eq!(state.history().len(), 2);
    assert!(state.turn_version() >= 2);
}

/// A rejected move changes nothing, not even the version.
#[test]
fn test_rejected_move_leaves_state() {
    let engine = CheckersEngine::default();
    let mut state = GameState::new();
    let before = state.clone();

    let err = engine
        .apply_move_as(&mut state, Color::Black, &path(&[(2, 1), (3, 2)]))
        .unwrap_err();
    assert_eq!(err, MoveError::WrongTurn { expected: Color::Red, attempted: Color::Black });

    let err = engine.apply_move(&mut state, &path(&[(5, 2), (3, 4)])).unwrap_err();
    assert_eq!(err, MoveError::NothingToCapture(pos(4, 3)));

    assert_eq!(state, before);
}

/// A regular move is refused while a capture exists anywhere.
#[test]
fn test_mandatory_capture() {
    let board = board_with(&[
        ((5, 2), Piece::man(Color::Red)),
        ((5, 6), Piece::man(Color::Red)),
        ((4, 3), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::default();
    let mut state = GameState::from_board(board, Color::Red);

    let err = engine.apply_move(&mut state, &path(&[(5, 6), (4, 5)])).unwrap_err();
    assert_eq!(err, MoveError::CaptureRequired(Color::Red));
    assert_eq!(state.turn_version(), 0);

    let outcome = engine.apply_move(&mut state, &path(&[(5, 2), (3, 4)])).unwrap();
    assert_eq!(outcome.captured.as_slice(), &[pos(4, 3)]);
    assert!(outcome.turn_complete);
    assert_eq!(state.board().count(Color::Black), 0);
    assert_eq!(state.current_player(), Color::Black);
}

/// A human may jump one hop at a time; the turn stays open in between.
#[test]
fn test_partial_chain_keeps_turn() {
    let board = board_with(&[
        ((6, 1), Piece::man(Color::Red)),
        ((7, 6), Piece::man(Color::Red)),
        ((5, 2), Piece::man(Color::Black)),
        ((3, 4), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::default();
    let mut state = GameState::from_board(board, Color::Red);

    let first = engine.apply_move(&mut state, &path(&[(6, 1), (4, 3)])).unwrap();
    assert!(!first.turn_complete);
    assert_eq!(state.current_player(), Color::Red);
    assert_eq!(state.chain(), Some(pos(4, 3)));
    assert_eq!(state.selected(), Some(pos(4, 3)));

    let moves = engine.legal_moves(&state);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].from(), pos(4, 3));

    let err = engine.apply_move(&mut state, &path(&[(7, 6), (6, 5)])).unwrap_err();
    assert_eq!(err, MoveError::ChainInProgress(pos(4, 3)));

    let second = engine.apply_move(&mut state, &path(&[(4, 3), (2, 5)])).unwrap();
    assert!(second.turn_complete);
    assert_eq!(state.chain(), None);
    assert_eq!(state.current_player(), Color::Black);
    assert_eq!(state.turn_number(), 2);
}

/// Forcing the turn over abandons an open chain.
#[test]
fn test_force_end_turn_abandons_chain() {
    let board = board_with(&[
        ((6, 1), Piece::man(Color::Red)),
        ((5, 2), Piece::man(Color::Black)),
        ((3, 4), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::default();
    let mut state = GameState::from_board(board, Color::Red);

    engine.apply_move(&mut state, &path(&[(6, 1), (4, 3)])).unwrap();
    engine.force_end_turn(&mut state);

    assert_eq!(state.current_player(), Color::Black);
    assert_eq!(state.chain(), None);
    assert_eq!(state.board().count(Color::Black), 1);
}

// =============================================================================
// Promotion Tests
// =============================================================================

/// A man reaching the far row is crowned and stays a king.
#[test]
fn test_promotion_is_permanent() {
    let board = board_with(&[
        ((1, 2), Piece::man(Color::Red)),
        ((3, 6), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::default();
    let mut state = GameState::from_board(board, Color::Red);

    let outcome = engine.apply_move(&mut state, &path(&[(1, 2), (0, 1)])).unwrap();
    assert!(outcome.promoted);
    assert_eq!(state.board().get(pos(0, 1)), Some(Piece::king(Color::Red)));

    engine.apply_move(&mut state, &path(&[(3, 6), (4, 7)])).unwrap();
    let outcome = engine.apply_move(&mut state, &path(&[(0, 1), (1, 2)])).unwrap();
    assert!(!outcome.promoted);
    assert_eq!(state.board().get(pos(1, 2)), Some(Piece::king(Color::Red)));
}

/// By default crowning ends the chain even when the new king could jump on.
#[test]
fn test_crowning_ends_turn_by_default() {
    let board = board_with(&[
        ((2, 5), Piece::man(Color::Red)),
        ((1, 4), Piece::man(Color::Black)),
        ((1, 2), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::default();

    let mut state = GameState::from_board(board, Color::Red);
    let err = engine
        .apply_move(&mut state, &path(&[(2, 5), (0, 3), (2, 1)]))
        .unwrap_err();
    assert_eq!(err, MoveError::PromotionEndsSequence(pos(0, 3)));

    let outcome = engine.apply_move(&mut state, &path(&[(2, 5), (0, 3)])).unwrap();
    assert!(outcome.promoted);
    assert!(outcome.turn_complete);
    assert_eq!(state.current_player(), Color::Black);
}

/// With `ContinueAsKing` the crowned piece keeps jumping.
#[test]
fn test_crowned_piece_continues_when_configured() {
    let board = board_with(&[
        ((2, 5), Piece::man(Color::Red)),
        ((1, 4), Piece::man(Color::Black)),
        ((1, 2), Piece::man(Color::Black)),
    ]);
    let engine = CheckersEngine::new(PromotionRule::ContinueAsKing);

    let mut state = GameState::from_board(board.clone(), Color::Red);
    let outcome = engine.apply_move(&mut state, &path(&[(2, 5), (0, 3)])).unwrap();
    assert!(outcome.promoted);
    assert!(!outcome.turn_complete);
    assert_eq!(state.chain(), Some(pos(0, 3)));

    let mut state = GameState::from_board(board, Color::Red);
    let outcome = engine
        .apply_move(&mut state, &path(&[(2, 5), (0, 3), (2, 1)]))
        .unwrap();
    assert_eq!(outcome.captured.len(), 2);
    assert_eq!(state.board().get(pos(2, 1)), Some(Piece::king(Color::Red)));
    assert_eq!(state.current_player(), Color::Black);
}

// =============================================================================
// Status And Serialization Tests
// =============================================================================

/// A side with no pieces has no legal move; the engine only reports it.
#[test]
fn test_status_reports_without_acting() {
    let board = board_with(&[((5, 0), Piece::man(Color::Red))]);
    let engine = CheckersEngine::default();
    let state = GameState::from_board(board, Color::Black);

    assert_eq!(engine.status(&state), GameStatus::NoLegalMoves(Color::Black));
    assert_eq!(engine.status(&GameState::new()), GameStatus::InProgress);
    assert_eq!(state.current_player(), Color::Black);
}

/// Game state survives a JSON round trip mid-game.
#[test]
fn test_state_serde() {
    let engine = CheckersEngine::default();
    let mut state = GameState::new();
    engine.apply_move(&mut state, &path(&[(5, 2), (4, 3)])).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}

/// Far off-board paths are refused without touching the state.
#[test]
fn test_off_board_paths() {
    let engine = CheckersEngine::default();
    let mut state = GameState::new();

    assert_eq!(Move::from_path(&[pos(-100, 0), pos(100, 0)]), None);

    let err = engine.apply_move(&mut state, &path(&[(5, 0), (4, -1)])).unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds(pos(4, -1)));
    assert_eq!(state, GameState::new());
}

/// A saved game with a piece on a light square does not load.
#[test]
fn test_state_serde_rejects_light_square() {
    let state = GameState::new();
    let mut json: serde_json::Value = serde_json::to_value(&state).unwrap();
    json["board"][0] = serde_json::to_value(Piece::man(Color::Red)).unwrap();

    assert!(serde_json::from_value::<GameState>(json).is_err());
}
