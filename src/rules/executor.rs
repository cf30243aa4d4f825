//! Move application.
//!
//! Both entry points are pure: they validate a request against a board and
//! return the resulting board, leaving the input untouched. Because boards are
//! persistent the copy is O(1), and a rejected request needs no rollback.

use smallvec::SmallVec;

use crate::core::{Board, CaptureSequence, Color, MoveError, Piece, Position, PromotionRule};

use super::movegen::MoveGenerator;

/// Board after a validated move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub board: Board,
    /// Final square of the moving piece.
    pub landing: Position,
    pub captured: SmallVec<[Position; 4]>,
    pub promoted: bool,
}

fn own_piece(board: &Board, at: Position, color: Color) -> Result<Piece, MoveError> {
    if !at.is_in_bounds() {
        return Err(MoveError::OutOfBounds(at));
    }
    match board.get(at) {
        None => Err(MoveError::EmptyOrigin(at)),
        Some(piece) if piece.color != color => Err(MoveError::NotYourPiece {
            at,
            owner: piece.color,
        }),
        Some(piece) => Ok(piece),
    }
}

/// Move the piece of `color` on `from` one diagonal step to `to`.
///
/// Rejected while any capture is available to `color`. A man reaching its
/// promotion row is crowned.
pub fn apply_regular_move(
    generator: &MoveGenerator,
    board: &Board,
    color: Color,
    from: Position,
    to: Position,
) -> Result<Applied, MoveError> {
    let piece = own_piece(board, from, color)?;

    if !to.is_in_bounds() {
        return Err(MoveError::OutOfBounds(to));
    }
    if from.diagonal_distance(to) != Some(1) {
        return Err(MoveError::NotDiagonal { from, to });
    }
    if !piece.directions().contains(&from.delta(to)) {
        return Err(MoveError::WrongDirection { from, to });
    }
    if board.get(to).is_some() {
        return Err(MoveError::DestinationOccupied(to));
    }
    if generator.has_capture(board, color) {
        return Err(MoveError::CaptureRequired(color));
    }

    let promoted = piece.promotes_at(to);
    let moved = if promoted { piece.crowned() } else { piece };

    Ok(Applied {
        board: board.with(from, None).with(to, Some(moved)),
        landing: to,
        captured: SmallVec::new(),
        promoted,
    })
}

/// Perform each jump of `sequence` in order with the piece of `color` on its
/// origin.
///
/// Every step must start where the previous one landed, jump exactly one
/// opposing piece and land on an empty square. A man is crowned on the step
/// that reaches its promotion row; under [`PromotionRule::EndsSequence`] any
/// further step is rejected. The sequence need not be maximal: the engine
/// decides whether the turn continues.
pub fn apply_capture_sequence(
    generator: &MoveGenerator,
    board: &Board,
    color: Color,
    sequence: &CaptureSequence,
) -> Result<Applied, MoveError> {
    if sequence.is_empty() {
        return Err(MoveError::EmptySequence);
    }

    let mut piece = own_piece(board, sequence.origin, color)?;
    let mut at = sequence.origin;
    let mut next = board.clone();
    let mut captured = SmallVec::new();
    let mut promoted = false;

    for step in &sequence.steps {
        if promoted && generator.promotion_rule() == PromotionRule::EndsSequence {
            return Err(MoveError::PromotionEndsSequence(at));
        }
        if step.from != at {
            return Err(MoveError::BrokenChain {
                expected: at,
                found: step.from,
            });
        }
        if !step.to.is_in_bounds() {
            return Err(MoveError::OutOfBounds(step.to));
        }

        let jumped = at
            .jumped_square(step.to)
            .ok_or(MoveError::NotDiagonal { from: at, to: step.to })?;
        if step.captured != jumped {
            return Err(MoveError::CaptureMismatch {
                from: at,
                to: step.to,
                expected: jumped,
                claimed: step.captured,
            });
        }

        let (d_row, d_col) = at.delta(step.to);
        if !piece.directions().contains(&(d_row / 2, d_col / 2)) {
            return Err(MoveError::WrongDirection { from: at, to: step.to });
        }
        if next.get(step.to).is_some() {
            return Err(MoveError::DestinationOccupied(step.to));
        }
        match next.get(jumped) {
            None => return Err(MoveError::NothingToCapture(jumped)),
            Some(victim) if victim.color == color => {
                return Err(MoveError::CannotCaptureOwnPiece(jumped))
            }
            Some(_) => {}
        }

        if piece.promotes_at(step.to) {
            piece = piece.crowned();
            promoted = true;
        }

        next = next.with(jumped, None).with(at, None).with(step.to, Some(piece));
        captured.push(jumped);
        at = step.to;
    }

    Ok(Applied {
        board: next,
        landing: at,
        captured,
        promoted,
    })
}
