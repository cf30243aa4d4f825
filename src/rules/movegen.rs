//! Legal move and capture generation.
//!
//! All queries are read-only over a [`Board`]. Selection among the results is
//! left to the caller: the human picks through the UI, the opponent through
//! its [`SelectionPolicy`](crate::opponent::SelectionPolicy).
//!
//! ## Mandatory capture
//!
//! If [`MoveGenerator::find_all_captures`] is non-empty for a color, that
//! color may not make a regular move with any piece, including pieces that
//! have no capture of their own. [`MoveGenerator::legal_moves`] applies this.
//!
//! ## Capture chains
//!
//! [`MoveGenerator::find_capture_sequences`] extends single jumps from each
//! landing square. Each level of the search works on its own board snapshot
//! (O(1) clones of the persistent board), so nothing is undone on the way
//! back up. Only maximal chains are reported.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{
    Board, Capture, CaptureSequence, Color, Move, Piece, Position, PromotionRule,
};

/// Single jumps available to `piece` standing on `from`.
fn jumps(board: &Board, from: Position, piece: Piece) -> impl Iterator<Item = Capture> + '_ {
    piece.directions().iter().filter_map(move |&(d_row, d_col)| {
        let captured = from.offset(d_row, d_col)?;
        let to = from.offset(2 * d_row, 2 * d_col)?;
        let victim = board.get(captured)?;
        (victim.color != piece.color && board.get(to).is_none()).then_some(Capture {
            from,
            to,
            captured,
        })
    })
}

/// Move and capture queries under a given promotion rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveGenerator {
    promotion: PromotionRule,
}

impl MoveGenerator {
    #[must_use]
    pub const fn new(promotion: PromotionRule) -> Self {
        Self { promotion }
    }

    #[must_use]
    pub const fn promotion_rule(&self) -> PromotionRule {
        self.promotion
    }

    /// One-jump captures for the piece of `color` on `pos`.
    ///
    /// Men jump along their forward diagonals only, kings along all four.
    /// A jump is legal when the landing square is on the board and empty and
    /// the jumped square holds an opposing piece. Returns nothing if `pos`
    /// does not hold a piece of `color`.
    #[must_use]
    pub fn find_piece_captures(&self, board: &Board, pos: Position, color: Color) -> Vec<Capture> {
        match board.get(pos) {
            Some(piece) if piece.color == color => jumps(board, pos, piece).collect(),
            _ => Vec::new(),
        }
    }

    /// Empty squares one diagonal step away that the piece on `pos` may move to.
    #[must_use]
    pub fn find_regular_moves(&self, board: &Board, pos: Position) -> Vec<Position> {
        let Some(piece) = board.get(pos) else {
            return Vec::new();
        };
        piece
            .directions()
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&to| board.get(to).is_none())
            .collect()
    }

    /// Every one-jump capture available to `color`.
    ///
    /// Non-empty means capturing is mandatory for `color` this turn.
    #[must_use]
    pub fn find_all_captures(&self, board: &Board, color: Color) -> Vec<Capture> {
        board
            .pieces(color)
            .flat_map(|(pos, piece)| jumps(board, pos, piece))
            .collect()
    }

    /// Check whether `color` is under the mandatory-capture constraint.
    #[must_use]
    pub fn has_capture(&self, board: &Board, color: Color) -> bool {
        board
            .pieces(color)
            .any(|(pos, piece)| jumps(board, pos, piece).next().is_some())
    }

    /// Maximal capture chains for the piece of `color` on `pos`.
    ///
    /// Each returned chain captures at least one piece, never captures the
    /// same square twice, and cannot be extended from its landing square.
    /// Chains of different lengths may be returned; the rules only require
    /// capturing, not capturing the most.
    #[must_use]
    pub fn find_capture_sequences(
        &self,
        board: &Board,
        pos: Position,
        color: Color,
    ) -> Vec<CaptureSequence> {
        let piece = match board.get(pos) {
            Some(piece) if piece.color == color => piece,
            _ => return Vec::new(),
        };

        let mut out = Vec::new();
        let mut path = CaptureSequence::new(pos);
        let mut captured = FxHashSet::default();
        self.extend_chain(board, pos, piece, &mut path, &mut captured, &mut out);

        trace!(%pos, %color, chains = out.len(), "capture chains");
        out
    }

    fn extend_chain(
        &self,
        board: &Board,
        at: Position,
        piece: Piece,
        path: &mut CaptureSequence,
        captured: &mut FxHashSet<Position>,
        out: &mut Vec<CaptureSequence>,
    ) {
        let mut extended = false;

        for capture in jumps(board, at, piece) {
            if captured.contains(&capture.captured) {
                continue;
            }
            extended = true;

            let crowned = piece.promotes_at(capture.to);
            let moved = if crowned { piece.crowned() } else { piece };

            path.steps.push(capture);
            captured.insert(capture.captured);

            if crowned && self.promotion == PromotionRule::EndsSequence {
                out.push(path.clone());
            } else {
                let next = board
                    .with(capture.captured, None)
                    .with(at, None)
                    .with(capture.to, Some(moved));
                self.extend_chain(&next, capture.to, moved, path, captured, out);
            }

            path.steps.pop();
            captured.remove(&capture.captured);
        }

        if !extended && !path.is_empty() {
            out.push(path.clone());
        }
    }

    /// Maximal capture chains for every piece of `color`.
    #[must_use]
    pub fn find_all_sequences(&self, board: &Board, color: Color) -> Vec<CaptureSequence> {
        board
            .pieces(color)
            .flat_map(|(pos, _)| self.find_capture_sequences(board, pos, color))
            .collect()
    }

    /// Every legal move for `color`: all capture chains if any exist,
    /// otherwise all regular moves.
    #[must_use]
    pub fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let chains = self.find_all_sequences(board, color);
        if !chains.is_empty() {
            return chains.into_iter().map(Move::Capture).collect();
        }

        board
            .pieces(color)
            .flat_map(|(from, _)| {
                self.find_regular_moves(board, from)
                    .into_iter()
                    .map(move |to| Move::Regular { from, to })
            })
            .collect()
    }
}
