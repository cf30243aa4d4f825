//! Move representation: single steps and capture chains.
//!
//! A turn is either one diagonal step or a chain of jumps by a single piece.
//! Chains are stored step by step so that the presentation layer can
//! highlight each landing square and the engine can validate each jump in
//! order.
//!
//! ## Example
//!
//! ```
//! use checkers_engine::core::{Move, Position};
//!
//! // A drop one square away is a regular move
//! let step = Move::from_path(&[Position::new(5, 2), Position::new(4, 3)]).unwrap();
//! assert!(!step.is_capture());
//!
//! // A path of two-square hops is a capture chain
//! let jumps = Move::from_path(&[
//!     Position::new(5, 4),
//!     Position::new(3, 2),
//!     Position::new(1, 0),
//! ])
//! .unwrap();
//! assert_eq!(jumps.captured().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::position::Position;

/// One jump: from `from` over `captured` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub from: Position,
    pub to: Position,
    pub captured: Position,
}

/// Ordered chain of jumps performed by one piece in one turn.
///
/// Each step starts where the previous one landed.
/// SmallVec keeps chains of up to four jumps off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureSequence {
    pub origin: Position,
    pub steps: SmallVec<[Capture; 4]>,
}

impl CaptureSequence {
    /// Start an empty chain at `origin`.
    #[must_use]
    pub fn new(origin: Position) -> Self {
        Self {
            origin,
            steps: SmallVec::new(),
        }
    }

    /// A chain of exactly one jump.
    #[must_use]
    pub fn single(capture: Capture) -> Self {
        let mut sequence = Self::new(capture.from);
        sequence.steps.push(capture);
        sequence
    }

    /// Where the piece ends up. Equal to `origin` for an empty chain.
    #[must_use]
    pub fn landing(&self) -> Position {
        self.steps.last().map_or(self.origin, |step| step.to)
    }

    /// Squares whose pieces this chain removes, in capture order.
    pub fn captured(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().map(|step| step.captured)
    }

    /// Number of pieces captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the chain has no jumps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A complete move request, as submitted by a human drop or the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// One diagonal step to an empty square.
    Regular { from: Position, to: Position },
    /// One or more jumps by the same piece.
    Capture(CaptureSequence),
}

impl Move {
    /// Build a move from the squares a piece visits.
    ///
    /// Two squares one diagonal apart give a regular move; otherwise every
    /// hop must be a two-square diagonal jump. Returns `None` for paths that
    /// are neither. Squares may lie off the board; legality against a board,
    /// bounds included, is checked by the engine.
    #[must_use]
    pub fn from_path(path: &[Position]) -> Option<Self> {
        match path {
            [] | [_] => None,
            [from, to] if from.diagonal_distance(*to) == Some(1) => Some(Move::Regular {
                from: *from,
                to: *to,
            }),
            [origin, ..] => {
                let mut sequence = CaptureSequence::new(*origin);
                for hop in path.windows(2) {
                    let captured = hop[0].jumped_square(hop[1])?;
                    sequence.steps.push(Capture {
                        from: hop[0],
                        to: hop[1],
                        captured,
                    });
                }
                Some(Move::Capture(sequence))
            }
        }
    }

    /// Square the moving piece starts on.
    #[must_use]
    pub fn from(&self) -> Position {
        match self {
            Move::Regular { from, .. } => *from,
            Move::Capture(sequence) => sequence.origin,
        }
    }

    /// Square the moving piece ends on.
    #[must_use]
    pub fn to(&self) -> Position {
        match self {
            Move::Regular { to, .. } => *to,
            Move::Capture(sequence) => sequence.landing(),
        }
    }

    /// Check if this move captures anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    /// Squares whose pieces this move removes.
    #[must_use]
    pub fn captured(&self) -> SmallVec<[Position; 4]> {
        match self {
            Move::Regular { .. } => SmallVec::new(),
            Move::Capture(sequence) => sequence.captured().collect(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Regular { from, to } => write!(f, "{from}-{to}"),
            Move::Capture(sequence) => {
                write!(f, "{}", sequence.origin)?;
                for step in &sequence.steps {
                    write!(f, "x{}", step.to)?;
                }
                Ok(())
            }
        }
    }
}

/// What a successful [`apply_move`](crate::rules::CheckersEngine::apply_move)
/// did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Side that moved.
    pub player: Color,
    pub from: Position,
    pub to: Position,
    /// Squares cleared by captures, in order.
    pub captured: SmallVec<[Position; 4]>,
    /// The moving piece was crowned by this move.
    pub promoted: bool,
    /// The turn passed to the other side. False while a capture chain is
    /// still open for the moving piece.
    pub turn_complete: bool,
}

/// A recorded move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number when the move was made.
    pub turn: u32,
    pub player: Color,
    pub mv: Move,
}
