//! Move guards and postconditions.
//!
//! A move is checked against the board under the cursor before it is
//! applied, and the resulting history is checked against every invariant
//! afterwards: {P} move {Q}.

use super::controller::IgnoredMove;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{Position, rules};
use tracing::instrument;

/// Preconditions and postconditions for one kind of state transition.
pub trait Contract<S, A> {
    /// Checks that `action` may be applied to `state`.
    fn pre(state: &S, action: &A) -> Result<(), IgnoredMove>;

    /// Checks that the state produced by the action is still sound.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the target square on the viewed board is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory, pos: Position) -> Result<(), IgnoredMove> {
        if history.current().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(pos))
        }
    }
}

/// Precondition: nobody has completed a line on the viewed board.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects a move once the viewed board already has a winner.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), IgnoredMove> {
        match rules::evaluate(history.current()) {
            Some(win) => Err(IgnoredMove::GameDecided(win.player())),
            None => Ok(()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Square must be empty
/// - Game must not already be won
///
/// Postconditions:
/// - All [`HistoryInvariants`] hold
pub struct MoveGuard;

impl MoveGuard {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory, pos: Position) -> Result<(), IgnoredMove> {
        SquareIsEmpty::check(history, pos)?;
        GameUndecided::check(history)?;
        Ok(())
    }
}

impl Contract<GameHistory, Position> for MoveGuard {
    fn pre(history: &GameHistory, pos: &Position) -> Result<(), IgnoredMove> {
        Self::check(history, *pos)
    }

    fn post(_before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(after)
    }
}
