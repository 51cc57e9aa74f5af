//! Monotonic board invariant: cells never change once set.

use super::super::{Cell, GameHistory, Position};
use super::Invariant;

/// Invariant: every step fills exactly one previously empty cell.
///
/// Once a cell transitions from Empty to Occupied it is never overwritten
/// or cleared on the same branch.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.boards().windows(2).all(|pair| {
            let mut filled = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (before, after) if before == after => {}
                    (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                    _ => return false,
                }
            }
            filled == 1
        })
    }

    fn description() -> &'static str {
        "Board cells are monotonic (one new mark per step, never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, Player};

    #[test]
    fn test_new_history_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = GameController::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.history().len(), 10);
        assert!(MonotonicBoardInvariant::holds(game.history()));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let history = GameHistory::from_raw_parts(vec![Board::new(), first, overwritten], 2);
        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_board_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let history = GameHistory::from_raw_parts(vec![Board::new(), first, first], 2);
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
