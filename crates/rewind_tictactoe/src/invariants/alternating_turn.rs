//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the mark placed to reach step N belongs to X when N is odd
/// and to O when N is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        (1..history.len()).all(|step| {
            history
                .played_at(step)
                .is_none_or(|(player, _)| player == Player::for_turn(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
