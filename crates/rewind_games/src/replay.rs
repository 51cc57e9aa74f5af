//! Headless playback of a move list.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameController, GameStatus, MoveOutcome, Position};
use std::fmt::Write;
use tracing::{debug, instrument};

/// A move list that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token names no square.
    #[display("{:?} is not a square (use 1-9 or a label like \"center\")", token)]
    InvalidMove {
        /// The offending token.
        token: String,
    },

    /// The requested step was never recorded.
    #[display("Cannot view step {}: the game has {} steps", step, len)]
    JumpOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded steps.
        len: usize,
    },
}

/// Splits a comma or whitespace separated list into positions.
///
/// Numbers are the 1-9 shown on empty squares, the same as the TUI digit keys.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<Position>, ReplayError> {
    moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_square(token).ok_or_else(|| ReplayError::InvalidMove {
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_square(token: &str) -> Option<Position> {
    match token.parse::<usize>() {
        Ok(number) => number.checked_sub(1).and_then(Position::from_index),
        Err(_) => Position::from_label_or_number(token),
    }
}

/// Plays `moves`, optionally jumps to `jump`, and renders the result.
///
/// Guarded moves are skipped, as in the terminal UI, and listed in the
/// report.
#[instrument]
pub fn replay_report(moves: &str, jump: Option<usize>) -> Result<String, ReplayError> {
    let positions = parse_moves(moves)?;

    let mut game = GameController::new();
    let mut ignored = Vec::new();
    for pos in positions {
        if let MoveOutcome::Ignored(reason) = game.play(pos) {
            debug!(%reason, "Skipping move");
            ignored.push(reason);
        }
    }

    if let Some(step) = jump
        && !game.jump_to(step)
    {
        return Err(ReplayError::JumpOutOfRange {
            step,
            len: game.history().len(),
        });
    }

    Ok(render(&game, &ignored))
}

fn render(game: &GameController, ignored: &[rewind_tictactoe::IgnoredMove]) -> String {
    let view = game.view();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", game.current_board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.status());
    if let GameStatus::Won(win) = view.status() {
        let [a, b, c] = win.line().indices();
        let _ = writeln!(out, "Winning line: {}, {}, {}", a + 1, b + 1, c + 1);
    }
    let _ = writeln!(out, "You are currently at move #{}", view.current_move());

    for reason in ignored {
        let _ = writeln!(out, "Ignored: {}", reason);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "History:");
    for entry in view.history() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        match entry.played() {
            Some((player, pos)) => {
                let _ = writeln!(out, "{} {} ({} {})", marker, entry.label(), player, pos);
            }
            None => {
                let _ = writeln!(out, "{} {}", marker, entry.label());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_accepts_numbers_and_labels() {
        let moves = parse_moves("1, center,9 top-right").expect("valid list");
        assert_eq!(
            moves,
            vec![
                Position::TopLeft,
                Position::Center,
                Position::BottomRight,
                Position::TopRight
            ]
        );
    }

    #[test]
    fn test_parse_moves_rejects_unknown_token() {
        assert_eq!(
            parse_moves("1,0"),
            Err(ReplayError::InvalidMove {
                token: "0".to_string()
            })
        );
    }

    #[test]
    fn test_displayed_number_selects_that_square() {
        let empty = replay_report("", None).expect("valid replay");
        assert!(empty.starts_with("1|2|3\n-+-+-\n4|5|6\n"));

        for pos in Position::ALL {
            let typed = (pos.to_index() + 1).to_string();
            let report = replay_report(&typed, None).expect("valid replay");
            assert!(
                report.contains(&format!("> Go to move #1 (X {})\n", pos)),
                "typing {} should mark {}",
                typed,
                pos
            );
        }
    }

    #[test]
    fn test_report_for_win() {
        let report = replay_report("1,5,2,6,3", None).expect("valid replay");
        assert!(report.starts_with("X|X|X\n-+-+-\n4|O|O\n"));
        assert!(report.contains("Winner: X\n"));
        assert!(report.contains("Winning line: 1, 2, 3\n"));
        assert!(report.contains("You are currently at move #5\n"));
        assert!(report.contains("> Go to move #5 (X Top-right)\n"));
    }

    #[test]
    fn test_report_lists_ignored_moves() {
        let report = replay_report("5,5", None).expect("valid replay");
        assert!(report.contains("Ignored: Square Center is already occupied\n"));
        assert!(report.contains("Next player: O\n"));
    }

    #[test]
    fn test_report_after_jump() {
        let report = replay_report("1,5,2,6,3", Some(2)).expect("valid replay");
        assert!(report.contains("Next player: X\n"));
        assert!(report.contains("You are currently at move #2\n"));
        assert!(report.contains("> Go to move #2 (O Center)\n"));
        assert!(report.contains("  Go to move #5 (X Top-right)\n"));
    }

    #[test]
    fn test_jump_out_of_range() {
        assert_eq!(
            replay_report("1", Some(4)),
            Err(ReplayError::JumpOutOfRange { step: 4, len: 2 })
        );
    }
}
