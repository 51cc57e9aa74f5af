//! Rewind tic-tac-toe - pure game logic with branching move history
//!
//! Every move produces a new immutable [`Board`] that is appended to a
//! [`GameHistory`]. Players can jump back to any earlier step and play on
//! from there, which discards the abandoned future.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`] and [`Position`]
//! - **Rules**: win detection ([`evaluate`]) and draw detection
//! - **History**: the ordered board snapshots plus the viewing cursor
//! - **Controller**: turn-taking, move guards and time-travel
//! - **View**: a render-ready projection of the controller and the
//!   [`Intent`]s a presentation layer sends back
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, GameStatus, Player};
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index);
//! }
//!
//! assert!(matches!(game.status(), GameStatus::Won(win) if win.player() == Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Travel back two moves and branch off.
//! game.jump_to(3);
//! game.apply_move(8);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod controller;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, Player};

// Crate-level exports - Rules
pub use rules::{Line, Win, evaluate};

// Crate-level exports - History
pub use history::{GameHistory, HistoryEntry};

// Crate-level exports - Controller
pub use contracts::{Contract, GameUndecided, MoveGuard, SquareIsEmpty};
pub use controller::{GameController, GameStatus, IgnoredMove, MoveOutcome};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, RootedHistoryInvariant,
};

// Crate-level exports - Presentation contract
pub use view::{GameView, Intent};
