//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules are separated
//! from board storage so the controller, the invariants and the presentation
//! layer all evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, Win, evaluate};
