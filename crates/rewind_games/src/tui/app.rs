//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameController, Intent, Position};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Main application state.
///
/// Holds the controller plus purely visual state (cursor, focus, list
/// selection). All game state is read back from the controller.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self {
            game: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.current_move();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Intent::CellClicked(self.cursor.to_index()))
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.send(Intent::CellClicked(pos.to_index()));
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Intent::HistoryEntryClicked(self.selected))
            }
            _ => {}
        }
    }

    fn send(&mut self, intent: Intent) {
        let changed = self.game.dispatch(intent);
        debug!(?intent, changed, "Intent handled");
        self.selected = self.game.current_move();
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Cell, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(
            app.game().current_board().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_digits_place_directly() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1'), KeyCode::Char('5')]);

        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_history_navigation_jumps_and_branches() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('3')]);
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(
            app.game().current_board().get(Position::TopRight),
            Cell::Occupied(Player::O)
        );
    }

    #[test]
    fn test_history_selection_is_clamped() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Tab, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected(), 1);

        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert!(!app.should_quit());

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
