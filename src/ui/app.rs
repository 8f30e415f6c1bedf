use crate::model::User;
use crate::ui::binding::NameBinding;
use crate::ui::handlers::EventHandlers;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

/// Name shown when the screen comes up.
pub const INITIAL_NAME: &str = "Kabu";
/// Name applied by the Change button.
pub const CHANGED_NAME: &str = "Taro";

/// The screen controller.
///
/// Owns the model, establishes the view binding, and performs the one
/// state transition in the system: `"Kabu"` to `"Taro"` on activation.
pub struct App {
    user: User,
    binding: NameBinding,
    should_quit: bool,
    /// Screen area of the Change button, recorded during draw so mouse
    /// clicks can be hit-tested. `None` until the first frame.
    button_area: Option<Rect>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut user = User::new();
        user.set_name(INITIAL_NAME);
        let binding = NameBinding::bind(&mut user);
        Self {
            user,
            binding,
            should_quit: false,
            button_area: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The model, read-only. The controller owns it exclusively.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Text the view renders for the name, kept current by the binding.
    pub fn display_name(&self) -> String {
        self.binding.text()
    }

    /// Record where the Change button was drawn this frame.
    pub fn set_button_area(&mut self, area: Rect) {
        self.button_area = Some(area);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Enter | KeyCode::Char('c') => self.on_change_click(),
            _ => {}
        }
    }

    /// Left click inside the button area activates it.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(button) = self.button_area else {
            return;
        };
        if button.contains(Position::new(mouse.column, mouse.row)) {
            self.on_change_click();
        }
    }

    pub fn on_tick(&mut self) {}
}

impl EventHandlers for App {
    fn on_change_click(&mut self) {
        debug!(target: "ui", "Change User Name");
        self.user.set_name(CHANGED_NAME);
        debug!(target: "ui", name = %self.user.name(), "user name updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    // -- initial state -----------------------------------------------------

    #[test]
    fn starts_with_the_initial_name() {
        let app = App::new();
        assert_eq!(app.user().name(), INITIAL_NAME);
        assert_eq!(app.display_name(), INITIAL_NAME);
    }

    #[test]
    fn does_not_quit_until_requested() {
        let app = App::new();
        assert!(!app.should_quit());
    }

    // -- activation keys ---------------------------------------------------

    #[test]
    fn enter_changes_the_name() {
        let mut app = App::new();
        app.on_key(press_key(KeyCode::Enter));
        assert_eq!(app.user().name(), CHANGED_NAME);
        assert_eq!(app.display_name(), CHANGED_NAME);
    }

    #[test]
    fn c_changes_the_name() {
        let mut app = App::new();
        app.on_key(press_key(KeyCode::Char('c')));
        assert_eq!(app.user().name(), CHANGED_NAME);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::new();
        app.on_key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        });
        assert_eq!(app.user().name(), INITIAL_NAME);
    }

    #[test]
    fn unrelated_key_leaves_the_name_alone() {
        let mut app = App::new();
        app.on_key(press_key(KeyCode::Char('x')));
        assert_eq!(app.user().name(), INITIAL_NAME);
        assert!(!app.should_quit());
    }

    // -- quit keys ---------------------------------------------------------

    #[test]
    fn q_requests_quit() {
        let mut app = App::new();
        app.on_key(press_key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_requests_quit() {
        let mut app = App::new();
        app.on_key(press_key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    // -- mouse activation --------------------------------------------------

    #[test]
    fn click_inside_the_button_changes_the_name() {
        let mut app = App::new();
        app.set_button_area(Rect::new(10, 5, 12, 3));
        app.on_mouse(left_click(12, 6));
        assert_eq!(app.user().name(), CHANGED_NAME);
    }

    #[test]
    fn click_outside_the_button_is_ignored() {
        let mut app = App::new();
        app.set_button_area(Rect::new(10, 5, 12, 3));
        app.on_mouse(left_click(0, 0));
        assert_eq!(app.user().name(), INITIAL_NAME);
    }

    #[test]
    fn click_before_the_first_frame_is_ignored() {
        // No button area recorded yet.
        let mut app = App::new();
        app.on_mouse(left_click(1, 1));
        assert_eq!(app.user().name(), INITIAL_NAME);
    }

    // -- repeated activation -----------------------------------------------

    #[test]
    fn repeated_clicks_are_idempotent() {
        let mut app = App::new();
        app.on_change_click();
        assert_eq!(app.user().name(), CHANGED_NAME);
        app.on_change_click();
        assert_eq!(app.user().name(), CHANGED_NAME);
    }
}
