//! Test helpers for components and reducers
//!
//! - [`key`]: build a `KeyEvent` from a string such as `"r"`, `"f5"` or `"ctrl+c"`
//! - [`click`]: build a left-click `EventKind` at a position
//! - [`RenderHarness`]: render into an in-memory terminal and read it back as text
//! - [`ActionAssertions`]: assertions on the actions a component emitted
//!
//! ```ignore
//! use films_core::testing::*;
//!
//! let actions = component.handle_event(&EventKind::Key(key("r")), props);
//! actions.assert_first(Action::FilmsRefetch);
//!
//! let mut render = RenderHarness::new(60, 20);
//! let output = render.render_to_string_plain(|frame| {
//!     component.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Loading..."));
//! ```

use std::fmt::Debug;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;

/// Parse a key description into a `KeyEvent`.
///
/// Accepts an optional `ctrl+`, `alt+` or `shift+` prefix followed by a
/// single character or one of the named keys (`enter`, `esc`, `tab`,
/// `space`, `up`, `down`, `left`, `right`, `f1`..`f12`).
pub fn parse_key(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    let mut parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.pop()?.trim();

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c => {
            let mut chars = c.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Like [`parse_key`] but panics on invalid input, for use in tests.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// A left mouse button press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render a buffer as plain text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    if width == 0 {
        return String::new();
    }
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// In-memory terminal for render tests.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {}", e));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return it as plain text.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Assertions over a list of emitted actions.
pub trait ActionAssertions {
    type Action;

    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: Self::Action);
    fn assert_contains(&self, expected: Self::Action);
}

impl<A> ActionAssertions for Vec<A>
where
    A: PartialEq + Debug,
{
    type Action = A;

    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "Expected {} actions, got: {:?}",
            expected,
            self
        );
    }

    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(first, &expected, "Unexpected first action"),
            None => panic!("Expected first action {:?}, got none", expected),
        }
    }

    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "Expected {:?} among {:?}",
            expected,
            self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_named_and_modified() {
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("f5").code, KeyCode::F(5));

        let k = key("ctrl+c");
        assert_eq!(k.code, KeyCode::Char('c'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_key_rejects_garbage() {
        assert!(parse_key("").is_none());
        assert!(parse_key("hyper+x").is_none());
        assert!(parse_key("notakey").is_none());
    }

    #[test]
    fn test_render_harness_plain_text() {
        let mut render = RenderHarness::new(12, 2);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello\nworld"), frame.area());
        });
        assert_eq!(output, "hello\nworld");
    }

    #[test]
    fn test_action_assertions() {
        let actions = vec!["a", "b"];
        actions.assert_count(2);
        actions.assert_first("a");
        actions.assert_contains("b");

        let none: Vec<&str> = vec![];
        none.assert_empty();
    }
}
