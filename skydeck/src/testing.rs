//! Test utilities: key constructors and a render harness

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

/// Key event for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::empty())
}

/// Key event for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Key event for a non-character key (Enter, Tab, arrows, ...).
pub fn key_code(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::empty())
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Renders into a test backend and exposes the buffer as plain text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
        }
    }

    /// Render one frame and return the buffer contents without styling.
    pub fn render_to_string_plain(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(|frame| render(frame)).expect("draw");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer to newline-separated rows of symbols.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
