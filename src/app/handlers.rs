//! Key handling.
//!
//! | Key | Effect |
//! |-----|--------|
//! | Tab, Down | focus next interactive element |
//! | Shift+Tab, Up | focus previous |
//! | Enter, Space on a button | run its `onClick` chain |
//! | characters, Backspace on a text field | edit the bound state key |
//! | Esc, `q` outside a text field, Ctrl+C | quit |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::SduiResult;
use crate::render::Element;

use super::App;

impl App {
    /// Handle a key press. Errors are fatal (an action asked for a load
    /// through an unknown provider type).
    pub fn handle_key(&mut self, key: KeyEvent) -> SduiResult<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        let focusables: Vec<Element> = self
            .view()
            .map(|view| view.focusables().into_iter().cloned().collect())
            .unwrap_or_default();
        if focusables.is_empty() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.quit();
            }
            return Ok(());
        }

        let count = focusables.len();
        self.focus = self.focus.min(count - 1);
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % count,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + count - 1) % count,
            KeyCode::Esc => self.quit(),
            code => match &focusables[self.focus] {
                Element::Button {
                    trigger, on_click, ..
                } => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        tracing::debug!("Activated {}", trigger.component());
                        on_click.invoke(trigger, &mut self.state);
                        self.process_navigation()?;
                    }
                    KeyCode::Char('q') => self.quit(),
                    _ => {}
                },
                Element::TextField { key, .. } => match code {
                    KeyCode::Char(c) => {
                        let mut buf = [0; 4];
                        self.state.append(key, c.encode_utf8(&mut buf));
                    }
                    KeyCode::Backspace => {
                        self.state.pop_char(key);
                    }
                    _ => {}
                },
                _ => {}
            },
        }
        Ok(())
    }
}
