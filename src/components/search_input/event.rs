// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Input handling for the search box.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchInput, SearchInputAction};

impl SearchInput {
    /// Applies a key event to the edit buffer.
    ///
    /// Enter always submits and is consumed here, so it never reaches the
    /// global key handling.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchInputAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(SearchInputAction::Submitted),
            KeyCode::Esc | KeyCode::Tab => Some(SearchInputAction::Leave),

            // Delegate all other key events to the managed input component.
            _ => self
                .input
                .handle_event(event)
                .filter(|changed| changed.value)
                .map(|_| SearchInputAction::Changed(self.input.value().to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn every_keystroke_reports_the_full_text() {
        let mut input = SearchInput::new("rus");

        assert_eq!(
            input.process_event(&key(KeyCode::Char('t'))),
            Some(SearchInputAction::Changed("rust".to_owned()))
        );
        assert_eq!(
            input.process_event(&key(KeyCode::Backspace)),
            Some(SearchInputAction::Changed("rus".to_owned()))
        );
    }

    #[test]
    fn cursor_movement_is_not_a_change() {
        let mut input = SearchInput::new("rust");

        assert_eq!(input.process_event(&key(KeyCode::Left)), None);
    }

    #[rstest]
    #[case(KeyCode::Enter, SearchInputAction::Submitted)]
    #[case(KeyCode::Esc, SearchInputAction::Leave)]
    #[case(KeyCode::Tab, SearchInputAction::Leave)]
    fn control_keys(#[case] code: KeyCode, #[case] expected: SearchInputAction) {
        let mut input = SearchInput::new("rust");

        assert_eq!(input.process_event(&key(code)), Some(expected));
    }
}
