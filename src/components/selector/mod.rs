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

//! Contact type selector component.
//!
//! Cycles through the fixed set of contact types. The selector's current
//! value gates the phone field's masking pass and selects which validation
//! applies to the contact on save.

use crossterm::event::{Event, KeyCode};

use crate::model::TipoContato;

pub(crate) struct Selector {
    selected: usize,
}

impl Selector {
    pub(crate) fn new() -> Self {
        Self { selected: 0 }
    }

    pub(crate) fn current(&self) -> TipoContato {
        TipoContato::ALL[self.selected]
    }

    pub(crate) fn reset(&mut self) {
        self.selected = 0;
    }

    fn next(&mut self) {
        self.selected = (self.selected + 1) % TipoContato::ALL.len();
    }

    fn previous(&mut self) {
        let len = TipoContato::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub(crate) fn process_event(&mut self, event: &Event) {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Right | KeyCode::Char(' ') => self.next(),
                KeyCode::Left => self.previous(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn starts_on_first_choice() {
        assert_eq!(Selector::new().current(), TipoContato::Celular);
    }

    #[test]
    fn cycles_forward_and_wraps() {
        let mut selector = Selector::new();
        for _ in 0..TipoContato::ALL.len() {
            selector.next();
        }
        assert_eq!(selector.current(), TipoContato::Celular);
    }

    #[test]
    fn cycles_backward_and_wraps() {
        let mut selector = Selector::new();
        selector.previous();
        assert_eq!(selector.current(), TipoContato::Telegram);
    }

    #[test]
    fn arrow_keys_change_the_selection() {
        let mut selector = Selector::new();
        selector.process_event(&Event::Key(KeyEvent::from(KeyCode::Right)));
        assert_eq!(selector.current(), TipoContato::Whatsapp);
        selector.process_event(&Event::Key(KeyEvent::from(KeyCode::Left)));
        assert_eq!(selector.current(), TipoContato::Celular);
    }
}
