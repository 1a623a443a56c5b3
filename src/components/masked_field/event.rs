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

//! Input handling for the masked text field.
//!
//! Key events are delegated to the managed input component; the field only
//! records whether the key was a deletion and, when the text actually
//! changed, reschedules the masking pass.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::MaskedField;

impl MaskedField {
    pub(crate) fn process_event(&mut self, event: &Event) {
        if let Event::Key(key_event) = event {
            // Captured on key-down, before the text changes; the flag alone
            // never triggers a pass.
            self.last_key_was_delete =
                matches!(key_event.code, KeyCode::Backspace | KeyCode::Delete);
        }

        if let Some(change) = self.input.handle_event(event) {
            if change.value {
                self.debounce.schedule();
            }
        }
    }
}
