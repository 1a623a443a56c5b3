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

//! Mouse handling for the button bar.
//!
//! Movement updates the hovered button (clearing it when the pointer leaves
//! the bar); a left click on a button yields its action for the event loop
//! to dispatch.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::components::{ButtonAction, ButtonBar};

impl ButtonBar {
    pub(crate) fn process_event(&mut self, event: &MouseEvent) -> Option<ButtonAction> {
        let position = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Moved => {
                self.hovered = self.hit(position);
                None
            }

            MouseEventKind::Down(MouseButton::Left) => {
                self.hit(position).map(|index| self.buttons[index].action)
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::bar_with_areas;
    use super::*;
    use crossterm::event::KeyModifiers;

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn hover_follows_the_pointer() {
        let mut bar = bar_with_areas();

        assert_eq!(bar.process_event(&moved(3, 10)), None);
        assert_eq!(bar.hovered(), Some(0));

        // Moving onto another button swaps in the same pass.
        bar.process_event(&moved(13, 10));
        assert_eq!(bar.hovered(), Some(1));
    }

    #[test]
    fn leaving_the_bar_clears_the_hover() {
        let mut bar = bar_with_areas();
        bar.process_event(&moved(3, 10));
        bar.process_event(&moved(3, 0));
        assert_eq!(bar.hovered(), None);
    }

    #[test]
    fn click_yields_the_button_action() {
        let mut bar = bar_with_areas();
        assert_eq!(bar.process_event(&click(3, 10)), Some(ButtonAction::Save));
        assert_eq!(bar.process_event(&click(13, 10)), Some(ButtonAction::Clear));
        assert_eq!(bar.process_event(&click(25, 10)), Some(ButtonAction::Exit));
        assert_eq!(bar.process_event(&click(11, 10)), None);
    }
}
