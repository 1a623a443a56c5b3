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

//! Rendering for the masked text field.
//!
//! Draws the field's current text and, when the field has focus, parks the
//! terminal cursor at the input component's caret position.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::{components::MaskedField, theme::Theme};

impl MaskedField {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let style = if focused {
            Style::default()
                .fg(theme.value_fg)
                .bg(theme.field_focus_bg)
        } else {
            Style::default().fg(theme.value_fg)
        };

        f.render_widget(Paragraph::new(self.input.value()).style(style), area);

        if focused {
            let cursor_x = area.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, area.y));
        }
    }
}
