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

//! Rendering for the button bar.
//!
//! Buttons are laid out left to right; the hovered button is drawn with its
//! hover icon and the accent colour. The computed button areas are recorded
//! on the bar so mouse events can be hit-tested against the drawn layout.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{components::ButtonBar, render::Render, theme::Theme};

impl Render for ButtonBar {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut constraints: Vec<Constraint> = self
            .buttons
            .iter()
            .map(|button| Constraint::Length(button.label.chars().count() as u16 + 4))
            .collect();
        constraints.push(Constraint::Min(0));

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .spacing(2)
            .split(area);

        for (index, button) in self.buttons.iter().enumerate() {
            let hovered = self.hovered() == Some(index);
            let icon = if hovered { button.hover_icon } else { button.icon };
            let style = if hovered {
                Style::default().fg(theme.background_colour).bg(theme.accent_colour)
            } else {
                Style::default().fg(theme.button_fg).bg(theme.field_focus_bg)
            };

            f.render_widget(
                Paragraph::new(format!(" {} {} ", icon, button.label)).style(style),
                cells[index],
            );
        }

        self.set_areas(cells[..self.buttons.len()].to_vec());
    }
}
