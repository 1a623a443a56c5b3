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

//! Render the registration form.
//!
//! Draws the labelled field rows, the contact type selector, and the action
//! button bar. The focused field gets a highlighted background and owns the
//! terminal cursor.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use tui_input::Input;

use crate::{
    App,
    actions::events::Focus,
    render::{
        Render,
        icons::{ICON_NEXT, ICON_PREVIOUS},
    },
    theme::Theme,
};

const LABEL_WIDTH: u16 = 10;

pub(crate) fn draw_form(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Ficha de Cliente ")
        .title_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::new(1, 1, 1, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // nome
            Constraint::Length(1), // cpf
            Constraint::Length(1), // cnpj
            Constraint::Length(1), // tipo
            Constraint::Length(1), // contato
            Constraint::Length(1), // valor
            Constraint::Length(1), // parcelas
            Constraint::Length(1),
            Constraint::Length(1), // buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let focus = app.focus;

    draw_text_field(f, rows[0], "Nome", &app.nome, focus == Focus::Nome, &theme);

    let value_area = draw_label(f, rows[1], "CPF", &theme);
    app.cpf.draw(f, value_area, &theme, focus == Focus::Cpf);

    let value_area = draw_label(f, rows[2], "CNPJ", &theme);
    app.cnpj.draw(f, value_area, &theme, focus == Focus::Cnpj);

    draw_selector(f, rows[3], app, focus == Focus::Tipo);

    let value_area = draw_label(f, rows[4], "Contato", &theme);
    app.contato.draw(f, value_area, &theme, focus == Focus::Contato);

    draw_text_field(f, rows[5], "Valor", &app.valor, focus == Focus::Valor, &theme);
    draw_text_field(
        f,
        rows[6],
        "Parcelas",
        &app.parcelas,
        focus == Focus::Parcelas,
        &theme,
    );

    app.buttons.draw(f, rows[8], &theme);
}

// Draws the label column and returns the remaining value area.
fn draw_label(f: &mut Frame, area: Rect, label: &str, theme: &Theme) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(label).style(Style::default().fg(theme.label_fg)),
        columns[0],
    );

    columns[1]
}

fn draw_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    focused: bool,
    theme: &Theme,
) {
    let value_area = draw_label(f, area, label, theme);

    let style = if focused {
        Style::default().fg(theme.value_fg).bg(theme.field_focus_bg)
    } else {
        Style::default().fg(theme.value_fg)
    };

    f.render_widget(Paragraph::new(input.value()).style(style), value_area);

    if focused {
        let cursor_x = value_area.x + input.cursor() as u16;
        f.set_cursor_position((cursor_x, value_area.y));
    }
}

fn draw_selector(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let theme = &app.theme;
    let value_area = draw_label(f, area, "Tipo", theme);

    let label = app.tipo.current().label();
    let (text, style) = if focused {
        (
            format!("{} {} {}", ICON_PREVIOUS, label, ICON_NEXT),
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.field_focus_bg),
        )
    } else {
        (label.to_string(), Style::default().fg(theme.value_fg))
    };

    f.render_widget(Paragraph::new(text).style(style), value_area);
}
