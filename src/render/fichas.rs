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

//! Render the saved record listing.
//!
//! Saved fichas are shown with their display projections: protected CPF,
//! punctuated contact, monetary value and grouped totals. The monetary and
//! quantity rewrites run on every draw; both skip text that is already in
//! display form, so repeated passes are stable.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    App,
    mask::profiles,
    model::Ficha,
    util::format,
};

pub(crate) fn draw_fichas(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(" Fichas ")
        .title_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::new(1, 1, 1, 0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    draw_table(f, sections[0], app);
    draw_resumo(f, sections[1], app);
}

fn draw_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let rows = app.fichas.iter().map(|ficha| {
        Row::new(vec![
            Cell::from(ficha.nome.clone()).style(Style::default().fg(theme.table_nome_fg)),
            Cell::from(ficha.cpf_protegido()).style(Style::default().fg(theme.table_documento_fg)),
            Cell::from(contato_display(ficha)).style(Style::default().fg(theme.table_contato_fg)),
            Cell::from(format::currency_text(&ficha.valor))
                .style(Style::default().fg(theme.table_valor_fg)),
            Cell::from(format::quantity_text(&ficha.parcelas))
                .style(Style::default().fg(theme.table_documento_fg)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(14),
            Constraint::Min(18),
            Constraint::Length(14),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from("Nome"),
            Cell::from("CPF"),
            Cell::from("Contato"),
            Cell::from("Valor"),
            Cell::from("Parc."),
        ])
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1),
    );

    f.render_widget(table, area);
}

// The contact column shows the punctuated phone for phone-type contacts
// and the text as entered for everything else.
fn contato_display(ficha: &Ficha) -> String {
    if ficha.tipo.is_telefone() {
        profiles::PHONE.apply(&ficha.contato)
    } else {
        ficha.contato.clone()
    }
}

fn draw_resumo(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let registradas = format::quantity_text(&format!("Fichas registradas: {}", app.fichas.len()));

    let total: f64 = app
        .fichas
        .iter()
        .filter_map(|ficha| format::parse_valor(&ficha.valor))
        .sum();
    let pendente = format!("Total pendente: {}", format::format_currency(total));

    f.render_widget(
        Paragraph::new(registradas)
            .style(Style::default().fg(theme.status_fg))
            .alignment(Alignment::Right),
        lines[0],
    );
    f.render_widget(
        Paragraph::new(pendente)
            .style(Style::default().fg(theme.table_valor_fg))
            .alignment(Alignment::Right),
        lines[1],
    );
}
