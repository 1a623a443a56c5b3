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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard and mouse), the masking quiet-interval
//! timers, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`]
//!    state: routing keystrokes to the focused field, applying pending
//!    masking passes, and saving or clearing the form.
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    App,
    components::{ButtonAction, FormField},
    render::draw,
};

/// Which form element currently receives keystrokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Focus {
    Nome,
    Cpf,
    Cnpj,
    Tipo,
    Contato,
    Valor,
    Parcelas,
    None,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Nome => Focus::Cpf,
            Focus::Cpf => Focus::Cnpj,
            Focus::Cnpj => Focus::Tipo,
            Focus::Tipo => Focus::Contato,
            Focus::Contato => Focus::Valor,
            Focus::Valor => Focus::Parcelas,
            Focus::Parcelas => Focus::Nome,
            Focus::None => Focus::Nome,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Nome => Focus::Parcelas,
            Focus::Cpf => Focus::Nome,
            Focus::Cnpj => Focus::Cpf,
            Focus::Tipo => Focus::Cnpj,
            Focus::Contato => Focus::Tipo,
            Focus::Valor => Focus::Contato,
            Focus::Parcelas => Focus::Valor,
            Focus::None => Focus::Parcelas,
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    /// A field's masking quiet interval elapsed. Stale generations are
    /// discarded by the field itself.
    MaskQuiet { field: FormField, generation: u64 },

    SaveFicha,
    ClearForm,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,

            AppEvent::MaskQuiet { field, generation } => apply_mask_pass(app, field, generation),

            AppEvent::SaveFicha => save_ficha(app),
            AppEvent::ClearForm => {
                app.clear_form();
                app.status = Some("Formulário limpo.".to_string());
            }

            AppEvent::Error(message) => app.status = Some(message),

            AppEvent::Tick => {}
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to form editing and application actions.
///
/// Tab and Shift-Tab move between fields, Esc leaves the form. Any other
/// key goes to the focused component; with no focus, a small set of global
/// keys drives the application.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::None;
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            return Ok(());
        }
        _ => {}
    }

    let event = Event::Key(key);
    match app.focus {
        Focus::Nome => {
            app.nome.handle_event(&event);
        }
        Focus::Cpf => app.cpf.process_event(&event),
        Focus::Cnpj => app.cnpj.process_event(&event),
        Focus::Tipo => app.tipo.process_event(&event),
        Focus::Contato => app.contato.process_event(&event),
        Focus::Valor => {
            app.valor.handle_event(&event);
        }
        Focus::Parcelas => {
            app.parcelas.handle_event(&event);
        }
        Focus::None => process_global_key_event(app, key)?,
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('s') => app.event_tx.send(AppEvent::SaveFicha)?,
        KeyCode::Char('l') => app.event_tx.send(AppEvent::ClearForm)?,

        KeyCode::Enter => app.focus = Focus::Nome,

        _ => {}
    }

    Ok(())
}

fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if let Some(action) = app.buttons.process_event(&mouse) {
        match action {
            ButtonAction::Save => app.event_tx.send(AppEvent::SaveFicha)?,
            ButtonAction::Clear => app.event_tx.send(AppEvent::ClearForm)?,
            ButtonAction::Exit => app.event_tx.send(AppEvent::ExitApplication)?,
        }
    }

    Ok(())
}

/// Hands a quiet-interval expiry back to its field.
///
/// The phone mask additionally requires the contact type selector to be on
/// a mobile-capable value; which values qualify is configuration.
fn apply_mask_pass(app: &mut App, field: FormField, generation: u64) {
    let gate_ok = match field {
        FormField::Contato => {
            let tipo = app.tipo.current().value();
            app.config.mobile_contact_types.iter().any(|t| t == tipo)
        }
        _ => true,
    };

    app.masked_field_mut(field).apply_pending(generation, gate_ok);
}

fn save_ficha(app: &mut App) {
    let ficha = app.to_ficha();

    match ficha.validate() {
        Ok(()) => {
            app.fichas.push(ficha);
            app.clear_form();
            app.status = Some("Ficha salva.".to_string());
        }
        Err(error) => app.status = Some(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_field_and_back() {
        let mut focus = Focus::Nome;
        for _ in 0..7 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Nome);
    }

    #[test]
    fn focus_previous_inverts_next() {
        for focus in [
            Focus::Nome,
            Focus::Cpf,
            Focus::Cnpj,
            Focus::Tipo,
            Focus::Contato,
            Focus::Valor,
            Focus::Parcelas,
        ] {
            assert_eq!(focus.next().previous(), focus);
        }
    }

    #[test]
    fn entering_the_form_starts_on_the_first_field() {
        assert_eq!(Focus::None.next(), Focus::Nome);
    }
}
