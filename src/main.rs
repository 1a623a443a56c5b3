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

//! # Client Registration TUI.
//!
//! A terminal-based registration card ("ficha") editor for a small loans
//! book, with masking-as-you-type for Brazilian documents and phone
//! numbers.
//!
//! This application coordinates a TUI frontend built with `ratatui` and an
//! event-driven input layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and
//!   all form state.
//! * An **Input Thread** captures keyboard and mouse events.
//! * **Timer Threads** deliver the masking quiet-interval expiries and the
//!   periodic UI tick.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between threads is handled via `std::sync::mpsc` channels.

mod actions;
mod components;
mod config;
mod mask;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tui_input::Input;

use crate::{
    actions::events::{AppEvent, Focus, process_events},
    components::{ButtonBar, FormField, MaskedField, Selector},
    config::AppConfig,
    mask::profiles,
    model::Ficha,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub nome: Input,
    pub cpf: MaskedField,
    pub cnpj: MaskedField,
    pub tipo: Selector,
    pub contato: MaskedField,
    pub valor: Input,
    pub parcelas: Input,

    pub buttons: ButtonBar,

    pub fichas: Vec<Ficha>,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let delay = Duration::from_millis(config.mask_delay_ms);
        let cpf = MaskedField::new(&profiles::CPF, FormField::Cpf, delay, event_tx.clone());
        let cnpj = MaskedField::new(&profiles::CNPJ, FormField::Cnpj, delay, event_tx.clone());
        let contato = MaskedField::new(
            &profiles::PHONE,
            FormField::Contato,
            delay,
            event_tx.clone(),
        );

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::None,
            event_tx,
            event_rx,
            nome: Input::default(),
            cpf,
            cnpj,
            tipo: Selector::new(),
            contato,
            valor: Input::default(),
            parcelas: Input::default(),
            buttons: ButtonBar::new(),
            fichas: vec![],
            status: None,
        }
    }

    pub fn masked_field_mut(&mut self, field: FormField) -> &mut MaskedField {
        match field {
            FormField::Cpf => &mut self.cpf,
            FormField::Cnpj => &mut self.cnpj,
            FormField::Contato => &mut self.contato,
        }
    }

    /// Snapshots the form into a record ready for validation.
    pub fn to_ficha(&self) -> Ficha {
        let tipo = self.tipo.current();

        // Phone-type contacts are stored as digits; anything else (email,
        // social handle) is kept as typed.
        let contato = if tipo.is_telefone() {
            self.contato.digits()
        } else {
            self.contato.value().trim().to_string()
        };

        Ficha {
            nome: self.nome.value().trim().to_string(),
            cpf: self.cpf.digits(),
            cnpj: self.cnpj.digits(),
            tipo,
            contato,
            valor: self.valor.value().trim().to_string(),
            parcelas: self.parcelas.value().trim().to_string(),
        }
    }

    pub fn clear_form(&mut self) {
        self.nome.reset();
        self.cpf.reset();
        self.cnpj.reset();
        self.tipo.reset();
        self.contato.reset();
        self.valor.reset();
        self.parcelas.reset();
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, used by the button bar hover handling.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background
/// color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background threads and enters the main event
/// loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning them, it hands control to [`process_events`] to manage the
/// UI and state updates. The masking quiet-interval timers are spawned on
/// demand by the masked fields themselves.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Mouse(mouse)) => {
                    tx_input.send(AppEvent::Mouse(mouse)).ok();
                }
                Ok(_) => {}
                Err(e) => {
                    tx_input.send(AppEvent::Error(e.to_string())).ok();
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
