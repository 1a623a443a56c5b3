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

//! Quiet-interval scheduling for masking passes.
//!
//! Re-punctuating a field on every keystroke would fight the caret during a
//! burst of typing, so a masking pass only runs after a configurable quiet
//! interval with no further input. Each schedule bumps a generation counter
//! and spawns a sleeper thread that posts a [`AppEvent::MaskQuiet`] event
//! carrying that generation; the event loop hands the event back to the
//! field, which discards it if a newer keystroke has superseded it.
//!
//! Cancellation is implicit and total: there is no way to cancel a pending
//! pass other than scheduling its replacement.

use std::{sync::mpsc::Sender, thread, time::Duration};

use crate::{actions::events::AppEvent, components::FormField};

/// Per-field debounce state: the live generation and the channel used to
/// post quiet-interval expiries back to the event loop.
pub(crate) struct Debounce {
    field: FormField,
    delay: Duration,
    generation: u64,
    event_tx: Sender<AppEvent>,
}

impl Debounce {
    pub(crate) fn new(field: FormField, delay: Duration, event_tx: Sender<AppEvent>) -> Self {
        Self {
            field,
            delay,
            generation: 0,
            event_tx,
        }
    }

    /// Schedules a masking pass after the quiet interval, superseding any
    /// pass that has not yet fired.
    pub(crate) fn schedule(&mut self) {
        self.generation += 1;

        let field = self.field;
        let generation = self.generation;
        let delay = self.delay;
        let event_tx = self.event_tx.clone();

        // FIXME a single shared timer thread would avoid spawning one
        // short-lived thread per keystroke
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = event_tx.send(AppEvent::MaskQuiet { field, generation });
        });
    }

    /// Whether `generation` is still the most recently scheduled pass.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn schedule_supersedes_pending_pass() {
        let (tx, rx) = mpsc::channel();
        let mut debounce = Debounce::new(FormField::Cpf, Duration::from_millis(5), tx);

        debounce.schedule();
        let first = debounce.generation();
        debounce.schedule();
        let second = debounce.generation();

        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));

        // Both sleeper threads still deliver; only the second is live on
        // arrival.
        let mut live = 0;
        for _ in 0..2 {
            if let AppEvent::MaskQuiet { generation, .. } = rx.recv().unwrap() {
                if debounce.is_current(generation) {
                    live += 1;
                }
            }
        }
        assert_eq!(live, 1);
    }

    #[test]
    fn expiry_carries_field_and_generation() {
        let (tx, rx) = mpsc::channel();
        let mut debounce = Debounce::new(FormField::Contato, Duration::from_millis(1), tx);

        debounce.schedule();

        match rx.recv().unwrap() {
            AppEvent::MaskQuiet { field, generation } => {
                assert_eq!(field, FormField::Contato);
                assert!(debounce.is_current(generation));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
