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

//! Self-masking text field component.
//!
//! A `MaskedField` wraps a text input component together with the per-field
//! state the masking pass depends on: which mask profile governs the field,
//! whether the most recent key-down was a deletion, and the debounce
//! generation of the pending pass. There is no state shared between fields.

mod event;
mod render;

use std::{sync::mpsc::Sender, time::Duration};

use tui_input::Input;

use crate::{
    actions::events::AppEvent,
    components::FormField,
    mask::{self, MaskProfile, debounce::Debounce},
};

pub(crate) struct MaskedField {
    pub(crate) input: Input,
    profile: &'static MaskProfile,
    last_key_was_delete: bool,
    debounce: Debounce,
}

impl MaskedField {
    pub(crate) fn new(
        profile: &'static MaskProfile,
        field: FormField,
        delay: Duration,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            input: Input::default(),
            profile,
            last_key_was_delete: false,
            debounce: Debounce::new(field, delay, event_tx),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// The digits-only projection of the field's current text.
    pub(crate) fn digits(&self) -> String {
        mask::strip_digits(self.input.value())
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
        self.last_key_was_delete = false;
    }

    /// Runs the pending masking pass if it is still live.
    ///
    /// The pass is a no-op when `generation` has been superseded by a newer
    /// keystroke, when the triggering key was a deletion (so punctuation the
    /// user removed stays removed), or when the caller's gating condition
    /// does not hold.
    pub(crate) fn apply_pending(&mut self, generation: u64, gate_ok: bool) {
        if !self.debounce.is_current(generation) {
            return;
        }
        if self.last_key_was_delete {
            return;
        }
        if !gate_ok {
            return;
        }

        let caret = self.input.cursor();
        let rewrite = mask::rewrite(self.profile, self.input.value(), (caret, caret));
        let (caret, _) = rewrite.selection;
        self.input = Input::new(rewrite.text).with_cursor(caret);
    }

    #[cfg(test)]
    pub(crate) fn current_generation(&self) -> u64 {
        self.debounce.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::profiles;
    use crossterm::event::{Event, KeyCode, KeyEvent};
    use std::sync::mpsc;

    fn cpf_field() -> MaskedField {
        let (tx, _rx) = mpsc::channel();
        // The sleeper threads are irrelevant here; passes are applied
        // directly by generation.
        MaskedField::new(&profiles::CPF, FormField::Cpf, Duration::from_millis(1), tx)
    }

    fn type_str(field: &mut MaskedField, text: &str) {
        for c in text.chars() {
            field.process_event(&Event::Key(KeyEvent::from(KeyCode::Char(c))));
        }
    }

    #[test]
    fn pass_punctuates_and_preserves_caret() {
        let mut field = cpf_field();
        type_str(&mut field, "12345678901");
        assert_eq!(field.value(), "12345678901");
        assert_eq!(field.input.cursor(), 11);

        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-01");
        // Three punctuation characters inserted, caret shifts with them.
        assert_eq!(field.input.cursor(), 14);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut field = cpf_field();
        type_str(&mut field, "123456789");
        let stale = field.current_generation();
        type_str(&mut field, "01");

        field.apply_pending(stale, true);
        assert_eq!(field.value(), "12345678901");

        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-01");
    }

    #[test]
    fn deletion_suppresses_the_pass() {
        let mut field = cpf_field();
        type_str(&mut field, "12345678901");
        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-01");

        // Backspace removes the trailing digit; the rescheduled pass must
        // not reinstate punctuation.
        field.process_event(&Event::Key(KeyEvent::from(KeyCode::Backspace)));
        assert_eq!(field.value(), "123.456.789-0");
        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-0");
    }

    #[test]
    fn typing_after_deletion_re_enables_the_pass() {
        let mut field = cpf_field();
        type_str(&mut field, "12345678901");
        field.process_event(&Event::Key(KeyEvent::from(KeyCode::Backspace)));
        type_str(&mut field, "1");

        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-01");
    }

    #[test]
    fn gate_failure_suppresses_the_pass() {
        let (tx, _rx) = mpsc::channel();
        let mut field = MaskedField::new(
            &profiles::PHONE,
            FormField::Contato,
            Duration::from_millis(1),
            tx,
        );
        type_str(&mut field, "11987654321");

        field.apply_pending(field.current_generation(), false);
        assert_eq!(field.value(), "11987654321");

        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "(11) 98765-4321");
    }

    #[test]
    fn unsupported_digit_count_passes_through() {
        let mut field = cpf_field();
        type_str(&mut field, "12");
        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "12");
    }

    #[test]
    fn reset_clears_text_and_delete_flag() {
        let mut field = cpf_field();
        type_str(&mut field, "123");
        field.process_event(&Event::Key(KeyEvent::from(KeyCode::Backspace)));
        field.reset();

        assert_eq!(field.value(), "");
        type_str(&mut field, "12345678901");
        field.apply_pending(field.current_generation(), true);
        assert_eq!(field.value(), "123.456.789-01");
    }
}
