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

//! Interactive form components.
//!
//! Each component owns its transient state and processes the raw terminal
//! events routed to it by the application event loop. Rendering lives next
//! to each component in its own sub-module.

mod buttons;
mod masked_field;
mod selector;

pub(crate) use buttons::{ButtonAction, ButtonBar};
pub(crate) use masked_field::MaskedField;
pub(crate) use selector::Selector;

/// Identifies which masked form field a scheduled masking pass belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormField {
    Cpf,
    Cnpj,
    Contato,
}
