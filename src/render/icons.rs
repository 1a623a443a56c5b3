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

//! Unicode symbols for the TUI.
//!
//! Icons come in resting/hover pairs: the hollow glyph is shown at rest and
//! its filled counterpart while the mouse is over the button. Plain
//! geometric glyphs are used for compatibility with most terminal emulators
//! and fonts.

pub(crate) const ICON_SAVE: &str = "\u{25C7}";
pub(crate) const ICON_SAVE_HOVER: &str = "\u{25C6}";

pub(crate) const ICON_CLEAR: &str = "\u{25CB}";
pub(crate) const ICON_CLEAR_HOVER: &str = "\u{25CF}";

pub(crate) const ICON_EXIT: &str = "\u{25A1}";
pub(crate) const ICON_EXIT_HOVER: &str = "\u{25A0}";

// Selector arrows, shown while the contact type field has focus.
pub(crate) const ICON_PREVIOUS: &str = "\u{25C2}";
pub(crate) const ICON_NEXT: &str = "\u{25B8}";
