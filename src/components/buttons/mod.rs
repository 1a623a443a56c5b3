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

//! Form action button bar with mouse hover support.
//!
//! Each button carries a resting icon and a hover icon; the bar tracks which
//! button the mouse is over and swaps the icon while it stays there. Buttons
//! are independent: moving off one and onto another reverts the first and
//! highlights the second in the same pass.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::render::icons::{
    ICON_CLEAR, ICON_CLEAR_HOVER, ICON_EXIT, ICON_EXIT_HOVER, ICON_SAVE, ICON_SAVE_HOVER,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ButtonAction {
    Save,
    Clear,
    Exit,
}

pub(crate) struct Button {
    pub(crate) label: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) hover_icon: &'static str,
    pub(crate) action: ButtonAction,
}

pub(crate) struct ButtonBar {
    pub(crate) buttons: Vec<Button>,
    areas: Vec<Rect>,
    hovered: Option<usize>,
}

impl ButtonBar {
    pub(crate) fn new() -> Self {
        Self {
            buttons: vec![
                Button {
                    label: "Salvar",
                    icon: ICON_SAVE,
                    hover_icon: ICON_SAVE_HOVER,
                    action: ButtonAction::Save,
                },
                Button {
                    label: "Limpar",
                    icon: ICON_CLEAR,
                    hover_icon: ICON_CLEAR_HOVER,
                    action: ButtonAction::Clear,
                },
                Button {
                    label: "Sair",
                    icon: ICON_EXIT,
                    hover_icon: ICON_EXIT_HOVER,
                    action: ButtonAction::Exit,
                },
            ],
            areas: vec![],
            hovered: None,
        }
    }

    pub(crate) fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    // Screen areas are recorded at draw time; hit testing uses the last
    // drawn layout.
    pub(crate) fn set_areas(&mut self, areas: Vec<Rect>) {
        self.areas = areas;
    }

    fn hit(&self, position: Position) -> Option<usize> {
        self.areas.iter().position(|area| area.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn bar_with_areas() -> ButtonBar {
        let mut bar = ButtonBar::new();
        bar.set_areas(vec![
            Rect::new(0, 10, 10, 1),
            Rect::new(12, 10, 10, 1),
            Rect::new(24, 10, 8, 1),
        ]);
        bar
    }

    #[test]
    fn hit_finds_the_button_under_the_position() {
        let bar = bar_with_areas();
        assert_eq!(bar.hit(Position::new(3, 10)), Some(0));
        assert_eq!(bar.hit(Position::new(13, 10)), Some(1));
        assert_eq!(bar.hit(Position::new(25, 10)), Some(2));
    }

    #[test]
    fn hit_misses_outside_every_button() {
        let bar = bar_with_areas();
        assert_eq!(bar.hit(Position::new(11, 10)), None);
        assert_eq!(bar.hit(Position::new(3, 5)), None);
    }
}
