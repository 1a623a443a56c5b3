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

//! Application configuration.
//!
//! This module manages the application configuration file. The masking quiet
//! interval and the set of contact types treated as mobile-capable are
//! configuration, not constants.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "fichario";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,

    /// Quiet interval, in milliseconds, before a masking pass runs.
    pub mask_delay_ms: u64,

    /// Contact types that carry the extra mobile digit; only these gate the
    /// phone mask on.
    pub mobile_contact_types: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            mask_delay_ms: 500,
            mobile_contact_types: vec!["celular".to_string(), "whatsapp".to_string()],
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}
