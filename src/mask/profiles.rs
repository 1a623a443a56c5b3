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

//! Pattern tables for the Brazilian document and phone number masks.
//!
//! Each table maps an exact digit count to a display template. The CPF and
//! CNPJ tables punctuate progressively, so a partially typed document shows
//! partial punctuation that settles into the full form as digits accumulate.
//! Adding a new recognised length is a data change here, not new control
//! flow.

use crate::mask::{MaskProfile, MaskRule};

/// Brazilian phone numbers.
///
/// 10 and 12 digit entries are landlines (12 carries the `+CC` country
/// code); 11 and 13 digit entries carry the extra leading subscriber digit
/// of a mobile number.
pub(crate) static PHONE: MaskProfile = MaskProfile::new(
    "telefone",
    &[
        MaskRule { digits: 10, template: "(##) ####-####" },
        MaskRule { digits: 11, template: "(##) #####-####" },
        MaskRule { digits: 12, template: "+## (##) ####-####" },
        MaskRule { digits: 13, template: "+## (##) #####-####" },
    ],
);

/// CPF, the natural-person tax ID: `###.###.###-##` at full length.
pub(crate) static CPF: MaskProfile = MaskProfile::new(
    "cpf",
    &[
        MaskRule { digits: 4, template: "###.#" },
        MaskRule { digits: 5, template: "###.##" },
        MaskRule { digits: 6, template: "###.###" },
        MaskRule { digits: 7, template: "###.###.#" },
        MaskRule { digits: 8, template: "###.###.##" },
        MaskRule { digits: 9, template: "###.###.###" },
        MaskRule { digits: 10, template: "###.###.###-#" },
        MaskRule { digits: 11, template: "###.###.###-##" },
    ],
);

/// CNPJ, the company registry ID: `##.###.###/####-##` at full length.
pub(crate) static CNPJ: MaskProfile = MaskProfile::new(
    "cnpj",
    &[
        MaskRule { digits: 3, template: "##.#" },
        MaskRule { digits: 4, template: "##.##" },
        MaskRule { digits: 5, template: "##.###" },
        MaskRule { digits: 6, template: "##.###.#" },
        MaskRule { digits: 7, template: "##.###.##" },
        MaskRule { digits: 8, template: "##.###.###" },
        MaskRule { digits: 9, template: "##.###.###/#" },
        MaskRule { digits: 10, template: "##.###.###/##" },
        MaskRule { digits: 11, template: "##.###.###/###" },
        MaskRule { digits: 12, template: "##.###.###/####" },
        MaskRule { digits: 13, template: "##.###.###/####-#" },
        MaskRule { digits: 14, template: "##.###.###/####-##" },
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::strip_digits;

    #[test]
    fn phone_templates() {
        assert_eq!(PHONE.apply("1187654321"), "(11) 8765-4321");
        assert_eq!(PHONE.apply("11987654321"), "(11) 98765-4321");
        assert_eq!(PHONE.apply("551187654321"), "+55 (11) 8765-4321");
        assert_eq!(PHONE.apply("5511987654321"), "+55 (11) 98765-4321");
    }

    #[test]
    fn phone_unmatched_counts_pass_through() {
        assert_eq!(PHONE.apply("123456789"), "123456789");
        assert_eq!(PHONE.apply("55119876543210"), "55119876543210");
    }

    #[test]
    fn cpf_full_length() {
        assert_eq!(CPF.apply("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_progressive_punctuation() {
        assert_eq!(CPF.apply("123"), "123");
        assert_eq!(CPF.apply("1234"), "123.4");
        assert_eq!(CPF.apply("123456"), "123.456");
        assert_eq!(CPF.apply("1234567"), "123.456.7");
        assert_eq!(CPF.apply("123456789"), "123.456.789");
        assert_eq!(CPF.apply("1234567890"), "123.456.789-0");
    }

    #[test]
    fn cnpj_full_length() {
        assert_eq!(CNPJ.apply("12345678000199"), "12.345.678/0001-99");
    }

    #[test]
    fn cnpj_progressive_punctuation() {
        assert_eq!(CNPJ.apply("12"), "12");
        assert_eq!(CNPJ.apply("123"), "12.3");
        assert_eq!(CNPJ.apply("123456"), "12.345.6");
        assert_eq!(CNPJ.apply("123456789"), "12.345.678/9");
        assert_eq!(CNPJ.apply("123456780001"), "12.345.678/0001");
        assert_eq!(CNPJ.apply("1234567800019"), "12.345.678/0001-9");
    }

    #[test]
    fn all_supported_lengths_round_trip() {
        for profile in [&PHONE, &CPF, &CNPJ] {
            for rule in profile.rules {
                let digits: String = "12345678901234567890".chars().take(rule.digits).collect();
                let masked = profile.apply(&digits);
                assert_eq!(
                    strip_digits(&masked),
                    digits,
                    "{} digits in profile {}",
                    rule.digits,
                    profile.name
                );
            }
        }
    }
}
