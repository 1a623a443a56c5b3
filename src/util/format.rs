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

//! Locale-aware display formatting for monetary and quantity values.
//!
//! These are one-shot transforms over display text, applied at render time.
//! Monetary text uses the Brazilian Real convention (`R$ 1.234,56`, dot for
//! thousands and comma for decimals); quantities get dot thousands grouping.
//! Text that already carries the currency marker, or that has no parseable
//! number in it, is passed through unchanged.

/// Formats an amount in Brazilian Real display form.
pub(crate) fn format_currency(valor: f64) -> String {
    let centavos = format!("{:.2}", valor);
    let (inteiro, fracao) = centavos.split_once('.').unwrap_or((centavos.as_str(), "00"));
    format!("R$ {},{}", group_thousands(inteiro), fracao)
}

/// Formats a plain quantity with thousands grouping.
pub(crate) fn format_quantity(quantidade: u64) -> String {
    group_thousands(&quantidade.to_string())
}

/// Parses the numeric portion of a display text as a Brazilian-format
/// number: dots are thousands separators, a comma is the decimal separator.
pub(crate) fn parse_valor(texto: &str) -> Option<f64> {
    let numeric: String = texto
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if numeric.is_empty() {
        return None;
    }

    numeric.replace('.', "").replace(',', ".").parse().ok()
}

/// Rewrites a display text into currency form, keeping any label text
/// around the number.
///
/// Text already containing the currency marker is left alone so the
/// transform is safe to run on every render; unparseable text is skipped
/// rather than reported.
pub(crate) fn currency_text(texto: &str) -> String {
    if texto.contains("R$") {
        return texto.to_string();
    }

    let Some(valor) = parse_valor(texto) else {
        return texto.to_string();
    };

    let rotulo: String = texto
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.' && *c != ',')
        .collect();

    format!("{}{}", rotulo, format_currency(valor))
}

/// Rewrites the first integer run in a display text with thousands
/// grouping; text without one is left unchanged.
pub(crate) fn quantity_text(texto: &str) -> String {
    let Some(start) = texto.find(|c: char| c.is_ascii_digit()) else {
        return texto.to_string();
    };
    let end = texto[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|offset| start + offset)
        .unwrap_or(texto.len());

    let run = &texto[start..end];
    if run.parse::<u64>().is_err() {
        return texto.to_string();
    }

    format!("{}{}{}", &texto[..start], group_thousands(run), &texto[end..])
}

// Inserts a dot every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 && c.is_ascii_digit() && chars[i - 1].is_ascii_digit() {
            out.push('.');
        }
        out.push(*c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping_and_decimals() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(10.5), "R$ 10,50");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn quantity_grouping() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(999), "999");
        assert_eq!(format_quantity(1000), "1.000");
        assert_eq!(format_quantity(1234567), "1.234.567");
    }

    #[test]
    fn parse_valor_reads_brazilian_numbers() {
        assert_eq!(parse_valor("10,50"), Some(10.5));
        assert_eq!(parse_valor("1.234,56"), Some(1234.56));
        assert_eq!(parse_valor("1050"), Some(1050.0));
        assert_eq!(parse_valor("Limite: 1.500"), Some(1500.0));
    }

    #[test]
    fn parse_valor_skips_text_without_a_number() {
        assert_eq!(parse_valor(""), None);
        assert_eq!(parse_valor("pendente"), None);
        assert_eq!(parse_valor("1,2,3"), None);
    }

    #[test]
    fn currency_text_formats_plain_numbers() {
        assert_eq!(currency_text("10,50"), "R$ 10,50");
        assert_eq!(currency_text("1050"), "R$ 1.050,00");
        assert_eq!(currency_text("Total: 1500"), "Total: R$ 1.500,00");
    }

    #[test]
    fn currency_text_skips_already_formatted_text() {
        assert_eq!(currency_text("R$ 10,50"), "R$ 10,50");
        assert_eq!(currency_text("Total: R$ 1.500,00"), "Total: R$ 1.500,00");
    }

    #[test]
    fn currency_text_skips_non_numeric_text() {
        assert_eq!(currency_text("a combinar"), "a combinar");
        assert_eq!(currency_text(""), "");
    }

    #[test]
    fn quantity_text_groups_the_number_in_place() {
        assert_eq!(quantity_text("1234567"), "1.234.567");
        assert_eq!(quantity_text("Fichas: 12500"), "Fichas: 12.500");
        assert_eq!(quantity_text("12 parcelas"), "12 parcelas");
    }

    #[test]
    fn quantity_text_skips_text_without_a_number() {
        assert_eq!(quantity_text("nenhuma"), "nenhuma");
        assert_eq!(quantity_text(""), "");
    }
}
